use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[default]
    #[serde(rename = "USER")]
    User,
    #[serde(rename = "ADMIN")]
    Admin,
}

/// User entity. The credential is stored only as an Argon2 hash.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// Stored lowercase; all lookups are case-insensitive.
    pub email: String,
    pub password_hash: String,
    pub is_email_verified: bool,
    pub last_email_sent_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub profile_picture_url: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user. Registration marks the email verified
    /// immediately; there is no verification round-trip.
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        password_hash: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            email: email.to_lowercase(),
            password_hash,
            is_email_verified: true,
            last_email_sent_at: None,
            is_active: true,
            profile_picture_url: None,
            role: UserRole::User,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The response shape: everything except the credential.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            is_email_verified: self.is_email_verified,
            last_email_sent_at: self.last_email_sent_at,
            is_active: self.is_active,
            profile_picture_url: self.profile_picture_url.clone(),
            role: self.role,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// User as returned to clients - the credential field never leaves the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_email_verified: bool,
    pub last_email_sent_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub profile_picture_url: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An active login. Exactly one session slot exists; issuing a new session
/// replaces the previous one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: Uuid,
    pub token: Uuid,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Expiry is half-open: a session is expired exactly at `expires_at`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Single-use, time-bounded credential for resetting a password.
#[derive(Debug, Clone)]
pub struct ResetToken {
    pub email: String,
    pub token: Uuid,
    pub expires_at: DateTime<Utc>,
}

impl ResetToken {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

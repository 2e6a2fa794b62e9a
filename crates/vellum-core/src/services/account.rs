use std::sync::Arc;

use chrono::Duration;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{ResetToken, Session, User, UserProfile};
use crate::error::DomainError;
use crate::ports::{AccountStore, Clock, Mailer, PasswordHasher};

/// The generic reply for a reset request. Identical whether or not the
/// account exists, so callers cannot enumerate emails.
pub const RESET_REQUESTED_MESSAGE: &str =
    "If an account exists with this email, a password reset link has been sent.";

#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// A successful login or registration: the stripped profile plus the
/// session credential.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub user: UserProfile,
    pub token: Uuid,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

/// Authentication and session lifecycle over the account store.
///
/// Session lifecycle: absent -> active (login/register) -> expired (detected
/// lazily on read) -> absent (logout or lazy eviction). There is no refresh
/// transition; an expired session forces a full re-login.
pub struct AccountService {
    store: Arc<dyn AccountStore>,
    hasher: Arc<dyn PasswordHasher>,
    clock: Arc<dyn Clock>,
    mailer: Arc<dyn Mailer>,
    session_ttl: Duration,
    reset_token_ttl: Duration,
}

impl AccountService {
    pub fn new(
        store: Arc<dyn AccountStore>,
        hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
        mailer: Arc<dyn Mailer>,
        session_ttl: Duration,
        reset_token_ttl: Duration,
    ) -> Self {
        Self {
            store,
            hasher,
            clock,
            mailer,
            session_ttl,
            reset_token_ttl,
        }
    }

    pub async fn register(&self, input: RegisterInput) -> Result<AuthSession, DomainError> {
        let hash = self
            .hasher
            .hash(&input.password)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let user = User::new(
            input.first_name,
            input.last_name,
            input.email,
            hash,
            self.clock.now(),
        );

        // The store rejects a duplicate email with Conflict.
        let user = self.store.insert_user(user).await?;
        tracing::info!(user_id = %user.id, "user registered");

        Ok(self.issue_session(&user).await)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, DomainError> {
        let user = self
            .store
            .find_user_by_email(email)
            .await
            .ok_or(DomainError::InvalidCredentials)?;

        let valid = self
            .hasher
            .verify(password, &user.password_hash)
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        if !valid {
            return Err(DomainError::InvalidCredentials);
        }

        // Deactivation is only revealed once the credential checks out.
        if !user.is_active {
            return Err(DomainError::AccountDeactivated);
        }

        tracing::info!(user_id = %user.id, "user logged in");
        Ok(self.issue_session(&user).await)
    }

    /// Always succeeds with the same generic message. When the account
    /// exists, a fresh token replaces any prior token for that email and is
    /// handed to the mailer.
    pub async fn request_password_reset(&self, email: &str) -> &'static str {
        if let Some(user) = self.store.find_user_by_email(email).await {
            let token = ResetToken {
                email: user.email.clone(),
                token: Uuid::new_v4(),
                expires_at: self.clock.now() + self.reset_token_ttl,
            };
            self.store.save_reset_token(token.clone()).await;
            self.mailer
                .send_password_reset(&token.email, token.token, token.expires_at)
                .await;
        }
        RESET_REQUESTED_MESSAGE
    }

    /// Single use: the token is removed once the credential is updated.
    pub async fn reset_password(
        &self,
        token: Uuid,
        new_password: &str,
    ) -> Result<(), DomainError> {
        let reset = self
            .store
            .find_reset_token(token, self.clock.now())
            .await
            .ok_or(DomainError::InvalidResetToken)?;

        let hash = self
            .hasher
            .hash(new_password)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        self.store
            .set_password_hash(&reset.email, hash, self.clock.now())
            .await?;
        self.store.remove_reset_token(token).await;
        tracing::info!("password reset completed");
        Ok(())
    }

    /// The session slot's user when the presented token matches the live
    /// slot. An expired slot is evicted on this read.
    pub async fn current_user(&self, token: Uuid) -> Result<UserProfile, DomainError> {
        let session = self
            .store
            .current_session(self.clock.now())
            .await
            .ok_or(DomainError::Unauthorized)?;

        if session.token != token {
            return Err(DomainError::Unauthorized);
        }

        let user = self
            .store
            .find_user_by_id(session.user_id)
            .await
            .ok_or(DomainError::Unauthorized)?;

        Ok(user.profile())
    }

    pub async fn logout(&self) {
        self.store.clear_session().await;
        tracing::debug!("session cleared");
    }

    async fn issue_session(&self, user: &User) -> AuthSession {
        let session = Session {
            user_id: user.id,
            token: Uuid::new_v4(),
            expires_at: self.clock.now() + self.session_ttl,
        };
        self.store.save_session(session.clone()).await;

        AuthSession {
            user: user.profile(),
            token: session.token,
            expires_at: session.expires_at,
        }
    }
}

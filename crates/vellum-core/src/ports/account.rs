use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{ResetToken, Session, User};
use crate::error::StoreError;

/// Holds user records, the single session slot, and password-reset tokens.
///
/// Expired sessions and tokens are purged lazily when read, never
/// proactively.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Case-insensitive lookup.
    async fn find_user_by_email(&self, email: &str) -> Option<User>;

    async fn find_user_by_id(&self, id: Uuid) -> Option<User>;

    /// Rejects a duplicate email (case-insensitive) with `Conflict`.
    async fn insert_user(&self, user: User) -> Result<User, StoreError>;

    /// Replace the stored credential hash and bump `updated_at`.
    async fn set_password_hash(
        &self,
        email: &str,
        password_hash: String,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    /// Fill the session slot, replacing whatever was there.
    async fn save_session(&self, session: Session);

    /// The live session, if any. An expired slot is evicted here.
    async fn current_session(&self, now: DateTime<Utc>) -> Option<Session>;

    /// Unconditionally empty the session slot.
    async fn clear_session(&self);

    /// Store a reset token, replacing any prior token for the same email.
    async fn save_reset_token(&self, token: ResetToken);

    /// Look up a token by value; expired tokens are purged on this read.
    async fn find_reset_token(&self, token: Uuid, now: DateTime<Utc>) -> Option<ResetToken>;

    /// Invalidate a consumed token.
    async fn remove_reset_token(&self, token: Uuid);
}

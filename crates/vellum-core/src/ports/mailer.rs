use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Outbound mail. The reset flow hands tokens to this port; no handler ever
/// returns a token to the caller.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_password_reset(&self, email: &str, token: Uuid, expires_at: DateTime<Utc>);
}

//! Outbound mail implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use vellum_core::ports::Mailer;

/// Mailer that records reset tokens in the log instead of sending mail.
/// Good enough for development; a real deployment swaps in an SMTP-backed
/// implementation behind the same port.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send_password_reset(&self, email: &str, token: Uuid, expires_at: DateTime<Utc>) {
        tracing::info!(
            email,
            %token,
            %expires_at,
            "password reset token issued"
        );
    }
}

//! Authentication extractor.

use std::future::Future;
use std::pin::Pin;

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use uuid::Uuid;

use vellum_core::domain::UserProfile;

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Authenticated user identity extractor.
///
/// Use this in handlers to require a live session:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, {}!", identity.user.email)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub user: UserProfile,
}

impl Identity {
    /// Display name used when embedding the user as a post author.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.user.first_name, self.user.last_name)
    }
}

fn bearer_token(req: &HttpRequest) -> Option<Uuid> {
    let header = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?;
    Uuid::parse_str(token.trim()).ok()
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = bearer_token(req);

        Box::pin(async move {
            let state = state.ok_or_else(|| {
                tracing::error!("AppState not found in app data");
                AppError::Internal("server configuration error".to_string())
            })?;
            let token = token.ok_or(AppError::Unauthorized)?;

            // Any session failure (no slot, mismatched token, lazy-evicted
            // expiry) reads the same to the caller.
            let user = state
                .accounts
                .current_user(token)
                .await
                .map_err(|_| AppError::Unauthorized)?;

            Ok(Identity { user })
        })
    }
}

//! Authentication handlers.

use actix_web::{HttpResponse, web};
use validator::Validate;

use vellum_core::services::RegisterInput;
use vellum_shared::ApiResponse;
use vellum_shared::dto::{
    ForgotPasswordRequest, LoginRequest, RegisterRequest, ResetPasswordRequest,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/v0/auth/register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let session = state
        .accounts
        .register(RegisterInput {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        session,
        "Registration successful",
    )))
}

/// POST /api/v0/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let session = state.accounts.login(&req.email, &req.password).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(session, "Login successful")))
}

/// POST /api/v0/auth/logout
pub async fn logout(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.accounts.logout().await;
    Ok(HttpResponse::Ok().json(ApiResponse::message("Logged out")))
}

/// GET /api/v0/auth/me - Protected route
pub async fn me(identity: Identity) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::ok(identity.user)))
}

/// POST /api/v0/auth/forgot-password
///
/// Replies with the same generic message whether or not the account exists.
pub async fn forgot_password(
    state: web::Data<AppState>,
    body: web::Json<ForgotPasswordRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let message = state.accounts.request_password_reset(&req.email).await;

    Ok(HttpResponse::Ok().json(ApiResponse::message(message)))
}

/// POST /api/v0/auth/reset-password
pub async fn reset_password(
    state: web::Data<AppState>,
    body: web::Json<ResetPasswordRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    state
        .accounts
        .reset_password(req.token, &req.password)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message(
        "Password has been reset successfully. You can now login.",
    )))
}

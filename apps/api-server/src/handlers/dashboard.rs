//! Dashboard analytics handlers. All protected.

use actix_web::{HttpResponse, web};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/v0/dashboard/summary
pub async fn summary(state: web::Data<AppState>, _identity: Identity) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.dashboard.summary().await))
}

/// GET /api/v0/dashboard/recent-articles
pub async fn recent_articles(
    state: web::Data<AppState>,
    _identity: Identity,
) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.dashboard.recent_articles().await))
}

/// GET /api/v0/dashboard/recent-comments
pub async fn recent_comments(
    state: web::Data<AppState>,
    _identity: Identity,
) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.dashboard.recent_comments().await))
}

/// GET /api/v0/dashboard/visitors
pub async fn visitors(state: web::Data<AppState>, _identity: Identity) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.dashboard.visitors().await))
}

/// GET /api/v0/dashboard/devices
pub async fn devices(state: web::Data<AppState>, _identity: Identity) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.dashboard.devices().await))
}

/// GET /api/v0/dashboard/shares
pub async fn shares(state: web::Data<AppState>, _identity: Identity) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.dashboard.shares().await))
}

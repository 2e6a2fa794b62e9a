//! Tag aggregation handler.

use actix_web::{HttpResponse, web};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/v0/tags - derived from published posts on every read.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let tags = state.content.list_tags().await;
    Ok(HttpResponse::Ok().json(tags))
}

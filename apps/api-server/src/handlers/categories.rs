//! Category CRUD handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;
use validator::Validate;

use vellum_core::services::CategoryInput;
use vellum_shared::ApiResponse;
use vellum_shared::dto::CategoryRequest;

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_input(req: CategoryRequest) -> CategoryInput {
    CategoryInput {
        name: req.name,
        slug: req.slug,
        color: req.color,
    }
}

/// GET /api/v0/categories - counts are computed at read time.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state.content.list_categories().await;
    Ok(HttpResponse::Ok().json(categories))
}

/// POST /api/v0/categories - Protected
pub async fn create(
    state: web::Data<AppState>,
    _identity: Identity,
    body: web::Json<CategoryRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let category = state.content.create_category(to_input(req)).await?;
    Ok(HttpResponse::Created().json(category))
}

/// PUT /api/v0/categories/{id} - Protected
pub async fn update(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<CategoryRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let category = state
        .content
        .update_category(path.into_inner(), to_input(req))
        .await?;
    Ok(HttpResponse::Ok().json(category))
}

/// DELETE /api/v0/categories/{id} - Protected
pub async fn delete(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.content.delete_category(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::message("Category deleted")))
}

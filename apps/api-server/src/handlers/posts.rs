//! Post, comment, and rendering handlers.

use std::str::FromStr;

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use vellum_core::domain::{Post, PostAuthor, PostQuery, PostStatus};
use vellum_core::services::{CreatePost, UpdatePost};
use vellum_core::view::markdown::{Block, parse_blocks};
use vellum_shared::ApiResponse;
use vellum_shared::dto::{CreatePostRequest, ListPostsQuery, UpdatePostRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn parse_status(raw: &str) -> Result<PostStatus, AppError> {
    PostStatus::from_str(raw).map_err(|_| {
        AppError::BadRequest(format!(
            "unknown status '{raw}' (expected published, draft, or archived)"
        ))
    })
}

/// GET /api/v0/posts
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    query.validate()?;

    let status = match query.status.as_deref() {
        Some(raw) => parse_status(raw)?,
        None => PostStatus::Published,
    };

    let page = state
        .content
        .list_posts(&PostQuery {
            search: query.search,
            category: query.category,
            tag: query.tag,
            status,
            featured: query.featured,
            page: query.page.unwrap_or(1),
            limit: query.limit.unwrap_or(12),
        })
        .await;

    Ok(HttpResponse::Ok().json(page))
}

#[derive(Debug, Deserialize)]
pub struct GetPostQuery {
    /// `blocks` additionally returns the markdown body as structured blocks.
    pub format: Option<String>,
}

#[derive(Serialize)]
struct PostWithBlocks {
    #[serde(flatten)]
    post: Post,
    blocks: Vec<Block>,
}

/// GET /api/v0/posts/{id}
pub async fn get(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    query: web::Query<GetPostQuery>,
) -> AppResult<HttpResponse> {
    let post = state.content.get_post(path.into_inner()).await?;

    if query.format.as_deref() == Some("blocks") {
        let blocks = parse_blocks(&post.content);
        return Ok(HttpResponse::Ok().json(PostWithBlocks { post, blocks }));
    }

    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/v0/posts - Protected; the session user becomes the author.
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;
    let status = parse_status(&req.status)?;

    let author = PostAuthor {
        name: identity.display_name(),
        avatar: identity.user.profile_picture_url.clone().unwrap_or_default(),
        email: identity.user.email.clone(),
    };

    let post = state
        .content
        .create_post(
            CreatePost {
                title: req.title,
                excerpt: req.excerpt,
                content: req.content,
                cover_image: req.cover_image,
                category: req.category,
                tags: req.tags,
                status,
                featured: req.featured,
            },
            author,
        )
        .await?;

    Ok(HttpResponse::Created().json(post))
}

/// PATCH /api/v0/posts/{id} - Protected
pub async fn update(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;
    let status = req.status.as_deref().map(parse_status).transpose()?;

    let post = state
        .content
        .update_post(
            path.into_inner(),
            UpdatePost {
                title: req.title,
                excerpt: req.excerpt,
                content: req.content,
                cover_image: req.cover_image,
                category: req.category,
                tags: req.tags,
                status,
                featured: req.featured,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/v0/posts/{id} - Protected
pub async fn delete(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.content.delete_post(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::message("Post deleted")))
}

/// GET /api/v0/posts/{id}/comments
pub async fn list_comments(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let comments = state.content.list_comments(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(comments))
}

/// DELETE /api/v0/posts/{id}/comments/{comment_id} - Protected
///
/// The session user's email is checked against the comment tree's two-party
/// deletion rule.
pub async fn delete_comment(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<(Uuid, String)>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();

    state
        .content
        .delete_comment(post_id, &comment_id, &identity.user.email)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("Comment deleted")))
}

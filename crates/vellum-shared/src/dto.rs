//! Data Transfer Objects - request types for the API, with their validation
//! rules. Status strings are parsed into domain enums server-side.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, max = 128, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    pub token: Uuid,
    #[validate(length(min = 8, max = 128, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Query parameters for listing posts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ListPostsQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
    /// `published` (default), `draft`, or `archived`.
    pub status: Option<String>,
    pub featured: Option<bool>,
    #[validate(range(min = 1, message = "Page numbers are 1-based"))]
    pub page: Option<u32>,
    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: Option<u32>,
}

/// Request to create a post. Tags arrive as a free-text comma-separated
/// string, matching the editor's tag field.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 500, message = "Excerpt must be 1-500 characters"))]
    pub excerpt: String,
    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[validate(length(min = 1, message = "Category must not be empty"))]
    pub category: String,
    #[serde(default)]
    pub tags: String,
    pub status: String,
    #[serde(default)]
    pub featured: bool,
}

/// Partial post update: absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 500, message = "Excerpt must be 1-500 characters"))]
    pub excerpt: Option<String>,
    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: Option<String>,
    pub cover_image: Option<String>,
    #[validate(length(min = 1, message = "Category must not be empty"))]
    pub category: Option<String>,
    pub tags: Option<String>,
    pub status: Option<String>,
    pub featured: Option<bool>,
}

/// Create or replace a category. The slug is normalized server-side before
/// the `^[a-z0-9-]+$` check.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategoryRequest {
    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 50, message = "Slug must be 1-50 characters"))]
    pub slug: String,
    #[validate(length(min = 1, message = "Color must not be empty"))]
    pub color: String,
}

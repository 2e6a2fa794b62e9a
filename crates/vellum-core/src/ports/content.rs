use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Category, CategorySummary, Comment, Page, Post, PostPatch, PostQuery, TagCount};
use crate::error::StoreError;

/// Authoritative holder of posts, categories, and comment trees.
///
/// Every method is atomic per call: a mutation either fully completes or is
/// not observable, and reads never mutate stored records.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Filtered, paginated read. Deterministic for a given store state.
    async fn list_posts(&self, query: &PostQuery) -> Page<Post>;

    /// Unfiltered snapshot of every post regardless of status.
    async fn all_posts(&self) -> Vec<Post>;

    async fn get_post(&self, id: Uuid) -> Option<Post>;

    async fn insert_post(&self, post: Post);

    async fn update_post(
        &self,
        id: Uuid,
        patch: PostPatch,
        now: DateTime<Utc>,
    ) -> Result<Post, StoreError>;

    /// Removes the post. Deleting an absent id is `NotFound`, uniformly with
    /// categories and comments.
    async fn delete_post(&self, id: Uuid) -> Result<(), StoreError>;

    /// Categories with their post counts, computed by scanning posts whose
    /// embedded category name matches case-insensitively.
    async fn list_categories(&self) -> Vec<CategorySummary>;

    /// Rejects a slug already taken by another category.
    async fn insert_category(&self, category: Category) -> Result<Category, StoreError>;

    async fn update_category(
        &self,
        id: Uuid,
        name: String,
        slug: String,
        color: String,
    ) -> Result<Category, StoreError>;

    async fn delete_category(&self, id: Uuid) -> Result<(), StoreError>;

    /// Derived tag aggregate over published posts.
    async fn list_tags(&self) -> Vec<TagCount>;

    /// The post's full comment tree in stored order. Empty when the post has
    /// no comments.
    async fn list_comments(&self, post_id: Uuid) -> Vec<Comment>;

    /// Recursive tree search-and-remove under the two-party deletion rule.
    /// `Forbidden` when the comment exists but the acting user lacks rights.
    async fn delete_comment(
        &self,
        post_id: Uuid,
        comment_id: &str,
        acting_email: &str,
    ) -> Result<(), StoreError>;
}

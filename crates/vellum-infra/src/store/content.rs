use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use vellum_core::domain::{
    Category, CategorySummary, Comment, Page, Post, PostPatch, PostQuery, RemoveCommentError,
    TagCount, count_tags, remove_comment,
};
use vellum_core::error::StoreError;
use vellum_core::ports::ContentStore;

#[derive(Default)]
struct ContentState {
    posts: Vec<Post>,
    categories: Vec<Category>,
    comments: HashMap<Uuid, Vec<Comment>>,
}

/// In-memory content store. Posts and categories live in insertion order;
/// comment trees are keyed by post id.
pub struct MemoryContentStore {
    inner: RwLock<ContentState>,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(ContentState::default()),
        }
    }

    /// Construct pre-populated, e.g. from `seed::demo_content`.
    pub fn with_data(
        posts: Vec<Post>,
        categories: Vec<Category>,
        comments: HashMap<Uuid, Vec<Comment>>,
    ) -> Self {
        Self {
            inner: RwLock::new(ContentState {
                posts,
                categories,
                comments,
            }),
        }
    }
}

impl Default for MemoryContentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn list_posts(&self, query: &PostQuery) -> Page<Post> {
        let state = self.inner.read().await;
        query.run(&state.posts)
    }

    async fn all_posts(&self) -> Vec<Post> {
        self.inner.read().await.posts.clone()
    }

    async fn get_post(&self, id: Uuid) -> Option<Post> {
        let state = self.inner.read().await;
        state.posts.iter().find(|p| p.id == id).cloned()
    }

    async fn insert_post(&self, post: Post) {
        self.inner.write().await.posts.push(post);
    }

    async fn update_post(
        &self,
        id: Uuid,
        patch: PostPatch,
        now: DateTime<Utc>,
    ) -> Result<Post, StoreError> {
        let mut state = self.inner.write().await;
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("post", id))?;
        post.apply(patch, now);
        Ok(post.clone())
    }

    async fn delete_post(&self, id: Uuid) -> Result<(), StoreError> {
        let mut state = self.inner.write().await;
        let before = state.posts.len();
        state.posts.retain(|p| p.id != id);
        if state.posts.len() == before {
            return Err(StoreError::not_found("post", id));
        }
        state.comments.remove(&id);
        Ok(())
    }

    async fn list_categories(&self) -> Vec<CategorySummary> {
        let state = self.inner.read().await;
        state
            .categories
            .iter()
            .map(|category| {
                let count = state
                    .posts
                    .iter()
                    .filter(|p| p.category.eq_ignore_ascii_case(&category.name))
                    .count() as u64;
                CategorySummary::new(category.clone(), count)
            })
            .collect()
    }

    async fn insert_category(&self, category: Category) -> Result<Category, StoreError> {
        let mut state = self.inner.write().await;
        if state.categories.iter().any(|c| c.slug == category.slug) {
            return Err(StoreError::Conflict(format!(
                "category slug already exists: {}",
                category.slug
            )));
        }
        state.categories.push(category.clone());
        Ok(category)
    }

    async fn update_category(
        &self,
        id: Uuid,
        name: String,
        slug: String,
        color: String,
    ) -> Result<Category, StoreError> {
        let mut state = self.inner.write().await;
        if state.categories.iter().any(|c| c.slug == slug && c.id != id) {
            return Err(StoreError::Conflict(format!(
                "category slug already exists: {slug}"
            )));
        }
        let category = state
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found("category", id))?;
        category.name = name;
        category.slug = slug;
        category.color = color;
        Ok(category.clone())
    }

    async fn delete_category(&self, id: Uuid) -> Result<(), StoreError> {
        let mut state = self.inner.write().await;
        let before = state.categories.len();
        state.categories.retain(|c| c.id != id);
        if state.categories.len() == before {
            return Err(StoreError::not_found("category", id));
        }
        Ok(())
    }

    async fn list_tags(&self) -> Vec<TagCount> {
        let state = self.inner.read().await;
        count_tags(&state.posts)
    }

    async fn list_comments(&self, post_id: Uuid) -> Vec<Comment> {
        let state = self.inner.read().await;
        state.comments.get(&post_id).cloned().unwrap_or_default()
    }

    async fn delete_comment(
        &self,
        post_id: Uuid,
        comment_id: &str,
        acting_email: &str,
    ) -> Result<(), StoreError> {
        let mut state = self.inner.write().await;
        let tree = state
            .comments
            .remove(&post_id)
            .ok_or_else(|| StoreError::not_found("comment", comment_id))?;

        match remove_comment(tree.clone(), comment_id, acting_email) {
            Ok(kept) => {
                state.comments.insert(post_id, kept);
                Ok(())
            }
            Err(err) => {
                // Put the untouched tree back before reporting.
                state.comments.insert(post_id, tree);
                match err {
                    RemoveCommentError::NotFound => {
                        Err(StoreError::not_found("comment", comment_id))
                    }
                    RemoveCommentError::Forbidden => Err(StoreError::Forbidden),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use vellum_core::domain::{PostAuthor, PostStatus};

    fn post(title: &str, category: &str) -> Post {
        let now = Utc::now();
        Post {
            id: Uuid::new_v4(),
            title: title.to_string(),
            excerpt: "excerpt".to_string(),
            content: "content".to_string(),
            cover_image: String::new(),
            author: PostAuthor {
                name: "Jane Smith".to_string(),
                avatar: String::new(),
                email: "jane@example.com".to_string(),
            },
            category: category.to_string(),
            tags: vec!["Rust".to_string()],
            published_at: now,
            updated_at: now,
            read_time: 3,
            views: 0,
            likes: 0,
            comments: 0,
            shares: 0,
            status: PostStatus::Published,
            featured: false,
        }
    }

    fn category(name: &str, slug: &str) -> Category {
        Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            slug: slug.to_string(),
            color: "bg-blue-500".to_string(),
        }
    }

    fn comment(id: &str, post_id: Uuid, email: &str) -> Comment {
        Comment {
            id: id.to_string(),
            post_id,
            user_name: "Alex Thompson".to_string(),
            user_avatar: String::new(),
            user_email: email.to_string(),
            comment: "nice".to_string(),
            created_at: Utc::now(),
            updated_at: None,
            likes: 0,
            replies: None,
        }
    }

    #[tokio::test]
    async fn test_category_counts_computed_on_read() {
        let store = MemoryContentStore::new();
        store
            .insert_category(category("Tutorials", "tutorials"))
            .await
            .unwrap();

        let cats = store.list_categories().await;
        assert_eq!(cats[0].count, 0);

        store.insert_post(post("Intro", "Tutorials")).await;
        let cats = store.list_categories().await;
        assert_eq!(cats[0].count, 1);
    }

    #[tokio::test]
    async fn test_duplicate_slug_is_a_conflict() {
        let store = MemoryContentStore::new();
        store
            .insert_category(category("Tutorials", "tutorials"))
            .await
            .unwrap();

        let err = store
            .insert_category(category("Other", "tutorials"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_category_may_keep_its_own_slug() {
        let store = MemoryContentStore::new();
        let cat = store
            .insert_category(category("Tutorials", "tutorials"))
            .await
            .unwrap();

        let updated = store
            .update_category(
                cat.id,
                "Guides".to_string(),
                "tutorials".to_string(),
                "bg-red-500".to_string(),
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Guides");
    }

    #[tokio::test]
    async fn test_repeat_delete_is_not_found() {
        let store = MemoryContentStore::new();
        let p = post("gone", "Dev");
        let id = p.id;
        store.insert_post(p).await;

        store.delete_post(id).await.unwrap();
        assert!(matches!(
            store.delete_post(id).await,
            Err(StoreError::NotFound { .. })
        ));

        let cat = store.insert_category(category("X", "x")).await.unwrap();
        store.delete_category(cat.id).await.unwrap();
        assert!(matches!(
            store.delete_category(cat.id).await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_deleting_post_drops_its_comment_tree() {
        let store = MemoryContentStore::new();
        let p = post("with comments", "Dev");
        let id = p.id;
        store.insert_post(p).await;
        store.with_comments(id, vec![comment("c1", id, "alex@example.com")]).await;

        store.delete_post(id).await.unwrap();
        assert!(store.list_comments(id).await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_comment_requires_rights() {
        let store = MemoryContentStore::new();
        let p = post("with comments", "Dev");
        let id = p.id;
        store.insert_post(p).await;
        store.with_comments(id, vec![comment("c1", id, "alex@example.com")]).await;

        assert!(matches!(
            store.delete_comment(id, "c1", "mallory@example.com").await,
            Err(StoreError::Forbidden)
        ));
        // The tree is untouched after a refused delete.
        assert_eq!(store.list_comments(id).await.len(), 1);

        store
            .delete_comment(id, "c1", "alex@example.com")
            .await
            .unwrap();
        assert!(store.list_comments(id).await.is_empty());
    }

    #[tokio::test]
    async fn test_listing_never_mutates_the_store() {
        let store = MemoryContentStore::new();
        store.insert_post(post("a", "Dev")).await;
        store.insert_post(post("b", "Dev")).await;

        let before = store.all_posts().await;
        let _ = store.list_posts(&PostQuery::default()).await;
        let _ = store.list_tags().await;
        let after = store.all_posts().await;

        assert_eq!(before.len(), after.len());
        for (a, b) in before.iter().zip(after.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.updated_at, b.updated_at);
        }
    }

    impl MemoryContentStore {
        async fn with_comments(&self, post_id: Uuid, tree: Vec<Comment>) {
            self.inner.write().await.comments.insert(post_id, tree);
        }
    }
}

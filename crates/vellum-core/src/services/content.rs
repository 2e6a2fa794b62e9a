use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{
    Category, CategorySummary, Comment, Page, Post, PostAuthor, PostPatch, PostQuery, PostStatus,
    TagCount, normalize_slug, parse_tags, slug_is_valid,
};
use crate::error::{DomainError, FieldError};
use crate::ports::{Clock, ContentStore};
use crate::view;

const TITLE_MAX: usize = 200;
const EXCERPT_MAX: usize = 500;
const CATEGORY_NAME_MAX: usize = 50;
const SLUG_MAX: usize = 50;

/// Input for creating a post. Tags arrive as the free-text comma-separated
/// string the editor produces.
#[derive(Debug, Clone)]
pub struct CreatePost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub cover_image: Option<String>,
    pub category: String,
    pub tags: String,
    pub status: PostStatus,
    pub featured: bool,
}

/// Partial post update. Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdatePost {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub status: Option<PostStatus>,
    pub featured: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct CategoryInput {
    pub name: String,
    pub slug: String,
    pub color: String,
}

/// Facade over the content store: validates input, derives computed fields,
/// and delegates storage semantics to the store.
pub struct ContentService {
    store: Arc<dyn ContentStore>,
    clock: Arc<dyn Clock>,
}

impl ContentService {
    pub fn new(store: Arc<dyn ContentStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn list_posts(&self, query: &PostQuery) -> Page<Post> {
        self.store.list_posts(query).await
    }

    pub async fn get_post(&self, id: Uuid) -> Result<Post, DomainError> {
        self.store
            .get_post(id)
            .await
            .ok_or_else(|| DomainError::not_found("post", id))
    }

    pub async fn create_post(
        &self,
        input: CreatePost,
        author: PostAuthor,
    ) -> Result<Post, DomainError> {
        let mut errors = Vec::new();
        check_length("title", &input.title, TITLE_MAX, &mut errors);
        check_length("excerpt", &input.excerpt, EXCERPT_MAX, &mut errors);
        check_not_empty("content", &input.content, &mut errors);
        check_not_empty("category", &input.category, &mut errors);
        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        let now = self.clock.now();
        let post = Post {
            id: Uuid::new_v4(),
            read_time: view::reading_time(&input.content),
            title: input.title,
            excerpt: input.excerpt,
            content: input.content,
            cover_image: input.cover_image.unwrap_or_default(),
            author,
            category: input.category,
            tags: parse_tags(&input.tags),
            published_at: now,
            updated_at: now,
            views: 0,
            likes: 0,
            comments: 0,
            shares: 0,
            status: input.status,
            featured: input.featured,
        };

        self.store.insert_post(post.clone()).await;
        tracing::info!(post_id = %post.id, title = %post.title, "post created");
        Ok(post)
    }

    pub async fn update_post(&self, id: Uuid, input: UpdatePost) -> Result<Post, DomainError> {
        let mut errors = Vec::new();
        if let Some(title) = &input.title {
            check_length("title", title, TITLE_MAX, &mut errors);
        }
        if let Some(excerpt) = &input.excerpt {
            check_length("excerpt", excerpt, EXCERPT_MAX, &mut errors);
        }
        if let Some(content) = &input.content {
            check_not_empty("content", content, &mut errors);
        }
        if let Some(category) = &input.category {
            check_not_empty("category", category, &mut errors);
        }
        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        let patch = PostPatch {
            read_time: input.content.as_deref().map(view::reading_time),
            title: input.title,
            excerpt: input.excerpt,
            content: input.content,
            cover_image: input.cover_image,
            category: input.category,
            tags: input.tags.as_deref().map(parse_tags),
            status: input.status,
            featured: input.featured,
        };

        let post = self.store.update_post(id, patch, self.clock.now()).await?;
        Ok(post)
    }

    pub async fn delete_post(&self, id: Uuid) -> Result<(), DomainError> {
        self.store.delete_post(id).await?;
        tracing::info!(post_id = %id, "post deleted");
        Ok(())
    }

    pub async fn list_categories(&self) -> Vec<CategorySummary> {
        self.store.list_categories().await
    }

    pub async fn create_category(&self, input: CategoryInput) -> Result<Category, DomainError> {
        let (name, slug, color) = validate_category(input)?;
        let category = Category {
            id: Uuid::new_v4(),
            name,
            slug,
            color,
        };
        let category = self.store.insert_category(category).await?;
        tracing::info!(category_id = %category.id, slug = %category.slug, "category created");
        Ok(category)
    }

    pub async fn update_category(
        &self,
        id: Uuid,
        input: CategoryInput,
    ) -> Result<Category, DomainError> {
        let (name, slug, color) = validate_category(input)?;
        let category = self.store.update_category(id, name, slug, color).await?;
        Ok(category)
    }

    pub async fn delete_category(&self, id: Uuid) -> Result<(), DomainError> {
        self.store.delete_category(id).await?;
        tracing::info!(category_id = %id, "category deleted");
        Ok(())
    }

    pub async fn list_tags(&self) -> Vec<TagCount> {
        self.store.list_tags().await
    }

    pub async fn list_comments(&self, post_id: Uuid) -> Result<Vec<Comment>, DomainError> {
        // Listing comments of a missing post is NotFound, not an empty tree.
        self.get_post(post_id).await?;
        Ok(self.store.list_comments(post_id).await)
    }

    pub async fn delete_comment(
        &self,
        post_id: Uuid,
        comment_id: &str,
        acting_email: &str,
    ) -> Result<(), DomainError> {
        self.store
            .delete_comment(post_id, comment_id, acting_email)
            .await?;
        tracing::info!(post_id = %post_id, comment_id, "comment deleted");
        Ok(())
    }
}

fn validate_category(input: CategoryInput) -> Result<(String, String, String), DomainError> {
    let mut errors = Vec::new();
    check_length("name", &input.name, CATEGORY_NAME_MAX, &mut errors);
    check_not_empty("color", &input.color, &mut errors);

    let slug = normalize_slug(&input.slug);
    if slug.is_empty() || slug.len() > SLUG_MAX || !slug_is_valid(&slug) {
        errors.push(FieldError::new(
            "slug",
            "must contain lowercase letters, digits, and hyphens only",
        ));
    }

    if errors.is_empty() {
        Ok((input.name, slug, input.color))
    } else {
        Err(DomainError::Validation(errors))
    }
}

fn check_not_empty(field: &str, value: &str, errors: &mut Vec<FieldError>) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "must not be empty"));
    }
}

fn check_length(field: &str, value: &str, max: usize, errors: &mut Vec<FieldError>) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "must not be empty"));
    } else if value.chars().count() > max {
        errors.push(FieldError::new(field, format!("must be at most {max} characters")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_slug_is_normalized_before_validation() {
        let input = CategoryInput {
            name: "Tutorials".to_string(),
            slug: "  Tutorials & Guides ".to_string(),
            color: "bg-blue-500".to_string(),
        };
        let (_, slug, _) = validate_category(input).unwrap();
        assert_eq!(slug, "tutorials-guides");
    }

    #[test]
    fn test_category_validation_names_the_offending_field() {
        let input = CategoryInput {
            name: String::new(),
            slug: "!!!".to_string(),
            color: String::new(),
        };
        let err = validate_category(input).unwrap_err();
        match err {
            DomainError::Validation(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert!(fields.contains(&"name"));
                assert!(fields.contains(&"slug"));
                assert!(fields.contains(&"color"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_length_check_counts_characters() {
        let mut errors = Vec::new();
        check_length("title", &"x".repeat(200), 200, &mut errors);
        assert!(errors.is_empty());
        check_length("title", &"x".repeat(201), 200, &mut errors);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "title");
    }
}

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author details embedded in a post. Denormalized on purpose: the post
/// carries a snapshot of the author, not a foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostAuthor {
    pub name: String,
    pub avatar: String,
    pub email: String,
}

/// Publication status of a post. Transitions are unconstrained: any status
/// may follow any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Published,
    Draft,
    Archived,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Published => "published",
            PostStatus::Draft => "draft",
            PostStatus::Archived => "archived",
        }
    }
}

impl FromStr for PostStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "published" => Ok(PostStatus::Published),
            "draft" => Ok(PostStatus::Draft),
            "archived" => Ok(PostStatus::Archived),
            _ => Err(()),
        }
    }
}

/// Post entity - a blog post or article.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub cover_image: String,
    pub author: PostAuthor,
    /// Embedded category display name, not normalized against `Category`.
    pub category: String,
    pub tags: Vec<String>,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Estimated read time in minutes.
    pub read_time: u32,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub status: PostStatus,
    pub featured: bool,
}

/// Partial update applied to a stored post. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub read_time: Option<u32>,
    pub status: Option<PostStatus>,
    pub featured: Option<bool>,
}

impl Post {
    /// Overwrite only the fields the patch supplies and refresh `updated_at`.
    pub fn apply(&mut self, patch: PostPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(excerpt) = patch.excerpt {
            self.excerpt = excerpt;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(cover_image) = patch.cover_image {
            self.cover_image = cover_image;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(read_time) = patch.read_time {
            self.read_time = read_time;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(featured) = patch.featured {
            self.featured = featured;
        }
        self.updated_at = now;
    }
}

/// Parse a free-text comma-separated tag string into a trimmed sequence,
/// de-duplicated by first occurrence. Empty segments are dropped.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',') {
        let tag = tag.trim();
        if tag.is_empty() {
            continue;
        }
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Filter and pagination parameters for listing posts.
#[derive(Debug, Clone)]
pub struct PostQuery {
    /// Case-insensitive substring over title, excerpt, or any tag.
    pub search: Option<String>,
    /// Category slug or name; the literal `all` means no filter.
    pub category: Option<String>,
    /// Case-insensitive exact tag match.
    pub tag: Option<String>,
    pub status: PostStatus,
    pub featured: Option<bool>,
    /// 1-based page number.
    pub page: u32,
    pub limit: u32,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            search: None,
            category: None,
            tag: None,
            status: PostStatus::Published,
            featured: None,
            page: 1,
            limit: 12,
        }
    }
}

/// A single page of results plus pre-pagination totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl PostQuery {
    /// Apply the filter chain in fixed order (status, search, category, tag,
    /// featured), then paginate. Never mutates the input; an out-of-range
    /// page yields an empty page rather than an error.
    pub fn run(&self, posts: &[Post]) -> Page<Post> {
        let mut filtered: Vec<&Post> = posts.iter().filter(|p| p.status == self.status).collect();

        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            filtered.retain(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.excerpt.to_lowercase().contains(&needle)
                    || p.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            });
        }

        if let Some(category) = self.category.as_deref().filter(|c| !c.eq_ignore_ascii_case("all")) {
            filtered.retain(|p| p.category.eq_ignore_ascii_case(category));
        }

        if let Some(tag) = self.tag.as_deref() {
            filtered.retain(|p| p.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)));
        }

        if let Some(featured) = self.featured {
            filtered.retain(|p| p.featured == featured);
        }

        let total = filtered.len() as u64;
        let limit = self.limit.max(1);
        let total_pages = total.div_ceil(u64::from(limit)) as u32;
        let start = (self.page.max(1) as usize - 1) * limit as usize;

        let items: Vec<Post> = filtered
            .into_iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect();

        Page {
            items,
            total,
            page: self.page,
            limit,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, tags: &[&str], status: PostStatus, featured: bool) -> Post {
        let now = Utc::now();
        Post {
            id: Uuid::new_v4(),
            title: title.to_string(),
            excerpt: format!("{title} excerpt"),
            content: "body".to_string(),
            cover_image: String::new(),
            author: PostAuthor {
                name: "Jane Smith".to_string(),
                avatar: String::new(),
                email: "jane@example.com".to_string(),
            },
            category: "Development".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            published_at: now,
            updated_at: now,
            read_time: 5,
            views: 0,
            likes: 0,
            comments: 0,
            shares: 0,
            status,
            featured,
        }
    }

    #[test]
    fn test_status_filter_is_always_applied() {
        let posts = vec![
            post("a", &[], PostStatus::Published, false),
            post("b", &[], PostStatus::Draft, false),
            post("c", &[], PostStatus::Archived, false),
        ];

        let page = PostQuery::default().run(&posts);
        assert_eq!(page.total, 1);
        assert!(page.items.iter().all(|p| p.status == PostStatus::Published));

        let drafts = PostQuery {
            status: PostStatus::Draft,
            ..Default::default()
        }
        .run(&posts);
        assert_eq!(drafts.total, 1);
        assert_eq!(drafts.items[0].title, "b");
    }

    #[test]
    fn test_search_matches_title_excerpt_or_tag_case_insensitively() {
        let posts = vec![
            post("Best Practices for React Development", &[], PostStatus::Published, false),
            post("Getting Started with Next.js", &["React", "Tutorial"], PostStatus::Published, false),
            post("Color Theory", &["Design"], PostStatus::Published, false),
        ];

        let page = PostQuery {
            search: Some("react".to_string()),
            ..Default::default()
        }
        .run(&posts);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_pagination_totals() {
        let posts: Vec<Post> = (0..3)
            .map(|i| post(&format!("react {i}"), &[], PostStatus::Published, false))
            .collect();

        let first = PostQuery {
            search: Some("react".to_string()),
            page: 1,
            limit: 2,
            ..Default::default()
        }
        .run(&posts);
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.total, 3);
        assert_eq!(first.total_pages, 2);

        let second = PostQuery {
            search: Some("react".to_string()),
            page: 2,
            limit: 2,
            ..Default::default()
        }
        .run(&posts);
        assert_eq!(second.items.len(), 1);
    }

    #[test]
    fn test_out_of_range_page_is_empty_not_an_error() {
        let posts = vec![post("only", &[], PostStatus::Published, false)];
        let page = PostQuery {
            page: 9,
            ..Default::default()
        }
        .run(&posts);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 1);
    }

    #[test]
    fn test_total_pages_zero_when_no_matches() {
        let page = PostQuery::default().run(&[]);
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_category_all_means_no_filter() {
        let posts = vec![
            post("a", &[], PostStatus::Published, false),
            post("b", &[], PostStatus::Published, false),
        ];
        let page = PostQuery {
            category: Some("All".to_string()),
            ..Default::default()
        }
        .run(&posts);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_featured_filter() {
        let posts = vec![
            post("a", &[], PostStatus::Published, true),
            post("b", &[], PostStatus::Published, false),
        ];
        let page = PostQuery {
            featured: Some(true),
            ..Default::default()
        }
        .run(&posts);
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].title, "a");
    }

    #[test]
    fn test_parse_tags_trims_and_dedupes_by_insertion() {
        assert_eq!(
            parse_tags(" Rust, Web , , Rust,Tooling "),
            vec!["Rust".to_string(), "Web".to_string(), "Tooling".to_string()]
        );
        assert!(parse_tags("  ,  ,").is_empty());
    }

    #[test]
    fn test_patch_overwrites_only_supplied_fields() {
        let mut p = post("before", &["a"], PostStatus::Draft, false);
        let created = p.updated_at;
        let later = created + chrono::Duration::minutes(5);

        p.apply(
            PostPatch {
                title: Some("after".to_string()),
                status: Some(PostStatus::Published),
                ..Default::default()
            },
            later,
        );

        assert_eq!(p.title, "after");
        assert_eq!(p.status, PostStatus::Published);
        assert_eq!(p.tags, vec!["a".to_string()]);
        assert_eq!(p.excerpt, "before excerpt");
        assert_eq!(p.updated_at, later);
    }
}

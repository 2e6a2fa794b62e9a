use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::PostStatus;
use crate::ports::{Clock, ContentStore};
use crate::view;

/// Follower count has no backing entity; it is an analytics fixture, like
/// the visitor, device, and share series below.
const FOLLOWERS: u64 = 14_200;

const VISITORS_BY_DAY: [(&str, u64); 7] = [
    ("Mon", 5_200),
    ("Tue", 6_800),
    ("Wed", 7_200),
    ("Thu", 6_100),
    ("Fri", 8_900),
    ("Sat", 11_200),
    ("Sun", 9_800),
];

const TOP_SHARES: [(&str, u64); 5] = [
    ("Facebook", 95_000),
    ("WhatsApp", 71_000),
    ("UC Community", 50_000),
    ("Twitter", 45_000),
    ("Telegram", 30_000),
];

const RECENT_LIMIT: usize = 4;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub followers: u64,
    pub posts: u64,
    pub likes: u64,
    pub viewers: u64,
    pub comments: u64,
    pub shares: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct VisitorDay {
    pub day: &'static str,
    pub visitors: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeviceUsage {
    pub desktop: u8,
    pub mobile: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialShare {
    pub platform: &'static str,
    pub shares: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentArticle {
    pub id: Uuid,
    pub title: String,
    pub thumbnail: String,
    pub post_date: String,
    pub category: String,
    pub category_color: String,
    pub comments: u64,
    pub likes: u64,
    pub shares: u64,
    pub viewers: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentComment {
    pub id: String,
    pub user_name: String,
    pub user_avatar: String,
    pub initials: String,
    pub comment: String,
    pub article_title: String,
    pub created_at: String,
}

/// Read-only dashboard views: counters and recents derived from the content
/// store, plus static analytics fixtures.
pub struct DashboardService {
    store: Arc<dyn ContentStore>,
    clock: Arc<dyn Clock>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn ContentStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn summary(&self) -> DashboardSummary {
        let posts = self.store.all_posts().await;
        DashboardSummary {
            followers: FOLLOWERS,
            posts: posts.len() as u64,
            likes: posts.iter().map(|p| p.likes).sum(),
            viewers: posts.iter().map(|p| p.views).sum(),
            comments: posts.iter().map(|p| p.comments).sum(),
            shares: posts.iter().map(|p| p.shares).sum(),
        }
    }

    /// The latest published posts, newest first.
    pub async fn recent_articles(&self) -> Vec<RecentArticle> {
        let mut posts = self.store.all_posts().await;
        posts.retain(|p| p.status == PostStatus::Published);
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        let categories = self.store.list_categories().await;

        posts
            .into_iter()
            .take(RECENT_LIMIT)
            .map(|post| {
                let category_color = categories
                    .iter()
                    .find(|c| c.name.eq_ignore_ascii_case(&post.category))
                    .map(|c| c.color.clone())
                    .unwrap_or_default();
                RecentArticle {
                    id: post.id,
                    title: post.title,
                    thumbnail: post.cover_image,
                    post_date: post.published_at.format("%d %B %Y").to_string(),
                    category: post.category,
                    category_color,
                    comments: post.comments,
                    likes: post.likes,
                    shares: post.shares,
                    viewers: view::compact_number(post.views),
                }
            })
            .collect()
    }

    /// Newest comments across every post's tree (replies included),
    /// flattened and formatted for display.
    pub async fn recent_comments(&self) -> Vec<RecentComment> {
        let now = self.clock.now();
        let posts = self.store.all_posts().await;

        let mut flat = Vec::new();
        for post in &posts {
            for comment in self.store.list_comments(post.id).await {
                if let Some(replies) = &comment.replies {
                    for reply in replies {
                        flat.push((reply.clone(), post.title.clone()));
                    }
                }
                flat.push((comment, post.title.clone()));
            }
        }

        flat.sort_by(|a, b| b.0.created_at.cmp(&a.0.created_at));

        flat.into_iter()
            .take(RECENT_LIMIT)
            .map(|(comment, article_title)| RecentComment {
                id: comment.id,
                initials: view::initials(&comment.user_name),
                user_name: comment.user_name,
                user_avatar: comment.user_avatar,
                comment: comment.comment,
                article_title,
                created_at: view::relative_time(comment.created_at, now),
            })
            .collect()
    }

    pub async fn visitors(&self) -> Vec<VisitorDay> {
        VISITORS_BY_DAY
            .iter()
            .map(|&(day, visitors)| VisitorDay { day, visitors })
            .collect()
    }

    pub async fn devices(&self) -> DeviceUsage {
        DeviceUsage {
            desktop: 25,
            mobile: 75,
        }
    }

    pub async fn shares(&self) -> Vec<SocialShare> {
        TOP_SHARES
            .iter()
            .map(|&(platform, shares)| SocialShare { platform, shares })
            .collect()
    }
}

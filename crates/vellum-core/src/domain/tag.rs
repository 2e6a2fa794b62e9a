use serde::{Deserialize, Serialize};

use super::post::{Post, PostStatus};

/// Derived tag aggregate. Tags are never stored: they are recomputed from
/// published posts on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub name: String,
    pub count: u64,
}

/// Count exact tag occurrences across published posts, ordered by descending
/// count, ties broken by ascending name.
pub fn count_tags(posts: &[Post]) -> Vec<TagCount> {
    let mut counts: Vec<TagCount> = Vec::new();

    for post in posts.iter().filter(|p| p.status == PostStatus::Published) {
        for tag in &post.tags {
            match counts.iter_mut().find(|t| &t.name == tag) {
                Some(entry) => entry.count += 1,
                None => counts.push(TagCount {
                    name: tag.clone(),
                    count: 1,
                }),
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    counts
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::domain::post::PostAuthor;

    fn post(tags: &[&str], status: PostStatus) -> Post {
        let now = Utc::now();
        Post {
            id: Uuid::new_v4(),
            title: "t".to_string(),
            excerpt: "e".to_string(),
            content: "c".to_string(),
            cover_image: String::new(),
            author: PostAuthor {
                name: "A".to_string(),
                avatar: String::new(),
                email: "a@example.com".to_string(),
            },
            category: "Dev".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            published_at: now,
            updated_at: now,
            read_time: 1,
            views: 0,
            likes: 0,
            comments: 0,
            shares: 0,
            status,
            featured: false,
        }
    }

    #[test]
    fn test_counts_ordered_by_count_then_name() {
        let posts = vec![
            post(&["React", "Tutorial"], PostStatus::Published),
            post(&["React", "Apple"], PostStatus::Published),
            post(&["Tutorial"], PostStatus::Published),
        ];

        let tags = count_tags(&posts);
        assert_eq!(
            tags,
            vec![
                TagCount { name: "React".to_string(), count: 2 },
                TagCount { name: "Tutorial".to_string(), count: 2 },
                TagCount { name: "Apple".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_draft_posts_do_not_count() {
        let posts = vec![
            post(&["React"], PostStatus::Published),
            post(&["React", "Hidden"], PostStatus::Draft),
        ];

        let tags = count_tags(&posts);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].count, 1);
    }

    #[test]
    fn test_adding_a_tagged_post_bumps_count_by_one() {
        let mut posts = vec![post(&["React"], PostStatus::Published)];
        let before = count_tags(&posts);
        assert_eq!(before[0].count, 1);

        posts.push(post(&["React", "New"], PostStatus::Published));
        let after = count_tags(&posts);
        assert_eq!(after.iter().find(|t| t.name == "React").unwrap().count, 2);
        assert_eq!(after.iter().find(|t| t.name == "New").unwrap().count, 1);
    }
}

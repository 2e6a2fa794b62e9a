//! Demo fixtures so the API serves a plausible blog out of the box.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use vellum_core::domain::{Category, Comment, Post, PostAuthor, PostStatus};

use crate::store::MemoryContentStore;

struct PostSpec {
    title: &'static str,
    excerpt: &'static str,
    author_name: &'static str,
    author_email: &'static str,
    category: &'static str,
    tags: &'static [&'static str],
    published: (i32, u32, u32),
    read_time: u32,
    views: u64,
    likes: u64,
    comments: u64,
    shares: u64,
    featured: bool,
}

const POSTS: [PostSpec; 8] = [
    PostSpec {
        title: "DualSense Wireless Controller Review",
        excerpt: "A comprehensive review of the latest gaming controller with advanced haptic feedback and adaptive triggers.",
        author_name: "John Doe",
        author_email: "john@example.com",
        category: "Games",
        tags: &["Gaming", "Review", "Hardware"],
        published: (2021, 6, 7),
        read_time: 5,
        views: 415_000,
        likes: 5_000,
        comments: 332,
        shares: 999,
        featured: true,
    },
    PostSpec {
        title: "iPadOS 15 Brings Exciting New Features",
        excerpt: "Explore the exciting new features coming to iPadOS 15 that will enhance your productivity and creativity.",
        author_name: "Jane Smith",
        author_email: "jane@example.com",
        category: "Techno",
        tags: &["Apple", "iPad", "Software"],
        published: (2021, 6, 8),
        read_time: 8,
        views: 289_000,
        likes: 3_200,
        comments: 245,
        shares: 567,
        featured: true,
    },
    PostSpec {
        title: "Best Practices for React Development",
        excerpt: "Learn the essential best practices and patterns for building scalable React applications.",
        author_name: "Sarah Johnson",
        author_email: "sarah@example.com",
        category: "Development",
        tags: &["React", "JavaScript", "Web Development"],
        published: (2021, 6, 10),
        read_time: 12,
        views: 156_000,
        likes: 2_100,
        comments: 189,
        shares: 432,
        featured: false,
    },
    PostSpec {
        title: "Modern UI Design Trends 2024",
        excerpt: "Discover the latest UI design trends that are shaping the digital landscape in 2024.",
        author_name: "Mike Wilson",
        author_email: "mike@example.com",
        category: "Design",
        tags: &["Design", "UI/UX", "Trends"],
        published: (2021, 6, 12),
        read_time: 6,
        views: 123_000,
        likes: 1_800,
        comments: 156,
        shares: 321,
        featured: false,
    },
    PostSpec {
        title: "Getting Started with Next.js 14",
        excerpt: "A beginner-friendly guide to building modern web applications with Next.js 14.",
        author_name: "Alex Brown",
        author_email: "alex@example.com",
        category: "Development",
        tags: &["Next.js", "React", "Tutorial"],
        published: (2021, 6, 15),
        read_time: 10,
        views: 98_000,
        likes: 1_500,
        comments: 98,
        shares: 234,
        featured: false,
    },
    PostSpec {
        title: "Understanding TypeScript Generics",
        excerpt: "Deep dive into TypeScript generics and how to use them effectively in your projects.",
        author_name: "Emily Davis",
        author_email: "emily@example.com",
        category: "Development",
        tags: &["TypeScript", "Programming", "Tutorial"],
        published: (2021, 6, 18),
        read_time: 15,
        views: 87_000,
        likes: 1_200,
        comments: 87,
        shares: 198,
        featured: false,
    },
    PostSpec {
        title: "The Future of Web Development",
        excerpt: "Exploring emerging technologies and trends that will shape the future of web development.",
        author_name: "David Lee",
        author_email: "david@example.com",
        category: "Techno",
        tags: &["Web Development", "Future", "Technology"],
        published: (2021, 6, 20),
        read_time: 9,
        views: 112_000,
        likes: 1_900,
        comments: 134,
        shares: 345,
        featured: false,
    },
    PostSpec {
        title: "Color Theory in Digital Design",
        excerpt: "Master the art of color selection and create visually appealing digital designs.",
        author_name: "Lisa Chen",
        author_email: "lisa@example.com",
        category: "Design",
        tags: &["Design", "Color Theory", "UI/UX"],
        published: (2021, 6, 22),
        read_time: 7,
        views: 95_000,
        likes: 1_400,
        comments: 112,
        shares: 267,
        featured: false,
    },
];

const CATEGORIES: [(&str, &str, &str); 4] = [
    ("Games", "games", "bg-pink-500"),
    ("Techno", "techno", "bg-teal-500"),
    ("Development", "development", "bg-blue-500"),
    ("Design", "design", "bg-purple-500"),
];

fn body_for(spec: &PostSpec) -> String {
    format!(
        "# {title}\n\n{excerpt}\n\n## Overview\n\n\
         This article takes a closer look at the topic and what it means in \
         practice. We cover the background, the parts worth paying attention \
         to, and where things are likely headed next.\n\n\
         ## Key Takeaways\n\n\
         - What changed and why it matters\n\
         - How it compares to what came before\n\
         - Practical advice for getting started\n\n\
         > The details below reflect hands-on experience rather than spec \
         sheets.\n\n\
         ## Conclusion\n\n\
         There is plenty here to be excited about, and the fundamentals are \
         solid. Keep an eye on this space as the ecosystem matures.",
        title = spec.title,
        excerpt = spec.excerpt,
    )
}

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 9, 0, 0).unwrap()
}

fn comment(
    id: &str,
    post_id: Uuid,
    name: &str,
    email: &str,
    text: &str,
    created_at: DateTime<Utc>,
    likes: u64,
    replies: Option<Vec<Comment>>,
) -> Comment {
    Comment {
        id: id.to_string(),
        post_id,
        user_name: name.to_string(),
        user_avatar: String::new(),
        user_email: email.to_string(),
        comment: text.to_string(),
        created_at,
        updated_at: None,
        likes,
        replies,
    }
}

/// Build the demo dataset: eight published posts, four categories, and
/// comment trees on the first three posts.
pub fn demo_content() -> (Vec<Post>, Vec<Category>, HashMap<Uuid, Vec<Comment>>) {
    let posts: Vec<Post> = POSTS
        .iter()
        .map(|spec| {
            let published_at = date(spec.published.0, spec.published.1, spec.published.2);
            Post {
                id: Uuid::new_v4(),
                title: spec.title.to_string(),
                excerpt: spec.excerpt.to_string(),
                content: body_for(spec),
                cover_image: String::new(),
                author: PostAuthor {
                    name: spec.author_name.to_string(),
                    avatar: String::new(),
                    email: spec.author_email.to_string(),
                },
                category: spec.category.to_string(),
                tags: spec.tags.iter().map(|t| t.to_string()).collect(),
                published_at,
                updated_at: published_at,
                read_time: spec.read_time,
                views: spec.views,
                likes: spec.likes,
                comments: spec.comments,
                shares: spec.shares,
                status: PostStatus::Published,
                featured: spec.featured,
            }
        })
        .collect();

    let categories: Vec<Category> = CATEGORIES
        .iter()
        .map(|&(name, slug, color)| Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            slug: slug.to_string(),
            color: color.to_string(),
        })
        .collect();

    let mut comments = HashMap::new();

    let controller = posts[0].id;
    comments.insert(
        controller,
        vec![
            comment(
                "c1",
                controller,
                "Alex Thompson",
                "alex.t@example.com",
                "Great review! I've been considering getting this controller. How does it compare to the previous generation?",
                Utc.with_ymd_and_hms(2021, 6, 8, 10, 30, 0).unwrap(),
                24,
                None,
            ),
            comment(
                "c2",
                controller,
                "Sarah Chen",
                "sarah.c@example.com",
                "I've had this controller for a few months now and the adaptive triggers are game-changing. Especially in racing games!",
                Utc.with_ymd_and_hms(2021, 6, 8, 14, 15, 0).unwrap(),
                18,
                Some(vec![comment(
                    "c2r1",
                    controller,
                    "John Doe",
                    "john@example.com",
                    "Totally agree! The resistance when braking feels so realistic.",
                    Utc.with_ymd_and_hms(2021, 6, 8, 15, 0, 0).unwrap(),
                    5,
                    None,
                )]),
            ),
            comment(
                "c3",
                controller,
                "Mike Rodriguez",
                "mike.r@example.com",
                "The battery life is impressive. I can game for hours without worrying about charging.",
                Utc.with_ymd_and_hms(2021, 6, 9, 9, 20, 0).unwrap(),
                12,
                None,
            ),
            comment(
                "c4",
                controller,
                "Emily Watson",
                "emily.w@example.com",
                "Thanks for the detailed review! Have you tested it with PC games?",
                Utc.with_ymd_and_hms(2021, 6, 9, 16, 45, 0).unwrap(),
                8,
                None,
            ),
        ],
    );

    let ipados = posts[1].id;
    comments.insert(
        ipados,
        vec![
            comment(
                "c5",
                ipados,
                "David Kim",
                "david.k@example.com",
                "The new multitasking features are exactly what I needed for my workflow. Great overview!",
                Utc.with_ymd_and_hms(2021, 6, 9, 11, 0, 0).unwrap(),
                15,
                None,
            ),
            comment(
                "c6",
                ipados,
                "Lisa Park",
                "lisa.p@example.com",
                "I'm excited about the Quick Note feature. It's going to make note-taking so much more convenient.",
                Utc.with_ymd_and_hms(2021, 6, 9, 13, 30, 0).unwrap(),
                9,
                None,
            ),
        ],
    );

    let react = posts[2].id;
    comments.insert(
        react,
        vec![
            comment(
                "c7",
                react,
                "Chris Anderson",
                "chris.a@example.com",
                "These best practices are spot on! The code quality in my projects has improved significantly.",
                Utc.with_ymd_and_hms(2021, 6, 11, 10, 0, 0).unwrap(),
                22,
                None,
            ),
            comment(
                "c8",
                react,
                "Jessica Martinez",
                "jessica.m@example.com",
                "Could you elaborate more on the state management patterns? I would love more examples.",
                Utc.with_ymd_and_hms(2021, 6, 11, 14, 20, 0).unwrap(),
                6,
                None,
            ),
        ],
    );

    (posts, categories, comments)
}

/// A content store pre-populated with the demo dataset.
pub fn demo_store() -> MemoryContentStore {
    let (posts, categories, comments) = demo_content();
    MemoryContentStore::with_data(posts, categories, comments)
}

#[cfg(test)]
mod tests {
    use vellum_core::domain::PostQuery;
    use vellum_core::ports::ContentStore;

    use super::*;

    #[tokio::test]
    async fn test_demo_store_serves_a_plausible_blog() {
        let store = demo_store();

        let page = store.list_posts(&PostQuery::default()).await;
        assert_eq!(page.total, 8);

        let categories = store.list_categories().await;
        assert_eq!(categories.len(), 4);
        let dev = categories.iter().find(|c| c.slug == "development").unwrap();
        assert_eq!(dev.count, 3);

        let tags = store.list_tags().await;
        assert!(tags.iter().any(|t| t.name == "React" && t.count == 2));
    }

    #[tokio::test]
    async fn test_demo_comment_trees_are_attached_to_posts() {
        let (posts, _, comments) = demo_content();
        let tree = comments.get(&posts[0].id).unwrap();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree[1].replies.as_ref().unwrap().len(), 1);
    }
}

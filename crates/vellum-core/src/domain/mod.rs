//! Domain entities - the core business objects.

mod category;
mod comment;
mod post;
mod tag;
mod user;

pub use category::{Category, CategorySummary, normalize_slug, slug_is_valid};
pub use comment::{Comment, RemoveCommentError, remove_comment};
pub use post::{Page, Post, PostAuthor, PostPatch, PostQuery, PostStatus, parse_tags};
pub use tag::{TagCount, count_tags};
pub use user::{ResetToken, Session, User, UserProfile, UserRole};

//! The query facade - the only entry point callers use to read or mutate
//! content and account state. A real backend substitutes its protocol
//! boundary exactly here.

mod account;
mod content;
mod dashboard;

pub use account::{AccountService, AuthSession, RegisterInput, RESET_REQUESTED_MESSAGE};
pub use content::{CategoryInput, ContentService, CreatePost, UpdatePost};
pub use dashboard::{
    DashboardService, DashboardSummary, DeviceUsage, RecentArticle, RecentComment,
    SocialShare, VisitorDay,
};

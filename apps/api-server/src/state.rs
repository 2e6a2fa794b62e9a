//! Application state - shared across all handlers.

use std::sync::Arc;

use chrono::Duration;

use vellum_core::ports::{AccountStore, Clock, ContentStore, Mailer, PasswordHasher};
use vellum_core::services::{AccountService, ContentService, DashboardService};
use vellum_infra::{
    Argon2PasswordHasher, LogMailer, MemoryAccountStore, MemoryContentStore, SystemClock, seed,
};

use crate::config::AppConfig;

/// Shared application state. Built once at startup and passed by reference
/// to every handler; nothing lives in module-level globals.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentService>,
    pub accounts: Arc<AccountService>,
    pub dashboard: Arc<DashboardService>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new());
        let mailer: Arc<dyn Mailer> = Arc::new(LogMailer);

        let content_store: Arc<dyn ContentStore> = if config.seed_demo_data {
            tracing::info!("Seeding demo content");
            Arc::new(seed::demo_store())
        } else {
            Arc::new(MemoryContentStore::new())
        };
        let account_store: Arc<dyn AccountStore> = Arc::new(MemoryAccountStore::new());

        let content = Arc::new(ContentService::new(content_store.clone(), clock.clone()));
        let accounts = Arc::new(AccountService::new(
            account_store,
            hasher,
            clock.clone(),
            mailer,
            Duration::hours(config.session_ttl_hours),
            Duration::minutes(config.reset_token_ttl_mins),
        ));
        let dashboard = Arc::new(DashboardService::new(content_store, clock));

        tracing::info!("Application state initialized");

        Self {
            content,
            accounts,
            dashboard,
        }
    }
}

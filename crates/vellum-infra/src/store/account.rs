use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use vellum_core::domain::{ResetToken, Session, User};
use vellum_core::error::StoreError;
use vellum_core::ports::AccountStore;

#[derive(Default)]
struct AccountState {
    users: Vec<User>,
    /// Single-slot session storage: at most one live login at a time.
    session: Option<Session>,
    reset_tokens: Vec<ResetToken>,
}

/// In-memory account store. Emails are matched case-insensitively; expired
/// sessions and reset tokens are evicted lazily when read.
pub struct MemoryAccountStore {
    inner: RwLock<AccountState>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(AccountState::default()),
        }
    }
}

impl Default for MemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find_user_by_email(&self, email: &str) -> Option<User> {
        let state = self.inner.read().await;
        state
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    async fn find_user_by_id(&self, id: Uuid) -> Option<User> {
        let state = self.inner.read().await;
        state.users.iter().find(|u| u.id == id).cloned()
    }

    async fn insert_user(&self, user: User) -> Result<User, StoreError> {
        let mut state = self.inner.write().await;
        if state
            .users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(StoreError::Conflict(
                "user with this email already exists".to_string(),
            ));
        }
        state.users.push(user.clone());
        Ok(user)
    }

    async fn set_password_hash(
        &self,
        email: &str,
        password_hash: String,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let mut state = self.inner.write().await;
        let user = state
            .users
            .iter_mut()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .ok_or_else(|| StoreError::not_found("user", email))?;
        user.password_hash = password_hash;
        user.updated_at = now;
        Ok(())
    }

    async fn save_session(&self, session: Session) {
        self.inner.write().await.session = Some(session);
    }

    async fn current_session(&self, now: DateTime<Utc>) -> Option<Session> {
        let state = self.inner.read().await;
        match &state.session {
            Some(session) if !session.is_expired(now) => Some(session.clone()),
            Some(_) => {
                drop(state);
                // Lazy eviction of the expired slot. The slot may have been
                // refilled between the two locks, so expiry is re-checked
                // before clearing.
                let mut state = self.inner.write().await;
                if state.session.as_ref().is_some_and(|s| s.is_expired(now)) {
                    state.session = None;
                }
                None
            }
            None => None,
        }
    }

    async fn clear_session(&self) {
        self.inner.write().await.session = None;
    }

    async fn save_reset_token(&self, token: ResetToken) {
        let mut state = self.inner.write().await;
        // Replace-not-append: a new request invalidates the prior token.
        state
            .reset_tokens
            .retain(|t| !t.email.eq_ignore_ascii_case(&token.email));
        state.reset_tokens.push(token);
    }

    async fn find_reset_token(&self, token: Uuid, now: DateTime<Utc>) -> Option<ResetToken> {
        let mut state = self.inner.write().await;
        state.reset_tokens.retain(|t| !t.is_expired(now));
        state.reset_tokens.iter().find(|t| t.token == token).cloned()
    }

    async fn remove_reset_token(&self, token: Uuid) {
        let mut state = self.inner.write().await;
        state.reset_tokens.retain(|t| t.token != token);
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn user(email: &str) -> User {
        User::new(
            "Jane".to_string(),
            "Smith".to_string(),
            email.to_string(),
            "hash".to_string(),
            Utc::now(),
        )
    }

    fn session(expires_at: DateTime<Utc>) -> Session {
        Session {
            user_id: Uuid::new_v4(),
            token: Uuid::new_v4(),
            expires_at,
        }
    }

    #[tokio::test]
    async fn test_email_lookup_is_case_insensitive() {
        let store = MemoryAccountStore::new();
        store.insert_user(user("jane@example.com")).await.unwrap();

        assert!(store.find_user_by_email("Jane@Example.COM").await.is_some());
        assert!(store.find_user_by_email("nobody@example.com").await.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_a_conflict() {
        let store = MemoryAccountStore::new();
        store.insert_user(user("jane@example.com")).await.unwrap();

        let err = store.insert_user(user("JANE@example.com")).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_new_session_replaces_the_slot() {
        let store = MemoryAccountStore::new();
        let now = Utc::now();
        let first = session(now + Duration::days(7));
        let second = session(now + Duration::days(7));

        store.save_session(first).await;
        store.save_session(second.clone()).await;

        let live = store.current_session(now).await.unwrap();
        assert_eq!(live.token, second.token);
    }

    #[tokio::test]
    async fn test_expired_session_is_lazily_evicted() {
        let store = MemoryAccountStore::new();
        let now = Utc::now();
        store.save_session(session(now)).await; // expires exactly now

        assert!(store.current_session(now).await.is_none());
        // Gone for good, even for an earlier clock reading.
        assert!(store.current_session(now - Duration::hours(1)).await.is_none());
    }

    #[tokio::test]
    async fn test_eviction_never_clears_a_freshly_saved_session() {
        let now = Utc::now();
        for _ in 0..100 {
            let store = std::sync::Arc::new(MemoryAccountStore::new());
            store.save_session(session(now)).await; // already expired

            let live = session(now + Duration::days(7));
            let reader = {
                let store = store.clone();
                async move { store.current_session(now).await }
            };
            let writer = {
                let store = store.clone();
                let live = live.clone();
                async move { store.save_session(live).await }
            };
            tokio::join!(reader, writer);

            // However the two calls interleave, the live session survives.
            let kept = store.current_session(now).await.unwrap();
            assert_eq!(kept.token, live.token);
        }
    }

    #[tokio::test]
    async fn test_reset_token_replaced_per_email() {
        let store = MemoryAccountStore::new();
        let now = Utc::now();
        let old = ResetToken {
            email: "jane@example.com".to_string(),
            token: Uuid::new_v4(),
            expires_at: now + Duration::hours(1),
        };
        let new = ResetToken {
            email: "jane@example.com".to_string(),
            token: Uuid::new_v4(),
            expires_at: now + Duration::hours(1),
        };

        store.save_reset_token(old.clone()).await;
        store.save_reset_token(new.clone()).await;

        assert!(store.find_reset_token(old.token, now).await.is_none());
        assert!(store.find_reset_token(new.token, now).await.is_some());
    }

    #[tokio::test]
    async fn test_expired_reset_token_is_purged_on_read() {
        let store = MemoryAccountStore::new();
        let now = Utc::now();
        let token = ResetToken {
            email: "jane@example.com".to_string(),
            token: Uuid::new_v4(),
            expires_at: now + Duration::hours(1),
        };
        store.save_reset_token(token.clone()).await;

        assert!(
            store
                .find_reset_token(token.token, now + Duration::hours(1))
                .await
                .is_none()
        );
    }
}

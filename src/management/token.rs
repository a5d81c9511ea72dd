use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::types::Token;

/// Seconds before the nominal expiry at which a token counts as stale.
const EXPIRY_LEEWAY_SECS: u64 = 240;

/// Shared in-memory store for the current OAuth token pair.
///
/// Cloning the manager yields another handle onto the same store, so one
/// instance can be injected into the router state and observed by every
/// handler. Access and refresh token are always replaced together under the
/// lock; no request can observe a half-updated pair.
#[derive(Clone, Default)]
pub struct TokenManager {
    inner: Arc<Mutex<Option<Token>>>,
}

impl TokenManager {
    pub fn new() -> Self {
        TokenManager {
            inner: Arc::new(Mutex::new(None)),
        }
    }

    /// Returns a snapshot of the stored token, if any.
    pub async fn current(&self) -> Option<Token> {
        self.inner.lock().await.clone()
    }

    /// Replaces the stored token pair.
    pub async fn set(&self, token: Token) {
        let mut lock = self.inner.lock().await;
        *lock = Some(token);
    }

    /// Drops the stored token pair. Idempotent; clearing an empty store is
    /// not an error.
    pub async fn clear(&self) {
        let mut lock = self.inner.lock().await;
        *lock = None;
    }

    /// Returns the current access token, or `None` when not logged in.
    pub async fn access_token(&self) -> Option<String> {
        self.inner
            .lock()
            .await
            .as_ref()
            .map(|t| t.access_token.clone())
    }

    /// Returns the refresh token when the access token needs refreshing.
    ///
    /// A token counts as stale within [`EXPIRY_LEEWAY_SECS`] of its nominal
    /// expiry, or when the access token is empty. Returns `None` when no
    /// refresh token is stored or the access token is still fresh, i.e. when
    /// the caller should do nothing.
    pub async fn stale_refresh_token(&self) -> Option<String> {
        let lock = self.inner.lock().await;
        let token = lock.as_ref()?;
        if token.refresh_token.is_empty() {
            return None;
        }
        if token.access_token.is_empty() || Self::is_expired(token) {
            return Some(token.refresh_token.clone());
        }
        None
    }

    fn is_expired(token: &Token) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= token
            .obtained_at
            .saturating_add(token.expires_in)
            .saturating_sub(EXPIRY_LEEWAY_SECS)
    }
}

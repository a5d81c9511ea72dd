use chrono::Utc;
use spotiproxy::management::TokenManager;
use spotiproxy::types::Token;

// Helper function to create a token obtained `age_secs` seconds ago
fn create_test_token(access: &str, refresh: &str, age_secs: u64) -> Token {
    Token {
        access_token: access.to_string(),
        refresh_token: refresh.to_string(),
        scope: "user-library-modify".to_string(),
        expires_in: 3600,
        obtained_at: (Utc::now().timestamp() as u64) - age_secs,
    }
}

#[tokio::test]
async fn test_set_and_current() {
    let tokens = TokenManager::new();

    // Empty at startup
    assert!(tokens.current().await.is_none());
    assert!(tokens.access_token().await.is_none());

    tokens.set(create_test_token("AT", "RT", 0)).await;

    // The stored pair is observable as a whole
    let current = tokens.current().await.unwrap();
    assert_eq!(current.access_token, "AT");
    assert_eq!(current.refresh_token, "RT");
    assert_eq!(tokens.access_token().await.unwrap(), "AT");
}

#[tokio::test]
async fn test_clear_is_idempotent() {
    let tokens = TokenManager::new();
    tokens.set(create_test_token("AT", "RT", 0)).await;

    // First clear empties the store
    tokens.clear().await;
    assert!(tokens.current().await.is_none());

    // Second clear is a no-op, not an error
    tokens.clear().await;
    assert!(tokens.current().await.is_none());
}

#[tokio::test]
async fn test_clones_share_state() {
    let tokens = TokenManager::new();
    let handle = tokens.clone();

    handle.set(create_test_token("AT", "RT", 0)).await;

    // Both handles observe the same store
    assert_eq!(tokens.access_token().await.unwrap(), "AT");
}

#[tokio::test]
async fn test_stale_refresh_token_fresh_pair() {
    let tokens = TokenManager::new();
    tokens.set(create_test_token("AT", "RT", 0)).await;

    // A freshly obtained token needs no refresh
    assert!(tokens.stale_refresh_token().await.is_none());
}

#[tokio::test]
async fn test_stale_refresh_token_near_expiry() {
    let tokens = TokenManager::new();

    // 3500s old with expires_in 3600 is within the 240s leeway
    tokens.set(create_test_token("AT", "RT", 3500)).await;
    assert_eq!(tokens.stale_refresh_token().await.unwrap(), "RT");

    // Fully expired counts as stale too
    tokens.set(create_test_token("AT", "RT", 7200)).await;
    assert_eq!(tokens.stale_refresh_token().await.unwrap(), "RT");
}

#[tokio::test]
async fn test_stale_refresh_token_missing_access_token() {
    let tokens = TokenManager::new();

    // An empty access token is always stale when a refresh token exists
    tokens.set(create_test_token("", "RT", 0)).await;
    assert_eq!(tokens.stale_refresh_token().await.unwrap(), "RT");
}

#[tokio::test]
async fn test_stale_refresh_token_without_refresh_token() {
    let tokens = TokenManager::new();

    // No stored pair at all
    assert!(tokens.stale_refresh_token().await.is_none());

    // A pair without a refresh token can never be refreshed
    tokens.set(create_test_token("AT", "", 7200)).await;
    assert!(tokens.stale_refresh_token().await.is_none());
}

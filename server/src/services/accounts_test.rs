use super::*;

fn creds(username: &str, password: &str) -> Credentials {
    Credentials { username: username.to_owned(), password: password.to_owned() }
}

// =============================================================================
// validate_credentials
// =============================================================================

#[test]
fn validate_trims_username() {
    let c = creds("  alice  ", "secret");
    let (username, password) = validate_credentials(&c).unwrap();
    assert_eq!(username, "alice");
    assert_eq!(password, "secret");
}

#[test]
fn validate_rejects_blank_username() {
    assert!(matches!(validate_credentials(&creds("   ", "secret")), Err(AccountError::MissingCredentials)));
}

#[test]
fn validate_rejects_empty_password() {
    assert!(matches!(validate_credentials(&creds("alice", "")), Err(AccountError::MissingCredentials)));
}

#[test]
fn validate_keeps_password_whitespace() {
    let c = creds("alice", " pw ");
    assert_eq!(validate_credentials(&c).unwrap().1, " pw ");
}

// =============================================================================
// password hashing
// =============================================================================

#[test]
fn hash_then_verify_matches() {
    let hash = hash_password("hunter2").unwrap();
    assert!(hash.starts_with("$argon2"));
    assert!(verify_password("hunter2", &hash));
}

#[test]
fn verify_rejects_wrong_password() {
    let hash = hash_password("hunter2").unwrap();
    assert!(!verify_password("hunter3", &hash));
}

#[test]
fn hashes_are_salted() {
    assert_ne!(hash_password("same").unwrap(), hash_password("same").unwrap());
}

#[test]
fn verify_rejects_malformed_hash() {
    assert!(!verify_password("anything", "not-a-phc-string"));
}

#[test]
fn account_error_messages_match_api_text() {
    assert_eq!(AccountError::MissingCredentials.to_string(), "Username and password are required");
    assert_eq!(AccountError::UsernameTaken.to_string(), "Username already exists");
    assert_eq!(AccountError::InvalidCredentials.to_string(), "Invalid username or password");
}

// =============================================================================
// Live database
// =============================================================================

#[cfg(feature = "live-db-tests")]
#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL/live Postgres"]
async fn register_then_authenticate() {
    let pool = crate::state::test_helpers::integration_pool().await;
    let name = crate::state::test_helpers::unique_name("carol");
    let id = register(&pool, &name, "pw").await.expect("register");
    assert_eq!(authenticate(&pool, &name, "pw").await.expect("login"), id);
    assert!(matches!(authenticate(&pool, &name, "nope").await, Err(AccountError::InvalidCredentials)));
    assert!(matches!(
        authenticate(&pool, &crate::state::test_helpers::unique_name("nobody"), "pw").await,
        Err(AccountError::InvalidCredentials)
    ));
}

#[cfg(feature = "live-db-tests")]
#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL/live Postgres"]
async fn register_duplicate_is_rejected() {
    let pool = crate::state::test_helpers::integration_pool().await;
    let name = crate::state::test_helpers::unique_name("dave");
    register(&pool, &name, "pw").await.expect("register");
    assert!(matches!(register(&pool, &name, "pw2").await, Err(AccountError::UsernameTaken)));
}

#[cfg(feature = "live-db-tests")]
#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL/live Postgres"]
async fn linked_username_round_trip() {
    let pool = crate::state::test_helpers::integration_pool().await;
    let id = register(&pool, &crate::state::test_helpers::unique_name("erin"), "pw")
        .await
        .expect("register");
    assert_eq!(linked_username(&pool, id).await.expect("read"), None);
    set_linked_username(&pool, id, "erin_lc").await.expect("write");
    assert_eq!(linked_username(&pool, id).await.expect("read").as_deref(), Some("erin_lc"));
}

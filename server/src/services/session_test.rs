use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// Live database
// =============================================================================

#[cfg(feature = "live-db-tests")]
#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL/live Postgres"]
async fn session_round_trip_resolves_user() {
    let pool = crate::state::test_helpers::integration_pool().await;
    let name = crate::state::test_helpers::unique_name("session_user");
    let user_id = crate::services::accounts::register(&pool, &name, "pw")
        .await
        .expect("register");

    let token = create_session(&pool, user_id).await.expect("create session");
    let user = validate_session(&pool, &token).await.expect("validate").expect("live session");
    assert_eq!(user.id, user_id);
    assert_eq!(user.username, name);

    assert!(validate_session(&pool, "not-a-token").await.expect("validate").is_none());
}

#[cfg(feature = "live-db-tests")]
#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL/live Postgres"]
async fn expired_sessions_do_not_validate_and_get_purged() {
    let pool = crate::state::test_helpers::integration_pool().await;
    let user_id = crate::services::accounts::register(&pool, &crate::state::test_helpers::unique_name("expired"), "pw")
        .await
        .expect("register");
    let token = create_session(&pool, user_id).await.expect("create session");
    sqlx::query("UPDATE sessions SET expires_at = now() - INTERVAL '1 minute' WHERE token = $1")
        .bind(&token)
        .execute(&pool)
        .await
        .expect("expire session");

    assert!(validate_session(&pool, &token).await.expect("validate").is_none());
    assert!(purge_expired(&pool).await.expect("purge") >= 1);
}

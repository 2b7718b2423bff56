use super::*;
use crate::util::storage::MemoryTokenStore;

#[test]
fn successful_login_stores_token_and_goes_to_profile() {
    let store = MemoryTokenStore::default();
    let outcome = finish_login(&store, Ok(LoginResponse { access_token: "tok123".to_owned() }));
    assert_eq!(outcome, AuthOutcome::Navigate("/profile"));
    assert_eq!(store.load(), Some("tok123".to_owned()));
}

#[test]
fn rejected_login_stores_nothing_and_shows_server_message() {
    let store = MemoryTokenStore::default();
    let err = ApiError::from_status(401, r#"{"msg":"Invalid username or password"}"#);
    let outcome = finish_login(&store, Err(err));
    assert_eq!(outcome, AuthOutcome::Error("Invalid username or password".to_owned()));
    assert_eq!(store.load(), None);
}

#[test]
fn transport_failure_shows_fallback() {
    let store = MemoryTokenStore::default();
    let outcome = finish_login(&store, Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(outcome, AuthOutcome::Error("Login failed".to_owned()));
}

#[test]
fn empty_token_is_treated_as_failure() {
    let store = MemoryTokenStore::default();
    let outcome = finish_login(&store, Ok(LoginResponse { access_token: String::new() }));
    assert_eq!(outcome, AuthOutcome::Error("Login failed".to_owned()));
    assert_eq!(store.load(), None);
}

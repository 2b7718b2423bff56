use super::*;
use crate::util::storage::MemoryTokenStore;

#[test]
fn default_session_is_neither_authenticated_nor_redirecting() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert!(!state.needs_login());
}

#[test]
fn from_store_picks_up_token() {
    let store = MemoryTokenStore::with_token("t0k");
    let state = SessionState::from_store(&store);
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("t0k"));
}

#[test]
fn from_empty_store_needs_login() {
    let state = SessionState::from_store(&MemoryTokenStore::default());
    assert!(state.needs_login());
}

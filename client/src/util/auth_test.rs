use super::*;
use crate::util::storage::MemoryTokenStore;

#[test]
fn guard_waits_until_session_is_loaded() {
    assert_eq!(guard_redirect(&SessionState::default()), None);
}

#[test]
fn guard_redirects_without_token() {
    assert_eq!(guard_redirect(&SessionState::signed_out()), Some("/login"));
}

#[test]
fn guard_allows_with_token() {
    let store = MemoryTokenStore::with_token("abc");
    assert_eq!(guard_redirect(&SessionState::from_store(&store)), None);
}

#[test]
fn logout_clears_token_and_signs_out() {
    let store = MemoryTokenStore::with_token("abc");
    let session = logout(&store);
    assert_eq!(store.load(), None);
    assert_eq!(guard_redirect(&session), Some("/login"));
}

//! Session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided via context by `App`. SSR renders with `loaded = false`; the
//! first client effect reads localStorage and flips it, so guarded routes
//! never redirect before the browser has been consulted.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage::TokenStore;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    /// Whether persisted storage has been read yet.
    pub loaded: bool,
}

impl SessionState {
    pub fn from_store(store: &impl TokenStore) -> Self {
        Self { token: store.load(), loaded: true }
    }

    pub fn signed_out() -> Self {
        Self { token: None, loaded: true }
    }

    pub fn is_authenticated(&self) -> bool {
        self.loaded && self.token.is_some()
    }

    pub fn needs_login(&self) -> bool {
        self.loaded && self.token.is_none()
    }
}

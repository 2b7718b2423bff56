//! Browser localStorage persistence for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only value the client persists. It is written by login,
//! removed by logout, and read by the route guard and every authenticated
//! request. SSR paths see an empty store so server rendering stays
//! deterministic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(test)]
use std::cell::RefCell;

/// Fixed localStorage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Read/write access to the persisted session token.
pub trait TokenStore {
    /// Stored token, if present and non-blank.
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// `localStorage`-backed store. No-ops outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(TOKEN_KEY).ok().flatten()?;
            normalize_token(raw)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

/// Treat blank stored values as "no token".
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn normalize_token(raw: String) -> Option<String> {
    if raw.trim().is_empty() { None } else { Some(raw) }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

#[cfg(test)]
impl MemoryTokenStore {
    pub(crate) fn with_token(token: &str) -> Self {
        Self { token: RefCell::new(Some(token.to_owned())) }
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone().and_then(normalize_token)
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes and the sidebar apply identical redirect behavior: no
//! token means `/login`. Token validity is never checked here; a stale token
//! surfaces as an error on the next API call.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;
use crate::util::storage::TokenStore;

pub const LOGIN_PATH: &str = "/login";
pub const PROFILE_PATH: &str = "/profile";

/// Redirect target for a guarded route, or `None` when it may render.
pub fn guard_redirect(session: &SessionState) -> Option<&'static str> {
    session.needs_login().then_some(LOGIN_PATH)
}

/// Redirect to `/login` whenever the session has loaded without a token.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        if let Some(path) = guard_redirect(&session.get()) {
            navigate(path, NavigateOptions::default());
        }
    });
}

/// Forget the stored token and return the signed-out session.
pub fn logout(store: &impl TokenStore) -> SessionState {
    store.clear();
    SessionState::signed_out()
}

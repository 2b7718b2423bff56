//! Login page.
//!
//! On success the token is persisted and the browser performs a full page
//! load of `/profile`, so the app boots fresh with the new session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use super::credentials_form::CredentialsForm;
#[cfg(any(test, feature = "hydrate"))]
use super::credentials_form::AuthOutcome;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
use crate::net::types::Credentials;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::LoginResponse;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::auth::PROFILE_PATH;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::storage::TokenStore;

#[cfg(any(test, feature = "hydrate"))]
pub(crate) const LOGIN_FAILED: &str = "Login failed";

/// Persist the token on success; otherwise store nothing.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn finish_login(store: &impl TokenStore, result: Result<LoginResponse, ApiError>) -> AuthOutcome {
    match result {
        Ok(resp) if !resp.access_token.trim().is_empty() => {
            store.save(&resp.access_token);
            AuthOutcome::Navigate(PROFILE_PATH)
        }
        Ok(_) => AuthOutcome::Error(LOGIN_FAILED.to_owned()),
        Err(e) => AuthOutcome::from_error(&e, LOGIN_FAILED),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let error = RwSignal::new(None::<String>);

    let on_submit = Callback::new(move |creds: Credentials| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::login(&creds).await;
            match finish_login(&crate::util::storage::BrowserTokenStore, result) {
                AuthOutcome::Navigate(path) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(path);
                    }
                }
                AuthOutcome::Error(message) => error.set(Some(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = creds;
        }
    });

    view! {
        <CredentialsForm title="Login" submit_label="Login" error=error on_submit=on_submit>
            "Don't have an account? "
            <a class="auth-card__link" href="/register">"Register"</a>
        </CredentialsForm>
    }
}

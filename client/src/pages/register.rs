//! Registration page. Success routes to `/login`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use super::credentials_form::CredentialsForm;
#[cfg(any(test, feature = "hydrate"))]
use super::credentials_form::AuthOutcome;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
use crate::net::types::Credentials;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::SuccessResponse;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::auth::LOGIN_PATH;

#[cfg(any(test, feature = "hydrate"))]
pub(crate) const REGISTRATION_FAILED: &str = "Registration failed";

/// Only an explicit `success: true` counts as a created account.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn finish_register(result: Result<SuccessResponse, ApiError>) -> AuthOutcome {
    match result {
        Ok(SuccessResponse { success: true }) => AuthOutcome::Navigate(LOGIN_PATH),
        Ok(_) => AuthOutcome::Error(REGISTRATION_FAILED.to_owned()),
        Err(e) => AuthOutcome::from_error(&e, REGISTRATION_FAILED),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let error = RwSignal::new(None::<String>);
    let redirect = RwSignal::new(None::<&'static str>);

    #[cfg(feature = "hydrate")]
    {
        let navigate = use_navigate();
        Effect::new(move || {
            if let Some(path) = redirect.get() {
                redirect.set(None);
                navigate(path, NavigateOptions::default());
            }
        });
    }

    let on_submit = Callback::new(move |creds: Credentials| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match finish_register(crate::net::api::register(&creds).await) {
                AuthOutcome::Navigate(path) => redirect.set(Some(path)),
                AuthOutcome::Error(message) => error.set(Some(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (creds, redirect);
        }
    });

    view! {
        <CredentialsForm title="Register" submit_label="Register" error=error on_submit=on_submit>
            "Already have an account? "
            <a class="auth-card__link" href="/login">"Login"</a>
        </CredentialsForm>
    }
}

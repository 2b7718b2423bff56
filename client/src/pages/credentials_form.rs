//! Username/password form shared by the login and register pages.

#[cfg(test)]
#[path = "credentials_form_test.rs"]
mod credentials_form_test;

use leptos::prelude::*;

use crate::components::button::Button;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
use crate::net::types::Credentials;

/// Where an auth form goes after its request settles.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum AuthOutcome {
    Navigate(&'static str),
    Error(String),
}

#[cfg(any(test, feature = "hydrate"))]
impl AuthOutcome {
    pub(crate) fn from_error(err: &ApiError, fallback: &str) -> Self {
        Self::Error(err.user_message(fallback))
    }
}

#[component]
pub(crate) fn CredentialsForm(
    title: &'static str,
    submit_label: &'static str,
    error: RwSignal<Option<String>>,
    on_submit: Callback<Credentials>,
    children: Children,
) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(Credentials { username: username.get(), password: password.get() });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">{title}</h2>
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form on:submit=submit>
                    <label class="form__label" for="username">"Username"</label>
                    <input
                        class="form__input"
                        id="username"
                        name="username"
                        type="text"
                        placeholder="Enter username"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label class="form__label" for="password">"Password"</label>
                    <input
                        class="form__input"
                        id="password"
                        name="password"
                        type="password"
                        placeholder="Enter password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Button button_type="submit" class="btn--wide">{submit_label}</Button>
                </form>
                <p class="auth-card__footer">{children()}</p>
            </div>
        </div>
    }
}

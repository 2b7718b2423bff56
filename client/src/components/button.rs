//! Plain and animated buttons.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

/// Join a base class with caller-supplied extras.
pub(crate) fn button_class(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() { base.to_owned() } else { format!("{base} {extra}") }
}

#[component]
pub fn Button(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            class=button_class("btn", &class)
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Button with a hover/press scale effect (CSS-driven).
#[component]
pub fn AnimatedButton(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            class=button_class("btn btn--animated", &class)
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

//! Navigation sidebar with a narrow-viewport toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered beside every guarded page. Open/closed is local state; following
//! a link, logging out, or clicking the overlay closes it.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::auth::{LOGIN_PATH, logout};
use crate::util::storage::BrowserTokenStore;

const ICON_OPEN: &str = "M6 18L18 6M6 6l12 12";
const ICON_CLOSED: &str = "M4 6h16M4 12h16M4 18h16";

pub(crate) fn sidebar_class(open: bool) -> &'static str {
    if open { "sidebar sidebar--open" } else { "sidebar" }
}

/// Close icon when open, hamburger when closed.
pub(crate) fn toggle_icon_path(open: bool) -> &'static str {
    if open { ICON_OPEN } else { ICON_CLOSED }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let open = RwSignal::new(false);

    let on_logout = move |_| {
        open.set(false);
        session.set(logout(&BrowserTokenStore));
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="sidebar__bar">
            <button
                class="sidebar__toggle"
                aria-label="Toggle navigation"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <svg class="sidebar__icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d=move || toggle_icon_path(open.get())
                    />
                </svg>
            </button>
        </div>
        <aside class=move || sidebar_class(open.get())>
            <div class="sidebar__title">"Profile Follow"</div>
            <nav class="sidebar__nav">
                <a class="sidebar__link" href="/profile" on:click=move |_| open.set(false)>
                    "Profile"
                </a>
                <a class="sidebar__link" href="/following" on:click=move |_| open.set(false)>
                    "Following"
                </a>
                <button class="sidebar__link sidebar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </nav>
        </aside>
        <Show when=move || open.get()>
            <div class="sidebar__overlay" on:click=move |_| open.set(false)></div>
        </Show>
    }
}

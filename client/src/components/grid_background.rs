//! Full-bleed dark background with a faint square grid.

use leptos::prelude::*;

#[component]
pub fn GridBackground(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <div class="grid-bg">
            <div class=format!("grid-bg__lines {class}")>{children()}</div>
        </div>
    }
}

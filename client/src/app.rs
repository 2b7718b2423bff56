//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::pages::{following::FollowingPage, login::LoginPage, profile::ProfilePage, register::RegisterPage};
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::storage::BrowserTokenStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Storage is only readable in the browser; this runs after hydration.
    Effect::new(move || session.set(SessionState::from_store(&BrowserTokenStore)));

    view! {
        <Stylesheet id="leptos" href="/pkg/profile-follow.css"/>
        <Title text="Profile Follow"/>

        <Router>
            <main class="app">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LoginPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=StaticSegment("profile")
                        view=|| {
                            view! {
                                <RequireToken>
                                    <Sidebar/>
                                    <div class="app__content">
                                        <ProfilePage/>
                                    </div>
                                </RequireToken>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("following")
                        view=|| {
                            view! {
                                <RequireToken>
                                    <Sidebar/>
                                    <div class="app__content">
                                        <FollowingPage/>
                                    </div>
                                </RequireToken>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}

/// Render children only when a token is stored; otherwise send the browser
/// to `/login`. The token is not validated here.
#[component]
pub fn RequireToken(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    view! { <Show when=move || session.get().is_authenticated()>{children()}</Show> }
}

//! Followed-users page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches `/following` on mount. Unfollow removes the card locally on
//! success without a re-fetch; on failure the list stays as it was and the
//! server's message is shown.

#[cfg(test)]
#[path = "following_test.rs"]
mod following_test;

use leptos::prelude::*;

use crate::components::button::Button;
use crate::components::grid_background::GridBackground;
use crate::components::leaderboard::Leaderboard;
use crate::components::spinner::Spinner;
use crate::components::user_card::UserCard;
use crate::net::types::LeetcodeStats;
use crate::state::page::PageState;

#[cfg(any(test, feature = "hydrate"))]
pub(crate) const UNFOLLOW_FAILED: &str = "Error unfollowing user";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const LOAD_FAILED: &str = "Error loading followed users";
pub(crate) const EMPTY_LIST: &str = "You are not following anyone yet.";

#[cfg(feature = "hydrate")]
async fn load_following(page: RwSignal<PageState<Vec<LeetcodeStats>>>) {
    match crate::net::api::fetch_following().await {
        Ok(resp) => page.update(|p| p.succeed(resp.followed_stats)),
        Err(e) => {
            log::error!("Error fetching followed users: {e}");
            page.update(|p| p.fail(e.user_message(LOAD_FAILED)));
        }
    }
}

#[component]
pub fn FollowingPage() -> impl IntoView {
    let page = RwSignal::new(PageState::<Vec<LeetcodeStats>>::loading());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(load_following(page));

    let on_unfollow = move |username: String| {
        page.update(PageState::begin);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::unfollow(&username).await {
                Ok(_) => page.update(move |p| {
                    p.succeed_with(|list| {
                        crate::state::following::remove_by_username(list, &username);
                    });
                }),
                Err(e) => page.update(|p| p.fail(e.user_message(UNFOLLOW_FAILED))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = username;
        }
    };

    view! {
        <div class="page">
            <GridBackground>
                {move || {
                    let state = page.get();
                    if state.loading {
                        return view! { <Spinner/> }.into_any();
                    }
                    let followed = state.data.unwrap_or_default();
                    let cards = if followed.is_empty() {
                        view! { <p class="page__muted">{EMPTY_LIST}</p> }.into_any()
                    } else {
                        view! {
                            <div class="card-grid">
                                {followed
                                    .iter()
                                    .cloned()
                                    .map(|stats| {
                                        let username = stats.username.clone();
                                        view! {
                                            <div class="card-stack">
                                                <UserCard stats=stats/>
                                                <Button
                                                    class="btn--danger"
                                                    on_click=Callback::new(move |()| on_unfollow(username.clone()))
                                                >
                                                    "Unfollow"
                                                </Button>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    };
                    view! {
                        <h2 class="page__title">"Followed Users"</h2>
                        {state.error.map(|message| view! { <p class="page__error">{message}</p> })}
                        {cards}
                        <Leaderboard users=followed/>
                    }
                        .into_any()
                }}
            </GridBackground>
        </div>
    }
}

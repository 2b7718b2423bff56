//! Profile page: own stats, linking, following, and the combined leaderboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches `/profile` on mount. Relinking patches only the own-stats card from
//! the response; following re-fetches the whole profile.
//!
//! TRADE-OFFS
//! ==========
//! The "update username" and "follow user" inputs share one debounced draft,
//! so typing in either shows up in both and a submit from either form sends
//! the same value. The coupling is kept on purpose so both forms behave the
//! same way; split the draft into two signals to decouple them.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::button::AnimatedButton;
use crate::components::grid_background::GridBackground;
use crate::components::leaderboard::Leaderboard;
use crate::components::spinner::Spinner;
use crate::components::user_card::UserCard;
use crate::state::page::PageState;
use crate::state::profile::{OwnCard, ProfileData};
use crate::util::debounce::{INPUT_DEBOUNCE_MS, debounced_input};

#[cfg(any(test, feature = "hydrate"))]
pub(crate) const UPDATE_FAILED: &str = "Error updating LeetCode username";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const FOLLOW_FAILED: &str = "Error following user";
pub(crate) const LOAD_FAILED: &str = "Error loading profile";
pub(crate) const NOT_LINKED: &str = "No LeetCode username set";

pub(crate) fn unavailable_message(username: &str) -> String {
    format!("No stats available for {username}")
}

#[cfg(feature = "hydrate")]
async fn load_profile(page: RwSignal<PageState<ProfileData>>) {
    match crate::net::api::fetch_profile().await {
        Ok(resp) => page.update(|p| p.succeed(ProfileData::from(resp))),
        Err(e) => {
            log::error!("Error fetching profile: {e}");
            page.update(|p| p.fail(e.user_message(LOAD_FAILED)));
        }
    }
}

#[cfg(feature = "hydrate")]
async fn follow_then_reload(username: &str) -> Result<payloads::ProfileResponse, crate::net::api::ApiError> {
    crate::net::api::follow(username).await?;
    crate::net::api::fetch_profile().await
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let page = RwSignal::new(PageState::<ProfileData>::loading());
    let draft = RwSignal::new(String::new());
    let on_draft_input = debounced_input(draft, INPUT_DEBOUNCE_MS);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(load_profile(page));

    let on_update = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let username = draft.get_untracked();
        page.update(PageState::begin);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_leetcode(&username).await {
                Ok(stats) => {
                    page.update(move |p| p.succeed_with(move |data| data.apply_linked_stats(stats)));
                    draft.set(String::new());
                }
                Err(e) => page.update(|p| p.fail(e.user_message(UPDATE_FAILED))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = username;
        }
    };

    let on_follow = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let username = draft.get_untracked();
        page.update(PageState::begin);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match follow_then_reload(&username).await {
                Ok(resp) => {
                    page.update(move |p| p.succeed(ProfileData::from(resp)));
                    draft.set(String::new());
                }
                Err(e) => page.update(|p| p.fail(e.user_message(FOLLOW_FAILED))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = username;
        }
    };

    let draft_input = move |ev: leptos::ev::Event| on_draft_input.run(event_target_value(&ev));

    view! {
        <div class="page">
            <GridBackground>
                {move || {
                    let state = page.get();
                    if state.loading {
                        return view! { <Spinner/> }.into_any();
                    }
                    let Some(data) = state.data else {
                        return view! { <p class="page__empty">{LOAD_FAILED}</p> }.into_any();
                    };
                    let own_card = match data.own_card() {
                        OwnCard::Stats(stats) => view! { <UserCard stats=stats.clone()/> }.into_any(),
                        OwnCard::Unavailable(name) => {
                            view! { <p class="page__muted">{unavailable_message(name)}</p> }.into_any()
                        }
                        OwnCard::NotLinked => view! { <p class="page__muted">{NOT_LINKED}</p> }.into_any(),
                    };
                    let leaderboard = data.leaderboard_users();
                    view! {
                        <h2 class="page__title">"Your Profile"</h2>
                        {state.error.map(|message| view! { <p class="page__error">{message}</p> })}
                        {own_card}
                        <form class="form" on:submit=on_update>
                            <label class="form__label">"Update LeetCode Username"</label>
                            <input
                                class="form__input"
                                type="text"
                                placeholder="Enter LeetCode username"
                                prop:value=move || draft.get()
                                on:input=draft_input
                            />
                            <AnimatedButton button_type="submit">"Update Username"</AnimatedButton>
                        </form>
                        <form class="form" on:submit=on_follow>
                            <label class="form__label">"Follow LeetCode User"</label>
                            <input
                                class="form__input"
                                type="text"
                                placeholder="Enter LeetCode username"
                                prop:value=move || draft.get()
                                on:input=draft_input
                            />
                            <AnimatedButton button_type="submit">"Follow User"</AnimatedButton>
                        </form>
                        <h3 class="page__subtitle">"Followed Users"</h3>
                        <div class="card-grid">
                            {data
                                .followed
                                .into_iter()
                                .map(|stats| view! { <UserCard stats=stats/> })
                                .collect_view()}
                        </div>
                        <Leaderboard users=leaderboard/>
                    }
                        .into_any()
                }}
            </GridBackground>
        </div>
    }
}

//! Stats card for one coding profile.
//!
//! DESIGN
//! ======
//! Always shows the username alongside the numbers. Missing values render as
//! a dash rather than an empty cell.

#[cfg(test)]
#[path = "user_card_test.rs"]
mod user_card_test;

use leptos::prelude::*;
use payloads::leaderboard::format_total;

use crate::net::types::LeetcodeStats;

pub(crate) fn ranking_label(ranking: Option<u64>) -> String {
    ranking.map_or_else(|| "—".to_owned(), |r| r.to_string())
}

#[component]
pub fn UserCard(stats: LeetcodeStats) -> impl IntoView {
    let LeetcodeStats { username, total_solved, easy, medium, hard, ranking } = stats;
    view! {
        <div class="user-card">
            <h3 class="user-card__name">{username}</h3>
            <div class="user-card__grid">
                <div>
                    <p class="user-card__label">"Total Solved"</p>
                    <p class="user-card__value">{format_total(total_solved)}</p>
                </div>
                <div>
                    <p class="user-card__label">"Ranking"</p>
                    <p class="user-card__value">{ranking_label(ranking)}</p>
                </div>
                <div>
                    <p class="user-card__label">"Easy"</p>
                    <p class="user-card__value user-card__value--easy">{easy}</p>
                </div>
                <div>
                    <p class="user-card__label">"Medium"</p>
                    <p class="user-card__value user-card__value--medium">{medium}</p>
                </div>
                <div>
                    <p class="user-card__label">"Hard"</p>
                    <p class="user-card__value user-card__value--hard">{hard}</p>
                </div>
            </div>
        </div>
    }
}

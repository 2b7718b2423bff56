//! Leaderboard table.
//!
//! Pure render over a sorted copy of the input: highest total first, ties in
//! input order, ranks `1..n`. The caller's list is never reordered.

use leptos::prelude::*;
use payloads::leaderboard::format_total;

use crate::net::types::{LeetcodeStats, rank_by_total_solved};

#[component]
pub fn Leaderboard(users: Vec<LeetcodeStats>) -> impl IntoView {
    let rows = rank_by_total_solved(&users);
    view! {
        <section class="leaderboard">
            <h2 class="leaderboard__title">"Leaderboard"</h2>
            <div class="leaderboard__scroll">
                <table class="leaderboard__table">
                    <thead>
                        <tr>
                            <th>"Rank"</th>
                            <th>"Username"</th>
                            <th>"Total Solved"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td>{row.rank}</td>
                                        <td class="leaderboard__name">{row.username}</td>
                                        <td>{format_total(row.total_solved)}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

//! Follow edges from an account to external coding-profile usernames.
//!
//! Usernames are matched case-insensitively (the judge treats them that way),
//! and stored with the casing the judge reported when the edge was created.

use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Followed usernames in the order they were followed.
pub async fn followed_usernames(pool: &PgPool, user_id: Uuid) -> Result<Vec<String>, sqlx::Error> {
    let rows = sqlx::query(
        "SELECT leetcode_username FROM followed_leetcode WHERE user_id = $1 ORDER BY created_at, id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.iter().map(|r| r.get("leetcode_username")).collect())
}

/// Add a follow edge. Returns `false` when the edge already existed.
pub async fn follow(pool: &PgPool, user_id: Uuid, leetcode_username: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r"INSERT INTO followed_leetcode (user_id, leetcode_username)
          VALUES ($1, $2)
          ON CONFLICT (user_id, lower(leetcode_username)) DO NOTHING",
    )
    .bind(user_id)
    .bind(leetcode_username)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Remove a follow edge. Removing a missing edge is not an error.
pub async fn unfollow(pool: &PgPool, user_id: Uuid, leetcode_username: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM followed_leetcode WHERE user_id = $1 AND lower(leetcode_username) = lower($2)")
        .bind(user_id)
        .bind(leetcode_username)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(all(test, feature = "live-db-tests"))]
#[path = "follows_test.rs"]
mod tests;

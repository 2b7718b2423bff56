//! Cached stats lookups with bounded fan-out.
//!
//! ARCHITECTURE
//! ============
//! Every stats read goes through [`StatsService::lookup`]: a fresh row in
//! `leetcode_cache` short-circuits the upstream call, otherwise the
//! [`StatsSource`] is queried and the result written back.
//!
//! TRADE-OFFS
//! ==========
//! The cache is best-effort. Read or write failures are logged and the lookup
//! proceeds against the source, so a degraded database never hides stats that
//! the judge can still serve.

use std::future::Future;
use std::sync::Arc;

use futures::StreamExt;
use payloads::LeetcodeStats;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use time::{Duration, OffsetDateTime};
use tracing::{debug, warn};

use super::leetcode::StatsSource;

pub struct StatsService {
    pool: PgPool,
    source: Arc<dyn StatsSource>,
    ttl: Duration,
    concurrency: usize,
}

struct CachedStats {
    stats: LeetcodeStats,
    updated_at: OffsetDateTime,
}

impl StatsService {
    #[must_use]
    pub fn new(pool: PgPool, source: Arc<dyn StatsSource>, ttl_hours: i64, concurrency: usize) -> Self {
        Self { pool, source, ttl: Duration::hours(ttl_hours), concurrency: concurrency.max(1) }
    }

    /// Stats for one username, or `None` if unknown or unreachable.
    pub async fn lookup(&self, username: &str) -> Option<LeetcodeStats> {
        let key = cache_key(username);
        match read_cached(&self.pool, &key).await {
            Ok(Some(entry)) if is_fresh(entry.updated_at, OffsetDateTime::now_utc(), self.ttl) => {
                debug!(username = %key, "stats cache hit");
                return Some(entry.stats);
            }
            Ok(_) => {}
            Err(e) => warn!(error = %e, username = %key, "stats cache read failed"),
        }

        match self.source.fetch_stats(username).await {
            Ok(Some(stats)) => {
                if let Err(e) = write_cached(&self.pool, &key, &stats).await {
                    warn!(error = %e, username = %key, "stats cache write failed");
                }
                Some(stats)
            }
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, username = %key, "stats fetch failed");
                None
            }
        }
    }

    /// Stats for many usernames, fetched concurrently. Output keeps input
    /// order and omits usernames that could not be resolved.
    pub async fn lookup_many(&self, usernames: &[String]) -> Vec<LeetcodeStats> {
        collect_in_order(usernames, self.concurrency, |username| async move { self.lookup(&username).await }).await
    }
}

/// Run `fetch` for each username with at most `concurrency` in flight,
/// preserving input order and dropping `None` results.
pub(crate) async fn collect_in_order<F, Fut>(usernames: &[String], concurrency: usize, fetch: F) -> Vec<LeetcodeStats>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Option<LeetcodeStats>>,
{
    futures::stream::iter(usernames.iter().cloned())
        .map(fetch)
        .buffered(concurrency.max(1))
        .filter_map(std::future::ready)
        .collect()
        .await
}

pub(crate) fn cache_key(username: &str) -> String {
    username.trim().to_lowercase()
}

pub(crate) fn is_fresh(updated_at: OffsetDateTime, now: OffsetDateTime, ttl: Duration) -> bool {
    now - updated_at < ttl
}

async fn read_cached(pool: &PgPool, key: &str) -> Result<Option<CachedStats>, sqlx::Error> {
    let row = sqlx::query("SELECT stats, updated_at FROM leetcode_cache WHERE username = $1")
        .bind(key)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|r| {
        let Json(stats): Json<LeetcodeStats> = r.get("stats");
        CachedStats { stats, updated_at: r.get("updated_at") }
    }))
}

async fn write_cached(pool: &PgPool, key: &str, stats: &LeetcodeStats) -> Result<(), sqlx::Error> {
    sqlx::query(
        r"INSERT INTO leetcode_cache (username, stats, updated_at)
          VALUES ($1, $2, now())
          ON CONFLICT (username) DO UPDATE SET stats = EXCLUDED.stats, updated_at = EXCLUDED.updated_at",
    )
    .bind(key)
    .bind(Json(stats))
    .execute(pool)
    .await?;
    Ok(())
}

#[cfg(test)]
#[path = "stats_cache_test.rs"]
mod tests;

//! Server configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` through `dotenvy` and then calls
//! [`ServerConfig::from_env`]. Parsing goes through a lookup closure so tests
//! can feed values without touching the process environment.

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_LEETCODE_GRAPHQL_URL: &str = "https://leetcode.com/graphql";
pub const DEFAULT_STATS_CACHE_TTL_HOURS: i64 = 24;
pub const DEFAULT_STATS_FETCH_CONCURRENCY: usize = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub leetcode_graphql_url: String,
    pub stats_cache_ttl_hours: i64,
    pub stats_fetch_concurrency: usize,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Required:
    /// - `DATABASE_URL`
    ///
    /// Optional:
    /// - `PORT`: default 5000
    /// - `DB_MAX_CONNECTIONS`: default 5
    /// - `LEETCODE_GRAPHQL_URL`: default `https://leetcode.com/graphql`
    /// - `STATS_CACHE_TTL_HOURS`: default 24
    /// - `STATS_FETCH_CONCURRENCY`: default 5
    /// - `CORS_ALLOWED_ORIGINS`: comma-separated, default any
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `DATABASE_URL` is missing or a numeric
    /// variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?;
        let stats_cache_ttl_hours = parse_or(&lookup, "STATS_CACHE_TTL_HOURS", DEFAULT_STATS_CACHE_TTL_HOURS)?;
        let stats_fetch_concurrency =
            parse_or(&lookup, "STATS_FETCH_CONCURRENCY", DEFAULT_STATS_FETCH_CONCURRENCY)?;
        if stats_fetch_concurrency == 0 {
            return Err(ConfigError::Invalid { var: "STATS_FETCH_CONCURRENCY", value: "0".to_owned() });
        }

        let leetcode_graphql_url = lookup("LEETCODE_GRAPHQL_URL")
            .unwrap_or_else(|| DEFAULT_LEETCODE_GRAPHQL_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            database_url,
            port,
            db_max_connections,
            leetcode_graphql_url,
            stats_cache_ttl_hours,
            stats_fetch_concurrency,
            cors_allowed_origins,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

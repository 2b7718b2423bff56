mod config;
mod db;
mod error;
mod routes;
mod services;
mod state;

use std::sync::Arc;
use std::time::Duration;

const SESSION_REAP_INTERVAL: Duration = Duration::from_secs(60 * 60);

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");

    let leetcode = services::leetcode::LeetcodeClient::new(&config.leetcode_graphql_url)
        .expect("leetcode client init failed");
    tracing::info!(url = %config.leetcode_graphql_url, "stats source configured");

    let state = state::AppState::new(pool.clone(), Arc::new(leetcode), &config);

    // Spawn background session cleanup.
    let _reaper = services::session::spawn_session_reaper(pool, SESSION_REAP_INTERVAL);

    let app = routes::leptos_app(state, &config.cors_allowed_origins).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "profile-follow listening");
    axum::serve(listener, app).await.expect("server failed");
}

use std::fmt::Write as _;

use clap::{Args, Parser, Subcommand};
use payloads::leaderboard::{LeaderboardRow, combine_own_and_followed, format_total, rank_by_total_solved};
use payloads::{
    ApiErrorBody, Credentials, FollowingResponse, LeetcodeStats, LeetcodeUsernameRequest, LoginResponse,
    ProfileResponse, SuccessResponse,
};
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing token; run `login` and pass --token or set PF_TOKEN")]
    MissingToken,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    Server { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "profile-follow", about = "Profile Follow API CLI")]
struct Cli {
    #[arg(long, env = "PF_BASE_URL", default_value = "http://127.0.0.1:5000/api")]
    base_url: String,

    #[arg(long, env = "PF_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    token: Option<String>,
}

#[derive(Args, Debug)]
struct CredentialArgs {
    #[arg(long)]
    username: String,
    #[arg(long, env = "PF_PASSWORD")]
    password: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the API is up.
    Ping,
    Register(CredentialArgs),
    /// Log in and print the bearer token.
    Login(CredentialArgs),
    Profile,
    Following,
    /// Link your account to a LeetCode username.
    Link { username: String },
    Follow { username: String },
    Unfollow { username: String },
    /// Print your stats and followed users ranked by total solved.
    Leaderboard,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let ctx = CliContext { base_url: cli.base_url, token: cli.token };

    if let Err(e) = run(&ctx, cli.command).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(ctx: &CliContext, command: Command) -> Result<(), CliError> {
    match command {
        Command::Ping => {
            let body: serde_json::Value = get(ctx, "", false).await?;
            print_json(&body)
        }
        Command::Register(args) => {
            let _: SuccessResponse = post(ctx, "register", &credentials(args), false).await?;
            println!("registered");
            Ok(())
        }
        Command::Login(args) => {
            let resp: LoginResponse = post(ctx, "login", &credentials(args), false).await?;
            println!("{}", resp.access_token);
            Ok(())
        }
        Command::Profile => {
            let profile: ProfileResponse = get(ctx, "profile", true).await?;
            print_json(&profile)
        }
        Command::Following => {
            let following: FollowingResponse = get(ctx, "following", true).await?;
            print_json(&following)
        }
        Command::Link { username } => {
            let stats: LeetcodeStats = post(ctx, "update_leetcode", &username_body(username), true).await?;
            print_json(&stats)
        }
        Command::Follow { username } => {
            let _: SuccessResponse = post(ctx, "follow_leetcode", &username_body(username.clone()), true).await?;
            println!("following {username}");
            Ok(())
        }
        Command::Unfollow { username } => {
            let _: SuccessResponse = post(ctx, "unfollow_leetcode", &username_body(username.clone()), true).await?;
            println!("unfollowed {username}");
            Ok(())
        }
        Command::Leaderboard => {
            let profile: ProfileResponse = get(ctx, "profile", true).await?;
            let users = combine_own_and_followed(profile.leetcode_stats.as_ref(), &profile.followed_stats);
            print!("{}", render_leaderboard(&rank_by_total_solved(&users)));
            Ok(())
        }
    }
}

fn credentials(args: CredentialArgs) -> Credentials {
    Credentials { username: args.username, password: args.password }
}

fn username_body(username: String) -> LeetcodeUsernameRequest {
    LeetcodeUsernameRequest { leetcode_username: username }
}

fn endpoint(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if path.is_empty() { base.to_owned() } else { format!("{base}/{}", path.trim_start_matches('/')) }
}

fn authorize(ctx: &CliContext, request: reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder, CliError> {
    let token = ctx.token.as_deref().filter(|t| !t.is_empty()).ok_or(CliError::MissingToken)?;
    Ok(request.header(AUTHORIZATION, format!("Bearer {token}")))
}

async fn get<T: DeserializeOwned>(ctx: &CliContext, path: &str, authenticated: bool) -> Result<T, CliError> {
    let request = reqwest::Client::new().get(endpoint(&ctx.base_url, path));
    let request = if authenticated { authorize(ctx, request)? } else { request };
    decode(request.send().await?).await
}

async fn post<B: Serialize, T: DeserializeOwned>(
    ctx: &CliContext,
    path: &str,
    body: &B,
    authenticated: bool,
) -> Result<T, CliError> {
    let request = reqwest::Client::new().post(endpoint(&ctx.base_url, path)).json(body);
    let request = if authenticated { authorize(ctx, request)? } else { request };
    decode(request.send().await?).await
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, CliError> {
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        return Err(server_error(status.as_u16(), &text));
    }
    Ok(serde_json::from_str(&text)?)
}

fn server_error(status: u16, body: &str) -> CliError {
    let message = ApiErrorBody::message_from_body(body).unwrap_or_else(|| body.trim().to_owned());
    CliError::Server { status, message }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

fn render_leaderboard(rows: &[LeaderboardRow]) -> String {
    let width = rows.iter().map(|r| r.username.len()).max().unwrap_or(0).max("Username".len());
    let mut out = format!("{:<4}  {:<width$}  {}\n", "Rank", "Username", "Total Solved");
    for row in rows {
        let _ = writeln!(out, "{:<4}  {:<width$}  {}", row.rank, row.username, format_total(row.total_solved));
    }
    out
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

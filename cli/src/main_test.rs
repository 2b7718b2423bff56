use super::*;

fn row(rank: usize, username: &str, total: Option<u32>) -> LeaderboardRow {
    LeaderboardRow { rank, username: username.to_owned(), total_solved: total }
}

#[test]
fn endpoint_joins_paths() {
    assert_eq!(endpoint("http://h:5000/api/", "profile"), "http://h:5000/api/profile");
    assert_eq!(endpoint("http://h:5000/api", ""), "http://h:5000/api");
}

#[test]
fn server_error_prefers_json_message() {
    let err = server_error(401, r#"{"msg":"Token has expired or is invalid"}"#);
    assert_eq!(err.to_string(), "server returned HTTP 401: Token has expired or is invalid");
}

#[test]
fn server_error_falls_back_to_raw_body() {
    let err = server_error(502, " bad gateway ");
    assert_eq!(err.to_string(), "server returned HTTP 502: bad gateway");
}

#[test]
fn authorize_requires_token() {
    let ctx = CliContext { base_url: "http://h".to_owned(), token: None };
    let request = reqwest::Client::new().get("http://h/profile");
    assert!(matches!(authorize(&ctx, request), Err(CliError::MissingToken)));
}

#[test]
fn render_leaderboard_aligns_columns() {
    let out = render_leaderboard(&[row(1, "alice", Some(300)), row(2, "bo", None)]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Rank  Username  Total Solved");
    assert_eq!(lines[1], "1     alice     300");
    assert_eq!(lines[2], "2     bo        —");
}

#[test]
fn cli_parses_follow_subcommand() {
    let cli = Cli::try_parse_from(["profile-follow", "--token", "t", "follow", "alice"]).unwrap();
    assert_eq!(cli.token.as_deref(), Some("t"));
    assert!(matches!(cli.command, Command::Follow { ref username } if username == "alice"));
}

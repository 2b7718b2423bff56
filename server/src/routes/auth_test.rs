use axum::http::HeaderValue;

use super::*;

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

#[test]
fn parse_bearer_extracts_token() {
    let headers = headers_with("Bearer abc123");
    assert_eq!(parse_bearer(&headers), Some("abc123"));
}

#[test]
fn parse_bearer_scheme_is_case_insensitive() {
    let headers = headers_with("bearer abc123");
    assert_eq!(parse_bearer(&headers), Some("abc123"));
}

#[test]
fn parse_bearer_missing_header() {
    assert_eq!(parse_bearer(&HeaderMap::new()), None);
}

#[test]
fn parse_bearer_rejects_other_schemes() {
    assert_eq!(parse_bearer(&headers_with("Basic dXNlcjpwdw==")), None);
}

#[test]
fn parse_bearer_rejects_empty_token() {
    assert_eq!(parse_bearer(&headers_with("Bearer ")), None);
    assert_eq!(parse_bearer(&headers_with("Bearer")), None);
}

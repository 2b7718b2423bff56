use super::*;

async fn render(err: ApiError) -> (StatusCode, serde_json::Value) {
    let resp = err.into_response();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn bad_request_uses_error_field() {
    let (status, body) = render(ApiError::bad_request("No username provided")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "error": "No username provided" }));
}

#[tokio::test]
async fn auth_failures_use_msg_field() {
    let (status, body) = render(ApiError::MissingToken).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["msg"], "Missing Authorization Header");

    let (status, body) = render(ApiError::InvalidToken).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["msg"], "Token has expired or is invalid");

    let (_, body) = render(ApiError::InvalidCredentials).await;
    assert_eq!(body["msg"], "Invalid username or password");
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn internal_errors_hide_details() {
    let (status, body) = render(ApiError::Internal("argon2 exploded".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
}

#[test]
fn account_errors_map_to_api_errors() {
    assert!(matches!(
        ApiError::from(AccountError::MissingCredentials),
        ApiError::BadRequest(ref m) if m == "Username and password are required"
    ));
    assert!(matches!(
        ApiError::from(AccountError::UsernameTaken),
        ApiError::BadRequest(ref m) if m == "Username already exists"
    ));
    assert!(matches!(ApiError::from(AccountError::InvalidCredentials), ApiError::InvalidCredentials));
    assert!(matches!(ApiError::from(AccountError::Hash("x".into())), ApiError::Internal(_)));
}

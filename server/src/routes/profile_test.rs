use super::*;

fn req(name: &str) -> LeetcodeUsernameRequest {
    LeetcodeUsernameRequest { leetcode_username: name.to_owned() }
}

#[test]
fn requested_username_trims() {
    assert_eq!(requested_username(&req("  alice ")).unwrap(), "alice");
}

#[test]
fn requested_username_blank_is_bad_request() {
    for blank in ["", "   "] {
        let err = requested_username(&req(blank)).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == "No username provided"));
    }
}

#[test]
fn null_username_body_is_bad_request() {
    let body: LeetcodeUsernameRequest = serde_json::from_str(r#"{"leetcode_username":null}"#).unwrap();
    let err = requested_username(&body).unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(ref m) if m == "No username provided"));
}

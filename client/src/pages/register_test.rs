use super::*;

#[test]
fn successful_registration_goes_to_login() {
    assert_eq!(finish_register(Ok(SuccessResponse::ok())), AuthOutcome::Navigate("/login"));
}

#[test]
fn duplicate_username_shows_server_message() {
    let err = ApiError::from_status(400, r#"{"error":"Username already exists"}"#);
    assert_eq!(finish_register(Err(err)), AuthOutcome::Error("Username already exists".to_owned()));
}

#[test]
fn unreadable_failure_shows_fallback() {
    let err = ApiError::from_status(500, "");
    assert_eq!(finish_register(Err(err)), AuthOutcome::Error("Registration failed".to_owned()));
}

#[test]
fn unsuccessful_acknowledgement_stays_on_form() {
    let outcome = finish_register(Ok(SuccessResponse { success: false }));
    assert_eq!(outcome, AuthOutcome::Error("Registration failed".to_owned()));
}

use super::*;

#[test]
fn validate_trims_email() {
    assert_eq!(
        validate_credentials("  ada@tracklab.dev ", "s3cret"),
        Ok(Credentials { email: "ada@tracklab.dev".to_owned(), password: "s3cret".to_owned() })
    );
}

#[test]
fn validate_keeps_password_verbatim() {
    let creds = validate_credentials("a@b.c", " spaced pass ").unwrap();
    assert_eq!(creds.password, " spaced pass ");
    assert_eq!(validate_credentials("a@b.c", "   ").unwrap().password, "   ");
}

#[test]
fn validate_requires_email() {
    assert_eq!(validate_credentials("   ", "pw"), Err(MISSING_FIELDS_MESSAGE));
}

#[test]
fn validate_requires_password() {
    assert_eq!(validate_credentials("a@b.c", ""), Err(MISSING_FIELDS_MESSAGE));
}

#[test]
fn rejection_shows_server_message() {
    assert_eq!(auth_error_message(&AuthError::Rejected("Email already registered".to_owned())), "Email already registered");
}

#[test]
fn transport_failures_show_network_error() {
    assert_eq!(auth_error_message(&AuthError::Network("offline".to_owned())), NETWORK_ERROR_MESSAGE);
    assert_eq!(auth_error_message(&AuthError::Malformed("bad json".to_owned())), NETWORK_ERROR_MESSAGE);
    assert_eq!(auth_error_message(&AuthError::Unavailable), NETWORK_ERROR_MESSAGE);
}

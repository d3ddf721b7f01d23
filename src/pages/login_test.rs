use super::*;

#[test]
fn validate_login_input_trims_both_fields() {
    assert_eq!(
        validate_login_input("  bob ", " K "),
        Ok(("bob".to_owned(), "K".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "K"), Err("Enter your username and API key."));
    assert_eq!(validate_login_input("bob", "   "), Err("Enter your username and API key."));
}

use super::*;

#[test]
fn validate_register_input_trims_both_fields() {
    assert_eq!(
        validate_register_input(" b@x.com ", " bob "),
        Ok(("b@x.com".to_owned(), "bob".to_owned()))
    );
}

#[test]
fn validate_register_input_requires_both_fields() {
    assert_eq!(validate_register_input("   ", "bob"), Err("Enter an email and a username."));
    assert_eq!(validate_register_input("b@x.com", ""), Err("Enter an email and a username."));
}

#[test]
fn validate_register_input_requires_an_at_sign() {
    assert_eq!(validate_register_input("bob.example.com", "bob"), Err("Enter a valid email address."));
}

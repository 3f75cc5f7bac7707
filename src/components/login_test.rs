use super::*;

#[test]
fn validate_login_input_trims_username_and_requires_both_fields() {
    assert_eq!(
        validate_login_input("  alice  ", "hunter22"),
        Ok(("alice".to_owned(), "hunter22".to_owned()))
    );
    assert_eq!(
        validate_login_input("", "hunter22"),
        Err("Enter both username and password.")
    );
    assert_eq!(
        validate_login_input("alice", ""),
        Err("Enter both username and password.")
    );
}

#[test]
fn validate_login_input_whitespace_username_is_empty() {
    assert_eq!(
        validate_login_input("   ", "hunter22"),
        Err("Enter both username and password.")
    );
}

use super::*;

#[test]
fn validate_portfolio_input_trims_and_parses() {
    assert_eq!(
        validate_portfolio_input("  Backend Engineer  ", " 12 "),
        Ok(("Backend Engineer".to_owned(), 12))
    );
}

#[test]
fn validate_portfolio_input_requires_role_name() {
    assert_eq!(
        validate_portfolio_input("   ", "5"),
        Err("Enter a job title first.")
    );
}

#[test]
fn validate_portfolio_input_rejects_non_numeric_count() {
    assert_eq!(
        validate_portfolio_input("Backend Engineer", "lots"),
        Err("Jobs count must be a whole number.")
    );
    assert_eq!(
        validate_portfolio_input("Backend Engineer", ""),
        Err("Jobs count must be a whole number.")
    );
    assert_eq!(
        validate_portfolio_input("Backend Engineer", "3.5"),
        Err("Jobs count must be a whole number.")
    );
}

#[test]
fn validate_portfolio_input_rejects_negative_count() {
    assert_eq!(
        validate_portfolio_input("Backend Engineer", "-1"),
        Err("Jobs count cannot be negative.")
    );
}

#[test]
fn validate_portfolio_input_accepts_zero() {
    assert_eq!(
        validate_portfolio_input("Backend Engineer", "0"),
        Ok(("Backend Engineer".to_owned(), 0))
    );
}

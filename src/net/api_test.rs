use super::*;

#[test]
fn signup_request_wraps_credentials_in_user_data_input() {
    let request = build_signup_request("alice", "hunter22");
    assert!(request.query.contains("signup(userData: { username: $username, password: $password })"));
    assert!(request.query.contains("user { id username }"));
    assert_eq!(
        request.variables,
        serde_json::json!({ "username": "alice", "password": "hunter22" })
    );
}

#[test]
fn login_request_wraps_credentials_in_login_data_input() {
    let request = build_login_request("alice", "hunter22");
    assert!(request.query.contains("login(loginData: { username: $username, password: $password })"));
    assert_eq!(
        request.variables,
        serde_json::json!({ "username": "alice", "password": "hunter22" })
    );
}

#[test]
fn logout_request_takes_no_variables() {
    let request = build_logout_request();
    assert!(request.query.contains("logout"));
    assert!(!request.query.contains("user"));
    assert_eq!(request.variables, serde_json::json!({}));
}

#[test]
fn check_auth_request_selects_envelope_and_user() {
    let request = build_check_auth_request();
    assert!(request.query.contains("checkAuth"));
    assert!(request.query.contains("success"));
    assert!(request.query.contains("message"));
    assert!(request.query.contains("user { id username }"));
    assert_eq!(request.variables, serde_json::json!({}));
}

#[test]
fn get_portfolios_request_selects_all_portfolio_fields() {
    let request = build_get_portfolios_request();
    for field in ["getPortfolios", "id", "roleName", "jobsCount", "createdAt"] {
        assert!(request.query.contains(field), "missing {field}");
    }
    assert_eq!(request.variables, serde_json::json!({}));
}

#[test]
fn create_portfolio_request_wraps_fields_in_portfolio_data_input() {
    let request = build_create_portfolio_request("Backend Engineer", 12);
    assert!(
        request
            .query
            .contains("createPortfolio(portfolioData: { roleName: $roleName, jobsCount: $jobsCount })")
    );
    assert_eq!(
        request.variables,
        serde_json::json!({ "roleName": "Backend Engineer", "jobsCount": 12 })
    );
}

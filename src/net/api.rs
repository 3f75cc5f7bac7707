//! The six remote operations the client can issue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Request documents and input object shapes must match the backend schema
//! exactly (`userData`, `loginData`, `portfolioData` wrappers included).
//! Each operation is a thin wrapper: build the request, execute it, and
//! hand back the typed result.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::graphql::{self, GraphQlRequest};
use super::types::{AuthPayload, Portfolio};

const SIGNUP_MUTATION: &str = "\
mutation Signup($username: String!, $password: String!) {
  signup(userData: { username: $username, password: $password }) {
    success
    message
    user { id username }
  }
}";

const LOGIN_MUTATION: &str = "\
mutation Login($username: String!, $password: String!) {
  login(loginData: { username: $username, password: $password }) {
    success
    message
    user { id username }
  }
}";

const LOGOUT_MUTATION: &str = "\
mutation {
  logout {
    success
    message
  }
}";

const CHECK_AUTH_QUERY: &str = "\
query {
  checkAuth {
    success
    message
    user { id username }
  }
}";

const GET_PORTFOLIOS_QUERY: &str = "\
query {
  getPortfolios {
    id
    roleName
    jobsCount
    createdAt
  }
}";

const CREATE_PORTFOLIO_MUTATION: &str = "\
mutation CreatePortfolio($roleName: String!, $jobsCount: Int!) {
  createPortfolio(portfolioData: { roleName: $roleName, jobsCount: $jobsCount }) {
    id
    roleName
    jobsCount
    createdAt
  }
}";

fn build_signup_request(username: &str, password: &str) -> GraphQlRequest {
    GraphQlRequest {
        query: SIGNUP_MUTATION,
        variables: serde_json::json!({ "username": username, "password": password }),
    }
}

fn build_login_request(username: &str, password: &str) -> GraphQlRequest {
    GraphQlRequest {
        query: LOGIN_MUTATION,
        variables: serde_json::json!({ "username": username, "password": password }),
    }
}

fn build_logout_request() -> GraphQlRequest {
    GraphQlRequest {
        query: LOGOUT_MUTATION,
        variables: serde_json::json!({}),
    }
}

fn build_check_auth_request() -> GraphQlRequest {
    GraphQlRequest {
        query: CHECK_AUTH_QUERY,
        variables: serde_json::json!({}),
    }
}

fn build_get_portfolios_request() -> GraphQlRequest {
    GraphQlRequest {
        query: GET_PORTFOLIOS_QUERY,
        variables: serde_json::json!({}),
    }
}

fn build_create_portfolio_request(role_name: &str, jobs_count: i32) -> GraphQlRequest {
    GraphQlRequest {
        query: CREATE_PORTFOLIO_MUTATION,
        variables: serde_json::json!({ "roleName": role_name, "jobsCount": jobs_count }),
    }
}

/// Create a new account via the `signup` mutation.
///
/// # Errors
///
/// Returns a display-ready error string on transport or GraphQL failure.
pub async fn signup(username: &str, password: &str) -> Result<AuthPayload, String> {
    graphql::execute(&build_signup_request(username, password), "signup").await
}

/// Start a session via the `login` mutation.
///
/// # Errors
///
/// Returns a display-ready error string on transport or GraphQL failure.
pub async fn login(username: &str, password: &str) -> Result<AuthPayload, String> {
    graphql::execute(&build_login_request(username, password), "login").await
}

/// End the current session via the `logout` mutation.
///
/// # Errors
///
/// Returns a display-ready error string on transport or GraphQL failure.
pub async fn logout() -> Result<AuthPayload, String> {
    graphql::execute(&build_logout_request(), "logout").await
}

/// Ask the backend who the current session belongs to.
///
/// # Errors
///
/// Returns a display-ready error string on transport or GraphQL failure.
pub async fn check_auth() -> Result<AuthPayload, String> {
    graphql::execute(&build_check_auth_request(), "checkAuth").await
}

/// Fetch the full portfolio list for the current user.
///
/// # Errors
///
/// Returns a display-ready error string on transport or GraphQL failure.
pub async fn fetch_portfolios() -> Result<Vec<Portfolio>, String> {
    graphql::execute(&build_get_portfolios_request(), "getPortfolios").await
}

/// Create a portfolio entry via the `createPortfolio` mutation.
///
/// Callers are expected to refetch the portfolio list on success; the
/// backend does not push updates.
///
/// # Errors
///
/// Returns a display-ready error string on transport or GraphQL failure.
pub async fn create_portfolio(role_name: &str, jobs_count: i32) -> Result<Portfolio, String> {
    graphql::execute(
        &build_create_portfolio_request(role_name, jobs_count),
        "createPortfolio",
    )
    .await
}

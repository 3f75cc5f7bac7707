//! Wire DTOs for the client/backend GraphQL boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend schema field-for-field so serde round-trips
//! stay lossless. Field names are camelCase on the wire and bit-relevant for
//! interop.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A user as returned inside auth envelopes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend-assigned user identifier.
    pub id: i64,
    /// Unique login name.
    pub username: String,
}

/// A portfolio entry as returned by `getPortfolios` and `createPortfolio`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    /// Backend-assigned portfolio identifier.
    pub id: i64,
    /// Job title this portfolio tracks.
    pub role_name: String,
    /// Number of job applications tracked under this role.
    pub jobs_count: i32,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

/// Uniform envelope returned by signup, login, logout, and checkAuth.
///
/// `user` is present on successful signup/login/checkAuth and absent on
/// logout and on any failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthPayload {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable outcome description.
    pub message: String,
    /// The affected user, if any.
    #[serde(default)]
    pub user: Option<User>,
}

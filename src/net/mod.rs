//! Networking modules for the GraphQL client boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `graphql` owns the HTTP transport and response envelope handling, `api`
//! declares the six remote operations, and `types` defines the wire schema.

pub mod api;
pub mod graphql;
pub mod types;

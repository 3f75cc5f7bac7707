//! # portfolio-client
//!
//! Leptos + WASM frontend for the portfolio tracking service.
//!
//! This crate contains the root view, form components, shared auth state,
//! and the GraphQL wire layer. The GraphQL schema itself is owned by the
//! backend service; this client only consumes it over `/graphql`.

pub mod app;
pub mod components;
pub mod net;
pub mod state;

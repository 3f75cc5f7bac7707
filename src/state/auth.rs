//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal` context from the root view. The initial
//! `checkAuth` query and every auth mutation funnel their envelopes through
//! `apply_payload` so identity-dependent rendering stays consistent.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{AuthPayload, User};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Fold an auth envelope into the state.
    ///
    /// A successful envelope carrying a user makes that user current; any
    /// other envelope clears the session (logout returns success without a
    /// user, failures return no user). Loading ends either way.
    pub fn apply_payload(&mut self, payload: &AuthPayload) {
        self.user = if payload.success {
            payload.user.clone()
        } else {
            None
        };
        self.loading = false;
    }
}

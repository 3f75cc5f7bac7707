//! Root application component and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::login::LoginForm;
use crate::components::logout::LogoutPanel;
use crate::components::portfolio::PortfolioPanel;
use crate::components::signup::SignupForm;
use crate::net::api;
use crate::state::auth::AuthState;

/// Header status line derived from the auth state.
fn auth_status_line(state: &AuthState) -> String {
    if state.loading {
        return "Checking session...".to_owned();
    }
    match &state.user {
        Some(user) => format!("Signed in as {}", user.username),
        None => "Not signed in".to_owned(),
    }
}

/// Root application component.
///
/// Owns the portfolio list resource and the initial `checkAuth` query, and
/// provides the auth context consumed by every form.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState {
        user: None,
        loading: true,
    });
    provide_context(auth);

    // Resolve the session once on mount; each auth mutation keeps the state
    // current from then on.
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match api::check_auth().await {
                Ok(payload) => auth.update(|state| state.apply_payload(&payload)),
                Err(e) => {
                    log::warn!("checkAuth failed: {e}");
                    auth.update(|state| {
                        state.user = None;
                        state.loading = false;
                    });
                }
            }
        });
    });

    // Portfolio list resource — fetched on mount, refetched after creation.
    let portfolios = LocalResource::new(|| api::fetch_portfolios());

    view! {
        <Title text="Portfolio Tracker"/>

        <main class="app-layout">
            <header class="app-layout__header">
                <h1>"Portfolio Tracker"</h1>
                <p class="app-layout__status">{move || auth_status_line(&auth.get())}</p>
            </header>
            <LogoutPanel/>
            <SignupForm/>
            <LoginForm/>
            <PortfolioPanel portfolios=portfolios/>
        </main>
    }
}

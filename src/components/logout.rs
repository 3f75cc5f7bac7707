//! Logout panel issuing the `logout` mutation.

use leptos::prelude::*;

use crate::components::button::Button;
use crate::net::api;
use crate::state::auth::AuthState;

/// Single-button panel ending the current session. The logout envelope never
/// carries a user, so applying it clears the auth context.
#[component]
pub fn LogoutPanel() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_logout = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set(String::new());

        leptos::task::spawn_local(async move {
            match api::logout().await {
                Ok(payload) => {
                    auth.update(|state| state.apply_payload(&payload));
                    info.set(payload.message);
                }
                Err(e) => {
                    log::warn!("logout failed: {e}");
                    info.set(format!("Logout failed: {e}"));
                }
            }
            busy.set(false);
        });
    });

    view! {
        <div class="panel">
            <Button on_click=on_logout disabled=busy>"Logout"</Button>
            <Show when=move || !info.get().is_empty()>
                <p class="panel__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}

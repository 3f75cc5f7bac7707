//! Signup form issuing the `signup` mutation.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::components::button::Button;
use crate::components::input::TextInput;
use crate::net::api;
use crate::state::auth::AuthState;

/// Validate signup fields against the backend's account rules before the
/// mutation is issued.
fn validate_signup_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.chars().count() < 3 {
        return Err("Username must be at least 3 characters long.");
    }
    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters long.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Account creation form. A successful signup also starts a session, so the
/// returned envelope is applied to the auth context.
#[component]
pub fn SignupForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value) =
            match validate_signup_input(&username.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Creating account...".to_owned());

        leptos::task::spawn_local(async move {
            match api::signup(&username_value, &password_value).await {
                Ok(payload) => {
                    auth.update(|state| state.apply_payload(&payload));
                    info.set(payload.message);
                }
                Err(e) => {
                    log::warn!("signup failed: {e}");
                    info.set(format!("Signup failed: {e}"));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <form class="panel panel--form" on:submit=on_submit>
            <h2 class="panel__title">"Sign Up"</h2>
            <TextInput value=username placeholder="username"/>
            <TextInput value=password placeholder="password" input_type="password"/>
            <Button button_type="submit" disabled=busy>"Sign Up"</Button>
            <Show when=move || !info.get().is_empty()>
                <p class="panel__message">{move || info.get()}</p>
            </Show>
        </form>
    }
}

//! Login form issuing the `login` mutation.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::button::Button;
use crate::components::input::TextInput;
use crate::net::api;
use crate::state::auth::AuthState;

/// Require both credential fields; the backend decides whether they match.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Existing-account login form. The returned envelope is applied to the auth
/// context so the status line reflects the new session immediately.
#[component]
pub fn LoginForm() -> impl IntoView {
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
            match validate_login_input(&username.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Logging in...".to_owned());

        leptos::task::spawn_local(async move {
            match api::login(&username_value, &password_value).await {
                Ok(payload) => {
                    auth.update(|state| state.apply_payload(&payload));
                    info.set(payload.message);
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    info.set(format!("Login failed: {e}"));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <form class="panel panel--form" on:submit=on_submit>
            <h2 class="panel__title">"Login"</h2>
            <TextInput value=username placeholder="username"/>
            <TextInput value=password placeholder="password" input_type="password"/>
            <Button button_type="submit" disabled=busy>"Login"</Button>
            <Show when=move || !info.get().is_empty()>
                <p class="panel__message">{move || info.get()}</p>
            </Show>
        </form>
    }
}

//! Stateless text input wrapper bound to a string signal.

use leptos::prelude::*;

/// A single-line input whose value lives in the caller's signal.
#[component]
pub fn TextInput(
    value: RwSignal<String>,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <input
            class="ui-input"
            type=input_type
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

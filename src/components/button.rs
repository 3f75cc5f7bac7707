//! Stateless button wrapper.

use leptos::prelude::*;

/// A plain action button.
///
/// Submit buttons inside forms pass `button_type="submit"` and let the form's
/// `on:submit` handler do the work instead of `on_click`.
#[component]
pub fn Button(
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional)] on_click: Option<Callback<()>>,
    #[prop(into, optional)] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class="ui-button"
            type=button_type
            disabled=move || disabled.get()
            on:click=move |_| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

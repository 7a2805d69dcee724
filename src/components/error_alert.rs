//! Error Alert Component
//!
//! Shows an API failure message; prior page state stays on screen.

use leptos::prelude::*;

#[component]
pub fn ErrorAlert(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <div class="error-alert" role="alert">{move || message.get()}</div>
        </Show>
    }
}

//! Field Error Component
//!
//! Renders the validation message for one dotted field path, if any.

use leptos::prelude::*;

use crate::validation::FieldErrors;

#[component]
pub fn FieldError(
    #[prop(into)] errors: Signal<FieldErrors>,
    #[prop(into)] path: String,
) -> impl IntoView {
    view! {
        {move || {
            errors
                .get()
                .message(&path)
                .map(|message| view! { <span class="field-error">{message}</span> })
        }}
    }
}

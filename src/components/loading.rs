//! Loading Indicator Component

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-indicator">"Loading..."</div>
    }
}

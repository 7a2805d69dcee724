//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <span class="nav-title">"Toko Admin"</span>
            <A href="/items">"Items"</A>
            <A href="/orders">"Orders"</A>
        </nav>
    }
}

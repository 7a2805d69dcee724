//! Application Shell
//!
//! Router, navigation and the shared list cache context.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::NavBar;
use crate::pages::{
    ItemCreatePage, ItemDetailPage, ItemEditPage, ItemListPage, OrderCreatePage, OrderDetailPage,
    OrderEditPage, OrderListPage,
};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    provide_context(Store::new(AppState::default()));

    view! {
        <Router>
            <NavBar/>
            <main class="content">
                <Routes fallback=|| {
                    view! {
                        <div class="page">
                            <h1>"Page Not Found"</h1>
                        </div>
                    }
                }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/items"/> }/>
                    <Route path=path!("/items") view=ItemListPage/>
                    <Route path=path!("/items/create") view=ItemCreatePage/>
                    <Route path=path!("/items/:id") view=ItemDetailPage/>
                    <Route path=path!("/items/:id/edit") view=ItemEditPage/>
                    <Route path=path!("/orders") view=OrderListPage/>
                    <Route path=path!("/orders/create") view=OrderCreatePage/>
                    <Route path=path!("/orders/:id") view=OrderDetailPage/>
                    <Route path=path!("/orders/:id/edit") view=OrderEditPage/>
                </Routes>
            </main>
        </Router>
    }
}

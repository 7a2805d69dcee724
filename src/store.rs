//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Caches the
//! last-fetched item/order lists so the list pages render instantly when
//! the operator navigates back from a detail or edit view.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Item, Order, PaginationMeta};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items from the last list fetch
    pub items: Vec<Item>,
    /// Pagination block of the last item list fetch
    pub item_meta: Option<PaginationMeta>,
    /// Orders from the last list fetch
    pub orders: Vec<Order>,
    /// Pagination block of the last order list fetch
    pub order_meta: Option<PaginationMeta>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the cached item list after a fetch
pub fn store_set_items(store: &AppStore, items: Vec<Item>, meta: PaginationMeta) {
    store.items().set(items);
    store.item_meta().set(Some(meta));
}

/// Replace the cached order list after a fetch
pub fn store_set_orders(store: &AppStore, orders: Vec<Order>, meta: PaginationMeta) {
    store.orders().set(orders);
    store.order_meta().set(Some(meta));
}

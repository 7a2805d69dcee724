//! Item List Page
//!
//! Filterable, sortable, paginated item table. Filter inputs only take
//! effect when the operator hits Apply; pagination refetches right away.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::components::{ErrorAlert, LoadingIndicator, PaginationBar};
use crate::models::{FilterMode, ItemFilter, ItemSortField, SortOrder};
use crate::store::{store_set_items, use_app_store, AppStateStoreFields};

use super::format_currency;

#[component]
pub fn ItemListPage() -> impl IntoView {
    let store = use_app_store();

    let (item_name, set_item_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (sort_field, set_sort_field) = signal(ItemSortField::ItemName);
    let (sort_order, set_sort_order) = signal(SortOrder::Asc);
    let (mode, set_mode) = signal(FilterMode::And);
    let (page, set_page) = signal(1u32);
    let (page_size, set_page_size) = signal(10u32);

    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(String::new());
    // bumped by Apply so the fetch effect re-runs even when page stays 1
    let (applied, set_applied) = signal(0u32);

    Effect::new(move |_| {
        let _ = applied.get();
        let filter = ItemFilter {
            item_name: Some(item_name.get_untracked())
                .filter(|name| !name.trim().is_empty())
                .map(|name| name.trim().to_string()),
            price: price.get_untracked().trim().parse().ok(),
            sort_field: Some(sort_field.get_untracked()),
            sort_order: Some(sort_order.get_untracked()),
            mode: Some(mode.get_untracked()),
            page: Some(page.get()),
            page_size: Some(page_size.get_untracked()),
        };
        set_loading.set(true);
        set_error.set(String::new());
        spawn_local(async move {
            web_sys::console::log_1(
                &format!("[ITEMS] fetching page {}", filter.page.unwrap_or(1)).into(),
            );
            match api::item::list_items(&filter).await {
                Ok(result) => store_set_items(&store, result.data, result.meta),
                Err(err) => {
                    web_sys::console::error_1(&format!("[ITEMS] fetch failed: {err}").into());
                    set_error.set(err.to_string());
                }
            }
            set_loading.set(false);
        });
    });

    let apply_filters = move |_| {
        if page.get_untracked() != 1 {
            set_page.set(1);
        } else {
            set_applied.update(|tick| *tick += 1);
        }
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Items"</h1>
                <A href="/items/create">"Create New Item"</A>
            </div>
            <ErrorAlert message=error/>

            <div class="filter-panel">
                <input
                    type="text"
                    placeholder="Item name"
                    prop:value=move || item_name.get()
                    on:input=move |ev| set_item_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Price"
                    prop:value=move || price.get()
                    on:input=move |ev| set_price.set(event_target_value(&ev))
                />
                <select on:change=move |ev| {
                    if let Some(field) = ItemSortField::from_value(&event_target_value(&ev)) {
                        set_sort_field.set(field);
                    }
                }>
                    {move || {
                        let current = sort_field.get();
                        ItemSortField::ALL
                            .iter()
                            .map(|field| {
                                view! {
                                    <option value=field.as_str() selected=*field == current>
                                        {field.label()}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
                <select on:change=move |ev| {
                    if let Some(order) = SortOrder::from_value(&event_target_value(&ev)) {
                        set_sort_order.set(order);
                    }
                }>
                    {move || {
                        let current = sort_order.get();
                        SortOrder::ALL
                            .iter()
                            .map(|order| {
                                view! {
                                    <option value=order.as_str() selected=*order == current>
                                        {order.label()}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
                <select on:change=move |ev| {
                    if let Some(mode) = FilterMode::from_value(&event_target_value(&ev)) {
                        set_mode.set(mode);
                    }
                }>
                    {move || {
                        let current = mode.get();
                        FilterMode::ALL
                            .iter()
                            .map(|mode| {
                                view! {
                                    <option value=mode.as_str() selected=*mode == current>
                                        {mode.label()}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
                <input
                    type="number"
                    min="1"
                    placeholder="Page size"
                    prop:value=move || page_size.get().to_string()
                    on:input=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                            if size >= 1 {
                                set_page_size.set(size);
                            }
                        }
                    }
                />
                <button on:click=apply_filters>"Apply"</button>
            </div>

            <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator/> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th class="num">"Price"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.items().get()
                            key=|item| item.item_id
                            children=move |item| {
                                let id = item.item_id;
                                view! {
                                    <tr>
                                        <td>{id.to_string()}</td>
                                        <td>{item.item_name.clone()}</td>
                                        <td class="num">{format_currency(item.price)}</td>
                                        <td class="actions">
                                            <A href=format!("/items/{id}")>"View"</A>
                                            <A href=format!("/items/{id}/edit")>"Edit"</A>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <PaginationBar
                    meta=Signal::derive(move || store.item_meta().get())
                    on_page=Callback::new(move |next| set_page.set(next))
                />
            </Show>
        </div>
    }
}

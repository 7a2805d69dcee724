//! Item Detail Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::api;
use crate::components::{ErrorAlert, LoadingIndicator};
use crate::models::Item;

use super::{format_currency, format_timestamp};

#[component]
pub fn ItemDetailPage() -> impl IntoView {
    let params = use_params_map();

    let (item, set_item) = signal(None::<Item>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(String::new());

    Effect::new(move |_| {
        let id = params.with(|params| params.get("id").and_then(|raw| raw.parse::<u64>().ok()));
        let Some(id) = id else {
            set_error.set("Invalid item ID".into());
            set_loading.set(false);
            return;
        };
        set_loading.set(true);
        set_error.set(String::new());
        spawn_local(async move {
            match api::item::get_item(id).await {
                Ok(found) => set_item.set(Some(found)),
                Err(err) => {
                    web_sys::console::error_1(&format!("[ITEMS] fetch failed: {err}").into());
                    set_error.set(err.to_string());
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Item Detail"</h1>
                <A href="/items">"Back to List"</A>
            </div>
            <ErrorAlert message=error/>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator/> }>
                {move || {
                    item.get()
                        .map(|item| {
                            let id = item.item_id;
                            view! {
                                <div class="detail-card">
                                    <dl>
                                        <dt>"Item ID"</dt>
                                        <dd>{id.to_string()}</dd>
                                        <dt>"Name"</dt>
                                        <dd>{item.item_name.clone()}</dd>
                                        <dt>"Price"</dt>
                                        <dd>{format_currency(item.price)}</dd>
                                        <dt>"Created"</dt>
                                        <dd>{format_timestamp(&item.created_at)}</dd>
                                        <dt>"Updated"</dt>
                                        <dd>{format_timestamp(&item.updated_at)}</dd>
                                    </dl>
                                    <A href=format!("/items/{id}/edit")>"Edit Item"</A>
                                </div>
                            }
                        })
                }}
            </Show>
        </div>
    }
}

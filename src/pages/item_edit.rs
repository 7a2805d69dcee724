//! Item Edit Page
//!
//! Loads the current record, pre-fills the form, PATCHes on submit.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api;
use crate::components::{ErrorAlert, FieldError, LoadingIndicator};
use crate::validation::{validate_item_update, FieldErrors, ItemFormData};

#[component]
pub fn ItemEditPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let nav_cancel = navigate.clone();

    let (item_name, set_item_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (loading, set_loading) = signal(true);
    let (errors, set_errors) = signal(FieldErrors::default());
    let (api_error, set_api_error) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        let id = params.with(|params| params.get("id").and_then(|raw| raw.parse::<u64>().ok()));
        let Some(id) = id else {
            set_api_error.set("Invalid item ID".into());
            set_loading.set(false);
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::item::get_item(id).await {
                Ok(item) => {
                    set_item_name.set(item.item_name);
                    set_price.set(item.price.to_string());
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[ITEMS] fetch failed: {err}").into());
                    set_api_error.set(err.to_string());
                }
            }
            set_loading.set(false);
        });
    });

    let on_cancel = Callback::new(move |_: ()| nav_cancel("/items", Default::default()));

    let on_submit = Callback::new(move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let id = params
            .with_untracked(|params| params.get("id").and_then(|raw| raw.parse::<u64>().ok()));
        let Some(id) = id else {
            return;
        };
        set_errors.set(FieldErrors::default());
        set_api_error.set(String::new());

        let form = ItemFormData {
            item_name: item_name.get_untracked(),
            price: price.get_untracked(),
        };
        let request = match validate_item_update(&form) {
            Ok(request) => request,
            Err(failed) => {
                set_errors.set(failed);
                return;
            }
        };

        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::item::update_item(id, &request).await {
                Ok(updated) => {
                    web_sys::console::log_1(
                        &format!("[ITEMS] updated item {}", updated.item_id).into(),
                    );
                    navigate(&format!("/items/{}", updated.item_id), Default::default());
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[ITEMS] update failed: {err}").into());
                    set_api_error.set(err.to_string());
                    set_submitting.set(false);
                }
            }
        });
    });

    view! {
        <div class="page">
            <h1>"Edit Item"</h1>
            <ErrorAlert message=api_error/>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator/> }>
                <form class="item-form" on:submit=move |ev| on_submit.run(ev)>
                    <div class="form-field">
                        <label>"Item Name"</label>
                        <input
                            type="text"
                            prop:value=move || item_name.get()
                            on:input=move |ev| set_item_name.set(event_target_value(&ev))
                        />
                        <FieldError errors=errors path="itemName"/>
                    </div>
                    <div class="form-field">
                        <label>"Price"</label>
                        <input
                            type="text"
                            prop:value=move || price.get()
                            on:input=move |ev| set_price.set(event_target_value(&ev))
                        />
                        <FieldError errors=errors path="price"/>
                    </div>
                    <div class="form-actions">
                        <button type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Saving..." } else { "Update Item" }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

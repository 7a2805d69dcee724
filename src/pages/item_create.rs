//! Item Create Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::{ErrorAlert, FieldError};
use crate::validation::{validate_item_create, FieldErrors, ItemFormData};

#[component]
pub fn ItemCreatePage() -> impl IntoView {
    let navigate = use_navigate();
    let nav_cancel = navigate.clone();

    let (item_name, set_item_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::default());
    let (api_error, set_api_error) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_errors.set(FieldErrors::default());
        set_api_error.set(String::new());

        let form = ItemFormData {
            item_name: item_name.get_untracked(),
            price: price.get_untracked(),
        };
        let request = match validate_item_create(&form) {
            Ok(request) => request,
            Err(failed) => {
                set_errors.set(failed);
                return;
            }
        };

        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::item::create_item(&request).await {
                Ok(created) => {
                    web_sys::console::log_1(
                        &format!("[ITEMS] created item {}", created.item_id).into(),
                    );
                    navigate(&format!("/items/{}", created.item_id), Default::default());
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[ITEMS] create failed: {err}").into());
                    set_api_error.set(err.to_string());
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="page">
            <h1>"Create New Item"</h1>
            <ErrorAlert message=api_error/>
            <form class="item-form" on:submit=on_submit>
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
                    <button type="button" on:click=move |_| nav_cancel("/items", Default::default())>
                        "Cancel"
                    </button>
                    <button type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Saving..." } else { "Create Item" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

//! Order Edit Page
//!
//! Loads the order, pre-fills the shared form, PATCHes on submit. The
//! response only carries buyer/recipient ids, so the person names have
//! to be re-entered when the operator wants to change them.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api;
use crate::components::{LoadingIndicator, OrderForm};
use crate::validation::{validate_order_update, FieldErrors, OrderFormData};

#[component]
pub fn OrderEditPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let nav_cancel = navigate.clone();

    let form = RwSignal::new(OrderFormData::default());
    let (loading, set_loading) = signal(true);
    let (errors, set_errors) = signal(FieldErrors::default());
    let (api_error, set_api_error) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        let id = params.with(|params| params.get("id").and_then(|raw| raw.parse::<u64>().ok()));
        let Some(id) = id else {
            set_api_error.set("Invalid order ID".into());
            set_loading.set(false);
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::order::get_order(id).await {
                Ok(order) => form.set(OrderFormData::from_order(&order)),
                Err(err) => {
                    web_sys::console::error_1(&format!("[ORDERS] fetch failed: {err}").into());
                    set_api_error.set(err.to_string());
                }
            }
            set_loading.set(false);
        });
    });

    let on_submit = Callback::new(move |_: ()| {
        let id = params
            .with_untracked(|params| params.get("id").and_then(|raw| raw.parse::<u64>().ok()));
        let Some(id) = id else {
            return;
        };
        set_errors.set(FieldErrors::default());
        set_api_error.set(String::new());

        let request = match form.with_untracked(validate_order_update) {
            Ok(request) => request,
            Err(failed) => {
                set_errors.set(failed);
                return;
            }
        };

        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::order::update_order(id, &request).await {
                Ok(updated) => {
                    web_sys::console::log_1(
                        &format!("[ORDERS] updated order {}", updated.order_id).into(),
                    );
                    navigate(&format!("/orders/{}", updated.order_id), Default::default());
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[ORDERS] update failed: {err}").into());
                    set_api_error.set(err.to_string());
                    set_submitting.set(false);
                }
            }
        });
    });

    let on_cancel = Callback::new(move |_: ()| nav_cancel("/orders", Default::default()));

    view! {
        <div class="page">
            <h1>"Edit Order"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator/> }>
                <OrderForm
                    form=form
                    errors=errors
                    api_error=api_error
                    submitting=submitting
                    submit_label="Update Order"
                    on_submit=on_submit
                    on_cancel=on_cancel
                />
            </Show>
        </div>
    }
}

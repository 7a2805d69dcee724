//! Order Create Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::OrderForm;
use crate::validation::{validate_order_create, FieldErrors, OrderFormData};

#[component]
pub fn OrderCreatePage() -> impl IntoView {
    let navigate = use_navigate();
    let nav_submit = navigate.clone();

    let form = RwSignal::new(OrderFormData::default());
    let (errors, set_errors) = signal(FieldErrors::default());
    let (api_error, set_api_error) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = Callback::new(move |_: ()| {
        set_errors.set(FieldErrors::default());
        set_api_error.set(String::new());

        let request = match form.with_untracked(validate_order_create) {
            Ok(request) => request,
            Err(failed) => {
                set_errors.set(failed);
                return;
            }
        };

        set_submitting.set(true);
        let navigate = nav_submit.clone();
        spawn_local(async move {
            match api::order::create_order(&request).await {
                Ok(created) => {
                    web_sys::console::log_1(
                        &format!("[ORDERS] created order {}", created.order_id).into(),
                    );
                    navigate(&format!("/orders/{}", created.order_id), Default::default());
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[ORDERS] create failed: {err}").into());
                    set_api_error.set(err.to_string());
                    set_submitting.set(false);
                }
            }
        });
    });

    let on_cancel = Callback::new(move |_: ()| navigate("/orders", Default::default()));

    view! {
        <div class="page">
            <h1>"Create New Order"</h1>
            <OrderForm
                form=form
                errors=errors
                api_error=api_error
                submitting=submitting
                submit_label="Create Order"
                on_submit=on_submit
                on_cancel=on_cancel
            />
        </div>
    }
}

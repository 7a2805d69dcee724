//! Order Form Component
//!
//! Shared by the order create and edit pages. The page owns the form
//! signal and the submit action; this component only renders the fields
//! and maps validation errors onto them.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlTextAreaElement;

use crate::models::{OrderStatus, Payment, PickupDelivery};
use crate::validation::{FieldErrors, OrderFormData};

use super::{ErrorAlert, FieldError, OrderItemsEditor, PersonFields, PersonRole};

#[component]
pub fn OrderForm(
    form: RwSignal<OrderFormData>,
    #[prop(into)] errors: Signal<FieldErrors>,
    #[prop(into)] api_error: Signal<String>,
    #[prop(into)] submitting: Signal<bool>,
    #[prop(into)] submit_label: String,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            class="order-form"
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <ErrorAlert message=api_error/>

            <section class="form-section">
                <h2>"Order Info"</h2>
                <div class="form-field">
                    <label>"PO Number"</label>
                    <input
                        type="text"
                        prop:value=move || form.with(|form| form.po.clone())
                        on:input=move |ev| {
                            form.update(|form| form.po = event_target_value(&ev));
                        }
                    />
                    <FieldError errors=errors path="po"/>
                </div>
                <div class="form-row">
                    <div class="form-field">
                        <label>"Order Date"</label>
                        <input
                            type="date"
                            prop:value=move || form.with(|form| form.order_date.clone())
                            on:input=move |ev| {
                                form.update(|form| form.order_date = event_target_value(&ev));
                            }
                        />
                        <FieldError errors=errors path="orderDate"/>
                    </div>
                    <div class="form-field">
                        <label>"Delivery Date"</label>
                        <input
                            type="date"
                            prop:value=move || form.with(|form| form.delivery_date.clone())
                            on:input=move |ev| {
                                form.update(|form| form.delivery_date = event_target_value(&ev));
                            }
                        />
                        <FieldError errors=errors path="deliveryDate"/>
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-field">
                        <label>"Pickup / Delivery"</label>
                        <select on:change=move |ev| {
                            if let Some(method) = PickupDelivery::from_value(
                                &event_target_value(&ev),
                            ) {
                                form.update(|form| form.pickup_delivery = method);
                            }
                        }>
                            {move || {
                                let current = form.with(|form| form.pickup_delivery);
                                PickupDelivery::ALL
                                    .iter()
                                    .map(|method| {
                                        view! {
                                            <option
                                                value=method.as_str()
                                                selected=*method == current
                                            >
                                                {method.as_str()}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>
                    <div class="form-field">
                        <label>"Shipping Cost"</label>
                        <input
                            type="text"
                            prop:value=move || form.with(|form| form.shipping_cost.clone())
                            on:input=move |ev| {
                                form.update(|form| form.shipping_cost = event_target_value(&ev));
                            }
                        />
                        <FieldError errors=errors path="shippingCost"/>
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-field">
                        <label>"Payment"</label>
                        <select on:change=move |ev| {
                            if let Some(payment) = Payment::from_value(&event_target_value(&ev)) {
                                form.update(|form| form.payment = payment);
                            }
                        }>
                            {move || {
                                let current = form.with(|form| form.payment);
                                Payment::ALL
                                    .iter()
                                    .map(|payment| {
                                        view! {
                                            <option
                                                value=payment.as_str()
                                                selected=*payment == current
                                            >
                                                {payment.as_str()}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>
                    <div class="form-field">
                        <label>"Order Status"</label>
                        <select on:change=move |ev| {
                            if let Some(status) = OrderStatus::from_value(
                                &event_target_value(&ev),
                            ) {
                                form.update(|form| form.order_status = status);
                            }
                        }>
                            {move || {
                                let current = form.with(|form| form.order_status);
                                OrderStatus::ALL
                                    .iter()
                                    .map(|status| {
                                        view! {
                                            <option
                                                value=status.as_str()
                                                selected=*status == current
                                            >
                                                {status.as_str()}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>
                </div>
                <div class="form-field">
                    <label>"Note (optional)"</label>
                    <textarea
                        prop:value=move || form.with(|form| form.note.clone())
                        on:input=move |ev| {
                            if let Some(area) = ev
                                .target()
                                .and_then(|target| target.dyn_into::<HtmlTextAreaElement>().ok())
                            {
                                form.update(|form| form.note = area.value());
                            }
                        }
                    ></textarea>
                    <FieldError errors=errors path="note"/>
                </div>
            </section>

            <PersonFields form=form errors=errors role=PersonRole::Buyer/>
            <PersonFields form=form errors=errors role=PersonRole::Recipient/>
            <OrderItemsEditor form=form errors=errors/>

            <div class="form-actions">
                <button type="button" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button type="submit" disabled=move || submitting.get()>
                    {move || {
                        if submitting.get() { "Saving...".to_string() } else { submit_label.clone() }
                    }}
                </button>
            </div>
        </form>
    }
}

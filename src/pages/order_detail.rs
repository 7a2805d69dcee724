//! Order Detail Page
//!
//! Full order record with its line items and the server-computed totals.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::api;
use crate::components::{ErrorAlert, LoadingIndicator};
use crate::models::Order;

use super::{format_currency, format_date, format_timestamp};

#[component]
pub fn OrderDetailPage() -> impl IntoView {
    let params = use_params_map();

    let (order, set_order) = signal(None::<Order>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(String::new());

    Effect::new(move |_| {
        let id = params.with(|params| params.get("id").and_then(|raw| raw.parse::<u64>().ok()));
        let Some(id) = id else {
            set_error.set("Invalid order ID".into());
            set_loading.set(false);
            return;
        };
        set_loading.set(true);
        set_error.set(String::new());
        spawn_local(async move {
            match api::order::get_order(id).await {
                Ok(found) => set_order.set(Some(found)),
                Err(err) => {
                    web_sys::console::error_1(&format!("[ORDERS] fetch failed: {err}").into());
                    set_error.set(err.to_string());
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Order Detail"</h1>
                <A href="/orders">"Back to List"</A>
            </div>
            <ErrorAlert message=error/>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator/> }>
                {move || order.get().map(|order| view! { <OrderCard order=order/> })}
            </Show>
        </div>
    }
}

#[component]
fn OrderCard(order: Order) -> impl IntoView {
    let id = order.order_id;
    view! {
        <div class="detail-card">
            <dl>
                <dt>"Order ID"</dt>
                <dd>{id.to_string()}</dd>
                <dt>"PO Number"</dt>
                <dd>{order.po.clone()}</dd>
                <dt>"Buyer ID"</dt>
                <dd>{order.buyer_id.to_string()}</dd>
                <dt>"Recipient ID"</dt>
                <dd>{order.recipient_id.to_string()}</dd>
                <dt>"Order Date"</dt>
                <dd>{format_date(&order.order_date)}</dd>
                <dt>"Delivery Date"</dt>
                <dd>{format_date(&order.delivery_date)}</dd>
                <dt>"Pickup / Delivery"</dt>
                <dd>{order.pickup_delivery.as_str()}</dd>
                <dt>"Payment"</dt>
                <dd>{order.payment.as_str()}</dd>
                <dt>"Status"</dt>
                <dd>{order.order_status.as_str()}</dd>
                <dt>"Note"</dt>
                <dd>{order.note.clone().unwrap_or_else(|| "-".into())}</dd>
                <dt>"Created"</dt>
                <dd>{format_timestamp(&order.created_at)}</dd>
                <dt>"Updated"</dt>
                <dd>{format_timestamp(&order.updated_at)}</dd>
            </dl>

            <h2>"Items"</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Item ID"</th>
                        <th>"Name"</th>
                        <th class="num">"Price"</th>
                        <th class="num">"Quantity"</th>
                        <th class="num">"Subtotal"</th>
                    </tr>
                </thead>
                <tbody>
                    {order
                        .order_items
                        .iter()
                        .map(|item| {
                            let subtotal = item.item_price * i64::from(item.quantity);
                            view! {
                                <tr>
                                    <td>{item.item_id.to_string()}</td>
                                    <td>{item.item_name.clone()}</td>
                                    <td class="num">{format_currency(item.item_price)}</td>
                                    <td class="num">{item.quantity.to_string()}</td>
                                    <td class="num">{format_currency(subtotal)}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>

            <dl class="totals">
                <dt>"Total Purchase"</dt>
                <dd>{format_currency(order.total_purchase)}</dd>
                <dt>"Shipping Cost"</dt>
                <dd>{format_currency(order.shipping_cost)}</dd>
                <dt>"Grand Total"</dt>
                <dd>{format_currency(order.grand_total)}</dd>
            </dl>

            <A href=format!("/orders/{id}/edit")>"Edit Order"</A>
        </div>
    }
}

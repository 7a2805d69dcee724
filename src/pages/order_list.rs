//! Order List Page
//!
//! Defaults to newest orders first. The status and payment filters use
//! an "All" option that simply leaves the parameter off the query.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::components::{ErrorAlert, LoadingIndicator, PaginationBar};
use crate::models::{FilterMode, OrderFilter, OrderSortField, OrderStatus, Payment, SortOrder};
use crate::store::{store_set_orders, use_app_store, AppStateStoreFields};

use super::{format_currency, format_date};

#[component]
pub fn OrderListPage() -> impl IntoView {
    let store = use_app_store();

    let (po, set_po) = signal(String::new());
    let (buyer_id, set_buyer_id) = signal(String::new());
    let (recipient_id, set_recipient_id) = signal(String::new());
    let (status, set_status) = signal(None::<OrderStatus>);
    let (payment, set_payment) = signal(None::<Payment>);
    let (sort_field, set_sort_field) = signal(OrderSortField::OrderDate);
    let (sort_order, set_sort_order) = signal(SortOrder::Desc);
    let (mode, set_mode) = signal(FilterMode::And);
    let (page, set_page) = signal(1u32);
    let (page_size, set_page_size) = signal(10u32);

    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(String::new());
    let (applied, set_applied) = signal(0u32);

    Effect::new(move |_| {
        let _ = applied.get();
        let filter = OrderFilter {
            po: Some(po.get_untracked())
                .filter(|po| !po.trim().is_empty())
                .map(|po| po.trim().to_string()),
            buyer_id: buyer_id.get_untracked().trim().parse().ok(),
            recipient_id: recipient_id.get_untracked().trim().parse().ok(),
            order_status: status.get_untracked(),
            payment: payment.get_untracked(),
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
                &format!("[ORDERS] fetching page {}", filter.page.unwrap_or(1)).into(),
            );
            match api::order::list_orders(&filter).await {
                Ok(result) => store_set_orders(&store, result.data, result.meta),
                Err(err) => {
                    web_sys::console::error_1(&format!("[ORDERS] fetch failed: {err}").into());
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
                <h1>"Orders"</h1>
                <A href="/orders/create">"Create New Order"</A>
            </div>
            <ErrorAlert message=error/>

            <div class="filter-panel">
                <input
                    type="text"
                    placeholder="PO number"
                    prop:value=move || po.get()
                    on:input=move |ev| set_po.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Buyer ID"
                    prop:value=move || buyer_id.get()
                    on:input=move |ev| set_buyer_id.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Recipient ID"
                    prop:value=move || recipient_id.get()
                    on:input=move |ev| set_recipient_id.set(event_target_value(&ev))
                />
                <select on:change=move |ev| {
                    set_status.set(OrderStatus::from_value(&event_target_value(&ev)));
                }>
                    {move || {
                        let current = status.get();
                        let mut options = vec![
                            view! {
                                <option value="" selected=current.is_none()>
                                    "All statuses"
                                </option>
                            }
                                .into_any(),
                        ];
                        options
                            .extend(
                                OrderStatus::ALL
                                    .iter()
                                    .map(|status| {
                                        view! {
                                            <option
                                                value=status.as_str()
                                                selected=current == Some(*status)
                                            >
                                                {status.as_str()}
                                            </option>
                                        }
                                            .into_any()
                                    }),
                            );
                        options
                    }}
                </select>
                <select on:change=move |ev| {
                    set_payment.set(Payment::from_value(&event_target_value(&ev)));
                }>
                    {move || {
                        let current = payment.get();
                        let mut options = vec![
                            view! {
                                <option value="" selected=current.is_none()>
                                    "All payments"
                                </option>
                            }
                                .into_any(),
                        ];
                        options
                            .extend(
                                Payment::ALL
                                    .iter()
                                    .map(|payment| {
                                        view! {
                                            <option
                                                value=payment.as_str()
                                                selected=current == Some(*payment)
                                            >
                                                {payment.as_str()}
                                            </option>
                                        }
                                            .into_any()
                                    }),
                            );
                        options
                    }}
                </select>
                <select on:change=move |ev| {
                    if let Some(field) = OrderSortField::from_value(&event_target_value(&ev)) {
                        set_sort_field.set(field);
                    }
                }>
                    {move || {
                        let current = sort_field.get();
                        OrderSortField::ALL
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
                            <th>"PO"</th>
                            <th>"Buyer"</th>
                            <th>"Recipient"</th>
                            <th>"Order Date"</th>
                            <th>"Delivery Date"</th>
                            <th class="num">"Grand Total"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.orders().get()
                            key=|order| order.order_id
                            children=move |order| {
                                let id = order.order_id;
                                view! {
                                    <tr>
                                        <td>{id.to_string()}</td>
                                        <td>{order.po.clone()}</td>
                                        <td>{order.buyer_id.to_string()}</td>
                                        <td>{order.recipient_id.to_string()}</td>
                                        <td>{format_date(&order.order_date)}</td>
                                        <td>{format_date(&order.delivery_date)}</td>
                                        <td class="num">{format_currency(order.grand_total)}</td>
                                        <td>{order.order_status.as_str()}</td>
                                        <td class="actions">
                                            <A href=format!("/orders/{id}")>"View"</A>
                                            <A href=format!("/orders/{id}/edit")>"Edit"</A>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <PaginationBar
                    meta=Signal::derive(move || store.order_meta().get())
                    on_page=Callback::new(move |next| set_page.set(next))
                />
            </Show>
        </div>
    }
}

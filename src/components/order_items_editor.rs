//! Order Items Editor Component
//!
//! Dynamic line-item rows for the order form. The form always keeps at
//! least one row; the remove button disappears when only one is left.

use leptos::prelude::*;

use crate::validation::{FieldErrors, OrderFormData, OrderItemFormData};

use super::FieldError;

#[component]
pub fn OrderItemsEditor(
    form: RwSignal<OrderFormData>,
    #[prop(into)] errors: Signal<FieldErrors>,
) -> impl IntoView {
    let add_row = move |_| form.update(|form| form.items.push(OrderItemFormData::default()));

    view! {
        <section class="form-section">
            <div class="section-header">
                <h2>"Order Items"</h2>
                <button type="button" on:click=add_row>
                    "Add Item"
                </button>
            </div>
            <FieldError errors=errors path="items"/>
            {move || {
                let count = form.with(|form| form.items.len());
                (0..count)
                    .map(|index| {
                        view! { <ItemRow form=form errors=errors index=index count=count/> }
                    })
                    .collect_view()
            }}
        </section>
    }
}

#[component]
fn ItemRow(
    form: RwSignal<OrderFormData>,
    errors: Signal<FieldErrors>,
    index: usize,
    count: usize,
) -> impl IntoView {
    // rows read defensively: a removal re-renders the list, but a stale
    // index must never panic in between
    let field = move |read: fn(&OrderItemFormData) -> String| {
        form.with(|form| form.items.get(index).map(read).unwrap_or_default())
    };
    let edit = move |apply: &dyn Fn(&mut OrderItemFormData)| {
        form.update(|form| {
            if let Some(row) = form.items.get_mut(index) {
                apply(row);
            }
        });
    };
    let remove_row = move |_| {
        form.update(|form| {
            if form.items.len() > 1 && index < form.items.len() {
                form.items.remove(index);
            }
        });
    };

    view! {
        <div class="item-row">
            <div class="form-field">
                <label>"Item ID"</label>
                <input
                    type="text"
                    prop:value=move || field(|row| row.item_id.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit(&|row| row.item_id = value.clone());
                    }
                />
                <FieldError errors=errors path=format!("items.{index}.itemId")/>
            </div>
            <div class="form-field">
                <label>"Quantity"</label>
                <input
                    type="text"
                    prop:value=move || field(|row| row.quantity.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit(&|row| row.quantity = value.clone());
                    }
                />
                <FieldError errors=errors path=format!("items.{index}.quantity")/>
            </div>
            <div class="form-field">
                <label>"Item Name (optional)"</label>
                <input
                    type="text"
                    prop:value=move || field(|row| row.item_name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit(&|row| row.item_name = value.clone());
                    }
                />
                <FieldError errors=errors path=format!("items.{index}.itemName")/>
            </div>
            <div class="form-field">
                <label>"Item Price (optional)"</label>
                <input
                    type="text"
                    prop:value=move || field(|row| row.item_price.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit(&|row| row.item_price = value.clone());
                    }
                />
                <FieldError errors=errors path=format!("items.{index}.itemPrice")/>
            </div>
            <Show when=move || { count > 1 }>
                <button type="button" class="remove-btn" on:click=remove_row>
                    "Remove"
                </button>
            </Show>
        </div>
    }
}

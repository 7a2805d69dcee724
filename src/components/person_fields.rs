//! Person Sub-form Component
//!
//! One buyer or recipient block inside the order form: name plus the
//! optional phone and address sub-records with their preferred flags.

use leptos::prelude::*;

use crate::validation::{FieldErrors, OrderFormData, PersonFormData};

use super::FieldError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonRole {
    Buyer,
    Recipient,
}

impl PersonRole {
    pub fn title(self) -> &'static str {
        match self {
            PersonRole::Buyer => "Buyer",
            PersonRole::Recipient => "Recipient",
        }
    }

    /// Prefix used in dotted validation paths
    pub fn prefix(self) -> &'static str {
        match self {
            PersonRole::Buyer => "buyer",
            PersonRole::Recipient => "recipient",
        }
    }

    fn person(self, form: &OrderFormData) -> &PersonFormData {
        match self {
            PersonRole::Buyer => &form.buyer,
            PersonRole::Recipient => &form.recipient,
        }
    }

    fn person_mut(self, form: &mut OrderFormData) -> &mut PersonFormData {
        match self {
            PersonRole::Buyer => &mut form.buyer,
            PersonRole::Recipient => &mut form.recipient,
        }
    }
}

#[component]
pub fn PersonFields(
    form: RwSignal<OrderFormData>,
    #[prop(into)] errors: Signal<FieldErrors>,
    role: PersonRole,
) -> impl IntoView {
    let edit = move |apply: &dyn Fn(&mut PersonFormData)| {
        form.update(|form| apply(role.person_mut(form)));
    };

    view! {
        <section class="form-section">
            <h2>{role.title()}</h2>
            <div class="form-field">
                <label>{format!("{} Name", role.title())}</label>
                <input
                    type="text"
                    prop:value=move || form.with(|form| role.person(form).person_name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit(&|person| person.person_name = value.clone());
                    }
                />
                <FieldError errors=errors path=format!("{}.personName", role.prefix())/>
            </div>
            <div class="form-field">
                <label>"Phone Number (optional)"</label>
                <div class="form-row">
                    <input
                        type="text"
                        prop:value=move || form.with(|form| role.person(form).phone_number.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit(&|person| person.phone_number = value.clone());
                        }
                    />
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|form| role.person(form).phone_preferred)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                edit(&|person| person.phone_preferred = checked);
                            }
                        />
                        "Preferred"
                    </label>
                </div>
                <FieldError errors=errors path=format!("{}.phone.phoneNumber", role.prefix())/>
            </div>
            <div class="form-field">
                <label>"Address (optional)"</label>
                <div class="form-row">
                    <input
                        type="text"
                        prop:value=move || form.with(|form| role.person(form).address.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit(&|person| person.address = value.clone());
                        }
                    />
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || {
                                form.with(|form| role.person(form).address_preferred)
                            }
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                edit(&|person| person.address_preferred = checked);
                            }
                        />
                        "Preferred"
                    </label>
                </div>
                <FieldError errors=errors path=format!("{}.address.address", role.prefix())/>
            </div>
        </section>
    }
}

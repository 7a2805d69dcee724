//! UI Components
//!
//! Reusable Leptos components shared across the pages.

mod error_alert;
mod field_error;
mod loading;
mod nav_bar;
mod order_form;
mod order_items_editor;
mod pagination_bar;
mod person_fields;

pub use error_alert::ErrorAlert;
pub use field_error::FieldError;
pub use loading::LoadingIndicator;
pub use nav_bar::NavBar;
pub use order_form::OrderForm;
pub use order_items_editor::OrderItemsEditor;
pub use pagination_bar::PaginationBar;
pub use person_fields::{PersonFields, PersonRole};

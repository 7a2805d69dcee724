//! Pages
//!
//! One component per route, plus the small display formatters the
//! tables and detail views share.

mod item_create;
mod item_detail;
mod item_edit;
mod item_list;
mod order_create;
mod order_detail;
mod order_edit;
mod order_list;

pub use item_create::ItemCreatePage;
pub use item_detail::ItemDetailPage;
pub use item_edit::ItemEditPage;
pub use item_list::ItemListPage;
pub use order_create::OrderCreatePage;
pub use order_detail::OrderDetailPage;
pub use order_edit::OrderEditPage;
pub use order_list::OrderListPage;

use chrono::DateTime;

/// RFC3339 timestamp as "YYYY-MM-DD HH:MM", or the raw string when the
/// backend sent something unparseable.
pub(crate) fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|stamp| stamp.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Date part only, for the order/delivery date columns.
pub(crate) fn format_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|stamp| stamp.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.split('T').next().unwrap_or(raw).to_string())
}

/// Currency amount with thousands separators
pub(crate) fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (offset, digit) in digits.chars().enumerate() {
        if offset > 0 && (digits.len() - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if amount < 0 {
        format!("-Rp {grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

//! Data Transfer Models
//!
//! Shapes exchanged with the REST backend as camelCase JSON.

mod common;
mod item;
mod order;

pub use common::{FilterMode, Page, PaginationMeta, SortOrder};
pub use item::{Item, ItemCreateRequest, ItemFilter, ItemSortField, ItemUpdateRequest};
pub use order::{
    Order, OrderCreateRequest, OrderFilter, OrderItem, OrderItemRequest, OrderSortField,
    OrderStatus, OrderUpdateRequest, Payment, PersonAddress, PersonPhone, PersonUpsert,
    PickupDelivery,
};

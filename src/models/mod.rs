pub mod order;

pub use order::{coerce_amount, valid_items, OrderField, OrderLineItem, DEFAULT_AMOUNT};

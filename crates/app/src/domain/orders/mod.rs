//! Orders

pub mod data;
pub mod records;
pub mod service;

pub use data::NewOrder;
pub use records::{CartItem, Order, OrderId, OrderStatus, OrderSummary, UnknownOrderStatus};
pub use service::*;

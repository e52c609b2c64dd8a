//! Domain models persisted in the JSON slots.
//!
//! Field names serialize in camelCase to match the storefront's persisted
//! data format.

pub mod cart_item;
pub mod order;
pub mod product;
pub mod user;

pub use cart_item::CartItem;
pub use order::Order;
pub use product::{NewProduct, Product};
pub use user::User;

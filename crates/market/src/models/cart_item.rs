//! Cart line item model.

use serde::{Deserialize, Serialize};

use estee_core::{CartItemId, Naira, ProductId, Unit};

/// A line in the cart: one product in one unit.
///
/// `price_at_order` is captured when the line is first added and is immune
/// to later catalog price changes. Orders snapshot these lines verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    pub product_id: ProductId,
    /// Denormalized product name, for display and name-based reports.
    pub name: String,
    pub selected_unit: Unit,
    /// Always at least 1.
    pub quantity: u32,
    /// Unit price captured at the moment of adding.
    pub price_at_order: Naira,
}

impl CartItem {
    /// Line total: captured unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Naira {
        self.price_at_order.times(self.quantity)
    }
}

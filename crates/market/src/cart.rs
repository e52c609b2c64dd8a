//! Cart Engine: transient line items with price capture.
//!
//! The cart is scoped to the current session and cleared on checkout. It
//! holds at most one line per (product, unit) pair; re-adding the pair
//! increments the quantity instead of duplicating the line. The unit price
//! is captured at the moment of the first add and never re-read from the
//! catalog.

use estee_core::{CartItemId, Naira, Unit};

use crate::error::{MarketError, Result};
use crate::models::{CartItem, Product};

/// The session cart.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuild a cart from previously captured lines.
    ///
    /// Used by the presentation layer to carry a cart across invocations;
    /// captured prices are kept as-is.
    #[must_use]
    pub const fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// Current lines, in add order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one of `product` in `unit`.
    ///
    /// Captures the product's current unit price on the first add of the
    /// (product, unit) pair; later adds of the same pair only increment
    /// the quantity.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Validation`] if the product does not support
    /// the unit.
    pub fn add(&mut self, product: &Product, unit: Unit) -> Result<&CartItem> {
        let price = product.unit_price(unit).ok_or_else(|| {
            MarketError::Validation(format!(
                "product '{}' does not support unit {unit}",
                product.name
            ))
        })?;

        if let Some(index) = self
            .items
            .iter()
            .position(|item| item.product_id == product.id && item.selected_unit == unit)
        {
            let item = &mut self.items[index];
            item.quantity += 1;
            return Ok(&self.items[index]);
        }

        self.items.push(CartItem {
            id: CartItemId::generate(),
            product_id: product.id,
            name: product.name.clone(),
            selected_unit: unit,
            quantity: 1,
            price_at_order: price,
        });
        // push above guarantees the slice is non-empty
        self.items
            .last()
            .ok_or_else(|| MarketError::Validation("cart insert failed".to_string()))
    }

    /// Remove a line by id. Removing an absent line is a no-op.
    pub fn remove(&mut self, item_id: CartItemId) {
        self.items.retain(|item| item.id != item_id);
    }

    /// Σ price_at_order × quantity over all lines.
    ///
    /// Recomputed on demand; never cached.
    #[must_use]
    pub fn total(&self) -> Naira {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Empty the cart. Called exactly once per successful order placement.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Take the lines out, leaving the cart empty.
    pub(crate) fn take_items(&mut self) -> Vec<CartItem> {
        std::mem::take(&mut self.items)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeMap;

    use estee_core::{Category, ProductId};

    use super::*;

    fn rice() -> Product {
        Product {
            id: ProductId::generate(),
            name: "Premium Rice".to_string(),
            category: Category::GrainsAndStaples,
            supported_units: vec![Unit::Kongo, Unit::Bag],
            price_per_unit: BTreeMap::from([
                (Unit::Kongo, Naira::from_whole(1800)),
                (Unit::Bag, Naira::from_whole(48000)),
            ]),
            stock: 500,
            adjustable: true,
            image_url: None,
        }
    }

    #[test]
    fn test_add_captures_price() {
        let mut cart = Cart::new();
        let item = cart.add(&rice(), Unit::Kongo).unwrap();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.price_at_order, Naira::from_whole(1800));
    }

    #[test]
    fn test_repeat_add_merges_quantity() {
        let mut cart = Cart::new();
        let product = rice();

        cart.add(&product, Unit::Kongo).unwrap();
        cart.add(&product, Unit::Kongo).unwrap();
        cart.add(&product, Unit::Kongo).unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn test_same_product_different_unit_is_separate_line() {
        let mut cart = Cart::new();
        let product = rice();

        cart.add(&product, Unit::Kongo).unwrap();
        cart.add(&product, Unit::Bag).unwrap();

        assert_eq!(cart.items().len(), 2);
    }

    #[test]
    fn test_price_capture_survives_catalog_change() {
        let mut cart = Cart::new();
        let mut product = rice();

        cart.add(&product, Unit::Kongo).unwrap();

        // Catalog price moves; the captured line price must not.
        product
            .price_per_unit
            .insert(Unit::Kongo, Naira::from_whole(2000));
        cart.add(&product, Unit::Kongo).unwrap();

        assert_eq!(cart.items()[0].price_at_order, Naira::from_whole(1800));
        assert_eq!(cart.total(), Naira::from_whole(3600));
    }

    #[test]
    fn test_add_unsupported_unit() {
        let mut cart = Cart::new();
        assert!(matches!(
            cart.add(&rice(), Unit::Crate),
            Err(MarketError::Validation(_))
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total() {
        let mut cart = Cart::new();
        let product = rice();

        cart.add(&product, Unit::Kongo).unwrap();
        cart.add(&product, Unit::Kongo).unwrap();
        assert_eq!(cart.total(), Naira::from_whole(3600));

        cart.add(&product, Unit::Bag).unwrap();
        assert_eq!(cart.total(), Naira::from_whole(51600));
    }

    #[test]
    fn test_remove_is_noop_when_absent() {
        let mut cart = Cart::new();
        cart.add(&rice(), Unit::Kongo).unwrap();

        cart.remove(CartItemId::generate());
        assert_eq!(cart.items().len(), 1);

        let id = cart.items()[0].id;
        cart.remove(id);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_yields_zero_total() {
        let mut cart = Cart::new();
        cart.add(&rice(), Unit::Kongo).unwrap();
        cart.clear();
        assert_eq!(cart.total(), Naira::ZERO);
    }
}

//! Order record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use estee_core::{Naira, OrderId, OrderStatus, Phone, ProductId, UserId};

use super::CartItem;

/// An immutable order record.
///
/// The owning user's name and phone are denormalized snapshots, not live
/// references. Items and total never change after creation; only the
/// status and receipt reference advance (see
/// [`Ledger`](crate::ledger::Ledger)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub user_name: String,
    pub user_phone: Phone,
    pub items: Vec<CartItem>,
    /// Σ price_at_order × quantity, computed once at creation.
    pub total: Naira,
    pub status: OrderStatus,
    /// Opaque payment evidence reference (e.g. an image URL).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Whether any line in the order references the given product.
    #[must_use]
    pub fn contains_product(&self, product_id: ProductId) -> bool {
        self.items.iter().any(|item| item.product_id == product_id)
    }

    /// Whether any line's product name contains the query,
    /// case-insensitively.
    #[must_use]
    pub fn matches_item_name(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.items
            .iter()
            .any(|item| item.name.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use estee_core::{CartItemId, Unit};

    use super::*;

    fn order_with_items(items: Vec<CartItem>) -> Order {
        let total = items.iter().map(CartItem::line_total).sum();
        Order {
            id: OrderId::generate(),
            user_id: UserId::generate(),
            user_name: "Amaka".to_string(),
            user_phone: Phone::parse("08031234567").unwrap(),
            items,
            total,
            status: OrderStatus::Interest,
            receipt_url: None,
            created_at: Utc::now(),
        }
    }

    fn line(name: &str, product_id: ProductId) -> CartItem {
        CartItem {
            id: CartItemId::generate(),
            product_id,
            name: name.to_string(),
            selected_unit: Unit::Kongo,
            quantity: 2,
            price_at_order: Naira::from_whole(1800),
        }
    }

    #[test]
    fn test_contains_product() {
        let rice_id = ProductId::generate();
        let order = order_with_items(vec![line("Premium Rice", rice_id)]);
        assert!(order.contains_product(rice_id));
        assert!(!order.contains_product(ProductId::generate()));
    }

    #[test]
    fn test_matches_item_name_case_insensitive() {
        let order = order_with_items(vec![line("Premium Rice", ProductId::generate())]);
        assert!(order.matches_item_name("rice"));
        assert!(order.matches_item_name("PREMIUM"));
        assert!(!order.matches_item_name("beans"));
    }

    #[test]
    fn test_serde_skips_absent_receipt() {
        let order = order_with_items(vec![line("Premium Rice", ProductId::generate())]);
        let json = serde_json::to_value(&order).unwrap();
        assert!(json.get("receiptUrl").is_none());
        assert!(json.get("createdAt").is_some());
    }
}

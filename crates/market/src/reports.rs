//! Aggregation and reporting over the order ledger.
//!
//! Pure functions over order slices. Spend figures only count verified
//! orders; unverified money is interest, not revenue.

use std::collections::HashMap;

use estee_core::{Naira, OrderStatus, Phone, UserId};

use crate::models::Order;

/// Number of entries in the top-products report.
pub const TOP_PRODUCTS_LIMIT: usize = 5;

/// Per-customer spend summary.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRollup {
    pub user_id: UserId,
    pub name: String,
    pub phone: Phone,
    /// Σ total over this customer's verified orders (matching orders
    /// only, when a filter is given).
    pub total_spend: Naira,
    /// Matching order count, at any status.
    pub orders: usize,
}

/// Per-product volume summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductVolume {
    pub name: String,
    /// Total quantity ordered across all orders, at any status.
    pub quantity: u32,
}

/// Roll orders up per customer, optionally keeping only orders whose
/// lines match `item_filter` by name (case-insensitive substring).
///
/// Customers with no matching orders are omitted entirely. The result is
/// sorted by verified spend, highest first; ties keep ledger order.
#[must_use]
pub fn customer_rollups(orders: &[Order], item_filter: Option<&str>) -> Vec<CustomerRollup> {
    let mut rollups: Vec<CustomerRollup> = Vec::new();

    for order in orders {
        if let Some(filter) = item_filter
            && !order.matches_item_name(filter)
        {
            continue;
        }

        let spend = if order.status == OrderStatus::Verified {
            order.total
        } else {
            Naira::ZERO
        };

        match rollups.iter_mut().find(|r| r.user_id == order.user_id) {
            Some(rollup) => {
                rollup.total_spend += spend;
                rollup.orders += 1;
            }
            None => rollups.push(CustomerRollup {
                user_id: order.user_id,
                name: order.user_name.clone(),
                phone: order.user_phone.clone(),
                total_spend: spend,
                orders: 1,
            }),
        }
    }

    rollups.sort_by(|a, b| b.total_spend.cmp(&a.total_spend));
    rollups
}

/// The most-ordered products by total quantity, grouped by line name.
///
/// Counts every order regardless of status and returns at most `limit`
/// entries, highest volume first.
#[must_use]
pub fn top_products_by_quantity(orders: &[Order], limit: usize) -> Vec<ProductVolume> {
    let mut volumes: HashMap<&str, u32> = HashMap::new();
    for order in orders {
        for item in &order.items {
            *volumes.entry(item.name.as_str()).or_insert(0) += item.quantity;
        }
    }

    let mut ranked: Vec<ProductVolume> = volumes
        .into_iter()
        .map(|(name, quantity)| ProductVolume {
            name: name.to_string(),
            quantity,
        })
        .collect();
    ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(limit);
    ranked
}

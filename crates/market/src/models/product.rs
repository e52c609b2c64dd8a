//! Catalog product model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use estee_core::{Category, Naira, ProductId, Unit};

/// A wholesale catalog product.
///
/// Products are owned exclusively by the catalog and are never deleted;
/// only their prices and stock change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    /// Units this product can be bought in. Non-empty.
    pub supported_units: Vec<Unit>,
    /// Price per unit. Keys exactly cover `supported_units`.
    pub price_per_unit: BTreeMap<Unit, Naira>,
    /// Units of stock on hand.
    pub stock: u32,
    /// Permanently true for items created through the catalog.
    pub adjustable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    /// Whether the product can be bought in the given unit.
    #[must_use]
    pub fn supports(&self, unit: Unit) -> bool {
        self.supported_units.contains(&unit)
    }

    /// Current price for one of the given unit, if supported.
    #[must_use]
    pub fn unit_price(&self, unit: Unit) -> Option<Naira> {
        self.price_per_unit.get(&unit).copied()
    }
}

/// Input for creating a catalog product.
///
/// Validated by [`Catalog::add_product`](crate::catalog::Catalog::add_product);
/// the catalog assigns the id and sets `adjustable`.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub category: Category,
    pub supported_units: Vec<Unit>,
    pub price_per_unit: BTreeMap<Unit, Naira>,
    pub stock: u32,
}

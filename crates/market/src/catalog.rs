//! Catalog Store: products, unit prices and stock.
//!
//! The catalog exclusively owns [`Product`] records. Products are never
//! deleted; mutation is limited to per-unit price updates and stock
//! updates. Listing order is stable, newest first.

use std::collections::BTreeMap;

use tracing::instrument;
use uuid::Uuid;

use estee_core::{Category, Naira, ProductId, Unit};

use crate::error::{MarketError, Result};
use crate::models::{NewProduct, Product};

/// The product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Newest first.
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from previously persisted products.
    #[must_use]
    pub const fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Build the fixed built-in catalog used when no `products` slot
    /// exists yet.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            products: seed_products(),
        }
    }

    /// Full catalog, newest first.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Add a new product to the front of the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Validation`] if the name is empty, no units
    /// are supported, any price is negative, or the price map does not
    /// cover exactly the supported units.
    #[instrument(skip(self, new), fields(name = %new.name))]
    pub fn add_product(&mut self, new: NewProduct) -> Result<&Product> {
        validate_new_product(&new)?;

        let product = Product {
            id: ProductId::generate(),
            name: new.name,
            category: new.category,
            supported_units: new.supported_units,
            price_per_unit: new.price_per_unit,
            stock: new.stock,
            adjustable: true,
            image_url: None,
        };
        self.products.insert(0, product);
        // insert(0) above guarantees the slice is non-empty
        self.products
            .first()
            .ok_or_else(|| MarketError::Validation("catalog insert failed".to_string()))
    }

    /// Update the price of one unit of a product.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::NotFound`] for an unknown product,
    /// [`MarketError::Validation`] for a unit the product does not support
    /// or a negative price.
    #[instrument(skip(self))]
    pub fn update_price(&mut self, id: ProductId, unit: Unit, price: Naira) -> Result<()> {
        if price.is_negative() {
            return Err(MarketError::Validation(format!(
                "price for {unit} cannot be negative"
            )));
        }

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| MarketError::not_found("product", id))?;

        if !product.supported_units.contains(&unit) {
            return Err(MarketError::Validation(format!(
                "product '{}' does not support unit {unit}",
                product.name
            )));
        }

        product.price_per_unit.insert(unit, price);
        Ok(())
    }

    /// Update the stock count of a product.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::NotFound`] for an unknown product.
    #[instrument(skip(self))]
    pub fn update_stock(&mut self, id: ProductId, stock: u32) -> Result<()> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| MarketError::not_found("product", id))?;
        product.stock = stock;
        Ok(())
    }
}

fn validate_new_product(new: &NewProduct) -> Result<()> {
    if new.name.trim().is_empty() {
        return Err(MarketError::Validation(
            "product name cannot be empty".to_string(),
        ));
    }
    if new.supported_units.is_empty() {
        return Err(MarketError::Validation(
            "product must support at least one unit".to_string(),
        ));
    }
    for unit in &new.supported_units {
        match new.price_per_unit.get(unit) {
            None => {
                return Err(MarketError::Validation(format!(
                    "missing price for supported unit {unit}"
                )));
            }
            Some(price) if price.is_negative() => {
                return Err(MarketError::Validation(format!(
                    "price for {unit} cannot be negative"
                )));
            }
            Some(_) => {}
        }
    }
    if let Some(extra) = new
        .price_per_unit
        .keys()
        .find(|unit| !new.supported_units.contains(unit))
    {
        return Err(MarketError::Validation(format!(
            "price given for unsupported unit {extra}"
        )));
    }
    Ok(())
}

/// The fixed built-in catalog.
///
/// Seed products carry stable ids so a freshly seeded store is
/// reproducible across runs and tests.
fn seed_products() -> Vec<Product> {
    fn product(
        seed: u128,
        name: &str,
        category: Category,
        prices: &[(Unit, i64)],
        stock: u32,
    ) -> Product {
        Product {
            id: ProductId::from_uuid(Uuid::from_u128(seed)),
            name: name.to_string(),
            category,
            supported_units: prices.iter().map(|(unit, _)| *unit).collect(),
            price_per_unit: prices
                .iter()
                .map(|(unit, price)| (*unit, Naira::from_whole(*price)))
                .collect::<BTreeMap<_, _>>(),
            stock,
            adjustable: true,
            image_url: None,
        }
    }

    vec![
        product(
            1,
            "Premium Rice",
            Category::GrainsAndStaples,
            &[(Unit::Kongo, 1800), (Unit::Bag, 48000), (Unit::Kg, 1200)],
            500,
        ),
        product(
            2,
            "Honey Beans",
            Category::GrainsAndStaples,
            &[(Unit::Kongo, 2200), (Unit::Bag, 55000), (Unit::Kg, 1500)],
            300,
        ),
        product(
            3,
            "Vegetable Oil",
            Category::OilsAndCondiments,
            &[
                (Unit::Bottle5L, 8500),
                (Unit::Bottle10L, 16500),
                (Unit::Kg, 1800),
            ],
            150,
        ),
        product(
            4,
            "White Gari",
            Category::GrainsAndStaples,
            &[(Unit::Kongo, 900), (Unit::Bag, 18000)],
            400,
        ),
        product(
            5,
            "Tomato Paste",
            Category::VegetablesAndSpices,
            &[(Unit::Carton, 12500), (Unit::Portion, 1200)],
            100,
        ),
        product(
            6,
            "Farm Fresh Eggs",
            Category::EggsAndOthers,
            &[(Unit::Crate, 3200)],
            200,
        ),
    ]
}

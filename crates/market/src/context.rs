//! The engine context: one object owning catalog, ledger, registry,
//! session and cart, bound to a storage backend.
//!
//! Every mutating operation goes through the context so the affected
//! slot is rewritten immediately and callers never see state that is not
//! on disk. Capability checks also live here: admin-only operations
//! refuse buyers, buyer operations refuse the signed-out.

use tracing::instrument;

use estee_core::{CartItemId, Naira, OrderId, Phone, ProductId, Unit};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::config::MarketConfig;
use crate::error::{MarketError, Result};
use crate::ledger::Ledger;
use crate::models::{CartItem, NewProduct, Order, Product, User};
use crate::reports::{self, CustomerRollup, ProductVolume, TOP_PRODUCTS_LIMIT};
use crate::session::Registry;
use crate::store::{self, JsonFileStorage, Storage, slots};

/// The assembled engine.
pub struct MarketContext {
    storage: Box<dyn Storage>,
    catalog: Catalog,
    ledger: Ledger,
    registry: Registry,
    session: Option<User>,
    cart: Cart,
}

impl std::fmt::Debug for MarketContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketContext")
            .field("catalog", &self.catalog)
            .field("ledger", &self.ledger)
            .field("registry", &self.registry)
            .field("session", &self.session)
            .field("cart", &self.cart)
            .finish_non_exhaustive()
    }
}

impl MarketContext {
    /// Open the engine over file-backed storage at the configured data
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Storage`] if the directory cannot be
    /// created or a slot cannot be read.
    pub fn open(config: &MarketConfig) -> Result<Self> {
        let storage = JsonFileStorage::open(&config.data_dir)?;
        Self::load(Box::new(storage))
    }

    /// Load the engine from a storage backend.
    ///
    /// Missing slots take their defaults; a missing `products` slot is
    /// seeded with the built-in catalog and written back immediately.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Storage`] if a slot cannot be read or the
    /// seed cannot be written.
    pub fn load(storage: Box<dyn Storage>) -> Result<Self> {
        let catalog = match store::load::<Vec<Product>>(storage.as_ref(), slots::PRODUCTS)? {
            Some(products) => Catalog::from_products(products),
            None => {
                let catalog = Catalog::seeded();
                store::save(storage.as_ref(), slots::PRODUCTS, &catalog.products())?;
                catalog
            }
        };
        let ledger = Ledger::from_orders(
            store::load(storage.as_ref(), slots::ORDERS)?.unwrap_or_default(),
        );
        let registry = Registry::from_users(
            store::load(storage.as_ref(), slots::USERS)?.unwrap_or_default(),
        );
        let session = store::load(storage.as_ref(), slots::CURRENT_USER)?;

        Ok(Self {
            storage,
            catalog,
            ledger,
            registry,
            session,
            cart: Cart::new(),
        })
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    /// The signed-in user, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.session.as_ref()
    }

    /// Sign in by phone, creating an unknown buyer on the spot.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Storage`] if the session cannot be
    /// persisted.
    #[instrument(skip(self, name))]
    pub fn login(&mut self, phone: Phone, name: Option<&str>) -> Result<User> {
        let user = self.registry.resolve(phone, name);
        store::save(self.storage.as_ref(), slots::USERS, &self.registry.users())?;
        store::save(self.storage.as_ref(), slots::CURRENT_USER, &user)?;
        self.session = Some(user.clone());
        Ok(user)
    }

    /// Register a new buyer under an explicit name and sign them in.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Validation`] for an empty name, a reserved
    /// phone or a duplicate phone.
    #[instrument(skip(self, name))]
    pub fn register(&mut self, phone: Phone, name: &str) -> Result<User> {
        let user = self.registry.register(phone, name)?;
        store::save(self.storage.as_ref(), slots::USERS, &self.registry.users())?;
        store::save(self.storage.as_ref(), slots::CURRENT_USER, &user)?;
        self.session = Some(user.clone());
        Ok(user)
    }

    /// Sign out, removing the persisted session and dropping the cart.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Storage`] if the session slot cannot be
    /// removed.
    #[instrument(skip(self))]
    pub fn logout(&mut self) -> Result<()> {
        self.storage.remove_slot(slots::CURRENT_USER)?;
        self.session = None;
        self.cart.clear();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Catalog
    // ------------------------------------------------------------------

    /// Full catalog, newest first.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.catalog.find_by_id(id)
    }

    /// Add a product to the catalog. Admin only.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Forbidden`] for non-admins and
    /// [`MarketError::Validation`] for invalid product data.
    pub fn add_product(&mut self, new: NewProduct) -> Result<Product> {
        self.require_admin()?;
        let product = self.catalog.add_product(new)?.clone();
        store::save(self.storage.as_ref(), slots::PRODUCTS, &self.catalog.products())?;
        Ok(product)
    }

    /// Update the price of one unit of a product. Admin only.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Forbidden`] for non-admins,
    /// [`MarketError::NotFound`] for an unknown product and
    /// [`MarketError::Validation`] for a bad unit or price.
    pub fn update_price(&mut self, id: ProductId, unit: Unit, price: Naira) -> Result<()> {
        self.require_admin()?;
        self.catalog.update_price(id, unit, price)?;
        store::save(self.storage.as_ref(), slots::PRODUCTS, &self.catalog.products())?;
        Ok(())
    }

    /// Update the stock count of a product. Admin only.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Forbidden`] for non-admins and
    /// [`MarketError::NotFound`] for an unknown product.
    pub fn update_stock(&mut self, id: ProductId, stock: u32) -> Result<()> {
        self.require_admin()?;
        self.catalog.update_stock(id, stock)?;
        store::save(self.storage.as_ref(), slots::PRODUCTS, &self.catalog.products())?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Cart
    // ------------------------------------------------------------------

    /// Current cart lines, in add order.
    #[must_use]
    pub fn cart_items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// Σ captured line prices over the cart.
    #[must_use]
    pub fn cart_total(&self) -> Naira {
        self.cart.total()
    }

    /// Add one of a product in a unit to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::NotFound`] for an unknown product and
    /// [`MarketError::Validation`] for an unsupported unit.
    pub fn add_to_cart(&mut self, product_id: ProductId, unit: Unit) -> Result<CartItem> {
        let product = self
            .catalog
            .find_by_id(product_id)
            .ok_or_else(|| MarketError::not_found("product", product_id))?
            .clone();
        Ok(self.cart.add(&product, unit)?.clone())
    }

    /// Remove a cart line. Removing an absent line is a no-op.
    pub fn remove_from_cart(&mut self, item_id: CartItemId) {
        self.cart.remove(item_id);
    }

    /// Replace the cart with previously captured lines.
    pub fn restore_cart(&mut self, items: Vec<CartItem>) {
        self.cart = Cart::from_items(items);
    }

    // ------------------------------------------------------------------
    // Orders
    // ------------------------------------------------------------------

    /// Place an order from the current cart, clearing it on success.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::AuthRequired`] when signed out and
    /// [`MarketError::Validation`] for an empty cart.
    #[instrument(skip(self))]
    pub fn place_order(&mut self) -> Result<Order> {
        let buyer = self.require_user()?.clone();
        if self.cart.is_empty() {
            return Err(MarketError::Validation(
                "cannot place an order with an empty cart".to_string(),
            ));
        }

        let items = self.cart.take_items();
        let order = self.ledger.place(&buyer, items)?.clone();
        store::save(self.storage.as_ref(), slots::ORDERS, &self.ledger.orders())?;
        Ok(order)
    }

    /// Orders placed by the signed-in user, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::AuthRequired`] when signed out.
    pub fn my_orders(&self) -> Result<Vec<&Order>> {
        let user = self.require_user()?;
        Ok(self.ledger.for_user(user.id))
    }

    /// All orders, most recent first. Admin only.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Forbidden`] for non-admins.
    pub fn all_orders(&self) -> Result<&[Order]> {
        self.require_admin()?;
        Ok(self.ledger.orders())
    }

    /// Attach a payment receipt to one of the caller's orders.
    ///
    /// The admin may attach a receipt to any order.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::AuthRequired`] when signed out,
    /// [`MarketError::Forbidden`] for someone else's order,
    /// [`MarketError::NotFound`] for an unknown order and
    /// [`MarketError::InvalidTransition`] if the order is past `interest`.
    #[instrument(skip(self, receipt_url))]
    pub fn submit_receipt(&mut self, id: OrderId, receipt_url: String) -> Result<Order> {
        let user = self.require_user()?.clone();
        let order = self
            .ledger
            .find_by_id(id)
            .ok_or_else(|| MarketError::not_found("order", id))?;
        if !user.is_admin() && order.user_id != user.id {
            return Err(MarketError::Forbidden);
        }

        let order = self.ledger.submit_receipt(id, receipt_url)?.clone();
        store::save(self.storage.as_ref(), slots::ORDERS, &self.ledger.orders())?;
        Ok(order)
    }

    /// Confirm payment on an order. Admin only.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Forbidden`] for non-admins,
    /// [`MarketError::NotFound`] for an unknown order and
    /// [`MarketError::InvalidTransition`] if the order is not `paid`.
    #[instrument(skip(self))]
    pub fn verify_order(&mut self, id: OrderId) -> Result<Order> {
        self.require_admin()?;
        let order = self.ledger.verify(id)?.clone();
        store::save(self.storage.as_ref(), slots::ORDERS, &self.ledger.orders())?;
        Ok(order)
    }

    // ------------------------------------------------------------------
    // Reports (admin only)
    // ------------------------------------------------------------------

    /// Per-customer spend rollups, optionally filtered by item name.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Forbidden`] for non-admins.
    pub fn customer_rollups(&self, item_filter: Option<&str>) -> Result<Vec<CustomerRollup>> {
        self.require_admin()?;
        Ok(reports::customer_rollups(self.ledger.orders(), item_filter))
    }

    /// Orders containing a given product, at any status.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Forbidden`] for non-admins.
    pub fn buyers_of_product(&self, product_id: ProductId) -> Result<Vec<&Order>> {
        self.require_admin()?;
        Ok(self.ledger.buyers_of(product_id))
    }

    /// The most-ordered products by quantity.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Forbidden`] for non-admins.
    pub fn top_products(&self) -> Result<Vec<ProductVolume>> {
        self.require_admin()?;
        Ok(reports::top_products_by_quantity(
            self.ledger.orders(),
            TOP_PRODUCTS_LIMIT,
        ))
    }

    // ------------------------------------------------------------------
    // Capability checks
    // ------------------------------------------------------------------

    fn require_user(&self) -> Result<&User> {
        self.session.as_ref().ok_or(MarketError::AuthRequired)
    }

    fn require_admin(&self) -> Result<&User> {
        let user = self.require_user()?;
        if !user.is_admin() {
            return Err(MarketError::Forbidden);
        }
        Ok(user)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use estee_core::OrderStatus;

    use super::*;
    use crate::session::ADMIN_PHONE;
    use crate::store::MemoryStorage;

    fn context() -> MarketContext {
        MarketContext::load(Box::new(MemoryStorage::new())).unwrap()
    }

    fn phone(value: &str) -> Phone {
        Phone::parse(value).unwrap()
    }

    fn login_buyer(ctx: &mut MarketContext) -> User {
        ctx.login(phone("08012345678"), Some("Amaka Foods")).unwrap()
    }

    fn login_admin(ctx: &mut MarketContext) -> User {
        ctx.login(phone(ADMIN_PHONE), None).unwrap()
    }

    #[test]
    fn test_load_seeds_catalog() {
        let ctx = context();
        assert_eq!(ctx.products().len(), 6);
        assert!(ctx.current_user().is_none());
    }

    #[test]
    fn test_login_logout_roundtrip() {
        let mut ctx = context();
        let user = login_buyer(&mut ctx);
        assert_eq!(ctx.current_user().unwrap().id, user.id);

        ctx.logout().unwrap();
        assert!(ctx.current_user().is_none());
    }

    #[test]
    fn test_logout_drops_cart() {
        let mut ctx = context();
        login_buyer(&mut ctx);
        let rice = ctx.products()[0].id;
        ctx.add_to_cart(rice, Unit::Kongo).unwrap();

        ctx.logout().unwrap();
        assert!(ctx.cart_items().is_empty());
    }

    #[test]
    fn test_catalog_mutation_requires_admin() {
        let mut ctx = context();
        let rice = ctx.products()[0].id;

        assert!(matches!(
            ctx.update_stock(rice, 10),
            Err(MarketError::AuthRequired)
        ));

        login_buyer(&mut ctx);
        assert!(matches!(
            ctx.update_stock(rice, 10),
            Err(MarketError::Forbidden)
        ));

        login_admin(&mut ctx);
        ctx.update_stock(rice, 10).unwrap();
        assert_eq!(ctx.find_product(rice).unwrap().stock, 10);
    }

    #[test]
    fn test_order_lifecycle() {
        let mut ctx = context();
        login_buyer(&mut ctx);

        let rice = ctx.products()[0].id;
        ctx.add_to_cart(rice, Unit::Kongo).unwrap();
        ctx.add_to_cart(rice, Unit::Kongo).unwrap();
        assert_eq!(ctx.cart_total(), Naira::from_whole(3600));

        let order = ctx.place_order().unwrap();
        assert_eq!(order.total, Naira::from_whole(3600));
        assert_eq!(order.status, OrderStatus::Interest);
        assert!(ctx.cart_items().is_empty());

        let order = ctx
            .submit_receipt(order.id, "https://pay.example/r/1".to_string())
            .unwrap();
        assert_eq!(order.status, OrderStatus::Paid);

        login_admin(&mut ctx);
        let order = ctx.verify_order(order.id).unwrap();
        assert_eq!(order.status, OrderStatus::Verified);
    }

    #[test]
    fn test_place_order_requires_session_and_items() {
        let mut ctx = context();
        assert!(matches!(ctx.place_order(), Err(MarketError::AuthRequired)));

        login_buyer(&mut ctx);
        assert!(matches!(ctx.place_order(), Err(MarketError::Validation(_))));
    }

    #[test]
    fn test_receipt_on_foreign_order_is_forbidden() {
        let mut ctx = context();
        login_buyer(&mut ctx);
        let rice = ctx.products()[0].id;
        ctx.add_to_cart(rice, Unit::Kongo).unwrap();
        let order = ctx.place_order().unwrap();

        ctx.login(phone("08099999999"), Some("Someone Else")).unwrap();
        assert!(matches!(
            ctx.submit_receipt(order.id, "https://pay.example/r/2".to_string()),
            Err(MarketError::Forbidden)
        ));
    }

    #[test]
    fn test_verify_requires_admin() {
        let mut ctx = context();
        login_buyer(&mut ctx);
        let rice = ctx.products()[0].id;
        ctx.add_to_cart(rice, Unit::Kongo).unwrap();
        let order = ctx.place_order().unwrap();
        ctx.submit_receipt(order.id, "https://pay.example/r/1".to_string())
            .unwrap();

        assert!(matches!(
            ctx.verify_order(order.id),
            Err(MarketError::Forbidden)
        ));
    }

    #[test]
    fn test_reports_are_admin_gated() {
        let mut ctx = context();
        login_buyer(&mut ctx);
        assert!(matches!(
            ctx.customer_rollups(None),
            Err(MarketError::Forbidden)
        ));
        assert!(matches!(ctx.top_products(), Err(MarketError::Forbidden)));

        login_admin(&mut ctx);
        assert!(ctx.customer_rollups(None).unwrap().is_empty());
    }

    #[test]
    fn test_add_to_cart_unknown_product() {
        let mut ctx = context();
        login_buyer(&mut ctx);
        assert!(matches!(
            ctx.add_to_cart(ProductId::generate(), Unit::Kongo),
            Err(MarketError::NotFound { kind: "product", .. })
        ));
    }
}

//! Order Ledger: placement and the payment lifecycle.
//!
//! Orders move through `interest → paid → verified`; no other transition
//! is legal and nothing moves backwards. The ledger is append-only for
//! placement and keeps the most recent order first.

use chrono::Utc;
use tracing::instrument;

use estee_core::{Naira, OrderId, OrderStatus, ProductId, UserId};

use crate::error::{MarketError, Result};
use crate::models::{CartItem, Order, User};

/// The order ledger.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// Most recent first.
    orders: Vec<Order>,
}

impl Ledger {
    /// Build a ledger from previously persisted orders.
    #[must_use]
    pub const fn from_orders(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// All orders, most recent first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Look up an order by id.
    #[must_use]
    pub fn find_by_id(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Orders placed by one buyer, most recent first.
    #[must_use]
    pub fn for_user(&self, user_id: UserId) -> Vec<&Order> {
        self.orders.iter().filter(|o| o.user_id == user_id).collect()
    }

    /// Place an order for `buyer` from the captured cart lines.
    ///
    /// The total is computed once from the captured line prices and stored
    /// on the order; later catalog changes never alter it. The new order
    /// starts in [`OrderStatus::Interest`] and goes to the front of the
    /// ledger.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Validation`] if `items` is empty.
    #[instrument(skip(self, buyer, items), fields(buyer = %buyer.name, lines = items.len()))]
    pub fn place(&mut self, buyer: &User, items: Vec<CartItem>) -> Result<&Order> {
        if items.is_empty() {
            return Err(MarketError::Validation(
                "cannot place an order with an empty cart".to_string(),
            ));
        }

        let total: Naira = items.iter().map(CartItem::line_total).sum();
        let order = Order {
            id: OrderId::generate(),
            user_id: buyer.id,
            user_name: buyer.name.clone(),
            user_phone: buyer.phone.clone(),
            items,
            total,
            status: OrderStatus::Interest,
            receipt_url: None,
            created_at: Utc::now(),
        };
        self.orders.insert(0, order);
        // insert(0) above guarantees the slice is non-empty
        self.orders
            .first()
            .ok_or_else(|| MarketError::Validation("ledger insert failed".to_string()))
    }

    /// Attach a payment receipt, moving the order from `interest` to
    /// `paid`.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::NotFound`] for an unknown order and
    /// [`MarketError::InvalidTransition`] if the order is not in
    /// `interest`.
    #[instrument(skip(self, receipt_url))]
    pub fn submit_receipt(&mut self, id: OrderId, receipt_url: String) -> Result<&Order> {
        let index = self.index_of(id)?;
        Self::transition(&mut self.orders[index], OrderStatus::Paid)?;
        self.orders[index].receipt_url = Some(receipt_url);
        Ok(&self.orders[index])
    }

    /// Confirm payment, moving the order from `paid` to `verified`.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::NotFound`] for an unknown order and
    /// [`MarketError::InvalidTransition`] if the order is not in `paid`.
    #[instrument(skip(self))]
    pub fn verify(&mut self, id: OrderId) -> Result<&Order> {
        let index = self.index_of(id)?;
        Self::transition(&mut self.orders[index], OrderStatus::Verified)?;
        Ok(&self.orders[index])
    }

    /// Buyers who have ordered a given product, at any status.
    #[must_use]
    pub fn buyers_of(&self, product_id: ProductId) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|o| o.contains_product(product_id))
            .collect()
    }

    fn index_of(&self, id: OrderId) -> Result<usize> {
        self.orders
            .iter()
            .position(|o| o.id == id)
            .ok_or_else(|| MarketError::not_found("order", id))
    }

    fn transition(order: &mut Order, next: OrderStatus) -> Result<()> {
        if !order.status.can_transition_to(next) {
            return Err(MarketError::InvalidTransition {
                from: order.status,
                to: next,
            });
        }
        order.status = next;
        Ok(())
    }
}

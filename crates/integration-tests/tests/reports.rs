//! Reporting over a ledger built through the public API.

#![allow(clippy::unwrap_used)]

use estee_core::{Naira, Phone, ProductId, Unit};
use estee_integration_tests::{TestStore, sign_in_admin};
use estee_market::MarketContext;

fn product_id(ctx: &MarketContext, name: &str) -> ProductId {
    ctx.products().iter().find(|p| p.name == name).unwrap().id
}

/// Two buyers: Amaka orders rice twice (one verified) and gari once
/// (verified); Chidi orders beans (never verified).
fn build_ledger(ctx: &mut MarketContext) {
    let rice = product_id(ctx, "Premium Rice");
    let beans = product_id(ctx, "Honey Beans");
    let gari = product_id(ctx, "White Gari");

    ctx.login(Phone::parse("08011111111").unwrap(), Some("Amaka Foods"))
        .unwrap();
    ctx.add_to_cart(rice, Unit::Kongo).unwrap(); // 1,800
    ctx.add_to_cart(rice, Unit::Kongo).unwrap();
    let verified_rice = ctx.place_order().unwrap();
    ctx.add_to_cart(rice, Unit::Bag).unwrap(); // 48,000, stays interest
    ctx.place_order().unwrap();
    ctx.add_to_cart(gari, Unit::Kongo).unwrap(); // 900
    let verified_gari = ctx.place_order().unwrap();

    ctx.login(Phone::parse("08022222222").unwrap(), Some("Chidi Stores"))
        .unwrap();
    ctx.add_to_cart(beans, Unit::Bag).unwrap(); // 55,000, stays interest
    ctx.place_order().unwrap();

    sign_in_admin(ctx);
    for order in [&verified_rice, &verified_gari] {
        ctx.submit_receipt(order.id, "https://pay.example/r".to_string())
            .unwrap();
        ctx.verify_order(order.id).unwrap();
    }
}

#[test]
fn test_customer_rollups_count_verified_spend_only() {
    let store = TestStore::new();
    let mut ctx = store.open();
    build_ledger(&mut ctx);

    let rollups = ctx.customer_rollups(None).unwrap();
    assert_eq!(rollups.len(), 2);

    // Amaka: 3,600 + 900 verified; the 48,000 bag is still interest.
    assert_eq!(rollups[0].name, "Amaka Foods");
    assert_eq!(rollups[0].total_spend, Naira::from_whole(4500));
    assert_eq!(rollups[0].orders, 3);

    // Chidi matched an order but has no verified spend.
    assert_eq!(rollups[1].name, "Chidi Stores");
    assert_eq!(rollups[1].total_spend, Naira::ZERO);
}

#[test]
fn test_customer_rollups_item_filter() {
    let store = TestStore::new();
    let mut ctx = store.open();
    build_ledger(&mut ctx);

    let rollups = ctx.customer_rollups(Some("rice")).unwrap();
    assert_eq!(rollups.len(), 1);
    assert_eq!(rollups[0].name, "Amaka Foods");
    // Only the verified rice order counts toward spend; the gari order
    // does not match the filter.
    assert_eq!(rollups[0].total_spend, Naira::from_whole(3600));
    assert_eq!(rollups[0].orders, 2);

    assert!(ctx.customer_rollups(Some("eggs")).unwrap().is_empty());
}

#[test]
fn test_buyers_of_product_ignores_status() {
    let store = TestStore::new();
    let mut ctx = store.open();
    build_ledger(&mut ctx);

    let beans = product_id(&ctx, "Honey Beans");
    let orders = ctx.buyers_of_product(beans).unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].user_name, "Chidi Stores");

    let eggs = product_id(&ctx, "Farm Fresh Eggs");
    assert!(ctx.buyers_of_product(eggs).unwrap().is_empty());
}

#[test]
fn test_top_products_rank_by_quantity() {
    let store = TestStore::new();
    let mut ctx = store.open();
    build_ledger(&mut ctx);

    let ranked = ctx.top_products().unwrap();
    // Rice: 2 kongos + 1 bag = 3 units across statuses.
    assert_eq!(ranked[0].name, "Premium Rice");
    assert_eq!(ranked[0].quantity, 3);
    assert_eq!(ranked.len(), 3);
}

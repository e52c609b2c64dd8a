//! Sales report commands (admin only).

use estee_core::ProductId;
use estee_market::MarketContext;

use super::CommandResult;

pub fn clients(ctx: &MarketContext, item: Option<&str>) -> CommandResult {
    let rollups = ctx.customer_rollups(item)?;
    if rollups.is_empty() {
        println!("No matching customers.");
        return Ok(());
    }
    for rollup in rollups {
        println!(
            "{}  ({})  {} orders, {} verified spend",
            rollup.name, rollup.phone, rollup.orders, rollup.total_spend
        );
    }
    Ok(())
}

pub fn buyers(ctx: &MarketContext, product: &str) -> CommandResult {
    let product_id: ProductId = product.parse()?;
    let orders = ctx.buyers_of_product(product_id)?;
    if orders.is_empty() {
        println!("Nobody has ordered this product yet.");
        return Ok(());
    }
    for order in orders {
        println!(
            "{}  ({})  order {}  {}  {}",
            order.user_name, order.user_phone, order.id, order.status, order.total
        );
    }
    Ok(())
}

pub fn top(ctx: &MarketContext) -> CommandResult {
    let ranked = ctx.top_products()?;
    if ranked.is_empty() {
        println!("No orders yet.");
        return Ok(());
    }
    for (rank, product) in ranked.iter().enumerate() {
        println!("{}. {} - {} units", rank + 1, product.name, product.quantity);
    }
    Ok(())
}

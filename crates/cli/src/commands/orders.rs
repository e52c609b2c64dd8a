//! Order placement and lifecycle commands.

use estee_core::OrderId;
use estee_market::MarketContext;
use estee_market::models::{Order, User};

use super::CommandResult;

pub fn place(ctx: &mut MarketContext) -> CommandResult {
    let order = ctx.place_order()?;
    println!("Order {} placed: {} ({})", order.id, order.total, order.status);
    println!("Submit a payment receipt with `estee order receipt` to proceed.");
    Ok(())
}

pub fn receipt(ctx: &mut MarketContext, order: &str, url: String) -> CommandResult {
    let order_id: OrderId = order.parse()?;
    let order = ctx.submit_receipt(order_id, url)?;
    println!("Receipt attached; order {} is now {}.", order.id, order.status);
    Ok(())
}

pub fn verify(ctx: &mut MarketContext, order: &str) -> CommandResult {
    let order_id: OrderId = order.parse()?;
    let order = ctx.verify_order(order_id)?;
    println!("Payment confirmed; order {} is now {}.", order.id, order.status);
    Ok(())
}

pub fn list(ctx: &MarketContext) -> CommandResult {
    // The admin sees the full ledger, buyers see their own orders.
    let orders: Vec<&Order> = if ctx.current_user().is_some_and(User::is_admin) {
        ctx.all_orders()?.iter().collect()
    } else {
        ctx.my_orders()?
    };

    if orders.is_empty() {
        println!("No orders yet.");
        return Ok(());
    }
    for order in orders {
        println!(
            "{}  {}  {}  {}  {} ({} lines)",
            order.id,
            order.created_at.format("%Y-%m-%d %H:%M"),
            order.user_name,
            order.status,
            order.total,
            order.items.len()
        );
    }
    Ok(())
}

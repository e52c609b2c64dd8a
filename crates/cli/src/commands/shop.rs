//! Catalog browsing and cart commands.

use estee_core::{CartItemId, ProductId, Unit};
use estee_market::MarketContext;

use super::CommandResult;

pub fn browse(ctx: &MarketContext) {
    for product in ctx.products() {
        println!(
            "{}  {} [{}] (stock: {})",
            product.id, product.name, product.category, product.stock
        );
        for unit in &product.supported_units {
            if let Some(price) = product.unit_price(*unit) {
                println!("    {price} per {unit}");
            }
        }
    }
}

pub fn cart_add(ctx: &mut MarketContext, product: &str, unit: &str) -> CommandResult {
    let product_id: ProductId = product.parse()?;
    let unit: Unit = unit.parse()?;
    let item = ctx.add_to_cart(product_id, unit)?;
    println!(
        "Added {} ({}) x{} at {} each",
        item.name, item.selected_unit, item.quantity, item.price_at_order
    );
    Ok(())
}

pub fn cart_remove(ctx: &mut MarketContext, item: &str) -> CommandResult {
    let item_id: CartItemId = item.parse()?;
    ctx.remove_from_cart(item_id);
    println!("Removed.");
    Ok(())
}

pub fn cart_show(ctx: &MarketContext) {
    if ctx.cart_items().is_empty() {
        println!("Cart is empty.");
        return;
    }
    for item in ctx.cart_items() {
        println!(
            "{}  {} ({}) x{} at {} = {}",
            item.id,
            item.name,
            item.selected_unit,
            item.quantity,
            item.price_at_order,
            item.line_total()
        );
    }
    println!("Total: {}", ctx.cart_total());
}

//! Catalog management commands (admin only).

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;

use estee_core::{Category, Naira, ProductId, Unit};
use estee_market::MarketContext;
use estee_market::models::NewProduct;

use super::CommandResult;

pub fn add(
    ctx: &mut MarketContext,
    name: &str,
    category: &str,
    prices: &[String],
    stock: u32,
) -> CommandResult {
    let category: Category = category.parse()?;

    let mut supported_units = Vec::new();
    let mut price_per_unit = BTreeMap::new();
    for spec in prices {
        let (unit, price) = parse_price_spec(spec)?;
        supported_units.push(unit);
        price_per_unit.insert(unit, price);
    }

    let product = ctx.add_product(NewProduct {
        name: name.to_string(),
        category,
        supported_units,
        price_per_unit,
        stock,
    })?;
    println!("Added {} ({})", product.name, product.id);
    Ok(())
}

pub fn set_price(ctx: &mut MarketContext, product: &str, unit: &str, price: &str) -> CommandResult {
    let product_id: ProductId = product.parse()?;
    let unit: Unit = unit.parse()?;
    let price = parse_naira(price)?;
    ctx.update_price(product_id, unit, price)?;
    println!("Price updated: {price} per {unit}.");
    Ok(())
}

pub fn set_stock(ctx: &mut MarketContext, product: &str, stock: u32) -> CommandResult {
    let product_id: ProductId = product.parse()?;
    ctx.update_stock(product_id, stock)?;
    println!("Stock updated to {stock}.");
    Ok(())
}

/// Parse a `unit=amount` argument, e.g. `Kongo=1800`.
fn parse_price_spec(spec: &str) -> Result<(Unit, Naira), Box<dyn std::error::Error>> {
    let (unit, amount) = spec
        .split_once('=')
        .ok_or_else(|| format!("expected unit=amount, got '{spec}'"))?;
    Ok((unit.trim().parse()?, parse_naira(amount.trim())?))
}

fn parse_naira(amount: &str) -> Result<Naira, Box<dyn std::error::Error>> {
    let amount = Decimal::from_str(amount)
        .map_err(|e| format!("invalid amount '{amount}': {e}"))?;
    Ok(Naira::new(amount))
}

//! Sign-in, registration and session commands.

use estee_core::Phone;
use estee_market::MarketContext;

use super::CommandResult;

pub fn login(ctx: &mut MarketContext, phone: &str, name: Option<&str>) -> CommandResult {
    let phone = Phone::parse(phone)?;
    let user = ctx.login(phone, name)?;
    println!("Signed in as {} ({})", user.name, user.role);
    Ok(())
}

pub fn register(ctx: &mut MarketContext, phone: &str, name: &str) -> CommandResult {
    let phone = Phone::parse(phone)?;
    let user = ctx.register(phone, name)?;
    println!("Registered and signed in as {} ({})", user.name, user.phone);
    Ok(())
}

pub fn logout(ctx: &mut MarketContext) -> CommandResult {
    ctx.logout()?;
    println!("Signed out.");
    Ok(())
}

pub fn whoami(ctx: &MarketContext) {
    match ctx.current_user() {
        Some(user) => println!("{} ({}) - {}", user.name, user.phone, user.role),
        None => println!("Not signed in."),
    }
}

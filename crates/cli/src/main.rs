//! Estee CLI - The command-line storefront for Estee Wholesales.
//!
//! # Usage
//!
//! ```bash
//! # Sign in (an unknown phone creates a buyer on the spot)
//! estee login -p 08012345678 -n "Amaka Foods"
//!
//! # Browse the catalog and build a cart
//! estee shop
//! estee cart add --product <id> --unit Kongo
//! estee cart show
//!
//! # Place an order and submit payment evidence
//! estee order place
//! estee order receipt --order <id> --url https://pay.example/r/123
//!
//! # Admin: verify payments and pull reports
//! estee login -p 080admin
//! estee order verify --order <id>
//! estee report clients --item rice
//! ```
//!
//! State lives as JSON files under `ESTEE_DATA_DIR` (default `.estee`),
//! including the cart, so a session spans invocations.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

use estee_market::models::CartItem;
use estee_market::store::{self, JsonFileStorage};
use estee_market::{MarketConfig, MarketContext};

mod commands;

/// Slot holding the in-progress cart between invocations. Owned by the
/// CLI; the engine treats the cart as session state.
const CART_SLOT: &str = "cart";

#[derive(Parser)]
#[command(name = "estee")]
#[command(author, version, about = "Estee Wholesales storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in by phone; an unknown phone creates a buyer on the spot
    Login {
        /// Phone number (the admin phone signs in as the admin)
        #[arg(short, long)]
        phone: String,

        /// Display name for a first sign-in
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Register as a new buyer under an explicit name and sign in
    Register {
        /// Phone number
        #[arg(short, long)]
        phone: String,

        /// Display name
        #[arg(short, long)]
        name: String,
    },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Browse the catalog
    Shop,
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place and track orders
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Manage the catalog (admin only)
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Sales reports (admin only)
    Report {
        #[command(subcommand)]
        action: ReportAction,
    },
    /// Ask the shopping assistant
    Chat {
        /// The question to ask
        message: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add one of a product in a unit
    Add {
        /// Product id
        #[arg(short, long)]
        product: String,

        /// Unit, e.g. Kongo, Bag, Crate
        #[arg(short, long)]
        unit: String,
    },
    /// Remove a line from the cart
    Remove {
        /// Cart line id
        #[arg(short, long)]
        item: String,
    },
    /// Show the cart and its total
    Show,
}

#[derive(Subcommand)]
enum OrderAction {
    /// Place an order from the current cart
    Place,
    /// Attach payment evidence to an order
    Receipt {
        /// Order id
        #[arg(short, long)]
        order: String,

        /// Receipt URL
        #[arg(short, long)]
        url: String,
    },
    /// Confirm payment on an order (admin only)
    Verify {
        /// Order id
        #[arg(short, long)]
        order: String,
    },
    /// List orders (the admin sees everyone's)
    List,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Add a product
    Add {
        /// Product name
        #[arg(short, long)]
        name: String,

        /// Category, e.g. "Grains & Staples"
        #[arg(short, long)]
        category: String,

        /// Per-unit price as `unit=amount`, repeatable
        #[arg(short, long = "price")]
        prices: Vec<String>,

        /// Initial stock count
        #[arg(short, long, default_value_t = 0)]
        stock: u32,
    },
    /// Change the price of one unit of a product
    SetPrice {
        /// Product id
        #[arg(short, long)]
        product: String,

        /// Unit to reprice
        #[arg(short, long)]
        unit: String,

        /// New price in naira
        #[arg(long)]
        price: String,
    },
    /// Change the stock count of a product
    SetStock {
        /// Product id
        #[arg(short, long)]
        product: String,

        /// New stock count
        #[arg(long)]
        stock: u32,
    },
}

#[derive(Subcommand)]
enum ReportAction {
    /// Per-customer spend, optionally filtered by item name
    Clients {
        /// Only count orders containing this item name
        #[arg(short, long)]
        item: Option<String>,
    },
    /// Orders containing a given product
    Buyers {
        /// Product id
        #[arg(short, long)]
        product: String,
    },
    /// The most-ordered products by quantity
    Top,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = MarketConfig::from_env()?;
    let storage = JsonFileStorage::open(&config.data_dir)?;
    let mut ctx = MarketContext::load(Box::new(storage.clone()))?;

    if let Some(items) = store::load::<Vec<CartItem>>(&storage, CART_SLOT)? {
        ctx.restore_cart(items);
    }

    match cli.command {
        Commands::Login { phone, name } => {
            commands::session::login(&mut ctx, &phone, name.as_deref())?;
        }
        Commands::Register { phone, name } => {
            commands::session::register(&mut ctx, &phone, &name)?;
        }
        Commands::Logout => commands::session::logout(&mut ctx)?,
        Commands::Whoami => commands::session::whoami(&ctx),
        Commands::Shop => commands::shop::browse(&ctx),
        Commands::Cart { action } => match action {
            CartAction::Add { product, unit } => {
                commands::shop::cart_add(&mut ctx, &product, &unit)?;
            }
            CartAction::Remove { item } => commands::shop::cart_remove(&mut ctx, &item)?,
            CartAction::Show => commands::shop::cart_show(&ctx),
        },
        Commands::Order { action } => match action {
            OrderAction::Place => commands::orders::place(&mut ctx)?,
            OrderAction::Receipt { order, url } => {
                commands::orders::receipt(&mut ctx, &order, url)?;
            }
            OrderAction::Verify { order } => commands::orders::verify(&mut ctx, &order)?,
            OrderAction::List => commands::orders::list(&ctx)?,
        },
        Commands::Catalog { action } => match action {
            CatalogAction::Add {
                name,
                category,
                prices,
                stock,
            } => commands::catalog::add(&mut ctx, &name, &category, &prices, stock)?,
            CatalogAction::SetPrice {
                product,
                unit,
                price,
            } => commands::catalog::set_price(&mut ctx, &product, &unit, &price)?,
            CatalogAction::SetStock { product, stock } => {
                commands::catalog::set_stock(&mut ctx, &product, stock)?;
            }
        },
        Commands::Report { action } => match action {
            ReportAction::Clients { item } => {
                commands::report::clients(&ctx, item.as_deref())?;
            }
            ReportAction::Buyers { product } => commands::report::buyers(&ctx, &product)?,
            ReportAction::Top => commands::report::top(&ctx)?,
        },
        Commands::Chat { message } => commands::chat::ask(&config, &ctx, &message).await,
    }

    store::save(&storage, CART_SLOT, &ctx.cart_items())?;
    Ok(())
}

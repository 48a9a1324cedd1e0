//! StyleStore CLI - drive the storefront from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! stylestore catalog
//! stylestore catalog --category Electronics --sort price-low
//!
//! # Manage the cart
//! stylestore cart add 2 --quantity 2
//! stylestore cart show
//! stylestore cart set-quantity 2 5
//! stylestore cart remove 2
//!
//! # Create an account, then check out
//! stylestore account register --email jane@example.com --password secret1 ...
//! stylestore checkout --email jane@example.com --password secret1 \
//!     --card-number "4242 4242 4242 4242" --expiry 12/28 --cvv 123
//!
//! # Review orders
//! stylestore orders
//! stylestore invoice <order-id>
//! ```
//!
//! State persists between invocations in `STYLESTORE_DATA_DIR`
//! (default `./stylestore-data`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::rc::Rc;

use clap::{Parser, Subcommand};

use stylestore_storefront::Storefront;
use stylestore_storefront::config::StorefrontConfig;
use stylestore_storefront::persist::{FileStore, KeyValueStore};

mod commands;

#[derive(Parser)]
#[command(name = "stylestore")]
#[command(author, version, about = "StyleStore command-line storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        /// Only show products in this category
        #[arg(long)]
        category: Option<String>,

        /// Sort order: featured, price-low, price-high, rating
        #[arg(long, default_value = "featured")]
        sort: String,
    },
    /// Show details for a single product
    Product {
        /// Product ID
        id: i32,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: commands::cart::CartAction,
    },
    /// Manage the local account
    Account {
        #[command(subcommand)]
        action: commands::account::AccountAction,
    },
    /// Pay for the cart and create an order
    Checkout(commands::checkout::CheckoutArgs),
    /// List completed orders
    Orders,
    /// Print the invoice for an order
    Invoice {
        /// Order ID (as printed by `orders`)
        id: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::load()?;
    let kv = Rc::new(FileStore::open(&config.data_dir)?) as Rc<dyn KeyValueStore>;
    let mut storefront = Storefront::new(config, kv)?;

    match cli.command {
        Commands::Catalog { category, sort } => {
            commands::catalog::list(&storefront, category.as_deref(), &sort)?;
        }
        Commands::Product { id } => commands::catalog::show(&storefront, id)?,
        Commands::Cart { action } => commands::cart::run(&mut storefront, action)?,
        Commands::Account { action } => commands::account::run(&mut storefront, action)?,
        Commands::Checkout(args) => commands::checkout::run(&mut storefront, args)?,
        Commands::Orders => commands::orders::list(&storefront),
        Commands::Invoice { id } => commands::orders::invoice(&storefront, &id)?,
    }
    Ok(())
}

//! Apna Swaad CLI - Browse the catalog and manage the cart from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse premium sweets, cheapest first
//! swaad products list --category premium --sort price-low
//!
//! # Open a product (records it as recently viewed)
//! swaad products show 4
//!
//! # Add three boxes of Jalebi and look at the cart
//! swaad cart add 3 -q 3
//! swaad cart show
//!
//! # Setting a quantity below one removes the line
//! swaad cart update 3 0
//! ```
//!
//! # Commands
//!
//! - `products` - List, filter and inspect catalog products
//! - `cart` - Show and change the cart
//! - `wishlist` - Show and toggle wishlisted products
//! - `recent` - Show recently viewed products

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use apnaswaad_core::{Category, ProductId};
use apnaswaad_storefront::catalog::SortOrder;
use apnaswaad_storefront::config::StorefrontConfig;
use apnaswaad_storefront::state::AppState;

mod commands;

#[derive(Parser)]
#[command(name = "swaad")]
#[command(author, version, about = "Apna Swaad storefront CLI")]
struct Cli {
    /// Directory holding the cart, wishlist and history (overrides `APNASWAAD_STORAGE_DIR`)
    #[arg(long, global = true)]
    storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Show recently viewed products
    Recent,
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List products, optionally filtered and sorted
    List {
        /// Only show this category
        #[arg(short, long)]
        category: Option<Category>,

        /// Match against name and description
        #[arg(short, long)]
        search: Option<String>,

        /// Minimum price (inclusive)
        #[arg(long, default_value_t = 0)]
        min_price: u64,

        /// Maximum price (inclusive)
        #[arg(long, default_value_t = 500)]
        max_price: u64,

        /// Sort order (`featured`, `price-low`, `price-high`, `name`)
        #[arg(long, default_value = "featured")]
        sort: SortOrder,
    },
    /// Show product details and record the view
    Show {
        /// Product ID
        id: ProductId,
    },
    /// List categories
    Categories,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and totals
    Show,
    /// Add a product to the cart
    Add {
        /// Product ID
        id: ProductId,

        /// Number of units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product ID
        id: ProductId,
    },
    /// Set the quantity of a cart line (below 1 removes it)
    Update {
        /// Product ID
        id: ProductId,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove everything from the cart
    Clear,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Show wishlisted products
    Show,
    /// Add or remove a product
    Toggle {
        /// Product ID
        id: ProductId,
    },
}

fn main() {
    // Defaults to info level for the CLI if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "apnaswaad_cli=info,apnaswaad_storefront=warn".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().without_time().with_target(false))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = StorefrontConfig::from_env()?;
    if let Some(dir) = cli.storage_dir {
        config.storage_dir = dir;
    }

    let mut state = AppState::from_config(config)?;
    state
        .store_mut()
        .subscribe(|event| tracing::debug!(?event, "Store changed"));

    match cli.command {
        Commands::Products { action } => match action {
            ProductsAction::List {
                category,
                search,
                min_price,
                max_price,
                sort,
            } => commands::products::list(&state, category, search, min_price, max_price, sort),
            ProductsAction::Show { id } => commands::products::show(&mut state, id)?,
            ProductsAction::Categories => commands::products::categories(&state),
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&state),
            CartAction::Add { id, quantity } => commands::cart::add(&mut state, id, quantity)?,
            CartAction::Remove { id } => commands::cart::remove(&mut state, id),
            CartAction::Update { id, quantity } => {
                commands::cart::update(&mut state, id, quantity);
            }
            CartAction::Clear => commands::cart::clear(&mut state),
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Show => commands::wishlist::show(&state),
            WishlistAction::Toggle { id } => commands::wishlist::toggle(&mut state, id)?,
        },
        Commands::Recent => commands::products::recent(&state),
    }
    Ok(())
}

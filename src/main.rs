use anyhow::{Context, Result};
use chrono::Utc;
use log::info;
use std::env;
use std::path::PathBuf;

use shelf_life::inventory::InventoryAggregator;
use shelf_life::pantry_config::PantryConfig;
use shelf_life::recipe_filter::RecipeSuggestionFilter;
use shelf_life::report::{load_inventory, render_report};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    info!("Starting Shelf Life report");

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Inventory path from the first argument, falling back to INVENTORY_PATH
    let path: PathBuf = env::args()
        .nth(1)
        .or_else(|| env::var("INVENTORY_PATH").ok())
        .map(PathBuf::from)
        .context("usage: shelf-life-report <inventory.json> (or set INVENTORY_PATH)")?;

    let config = PantryConfig::from_env()?;
    info!("Using configuration: {:?}", config);

    let items = load_inventory(&path)?;
    let aggregator = InventoryAggregator::with_config(config.clone());
    let gate = RecipeSuggestionFilter::with_config(&config);

    print!("{}", render_report(&items, &aggregator, &gate, Utc::now()));

    Ok(())
}

//! Inventory file loading and the plain-text pantry summary printed by
//! the `shelf-life-report` binary.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::info;
use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::food_model::{FoodItem, FoodStatus};
use crate::inventory::{sort_by_expiration, InventoryAggregator, StatusFilter};
use crate::recipe_filter::{GenerationDecision, GenerationMode, RecipeSuggestionFilter, SkipReason};
use crate::status::expiry_label;

/// Read a JSON array of food item rows
pub fn load_inventory(path: &Path) -> Result<Vec<FoodItem>> {
    info!("Loading inventory from: {}", path.display());
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read inventory file {}", path.display()))?;
    let items: Vec<FoodItem> =
        serde_json::from_str(&content).context("Failed to parse inventory JSON")?;
    info!("Loaded {} items", items.len());
    Ok(items)
}

/// Render stats, items needing attention and frequent names
pub fn render_report(
    items: &[FoodItem],
    aggregator: &InventoryAggregator,
    gate: &RecipeSuggestionFilter,
    now: DateTime<Utc>,
) -> String {
    let stats = aggregator.compute_stats(items, now);
    let mut out = String::new();

    let _ = writeln!(out, "Pantry: {} items", stats.total);
    for status in FoodStatus::ALL {
        let _ = writeln!(out, "  {:<9}{}", status.as_str(), stats.count(status));
    }

    let mut attention: Vec<FoodItem> = [FoodStatus::Expired, FoodStatus::Expiring]
        .iter()
        .flat_map(|status| aggregator.filter_items(items, StatusFilter::Only(*status), "", now))
        .cloned()
        .collect();
    sort_by_expiration(&mut attention);
    if !attention.is_empty() {
        let _ = writeln!(out, "\nNeeds attention ({}):", stats.needs_attention());
        for item in &attention {
            let _ = writeln!(out, "  - {}: {}", item.name, expiry_label(item.expiration_date, now));
        }
    }

    let frequent = aggregator.compute_frequent_suggestions(items);
    if !frequent.is_empty() {
        let _ = writeln!(out, "\nFrequent items:");
        for suggestion in &frequent {
            let _ = writeln!(out, "  - {suggestion}");
        }
    }

    let recipe_ideas = match gate.should_generate(items, GenerationMode::Initial) {
        GenerationDecision::Generate => "ready".to_string(),
        GenerationDecision::Skip(SkipReason::NoItems) => "no items yet".to_string(),
        GenerationDecision::Skip(SkipReason::NotEnoughItems { required }) => {
            format!("add at least {required} items")
        }
        GenerationDecision::Skip(SkipReason::OnlyGenericIngredients) => {
            "only staple ingredients".to_string()
        }
    };
    let _ = writeln!(out, "\nRecipe ideas: {recipe_ideas}");

    out
}

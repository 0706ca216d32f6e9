//! # Inventory File Tests

use anyhow::Result;
use chrono::{TimeZone, Utc};
use std::io::Write;
use tempfile::NamedTempFile;

use shelf_life::food_model::FoodStatus;
use shelf_life::inventory::InventoryAggregator;
use shelf_life::recipe_filter::RecipeSuggestionFilter;
use shelf_life::report::{load_inventory, render_report};

const INVENTORY: &str = r#"[
    {
        "id": "a1",
        "user_id": "u1",
        "name": "Butter",
        "expiration_date": "2024-03-20",
        "status": "fresh",
        "created_at": "2024-03-01T08:00:00Z",
        "updated_at": "2024-03-01T08:00:00Z"
    },
    {
        "id": "a2",
        "user_id": "u1",
        "name": "Milk",
        "expiration_date": "2024-03-11",
        "status": "fresh",
        "created_at": "2024-03-02T08:00:00Z",
        "updated_at": "2024-03-02T08:00:00Z"
    }
]"#;

fn write_temp(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[test]
fn test_load_inventory_and_report() -> Result<()> {
    let file = write_temp(INVENTORY)?;
    let items = load_inventory(file.path())?;
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].status, Some(FoodStatus::Fresh));

    let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
    let report = render_report(
        &items,
        &InventoryAggregator::new(),
        &RecipeSuggestionFilter::new(),
        now,
    );

    // The stored "fresh" status of Milk is stale
    assert!(report.contains("  expiring 1"));
    assert!(report.contains("  - Milk: expires in 1 day"));
    assert!(report.contains("Recipe ideas: only staple ingredients"));
    assert!(!report.contains("Frequent items"));
    Ok(())
}

#[test]
fn test_load_inventory_errors() -> Result<()> {
    let file = write_temp("{ not json")?;
    let err = load_inventory(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse inventory JSON"));

    let missing = std::env::temp_dir().join("shelf-life-missing-inventory.json");
    let err = load_inventory(&missing).unwrap_err();
    assert!(err.to_string().contains("Failed to read inventory file"));
    Ok(())
}

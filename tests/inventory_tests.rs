//! # Inventory Aggregation Tests
//!
//! Stats, frequent-item suggestions, quick add and list views.

use chrono::{DateTime, Duration, TimeZone, Utc};
use shelf_life::food_model::{FoodItem, FoodStats, FoodStatus};
use shelf_life::inventory::{
    compute_frequent_suggestions, compute_stats, default_suggestions, sort_by_expiration,
    InventoryAggregator, StatusFilter,
};
use shelf_life::status::classify;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 20, 14, 0, 0).unwrap()
}

/// Item expiring `days` from now, created `age_hours` before now
fn item(id: &str, name: &str, days: i64, age_hours: i64) -> FoodItem {
    let now = now();
    FoodItem::new(id, "user-1", name, (now + Duration::days(days)).date_naive(), now)
        .with_created_at(now - Duration::hours(age_hours))
}

fn sample() -> Vec<FoodItem> {
    vec![
        item("1", "Chicken Thighs", 2, 1),
        item("2", "Milk", 0, 2),
        item("3", "Apples", 14, 3),
        item("4", "Bread", -1, 4),
        item("5", "Cheese", 21, 5),
        item("6", "Yogurt", -5, 6),
    ]
}

#[test]
fn test_empty_stats_are_zero() {
    assert_eq!(
        compute_stats(&[], now()),
        FoodStats {
            total: 0,
            fresh: 0,
            expiring: 0,
            expired: 0
        }
    );
}

#[test]
fn test_stats_buckets_match_classification() {
    let items = sample();
    let stats = compute_stats(&items, now());

    assert_eq!(stats.total, stats.fresh + stats.expiring + stats.expired);
    assert_eq!(stats.total, items.len());
    for status in FoodStatus::ALL {
        let expected = items
            .iter()
            .filter(|i| classify(i.expiration_date, now()) == status)
            .count();
        assert_eq!(stats.count(status), expected, "{status}");
    }
    assert_eq!((stats.fresh, stats.expiring, stats.expired), (2, 2, 2));
}

#[test]
fn test_stats_ignore_stored_status() {
    let mut stale = item("1", "Butter", -3, 1);
    stale.status = Some(FoodStatus::Fresh);
    let stats = compute_stats(&[stale], now());
    assert_eq!(stats.expired, 1);
    assert_eq!(stats.fresh, 0);
}

#[test]
fn test_frequent_items_use_most_recent_casing() {
    let items = vec![
        item("1", "Milk", 5, 48),
        item("2", "milk", 5, 1),
        item("3", "Bread", 5, 10),
    ];

    let suggestions = compute_frequent_suggestions(&items);

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].name, "milk");
    assert_eq!(suggestions[0].count, 2);
    assert_eq!(suggestions[0].days, 7);
}

#[test]
fn test_frequent_items_group_trimmed_names() {
    let items = vec![item("1", "  Eggs", 5, 1), item("2", "EGGS ", 5, 2), item("3", "eggs", 5, 3)];
    let suggestions = compute_frequent_suggestions(&items);
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].count, 3);
    assert_eq!(suggestions[0].name, "  Eggs");
}

#[test]
fn test_frequent_items_sorted_and_capped_at_six() {
    let mut items = Vec::new();
    let names = ["A", "B", "C", "D", "E", "F", "G"];
    for (rank, name) in names.iter().enumerate() {
        // "A" appears 8 times, "G" twice
        for n in 0..(8 - rank) {
            items.push(item(&format!("{name}{n}"), name, 5, n as i64));
        }
    }

    let suggestions = compute_frequent_suggestions(&items);

    assert_eq!(suggestions.len(), 6);
    let counts: Vec<usize> = suggestions.iter().map(|s| s.count).collect();
    assert_eq!(counts, vec![8, 7, 6, 5, 4, 3]);
    assert!(suggestions.iter().all(|s| s.name != "G"));
}

#[test]
fn test_no_repeats_means_no_suggestions() {
    assert!(compute_frequent_suggestions(&[]).is_empty());
    assert!(compute_frequent_suggestions(&sample()).is_empty());
}

#[test]
fn test_frequent_suggestions_are_deterministic() {
    let items = vec![
        item("1", "Kiwi", 5, 5),
        item("2", "kiwi", 5, 5),
        item("3", "Plum", 5, 5),
        item("4", "plum", 5, 5),
        item("5", "Fig", 5, 1),
        item("6", "fig", 5, 9),
    ];
    let first = compute_frequent_suggestions(&items);
    let second = compute_frequent_suggestions(&items);
    assert_eq!(first, second);

    let names: Vec<&str> = first.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Fig", "Kiwi", "Plum"]);
}

#[test]
fn test_quick_add_falls_back_to_defaults() {
    let aggregator = InventoryAggregator::new();
    let suggestions = aggregator.quick_add_suggestions(&sample());
    assert_eq!(suggestions, default_suggestions());

    let names: Vec<&str> = suggestions.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Milk", "Bread", "Apples", "Yogurt", "Frozen Vegetables", "Cheese"]
    );
    assert!(suggestions.iter().all(|s| s.count == 0));
}

#[test]
fn test_quick_add_prefers_history() {
    let items = vec![item("1", "Tofu", 5, 1), item("2", "Tofu", 5, 2)];
    let suggestions = InventoryAggregator::new().quick_add_suggestions(&items);
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].name, "Tofu");
    assert_eq!(suggestions[0].days, 7);
    assert_eq!(suggestions[0].count, 2);
}

#[test]
fn test_filter_by_status_and_search() {
    let items = sample();
    let aggregator = InventoryAggregator::new();

    let expired = aggregator.filter_items(&items, StatusFilter::Only(FoodStatus::Expired), "", now());
    let names: Vec<&str> = expired.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Bread", "Yogurt"]);

    let search = aggregator.filter_items(&items, StatusFilter::All, "CHI", now());
    assert_eq!(search.len(), 1);
    assert_eq!(search[0].name, "Chicken Thighs");

    assert_eq!(aggregator.filter_items(&items, StatusFilter::All, "", now()).len(), items.len());
}

#[test]
fn test_sort_by_expiration_earliest_first() {
    let mut items = sample();
    sort_by_expiration(&mut items);
    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Yogurt", "Bread", "Milk", "Chicken Thighs", "Apples", "Cheese"]
    );
}

#[test]
fn test_with_current_status_refreshes_cache() {
    let mut items = sample();
    for item in &mut items {
        item.status = None;
    }
    let refreshed = InventoryAggregator::new().with_current_status(&items, now());
    assert_eq!(refreshed[0].status, Some(FoodStatus::Expiring));
    assert_eq!(refreshed[3].status, Some(FoodStatus::Expired));
    assert_eq!(refreshed[4].status, Some(FoodStatus::Fresh));
}

//! # Inventory Aggregation Module
//!
//! Summary statistics, frequent-item suggestions and list views over a
//! collection of [`FoodItem`]s.
//!
//! ## Features
//!
//! - Stats bucketed by current status (stored status is never trusted)
//! - Frequent names ranked by occurrence, for quick add
//! - Default quick-add suggestions when the user has no history yet
//! - Status/search filtering and expiration ordering for list views

use chrono::{DateTime, Days, NaiveDate, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;

use crate::food_model::{FoodItem, FoodStats, FoodStatus, FrequentItemSuggestion};
use crate::pantry_config::PantryConfig;
use crate::pantry_errors::PantryError;
use crate::status::StatusClassifier;

/// Default quick-add entries offered before the user has any history
pub const DEFAULT_SUGGESTIONS: [(&str, i64); 6] = [
    ("Milk", 7),
    ("Bread", 5),
    ("Apples", 14),
    ("Yogurt", 10),
    ("Frozen Vegetables", 90),
    ("Cheese", 21),
];

/// Which items a list view shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Only(FoodStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: FoodStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// An entry offered for one-tap adding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAddSuggestion {
    pub name: String,
    /// Shelf life used to derive the expiration date
    pub days: i64,
    /// Times the user has entered this name (0 for defaults)
    pub count: usize,
}

impl QuickAddSuggestion {
    /// Expiration date for an item added now: today plus the shelf life
    pub fn expiration_date(&self, now: DateTime<Utc>) -> Result<NaiveDate, PantryError> {
        let today = now.date_naive();
        let shelf_life = Days::new(self.days.unsigned_abs());
        let date = if self.days >= 0 {
            today.checked_add_days(shelf_life)
        } else {
            today.checked_sub_days(shelf_life)
        };
        date.ok_or(PantryError::ShelfLifeOutOfRange(self.days))
    }
}

impl From<FrequentItemSuggestion> for QuickAddSuggestion {
    fn from(suggestion: FrequentItemSuggestion) -> Self {
        Self {
            name: suggestion.name,
            days: suggestion.days,
            count: suggestion.count,
        }
    }
}

/// Aggregator over item collections
#[derive(Debug, Clone, Default)]
pub struct InventoryAggregator {
    classifier: StatusClassifier,
    config: PantryConfig,
}

impl InventoryAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PantryConfig) -> Self {
        Self {
            classifier: StatusClassifier::with_config(&config),
            config,
        }
    }

    pub fn classifier(&self) -> &StatusClassifier {
        &self.classifier
    }

    /// Count items per current status
    pub fn compute_stats(&self, items: &[FoodItem], now: DateTime<Utc>) -> FoodStats {
        let stats = items.iter().fold(FoodStats::default(), |mut acc, item| {
            acc.record(self.classifier.classify(item.expiration_date, now));
            acc
        });
        debug!(
            "Stats over {} items: {} fresh, {} expiring, {} expired",
            stats.total, stats.fresh, stats.expiring, stats.expired
        );
        stats
    }

    /// Rank names the user has entered more than once.
    ///
    /// Groups are ordered by count, highest first. Equal counts are ordered
    /// by the group's newest `created_at` (newest first), then by normalized
    /// name. Each suggestion carries the original name of the group's newest
    /// item; among items created at the same instant the earlier one in
    /// `items` wins.
    pub fn compute_frequent_suggestions(&self, items: &[FoodItem]) -> Vec<FrequentItemSuggestion> {
        struct Group<'a> {
            count: usize,
            newest: &'a FoodItem,
        }

        let mut groups: HashMap<String, Group<'_>> = HashMap::new();
        for item in items {
            groups
                .entry(item.normalized_name())
                .and_modify(|group| {
                    group.count += 1;
                    if item.created_at > group.newest.created_at {
                        group.newest = item;
                    }
                })
                .or_insert(Group { count: 1, newest: item });
        }

        let mut ranked: Vec<(String, Group<'_>)> =
            groups.into_iter().filter(|(_, group)| group.count > 1).collect();
        ranked.sort_by(|(a_name, a), (b_name, b)| {
            (Reverse(a.count), Reverse(a.newest.created_at), a_name)
                .cmp(&(Reverse(b.count), Reverse(b.newest.created_at), b_name))
        });
        ranked.truncate(self.config.frequent_item_limit);

        let suggestions: Vec<FrequentItemSuggestion> = ranked
            .into_iter()
            .map(|(_, group)| FrequentItemSuggestion {
                name: group.newest.name.clone(),
                count: group.count,
                days: self.config.default_shelf_life_days,
            })
            .collect();

        debug!("Found {} frequent items among {} entries", suggestions.len(), items.len());
        suggestions
    }

    /// Frequent items when there are any, otherwise [`DEFAULT_SUGGESTIONS`]
    pub fn quick_add_suggestions(&self, items: &[FoodItem]) -> Vec<QuickAddSuggestion> {
        let frequent = self.compute_frequent_suggestions(items);
        if frequent.is_empty() {
            info!("No frequent items yet, offering default suggestions");
            return default_suggestions();
        }
        frequent.into_iter().map(QuickAddSuggestion::from).collect()
    }

    /// Items matching the status filter whose name contains `search`
    /// (case-insensitive; an empty search matches everything)
    pub fn filter_items<'a>(
        &self,
        items: &'a [FoodItem],
        filter: StatusFilter,
        search: &str,
        now: DateTime<Utc>,
    ) -> Vec<&'a FoodItem> {
        let needle = search.to_lowercase();
        items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .filter(|item| filter.matches(self.classifier.classify(item.expiration_date, now)))
            .collect()
    }

    /// Copies of `items` with the stored status recomputed for `now`
    pub fn with_current_status(&self, items: &[FoodItem], now: DateTime<Utc>) -> Vec<FoodItem> {
        items
            .iter()
            .cloned()
            .map(|mut item| {
                item.status = Some(self.classifier.classify(item.expiration_date, now));
                item
            })
            .collect()
    }
}

/// Stats with the default configuration
pub fn compute_stats(items: &[FoodItem], now: DateTime<Utc>) -> FoodStats {
    InventoryAggregator::default().compute_stats(items, now)
}

/// Frequent suggestions with the default configuration
pub fn compute_frequent_suggestions(items: &[FoodItem]) -> Vec<FrequentItemSuggestion> {
    InventoryAggregator::default().compute_frequent_suggestions(items)
}

pub fn default_suggestions() -> Vec<QuickAddSuggestion> {
    DEFAULT_SUGGESTIONS
        .iter()
        .map(|(name, days)| QuickAddSuggestion {
            name: name.to_string(),
            days: *days,
            count: 0,
        })
        .collect()
}

/// Order items by expiration date, earliest first. Equal dates keep their order.
pub fn sort_by_expiration(items: &mut [FoodItem]) {
    items.sort_by_key(|item| item.expiration_date);
}

//! # Pantry Module
//!
//! An owner's food items held in memory, newest first, with the create,
//! edit and delete operations of the item lifecycle. Entries are validated
//! on the way in and statuses are derived on the way out.

use chrono::{DateTime, Utc};
use log::{debug, info};
use uuid::Uuid;

use crate::food_entry::{FoodItemUpdate, NewFoodItem};
use crate::food_model::{FoodItem, FoodStats, FrequentItemSuggestion};
use crate::inventory::{sort_by_expiration, InventoryAggregator, QuickAddSuggestion, StatusFilter};
use crate::pantry_config::PantryConfig;
use crate::pantry_errors::PantryError;

/// Food items belonging to one user
#[derive(Debug, Clone)]
pub struct Pantry {
    user_id: String,
    items: Vec<FoodItem>,
    aggregator: InventoryAggregator,
}

impl Pantry {
    pub fn new(user_id: &str) -> Self {
        Self::with_config(user_id, PantryConfig::default())
    }

    pub fn with_config(user_id: &str, config: PantryConfig) -> Self {
        Self {
            user_id: user_id.to_string(),
            items: Vec::new(),
            aggregator: InventoryAggregator::with_config(config),
        }
    }

    /// Build a pantry from previously stored rows, ordering them newest first
    pub fn from_items(user_id: &str, items: Vec<FoodItem>) -> Self {
        Self::from_items_with_config(user_id, items, PantryConfig::default())
    }

    pub fn from_items_with_config(user_id: &str, mut items: Vec<FoodItem>, config: PantryConfig) -> Self {
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let mut pantry = Self::with_config(user_id, config);
        pantry.items = items;
        pantry
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Stored items, newest first. Their `status` may be stale.
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&FoodItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Validate and add a new item
    pub fn add_item(&mut self, entry: NewFoodItem, now: DateTime<Utc>) -> Result<&FoodItem, PantryError> {
        let entry = entry.validate(now)?;
        Ok(self.insert(entry, now))
    }

    /// Add a reviewed list of scanned items. Nothing is added if any name is
    /// invalid. Scanned dates are kept as read, including past ones.
    pub fn add_batch(&mut self, entries: Vec<NewFoodItem>, now: DateTime<Utc>) -> Result<usize, PantryError> {
        let validated = entries
            .iter()
            .map(NewFoodItem::validate_scanned)
            .collect::<Result<Vec<_>, _>>()?;

        let count = validated.len();
        for entry in validated {
            self.insert(entry, now);
        }
        info!("Added batch of {} items for user {}", count, self.user_id);
        Ok(count)
    }

    /// Add an item from a quick-add suggestion, expiring `days` from now
    pub fn quick_add(&mut self, suggestion: &QuickAddSuggestion, now: DateTime<Utc>) -> Result<&FoodItem, PantryError> {
        let entry = NewFoodItem::new(&suggestion.name, suggestion.expiration_date(now)?);
        self.add_item(entry, now)
    }

    /// Apply an owner edit. The stored status is recomputed when the date changes.
    pub fn update_item(&mut self, id: &str, update: FoodItemUpdate, now: DateTime<Utc>) -> Result<&FoodItem, PantryError> {
        let update = update.validate()?;
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| PantryError::NotFound(id.to_string()))?;

        if update.is_empty() {
            debug!("Empty edit for ID: {}, nothing changed", id);
            return Ok(&*item);
        }
        if let Some(name) = update.name {
            item.name = name;
        }
        if let Some(expiration_date) = update.expiration_date {
            item.expiration_date = expiration_date;
            item.refresh_status(now);
        }
        item.updated_at = now;

        info!("Item updated successfully with ID: {}", id);
        Ok(&*item)
    }

    /// Remove one item, returning whether it existed
    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() < before;
        if removed {
            info!("Item removed with ID: {}", id);
        } else {
            info!("No item found with ID: {}", id);
        }
        removed
    }

    /// Remove every item, returning how many were removed
    pub fn clear_all(&mut self) -> usize {
        let count = self.items.len();
        self.items.clear();
        info!("Cleared {} items for user {}", count, self.user_id);
        count
    }

    pub fn stats(&self, now: DateTime<Utc>) -> FoodStats {
        self.aggregator.compute_stats(&self.items, now)
    }

    pub fn frequent_items(&self) -> Vec<FrequentItemSuggestion> {
        self.aggregator.compute_frequent_suggestions(&self.items)
    }

    pub fn quick_add_suggestions(&self) -> Vec<QuickAddSuggestion> {
        self.aggregator.quick_add_suggestions(&self.items)
    }

    /// Items with a current status, earliest expiration first
    pub fn by_expiration(&self, now: DateTime<Utc>) -> Vec<FoodItem> {
        let mut items = self.aggregator.with_current_status(&self.items, now);
        sort_by_expiration(&mut items);
        items
    }

    pub fn filtered(&self, filter: StatusFilter, search: &str, now: DateTime<Utc>) -> Vec<&FoodItem> {
        self.aggregator.filter_items(&self.items, filter, search, now)
    }

    fn insert(&mut self, entry: NewFoodItem, now: DateTime<Utc>) -> &FoodItem {
        let id = Uuid::new_v4().to_string();
        info!("Adding '{}' for user {} with ID: {}", entry.name, self.user_id, id);

        let item = FoodItem::new(&id, &self.user_id, &entry.name, entry.expiration_date, now);
        self.items.insert(0, item);
        &self.items[0]
    }

    /// Pantry item names, as sent to the recipe-matching service
    pub fn ingredient_names(&self) -> Vec<String> {
        self.items.iter().map(|item| item.name.to_lowercase()).collect()
    }
}

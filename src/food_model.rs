//! # Food Item Data Model
//!
//! This module defines the records tracked by the pantry and the values
//! derived from them.
//!
//! ## Core Concepts
//!
//! - **FoodItem**: a single stored entry with a name and an expiration date
//! - **FoodStatus**: the lifecycle state derived from the expiration date
//! - **FoodStats**: bucket counts over a collection of items
//! - **FrequentItemSuggestion**: a name the user enters repeatedly
//!
//! The `status` stored on a [`FoodItem`] is a cache. Read it through
//! [`FoodItem::current_status`], which always recomputes it.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use shelf_life::food_model::{FoodItem, FoodStatus};
//!
//! let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
//! let milk = FoodItem::new("1", "user-1", "Milk", NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(), now);
//! assert_eq!(milk.current_status(now), FoodStatus::Expiring);
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::status;

/// Lifecycle state of a food item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodStatus {
    /// More than the expiring window away from expiration
    Fresh,
    /// Expires today or within the expiring window
    Expiring,
    /// Expiration date has passed
    Expired,
}

impl FoodStatus {
    pub const ALL: [FoodStatus; 3] = [FoodStatus::Fresh, FoodStatus::Expiring, FoodStatus::Expired];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodStatus::Fresh => "fresh",
            FoodStatus::Expiring => "expiring",
            FoodStatus::Expired => "expired",
        }
    }
}

impl fmt::Display for FoodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FoodStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fresh" => Ok(FoodStatus::Fresh),
            "expiring" => Ok(FoodStatus::Expiring),
            "expired" => Ok(FoodStatus::Expired),
            other => Err(format!("unknown food status: {other}")),
        }
    }
}

/// A stored food item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Opaque identifier assigned by the store
    pub id: String,

    /// Owner of the item
    pub user_id: String,

    /// Free-text name as entered (e.g., "Milk", "chicken thighs")
    pub name: String,

    /// Calendar date the item expires on
    pub expiration_date: NaiveDate,

    /// Last status written alongside the item; may be stale
    #[serde(default)]
    pub status: Option<FoodStatus>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl FoodItem {
    /// Create an item whose status cache is already current for `now`
    pub fn new(
        id: &str,
        user_id: &str,
        name: &str,
        expiration_date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.to_string(),
            user_id: user_id.to_string(),
            name: name.to_string(),
            expiration_date,
            status: Some(status::classify(expiration_date, now)),
            created_at: now,
            updated_at: now,
        }
    }

    /// Override the creation timestamp
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Status derived from the expiration date, ignoring the stored cache
    pub fn current_status(&self, now: DateTime<Utc>) -> FoodStatus {
        status::classify(self.expiration_date, now)
    }

    /// Overwrite the stored status with a fresh computation
    pub fn refresh_status(&mut self, now: DateTime<Utc>) -> FoodStatus {
        let current = self.current_status(now);
        self.status = Some(current);
        current
    }

    /// Case-insensitive, trimmed name used for grouping and comparisons
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Lowercase and trim a food or ingredient name
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Aggregate counts over a collection of items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodStats {
    pub total: usize,
    pub fresh: usize,
    pub expiring: usize,
    pub expired: usize,
}

impl FoodStats {
    /// Count one item in the bucket for `status`
    pub fn record(&mut self, status: FoodStatus) {
        self.total += 1;
        match status {
            FoodStatus::Fresh => self.fresh += 1,
            FoodStatus::Expiring => self.expiring += 1,
            FoodStatus::Expired => self.expired += 1,
        }
    }

    pub fn count(&self, status: FoodStatus) -> usize {
        match status {
            FoodStatus::Fresh => self.fresh,
            FoodStatus::Expiring => self.expiring,
            FoodStatus::Expired => self.expired,
        }
    }

    /// Items a daily reminder would mention (expiring or already expired)
    pub fn needs_attention(&self) -> usize {
        self.expiring + self.expired
    }
}

/// A food name the user has entered more than once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequentItemSuggestion {
    /// Original casing of the most recently created matching item
    pub name: String,
    /// Number of items sharing the normalized name
    pub count: usize,
    /// Suggested shelf life in days
    pub days: i64,
}

impl fmt::Display for FrequentItemSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (x{}, {} days)", self.name, self.count, self.days)
    }
}

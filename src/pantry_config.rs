//! # Pantry Configuration Module
//!
//! This module defines the tunable thresholds used by the status classifier,
//! the inventory aggregator and the recipe-generation gate.

use std::env;
use std::str::FromStr;

use crate::pantry_errors::PantryError;

// Constants for pantry configuration
pub const EXPIRING_WINDOW_DAYS: i64 = 3;
pub const FREQUENT_ITEM_LIMIT: usize = 6;
pub const DEFAULT_SHELF_LIFE_DAYS: i64 = 7;
pub const MIN_ITEMS_FOR_GENERATION: usize = 2;
pub const MAX_FOOD_NAME_LENGTH: usize = 255;
pub const MAX_SHELF_LIFE_DAYS: i64 = 3650;

pub const ENV_EXPIRING_WINDOW_DAYS: &str = "SHELF_LIFE_EXPIRING_WINDOW_DAYS";
pub const ENV_FREQUENT_LIMIT: &str = "SHELF_LIFE_FREQUENT_LIMIT";
pub const ENV_DEFAULT_SHELF_LIFE_DAYS: &str = "SHELF_LIFE_DEFAULT_SHELF_LIFE_DAYS";
pub const ENV_MIN_GENERATION_ITEMS: &str = "SHELF_LIFE_MIN_GENERATION_ITEMS";

/// Configuration structure for inventory derivations
#[derive(Debug, Clone, PartialEq)]
pub struct PantryConfig {
    /// Items with this many days or fewer until expiration are "expiring"
    pub expiring_window_days: i64,
    /// Maximum number of frequent-item suggestions returned
    pub frequent_item_limit: usize,
    /// Shelf life suggested for a frequent item on quick add
    pub default_shelf_life_days: i64,
    /// Minimum pantry size for the initial recipe generation
    pub min_items_for_generation: usize,
}

impl Default for PantryConfig {
    fn default() -> Self {
        Self {
            expiring_window_days: EXPIRING_WINDOW_DAYS,
            frequent_item_limit: FREQUENT_ITEM_LIMIT,
            default_shelf_life_days: DEFAULT_SHELF_LIFE_DAYS,
            min_items_for_generation: MIN_ITEMS_FOR_GENERATION,
        }
    }
}

impl PantryConfig {
    /// Build a configuration from `SHELF_LIFE_*` environment variables.
    ///
    /// Unset variables keep their default value. A variable that is set but
    /// does not parse, or parses to a value [`PantryConfig::validate`]
    /// rejects, is reported as [`PantryError::Config`].
    pub fn from_env() -> Result<Self, PantryError> {
        let defaults = Self::default();
        Self {
            expiring_window_days: read_var(ENV_EXPIRING_WINDOW_DAYS, defaults.expiring_window_days)?,
            frequent_item_limit: read_var(ENV_FREQUENT_LIMIT, defaults.frequent_item_limit)?,
            default_shelf_life_days: read_var(
                ENV_DEFAULT_SHELF_LIFE_DAYS,
                defaults.default_shelf_life_days,
            )?,
            min_items_for_generation: read_var(
                ENV_MIN_GENERATION_ITEMS,
                defaults.min_items_for_generation,
            )?,
        }
        .validate()
    }

    /// Check the day thresholds: the expiring window cannot be negative and
    /// the default shelf life must lie within `0..=MAX_SHELF_LIFE_DAYS`.
    pub fn validate(self) -> Result<Self, PantryError> {
        if self.expiring_window_days < 0 {
            return Err(invalid(ENV_EXPIRING_WINDOW_DAYS, self.expiring_window_days));
        }
        if !(0..=MAX_SHELF_LIFE_DAYS).contains(&self.default_shelf_life_days) {
            return Err(invalid(ENV_DEFAULT_SHELF_LIFE_DAYS, self.default_shelf_life_days));
        }
        Ok(self)
    }
}

fn invalid(key: &str, value: i64) -> PantryError {
    PantryError::Config {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn read_var<T: FromStr>(key: &str, default: T) -> Result<T, PantryError> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|_| PantryError::Config {
            key: key.to_string(),
            value: raw,
        }),
        Err(_) => Ok(default),
    }
}

//! # Pantry Error Types Module
//!
//! Error types returned by the fallible edges of the crate: parsing user
//! input, validating entries and loading configuration or inventory files.
//! The derivations themselves are total and never fail.

use thiserror::Error;

/// Errors raised while validating or loading pantry data
#[derive(Error, Debug)]
pub enum PantryError {
    /// Food name was empty after trimming
    #[error("Validation error: food name is required")]
    EmptyName,

    /// Food name exceeded the maximum length
    #[error("Validation error: food name is longer than {max} characters")]
    NameTooLong { max: usize },

    /// Expiration date is before the current day
    #[error("Validation error: expiration date {0} is in the past")]
    ExpirationInPast(chrono::NaiveDate),

    /// Adding the shelf life to today leaves the supported date range
    #[error("Validation error: a shelf life of {0} days is out of range")]
    ShelfLifeOutOfRange(i64),

    /// Date string could not be parsed as YYYY-MM-DD
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// No item with the given id exists in the pantry
    #[error("Food item not found: {0}")]
    NotFound(String),

    /// A threshold held an unparseable or out-of-range value
    #[error("Configuration error: {key}={value} is not valid")]
    Config { key: String, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PantryError {
    /// Whether the error was caused by user input rather than the environment
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PantryError::EmptyName
                | PantryError::NameTooLong { .. }
                | PantryError::ExpirationInPast(_)
                | PantryError::ShelfLifeOutOfRange(_)
                | PantryError::InvalidDate(_)
        )
    }
}

//! # Status Classification Module
//!
//! Maps an expiration date and a reference time to a [`FoodStatus`].
//!
//! The expiration date is taken as midnight UTC of that day. The distance to
//! it is rounded up to whole days, so an item expiring later today has zero
//! days left and is still `Expiring`, while one whose date was yesterday has
//! `-1` and is `Expired`.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use log::trace;

use crate::food_model::FoodStatus;
use crate::pantry_config::{PantryConfig, EXPIRING_WINDOW_DAYS};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Classifier with a configurable expiring window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusClassifier {
    expiring_window_days: i64,
}

impl Default for StatusClassifier {
    fn default() -> Self {
        Self {
            expiring_window_days: EXPIRING_WINDOW_DAYS,
        }
    }
}

impl StatusClassifier {
    /// Create a classifier with the default three-day expiring window
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier using the window from `config`. A negative window
    /// is treated as zero so that an item expiring today is never `Fresh`.
    pub fn with_config(config: &PantryConfig) -> Self {
        Self {
            expiring_window_days: config.expiring_window_days.max(0),
        }
    }

    pub fn expiring_window_days(&self) -> i64 {
        self.expiring_window_days
    }

    /// Classify an expiration date relative to `now`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{NaiveDate, TimeZone, Utc};
    /// use shelf_life::food_model::FoodStatus;
    /// use shelf_life::status::StatusClassifier;
    ///
    /// let now = Utc.with_ymd_and_hms(2024, 6, 10, 15, 30, 0).unwrap();
    /// let classifier = StatusClassifier::new();
    /// let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    /// assert_eq!(classifier.classify(today, now), FoodStatus::Expiring);
    /// ```
    pub fn classify(&self, expiration_date: NaiveDate, now: DateTime<Utc>) -> FoodStatus {
        let days = days_until_expiration(expiration_date, now);
        let status = if days < 0 {
            FoodStatus::Expired
        } else if days <= self.expiring_window_days {
            FoodStatus::Expiring
        } else {
            FoodStatus::Fresh
        };
        trace!("{} is {} days away: {}", expiration_date, days, status);
        status
    }

    /// Whether the item needs attention: expiring or already expired.
    ///
    /// Unlike [`StatusClassifier::classify`] this does not separate the
    /// expired case; it is the predicate used for highlighting.
    pub fn is_expiring_soon(&self, expiration_date: NaiveDate, now: DateTime<Utc>) -> bool {
        days_until_expiration(expiration_date, now) <= self.expiring_window_days
    }
}

/// Classify with the default expiring window
pub fn classify(expiration_date: NaiveDate, now: DateTime<Utc>) -> FoodStatus {
    StatusClassifier::default().classify(expiration_date, now)
}

/// Whole days from `now` until the start of `expiration_date`, rounded up
pub fn days_until_expiration(expiration_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let expires_at = expiration_date.and_time(NaiveTime::MIN).and_utc();
    let diff_ms = (expires_at - now).num_milliseconds();
    ceil_div(diff_ms, MILLIS_PER_DAY)
}

fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator.div_euclid(denominator);
    if numerator.rem_euclid(denominator) == 0 {
        quotient
    } else {
        quotient + 1
    }
}

/// Human-readable distance to expiration, as shown on a food card
pub fn expiry_label(expiration_date: NaiveDate, now: DateTime<Utc>) -> String {
    let days = days_until_expiration(expiration_date, now);
    match days {
        d if d < 0 => {
            let ago = d.abs();
            format!("expired {} day{} ago", ago, if ago != 1 { "s" } else { "" })
        }
        0 => "expires today".to_string(),
        1 => "expires in 1 day".to_string(),
        d => format!("expires in {d} days"),
    }
}

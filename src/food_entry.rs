//! Validation for user-entered food items and edits.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::pantry_config::MAX_FOOD_NAME_LENGTH;
use crate::pantry_errors::PantryError;

/// A food item as entered by hand, picked from a suggestion, or read off a receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFoodItem {
    pub name: String,
    pub expiration_date: NaiveDate,
}

impl NewFoodItem {
    pub fn new(name: &str, expiration_date: NaiveDate) -> Self {
        Self {
            name: name.to_string(),
            expiration_date,
        }
    }

    /// Check the entry against `now` and return it with a trimmed name
    pub fn validate(&self, now: DateTime<Utc>) -> Result<NewFoodItem, PantryError> {
        Ok(NewFoodItem {
            name: validate_food_name(&self.name)?,
            expiration_date: validate_expiration_date(self.expiration_date, now)?,
        })
    }

    /// Check an entry read off a receipt. Only the name is checked: a scanned
    /// date is kept even when it has already passed.
    pub fn validate_scanned(&self) -> Result<NewFoodItem, PantryError> {
        Ok(NewFoodItem {
            name: validate_food_name(&self.name)?,
            expiration_date: self.expiration_date,
        })
    }
}

/// Owner edits to an existing item. Status is never part of an edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItemUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
}

impl FoodItemUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.expiration_date.is_none()
    }

    /// Validate the name if one is being set.
    ///
    /// Edited dates are not checked against today: an owner may correct the
    /// date of an item that has already expired.
    pub fn validate(&self) -> Result<FoodItemUpdate, PantryError> {
        let name = match &self.name {
            Some(name) => Some(validate_food_name(name)?),
            None => None,
        };
        Ok(FoodItemUpdate {
            name,
            expiration_date: self.expiration_date,
        })
    }
}

/// Validates a food name and returns it trimmed
pub fn validate_food_name(name: &str) -> Result<String, PantryError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(PantryError::EmptyName);
    }

    if trimmed.chars().count() > MAX_FOOD_NAME_LENGTH {
        return Err(PantryError::NameTooLong {
            max: MAX_FOOD_NAME_LENGTH,
        });
    }

    Ok(trimmed.to_string())
}

/// Rejects dates before the current UTC day; today is accepted
pub fn validate_expiration_date(
    expiration_date: NaiveDate,
    now: DateTime<Utc>,
) -> Result<NaiveDate, PantryError> {
    if expiration_date < now.date_naive() {
        return Err(PantryError::ExpirationInPast(expiration_date));
    }
    Ok(expiration_date)
}

/// Parse a `YYYY-MM-DD` expiration date, as sent by date inputs and the backend
pub fn parse_expiration_date(raw: &str) -> Result<NaiveDate, PantryError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| PantryError::InvalidDate(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 15, 18, 0, 0).unwrap()
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, d).unwrap()
    }

    #[test]
    fn test_food_name_validation() {
        assert_eq!(validate_food_name("  Greek Yogurt ").unwrap(), "Greek Yogurt");
        assert!(matches!(validate_food_name("   "), Err(PantryError::EmptyName)));
        assert!(matches!(
            validate_food_name(&"a".repeat(256)),
            Err(PantryError::NameTooLong { max: 255 })
        ));
        assert!(validate_food_name(&"a".repeat(255)).is_ok());
    }

    #[test]
    fn test_expiration_today_is_allowed() {
        assert_eq!(validate_expiration_date(date(15), now()).unwrap(), date(15));
        assert!(matches!(
            validate_expiration_date(date(14), now()),
            Err(PantryError::ExpirationInPast(d)) if d == date(14)
        ));
    }

    #[test]
    fn test_new_item_validation_trims() {
        let entry = NewFoodItem::new(" Spinach ", date(20)).validate(now()).unwrap();
        assert_eq!(entry.name, "Spinach");
    }

    #[test]
    fn test_scanned_entry_keeps_past_date() {
        let entry = NewFoodItem::new(" Yogurt ", date(2)).validate_scanned().unwrap();
        assert_eq!(entry, NewFoodItem::new("Yogurt", date(2)));
        assert!(matches!(
            NewFoodItem::new("", date(20)).validate_scanned(),
            Err(PantryError::EmptyName)
        ));
    }

    #[test]
    fn test_update_allows_past_dates() {
        let update = FoodItemUpdate {
            name: Some(" Ham ".to_string()),
            expiration_date: Some(date(1)),
        };
        let validated = update.validate().unwrap();
        assert_eq!(validated.name.as_deref(), Some("Ham"));
        assert_eq!(validated.expiration_date, Some(date(1)));
        assert!(FoodItemUpdate::default().is_empty());
    }

    #[test]
    fn test_parse_expiration_date() {
        assert_eq!(parse_expiration_date("2024-04-20").unwrap(), date(20));
        let err = parse_expiration_date("20/04/2024").unwrap_err();
        assert!(err.is_validation());
        assert!(parse_expiration_date("2024-02-30").is_err());
    }
}

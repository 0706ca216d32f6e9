//! # Recipe Ingredient Matching Module
//!
//! Relates recipe ingredient lines to the user's pantry.
//!
//! ## Features
//!
//! - Highlighting recipe ingredients whose pantry item needs attention
//! - Filtering recipes by overlap with pantry ingredient names
//! - Filtering recipes by difficulty, meal type, cuisine and prep time
//!
//! Matching is a case-insensitive substring test in both directions:
//! "chicken" matches "Chicken Breast" and "Chicken Thighs" matches
//! "chicken". Short names over-match ("oil" matches "boiled potatoes"),
//! which is acceptable for suggestions.

use chrono::{DateTime, Utc};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::food_model::FoodItem;
use crate::pantry_config::PantryConfig;
use crate::recipe_model::{Recipe, RecipeCriteria};
use crate::status::StatusClassifier;

/// A recipe ingredient with its highlight flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientHighlight {
    pub ingredient: String,
    /// The matching pantry item is expiring or already expired
    pub expiring_soon: bool,
}

/// Matcher between recipe ingredients and pantry items
#[derive(Debug, Clone, Default)]
pub struct RecipeIngredientMatcher {
    classifier: StatusClassifier,
}

impl RecipeIngredientMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &PantryConfig) -> Self {
        Self {
            classifier: StatusClassifier::with_config(config),
        }
    }

    /// First pantry item whose name overlaps `ingredient`
    pub fn find_matching_item<'a>(&self, ingredient: &str, items: &'a [FoodItem]) -> Option<&'a FoodItem> {
        items.iter().find(|item| names_overlap(&item.name, ingredient))
    }

    /// Whether the pantry item matching `ingredient` needs attention.
    ///
    /// Uses the looser "days left <= window" predicate, so expired items are
    /// highlighted too. Returns false when no pantry item matches.
    pub fn is_ingredient_expiring_soon(
        &self,
        ingredient: &str,
        items: &[FoodItem],
        now: DateTime<Utc>,
    ) -> bool {
        match self.find_matching_item(ingredient, items) {
            Some(item) => {
                let soon = self.classifier.is_expiring_soon(item.expiration_date, now);
                trace!("'{}' matched '{}', expiring soon: {}", ingredient, item.name, soon);
                soon
            }
            None => false,
        }
    }

    /// Flag each ingredient for display
    pub fn highlight_ingredients<S: AsRef<str>>(
        &self,
        ingredients: &[S],
        items: &[FoodItem],
        now: DateTime<Utc>,
    ) -> Vec<IngredientHighlight> {
        ingredients
            .iter()
            .map(|ingredient| IngredientHighlight {
                ingredient: ingredient.as_ref().to_string(),
                expiring_soon: self.is_ingredient_expiring_soon(ingredient.as_ref(), items, now),
            })
            .collect()
    }
}

/// Case-insensitive substring containment in either direction
pub fn names_overlap(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// Default-window form of [`RecipeIngredientMatcher::is_ingredient_expiring_soon`]
pub fn is_ingredient_expiring_soon(ingredient: &str, items: &[FoodItem], now: DateTime<Utc>) -> bool {
    RecipeIngredientMatcher::default().is_ingredient_expiring_soon(ingredient, items, now)
}

/// Recipes with at least one ingredient overlapping a user ingredient name
pub fn filter_recipes_by_ingredients<'a, S: AsRef<str>>(
    recipes: &'a [Recipe],
    user_ingredients: &[S],
) -> Vec<&'a Recipe> {
    let matches: Vec<&Recipe> = recipes
        .iter()
        .filter(|recipe| {
            user_ingredients.iter().any(|user| {
                recipe
                    .ingredients
                    .iter()
                    .any(|line| names_overlap(line, user.as_ref()))
            })
        })
        .collect();
    debug!(
        "{} of {} recipes share an ingredient with {} pantry names",
        matches.len(),
        recipes.len(),
        user_ingredients.len()
    );
    matches
}

/// Recipes satisfying every specified criterion
pub fn filter_recipes_by_criteria<'a>(recipes: &'a [Recipe], criteria: &RecipeCriteria) -> Vec<&'a Recipe> {
    recipes.iter().filter(|recipe| criteria.matches(recipe)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn item(name: &str, now: DateTime<Utc>, days: i64) -> FoodItem {
        FoodItem::new(name, "u", name, (now + Duration::days(days)).date_naive(), now)
    }

    #[test]
    fn test_names_overlap_both_directions() {
        assert!(names_overlap("Chicken Thighs", "chicken"));
        assert!(names_overlap("chicken", "Chicken Thighs"));
        assert!(!names_overlap("beef", "chicken"));
    }

    #[test]
    fn test_empty_name_overlaps_everything() {
        assert!(names_overlap("", "rice"));
    }

    #[test]
    fn test_first_matching_item_decides() {
        let now = Utc.with_ymd_and_hms(2024, 9, 1, 10, 0, 0).unwrap();
        let items = vec![item("Tomatoes", now, 12), item("Cherry Tomatoes", now, 1)];
        let matcher = RecipeIngredientMatcher::new();
        assert_eq!(
            matcher.find_matching_item("tomatoes", &items).map(|i| i.name.as_str()),
            Some("Tomatoes")
        );
        assert!(!matcher.is_ingredient_expiring_soon("tomatoes", &items, now));
    }

    #[test]
    fn test_highlight_ingredients() {
        let now = Utc.with_ymd_and_hms(2024, 9, 1, 10, 0, 0).unwrap();
        let items = vec![item("Spinach", now, -2), item("Eggs", now, 9)];
        let highlights = RecipeIngredientMatcher::new().highlight_ingredients(&["spinach", "eggs", "feta"], &items, now);
        let flags: Vec<bool> = highlights.iter().map(|h| h.expiring_soon).collect();
        assert_eq!(flags, vec![true, false, false]);
        assert_eq!(highlights[2].ingredient, "feta");
    }
}

//! # Recipe Data Model
//!
//! Recipe records as read from the recipe store, ranking results from the
//! external matching service, AI-generated suggestions, and the criteria
//! used to filter recipe lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Ingredient lines in recipe order (e.g., "2 chicken breasts")
    pub ingredients: Vec<String>,
    /// Instruction steps in order
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub prep_time_minutes: Option<u32>,
    #[serde(default)]
    pub cook_time_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    /// Difficulty tier ("easy", "medium", "hard")
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub cuisine_type: Option<String>,
    #[serde(default)]
    pub meal_type: Option<String>,
    #[serde(flatten)]
    pub nutrition: Nutrition,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Recipe {
    /// Create a recipe with a name and ingredient lines
    pub fn new(name: &str, ingredients: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn with_difficulty(mut self, difficulty: &str) -> Self {
        self.difficulty = Some(difficulty.to_string());
        self
    }

    pub fn with_meal_type(mut self, meal_type: &str) -> Self {
        self.meal_type = Some(meal_type.to_string());
        self
    }

    pub fn with_cuisine_type(mut self, cuisine_type: &str) -> Self {
        self.cuisine_type = Some(cuisine_type.to_string());
        self
    }

    pub fn with_prep_time(mut self, minutes: u32) -> Self {
        self.prep_time_minutes = Some(minutes);
        self
    }

    /// Prep plus cook time, when both are known
    pub fn total_time_minutes(&self) -> Option<u32> {
        Some(self.prep_time_minutes? + self.cook_time_minutes?)
    }
}

/// Per-serving nutrition facts
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein_grams: Option<f64>,
    #[serde(default)]
    pub carbs_grams: Option<f64>,
    #[serde(default)]
    pub fat_grams: Option<f64>,
    #[serde(default)]
    pub fiber_grams: Option<f64>,
    #[serde(default)]
    pub sugar_grams: Option<f64>,
    #[serde(default)]
    pub sodium_mg: Option<f64>,
}

/// Ranking row returned by the external ingredient-matching service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeMatch {
    pub recipe_id: String,
    pub recipe_name: String,
    #[serde(default)]
    pub recipe_description: Option<String>,
    pub matching_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
    pub match_percentage: f64,
}

/// A recipe suggested by the generation service for the user's pantry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeneratedRecipe {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub prep_time_minutes: Option<u32>,
    #[serde(default)]
    pub cook_time_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub cuisine_type: Option<String>,
    #[serde(default)]
    pub meal_type: Option<String>,
    /// Pantry items the recipe draws on
    #[serde(default)]
    pub using_ingredients: Vec<String>,
    #[serde(default)]
    pub expiring_ingredients_count: Option<u32>,
    #[serde(default)]
    pub why_suggested: String,
}

/// Optional filters for a recipe list. `None` means "do not filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeCriteria {
    pub difficulty: Option<String>,
    pub meal_type: Option<String>,
    pub cuisine_type: Option<String>,
    pub max_prep_time: Option<u32>,
}

impl RecipeCriteria {
    /// All criteria must hold; unspecified ones pass.
    ///
    /// A recipe without a prep time passes any `max_prep_time`.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        field_matches(&self.difficulty, &recipe.difficulty)
            && field_matches(&self.meal_type, &recipe.meal_type)
            && field_matches(&self.cuisine_type, &recipe.cuisine_type)
            && match (self.max_prep_time, recipe.prep_time_minutes) {
                (Some(max), Some(prep)) => prep <= max,
                _ => true,
            }
    }
}

fn field_matches(wanted: &Option<String>, actual: &Option<String>) -> bool {
    match wanted {
        Some(wanted) => actual.as_deref() == Some(wanted.as_str()),
        None => true,
    }
}

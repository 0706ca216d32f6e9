//! # Recipe Suggestion Filter Module
//!
//! Decides whether a recipe-generation request is worth sending for the
//! current pantry. Staples and seasonings ("generic" ingredients) cannot
//! anchor a recipe on their own, so a pantry holding only those never
//! triggers generation.

use lazy_static::lazy_static;
use log::{debug, info};
use std::collections::HashSet;

use crate::food_model::{normalize_name, FoodItem};
use crate::pantry_config::PantryConfig;
use crate::recipe_model::GeneratedRecipe;

/// Staple ingredients, lowercase and trimmed
pub const GENERIC_INGREDIENTS: [&str; 18] = [
    "milk",
    "cream",
    "butter",
    "oil",
    "olive oil",
    "salt",
    "pepper",
    "sugar",
    "flour",
    "water",
    "vinegar",
    "garlic",
    "onion",
    "half-and-half",
    "buttermilk",
    "margarine",
    "honey",
    "maple syrup",
];

lazy_static! {
    static ref GENERIC_SET: HashSet<&'static str> = GENERIC_INGREDIENTS.iter().copied().collect();
}

/// Whether a name is a generic staple (exact match after lowercase/trim)
pub fn is_generic_ingredient(name: &str) -> bool {
    GENERIC_SET.contains(normalize_name(name).as_str())
}

/// True iff at least one name is not a generic staple
pub fn has_specific_ingredients<S: AsRef<str>>(names: &[S]) -> bool {
    names.iter().any(|name| !is_generic_ingredient(name.as_ref()))
}

/// Kind of generation request being considered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// First batch for the current pantry; replaces earlier results
    Initial,
    /// "More ideas": appends another batch to the current results
    More,
}

/// Why a generation request was not sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoItems,
    /// Initial generation needs at least this many items
    NotEnoughItems { required: usize },
    OnlyGenericIngredients,
}

/// Outcome of the generation gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationDecision {
    Generate,
    Skip(SkipReason),
}

impl GenerationDecision {
    pub fn should_generate(&self) -> bool {
        matches!(self, GenerationDecision::Generate)
    }
}

/// Gate for recipe-generation requests
#[derive(Debug, Clone)]
pub struct RecipeSuggestionFilter {
    min_items_for_generation: usize,
}

impl Default for RecipeSuggestionFilter {
    fn default() -> Self {
        Self::with_config(&PantryConfig::default())
    }
}

impl RecipeSuggestionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &PantryConfig) -> Self {
        Self {
            min_items_for_generation: config.min_items_for_generation,
        }
    }

    /// Evaluate the gate for `items`.
    ///
    /// Both modes require a specific ingredient. Only [`GenerationMode::Initial`]
    /// also enforces the minimum item count.
    pub fn should_generate(&self, items: &[FoodItem], mode: GenerationMode) -> GenerationDecision {
        let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
        let decision = if items.is_empty() {
            GenerationDecision::Skip(SkipReason::NoItems)
        } else if !has_specific_ingredients(&names) {
            GenerationDecision::Skip(SkipReason::OnlyGenericIngredients)
        } else if mode == GenerationMode::Initial && items.len() < self.min_items_for_generation {
            GenerationDecision::Skip(SkipReason::NotEnoughItems {
                required: self.min_items_for_generation,
            })
        } else {
            GenerationDecision::Generate
        };
        debug!("Generation gate for {} items ({:?}): {:?}", items.len(), mode, decision);
        decision
    }
}

/// Recipes generated for the current pantry, grouped in batches
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSession {
    current_batch: u32,
    recipes: Vec<GeneratedRecipe>,
}

impl Default for GenerationSession {
    fn default() -> Self {
        Self {
            current_batch: 1,
            recipes: Vec::new(),
        }
    }
}

impl GenerationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_batch(&self) -> u32 {
        self.current_batch
    }

    pub fn recipes(&self) -> &[GeneratedRecipe] {
        &self.recipes
    }

    /// Batch number to request for `mode`
    pub fn next_batch(&self, mode: GenerationMode) -> u32 {
        match mode {
            GenerationMode::Initial => 1,
            GenerationMode::More => self.current_batch + 1,
        }
    }

    /// Record a successful response. Initial replaces the results, More appends.
    pub fn accept(&mut self, mode: GenerationMode, recipes: Vec<GeneratedRecipe>) {
        self.current_batch = self.next_batch(mode);
        match mode {
            GenerationMode::Initial => self.recipes = recipes,
            GenerationMode::More => self.recipes.extend(recipes),
        }
        info!(
            "Batch {} accepted, {} recipes in session",
            self.current_batch,
            self.recipes.len()
        );
    }

    /// Record a failed request. A failed initial request clears the results;
    /// a failed "more" request keeps what was already shown.
    pub fn reject(&mut self, mode: GenerationMode) {
        if mode == GenerationMode::Initial {
            self.clear();
        }
    }

    pub fn clear(&mut self) {
        self.current_batch = 1;
        self.recipes.clear();
    }
}

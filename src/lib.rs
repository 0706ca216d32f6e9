//! # Shelf Life
//!
//! Derivation core for a household food-inventory tracker: expiration
//! status of food items, inventory statistics and quick-add suggestions,
//! and the rules that decide when and how recipe ideas relate to the
//! user's pantry.
//!
//! Every derivation takes the current time as an explicit argument and
//! recomputes from the expiration date; nothing reads a clock or trusts a
//! stored status.

pub mod food_entry;
pub mod food_model;
pub mod inventory;
pub mod pantry;
pub mod pantry_config;
pub mod pantry_errors;
pub mod recipe_filter;
pub mod recipe_matcher;
pub mod recipe_model;
pub mod report;
pub mod status;

//! Meal preference records for elderly care recipients.
//!
//! A caregiver records favourite foods, disliked foods (with severity), food
//! allergies (with severity) and free-text special instructions. This crate
//! holds that state in a [`PreferencesStore`], derives summary views from it,
//! and exports it as a JSON document.
//!
//! # Overview
//!
//! - [`PreferencesStore`] owns the current [`MealPreferences`] snapshot and
//!   replaces it on every change; unknown identifiers are silent no-ops.
//! - [`validate_required`] and [`validate_max_length`] gate input before it
//!   reaches the store.
//! - [`PreferencesSummary`] and [`render_print_summary`] derive the summary
//!   and print views.
//! - [`ExportDocument`] and [`write_export`] produce the
//!   `meal-preferences-<date>.json` export.
//!
//! # Example
//!
//! ```
//! use meal_preferences::{
//!     AllergySeverity, DislikeSeverity, MealCategory, PreferencesStore, PreferencesSummary,
//! };
//!
//! let mut store = PreferencesStore::new();
//! store.add_favorite_food("Pizza", Some(MealCategory::Dinner));
//! store.add_disliked_food("Liver", DislikeSeverity::Strong, None);
//! store.add_allergy("Peanuts", AllergySeverity::SevereAllergy, true);
//! store.update_special_instructions("Prefers soft textures");
//!
//! let summary = PreferencesSummary::of(&store.snapshot());
//! assert_eq!(summary.sections_completed, 4);
//!
//! store.reset_preferences();
//! assert!(!PreferencesSummary::of(&store.snapshot()).has_any_data);
//! ```

mod atomic_io;
mod catalogue;
mod error;
mod export;
mod ids;
mod model;
mod settings;
mod store;
mod summary;
mod validation;

pub use catalogue::{
    AllergySeverity, COMMON_ALLERGIES, DislikeSeverity, INSTRUCTION_EXAMPLES, MealCategory,
    is_common_allergen,
};
pub use error::{ExportError, ParseCatalogueError, PreferencesError};
pub use export::{ExportDocument, export_file_name, write_export};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use model::{DislikedFood, FoodAllergy, FoodId, FoodItem, MealPreferences};
pub use settings::PreferencesSettings;
pub use store::{PreferencesStore, SubscriptionId};
pub use summary::{
    PreferencesSummary, SECTION_COUNT, available_common_allergies, render_print_summary,
};
pub use validation::{
    NEAR_LIMIT_THRESHOLD, SPECIAL_INSTRUCTIONS_MAX, append_instruction_example, is_near_limit,
    remaining_characters, validate_max_length, validate_required,
};

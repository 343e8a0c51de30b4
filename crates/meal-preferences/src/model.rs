//! Preference records and the `MealPreferences` aggregate.
//!
//! Field names serialise in camelCase and absent optional fields are omitted,
//! which keeps the export document byte-compatible with earlier exports.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalogue::{AllergySeverity, DislikeSeverity, MealCategory};

/// Identifier of a single record within one of the preference collections.
///
/// Assigned once when the record is added and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodId(String);

impl FoodId {
    /// Wraps an already generated identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FoodId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A favourite food.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    /// Record identifier.
    pub id: FoodId,
    /// Trimmed, non-empty display name.
    pub name: String,
    /// Meal the food belongs to, if the caregiver chose one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<MealCategory>,
}

/// A food the care recipient dislikes or refuses.
///
/// Composes the favourite-food fields with a severity rather than extending
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DislikedFood {
    /// Identifier, name and optional category.
    #[serde(flatten)]
    pub food: FoodItem,
    /// How strongly the food should be avoided.
    pub severity: DislikeSeverity,
}

impl DislikedFood {
    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> &FoodId {
        &self.food.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.food.name
    }

    /// Returns the optional meal category.
    #[must_use]
    pub const fn category(&self) -> Option<MealCategory> {
        self.food.category
    }
}

/// A medically relevant food restriction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodAllergy {
    /// Record identifier.
    pub id: FoodId,
    /// Trimmed, non-empty display name.
    pub name: String,
    /// Medical severity.
    pub severity: AllergySeverity,
    /// Whether the entry was picked from the common allergen list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_common: Option<bool>,
}

impl FoodAllergy {
    /// Returns `true` when the entry carries the common-allergen badge.
    #[must_use]
    pub fn is_common(&self) -> bool {
        self.is_common.unwrap_or(false)
    }
}

/// The complete set of meal preferences for one care recipient.
///
/// Each list keeps insertion order. `Default` yields the blank aggregate the
/// store starts from and resets to.
///
/// # Examples
///
/// ```
/// use meal_preferences::MealPreferences;
///
/// let blank = MealPreferences::default();
/// assert!(blank.favorite_food.is_empty());
/// assert!(blank.special_instructions.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPreferences {
    /// Favourite foods.
    pub favorite_food: Vec<FoodItem>,
    /// Disliked foods.
    pub disliked_food: Vec<DislikedFood>,
    /// Allergies and intolerances.
    pub allergies: Vec<FoodAllergy>,
    /// Free-text notes for whoever prepares meals.
    pub special_instructions: String,
}

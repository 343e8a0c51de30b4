//! Fixed catalogues used by the preference records.
//!
//! Every enumeration here has a stable wire string (used in the JSON export),
//! a human-readable label, and an `ALL` list in display order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseCatalogueError;

/// Allergens offered as quick-add suggestions.
///
/// Membership only drives the "common" badge; it never changes behaviour.
pub const COMMON_ALLERGIES: [&str; 9] = [
    "Nuts (Tree nuts)",
    "Peanuts",
    "Dairy/Milk",
    "Eggs",
    "Gluten/Wheat",
    "Soy",
    "Fish",
    "Shellfish",
    "Sesame",
];

/// Canned special-instruction snippets a caregiver can append.
pub const INSTRUCTION_EXAMPLES: [&str; 8] = [
    "Prefers soft textures due to dental issues",
    "Enjoys warm meals, dislikes cold food",
    "Kosher dietary requirements",
    "Needs food cut into small pieces",
    "Prefers mild flavors, no spicy food",
    "Vegetarian for religious reasons",
    "Needs thickened liquids for swallowing safety",
    "Prefers familiar comfort foods",
];

/// Returns `true` when `name` is exactly one of [`COMMON_ALLERGIES`].
///
/// # Examples
///
/// ```
/// use meal_preferences::is_common_allergen;
///
/// assert!(is_common_allergen("Peanuts"));
/// assert!(!is_common_allergen("peanuts"));
/// ```
#[must_use]
pub fn is_common_allergen(name: &str) -> bool {
    COMMON_ALLERGIES.contains(&name)
}

/// The meal a favourite or disliked food is associated with.
///
/// # Examples
///
/// ```
/// use meal_preferences::MealCategory;
///
/// assert_eq!(MealCategory::Snacks.as_str(), "snacks");
/// assert_eq!(MealCategory::Snacks.label(), "Snacks");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    /// Morning meal.
    Breakfast,
    /// Midday meal.
    Lunch,
    /// Evening meal.
    Dinner,
    /// Anything between meals.
    Snacks,
}

impl MealCategory {
    /// All categories in display order.
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snacks];

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snacks => "snacks",
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snacks => "Snacks",
        }
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealCategory {
    type Err = ParseCatalogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCatalogueError {
                kind: "meal category",
                input: s.to_owned(),
            })
    }
}

/// How strongly a disliked food should be avoided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DislikeSeverity {
    /// Would rather not, but will eat it.
    Mild,
    /// Refuses the food outright.
    Strong,
}

impl DislikeSeverity {
    /// All severities from weakest to strongest.
    pub const ALL: [Self; 2] = [Self::Mild, Self::Strong];

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Strong => "strong",
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mild => "Mild Dislike",
            Self::Strong => "Absolutely Won't Eat",
        }
    }
}

impl fmt::Display for DislikeSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DislikeSeverity {
    type Err = ParseCatalogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str() == s)
            .ok_or_else(|| ParseCatalogueError {
                kind: "dislike severity",
                input: s.to_owned(),
            })
    }
}

/// Medical severity of a food allergy or intolerance.
///
/// Variants are ordered, so `SevereAllergy` compares greater than
/// `MildIntolerance`.
///
/// # Examples
///
/// ```
/// use meal_preferences::AllergySeverity;
///
/// assert!(AllergySeverity::SevereAllergy > AllergySeverity::ModerateIntolerance);
/// assert_eq!(AllergySeverity::SevereAllergy.description(), "Life-threatening reaction");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AllergySeverity {
    /// Mild discomfort.
    MildIntolerance,
    /// Noticeable symptoms.
    ModerateIntolerance,
    /// Potentially life-threatening reaction.
    SevereAllergy,
}

impl AllergySeverity {
    /// All severities from mildest to most severe.
    pub const ALL: [Self; 3] = [
        Self::MildIntolerance,
        Self::ModerateIntolerance,
        Self::SevereAllergy,
    ];

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MildIntolerance => "mild-intolerance",
            Self::ModerateIntolerance => "moderate-intolerance",
            Self::SevereAllergy => "severe-allergy",
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MildIntolerance => "Mild Intolerance",
            Self::ModerateIntolerance => "Moderate Intolerance",
            Self::SevereAllergy => "Severe Allergy",
        }
    }

    /// Returns the one-line description shown next to the label.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MildIntolerance => "May cause mild discomfort",
            Self::ModerateIntolerance => "Causes noticeable symptoms",
            Self::SevereAllergy => "Life-threatening reaction",
        }
    }
}

impl fmt::Display for AllergySeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AllergySeverity {
    type Err = ParseCatalogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str() == s)
            .ok_or_else(|| ParseCatalogueError {
                kind: "allergy severity",
                input: s.to_owned(),
            })
    }
}

//! Derived views over a preferences snapshot: counts, progress, quick-add
//! suggestions and the plain-text print layout.

use chrono::{DateTime, Utc};

use crate::catalogue::{COMMON_ALLERGIES, MealCategory};
use crate::model::{FoodAllergy, MealPreferences};

/// Number of sections a caregiver can fill in.
pub const SECTION_COUNT: usize = 4;

/// Counts and flags shown in the summary and the section progress bar.
///
/// # Examples
///
/// ```
/// use meal_preferences::{MealPreferences, PreferencesSummary};
///
/// let summary = PreferencesSummary::of(&MealPreferences::default());
/// assert!(!summary.has_any_data);
/// assert_eq!(summary.sections_completed, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferencesSummary {
    /// Number of favourite foods.
    pub favorite_count: usize,
    /// Number of disliked foods.
    pub disliked_count: usize,
    /// Number of allergies.
    pub allergy_count: usize,
    /// Whether the special instructions contain non-whitespace text.
    pub has_special_instructions: bool,
    /// Whether any section holds data.
    pub has_any_data: bool,
    /// How many of the [`SECTION_COUNT`] sections hold data.
    pub sections_completed: usize,
}

impl PreferencesSummary {
    /// Summarises a snapshot.
    #[must_use]
    pub fn of(preferences: &MealPreferences) -> Self {
        let has_special_instructions = !preferences.special_instructions.trim().is_empty();
        let filled = [
            !preferences.favorite_food.is_empty(),
            !preferences.disliked_food.is_empty(),
            !preferences.allergies.is_empty(),
            has_special_instructions,
        ];
        let sections_completed = filled.iter().filter(|section| **section).count();
        Self {
            favorite_count: preferences.favorite_food.len(),
            disliked_count: preferences.disliked_food.len(),
            allergy_count: preferences.allergies.len(),
            has_special_instructions,
            has_any_data: sections_completed > 0,
            sections_completed,
        }
    }
}

/// Common allergens not yet recorded under their exact name.
///
/// # Examples
///
/// ```
/// use meal_preferences::{AllergySeverity, PreferencesStore, available_common_allergies};
///
/// let mut store = PreferencesStore::new();
/// store.add_allergy("Peanuts", AllergySeverity::SevereAllergy, true);
///
/// let available = available_common_allergies(&store.preferences().allergies);
/// assert!(!available.contains(&"Peanuts"));
/// assert_eq!(available.len(), 8);
/// ```
#[must_use]
pub fn available_common_allergies(allergies: &[FoodAllergy]) -> Vec<&'static str> {
    COMMON_ALLERGIES
        .into_iter()
        .filter(|common| !allergies.iter().any(|allergy| allergy.name == *common))
        .collect()
}

/// Renders the printable summary as plain text.
///
/// Allergies come first because they are the safety-critical section. Empty
/// sections are left out; a snapshot with no data renders the empty-state
/// message instead.
#[must_use]
pub fn render_print_summary(preferences: &MealPreferences, generated_at: DateTime<Utc>) -> String {
    let summary = PreferencesSummary::of(preferences);
    if !summary.has_any_data {
        return [
            "Summary",
            "No meal preferences have been added yet.",
            "Start by adding favorite foods, dislikes, or allergies above.",
        ]
        .join("\n");
    }

    let mut lines = vec![
        "Meal Preferences Summary".to_owned(),
        format!(
            "Generated on {} at {} UTC",
            generated_at.format("%Y-%m-%d"),
            generated_at.format("%H:%M:%S")
        ),
    ];

    if !preferences.allergies.is_empty() {
        lines.push(String::new());
        lines.push("CRITICAL: Food Allergies & Intolerances".to_owned());
        lines.extend(preferences.allergies.iter().map(|allergy| {
            let badge = if allergy.is_common() {
                " (Common Allergy)"
            } else {
                ""
            };
            format!("- {}: {}{badge}", allergy.name, allergy.severity.label())
        }));
    }

    if !preferences.favorite_food.is_empty() {
        lines.push(String::new());
        lines.push(format!("Favorite Foods ({})", summary.favorite_count));
        lines.extend(
            preferences
                .favorite_food
                .iter()
                .map(|food| format!("- {}{}", food.name, category_tag(food.category))),
        );
    }

    if !preferences.disliked_food.is_empty() {
        lines.push(String::new());
        lines.push(format!("Disliked Foods ({})", summary.disliked_count));
        lines.extend(preferences.disliked_food.iter().map(|disliked| {
            format!(
                "- {}: {}{}",
                disliked.name(),
                disliked.severity.label(),
                category_tag(disliked.category())
            )
        }));
    }

    if summary.has_special_instructions {
        lines.push(String::new());
        lines.push("Special Instructions".to_owned());
        lines.push(preferences.special_instructions.clone());
    }

    lines.push(String::new());
    lines.push("Quick Statistics".to_owned());
    lines.push(format!("Favorite foods: {}", summary.favorite_count));
    lines.push(format!("Disliked foods: {}", summary.disliked_count));
    lines.push(format!("Allergies: {}", summary.allergy_count));
    lines.push(format!(
        "Special instructions: {}",
        if summary.has_special_instructions {
            "yes"
        } else {
            "no"
        }
    ));

    lines.join("\n")
}

fn category_tag(category: Option<MealCategory>) -> String {
    category
        .map(|meal| format!(" [{}]", meal.label()))
        .unwrap_or_default()
}

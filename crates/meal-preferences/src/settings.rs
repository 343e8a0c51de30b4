//! Store settings.
//!
//! Settings are plain data with serde defaults so a host application can
//! embed them in its own configuration document.

use serde::{Deserialize, Serialize};

use crate::error::PreferencesError;
use crate::validation::{
    NEAR_LIMIT_THRESHOLD, SPECIAL_INSTRUCTIONS_MAX, is_near_limit, remaining_characters,
    validate_max_length,
};

/// Limits applied by the validation helpers and the checked store gate.
///
/// # Examples
///
/// ```
/// use meal_preferences::PreferencesSettings;
///
/// let settings = PreferencesSettings::from_json(r#"{"instructionsMaxLength": 250}"#)
///     .expect("valid settings");
/// assert_eq!(settings.instructions_max_length, 250);
/// assert_eq!(settings.near_limit_threshold, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PreferencesSettings {
    /// Maximum special-instructions length in characters.
    pub instructions_max_length: usize,
    /// Remaining characters at which a near-limit warning is shown.
    pub near_limit_threshold: usize,
}

impl Default for PreferencesSettings {
    fn default() -> Self {
        Self {
            instructions_max_length: SPECIAL_INSTRUCTIONS_MAX,
            near_limit_threshold: NEAR_LIMIT_THRESHOLD,
        }
    }
}

impl PreferencesSettings {
    /// Parses settings from JSON, filling unspecified fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PreferencesError::InvalidSettings`] if the JSON is malformed
    /// or names an unknown field.
    pub fn from_json(json: &str) -> Result<Self, PreferencesError> {
        serde_json::from_str(json).map_err(|e| PreferencesError::InvalidSettings {
            message: e.to_string(),
        })
    }

    /// Returns `true` if `text` fits the instructions limit.
    #[must_use]
    pub fn instructions_fit(&self, text: &str) -> bool {
        validate_max_length(text, self.instructions_max_length)
    }

    /// Characters left in the instructions field; negative once exceeded.
    ///
    /// # Examples
    ///
    /// ```
    /// use meal_preferences::PreferencesSettings;
    ///
    /// let settings = PreferencesSettings::default();
    /// assert_eq!(settings.remaining_characters("Soft food"), 491);
    /// ```
    #[must_use]
    pub fn remaining_characters(&self, text: &str) -> i64 {
        remaining_characters(text, self.instructions_max_length)
    }

    /// Returns `true` when the near-limit warning should be shown for `text`.
    #[must_use]
    pub fn is_near_limit(&self, text: &str) -> bool {
        is_near_limit(
            text,
            self.instructions_max_length,
            self.near_limit_threshold,
        )
    }
}

//! JSON export of a preferences snapshot.
//!
//! The document shape and the file name are the one compatibility surface of
//! the crate:
//!
//! ```json
//! {
//!   "exportDate": "2026-10-19T09:30:00.000Z",
//!   "mealPreferences": { "favoriteFood": [], "dislikedFood": [], "allergies": [], "specialInstructions": "" }
//! }
//! ```
//!
//! written with two-space indentation to `meal-preferences-<YYYY-MM-DD>.json`,
//! where the date is the UTC export date.

use camino::Utf8PathBuf;
use cap_std::fs::Dir;
use chrono::{DateTime, SecondsFormat, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::atomic_io::write_atomic;
use crate::error::ExportError;
use crate::model::MealPreferences;

/// The exported document: a timestamp plus the aggregate verbatim.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use meal_preferences::{ExportDocument, MealPreferences};
///
/// let exported_at = Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).single().expect("valid time");
/// let document = ExportDocument::new(&MealPreferences::default(), exported_at);
///
/// assert_eq!(document.export_date, "2026-10-19T09:30:00.000Z");
/// let json = document.to_json_pretty().expect("serialise");
/// assert!(json.starts_with("{\n  \"exportDate\""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    /// Export time as an ISO-8601 UTC timestamp with millisecond precision.
    pub export_date: String,
    /// The snapshot at export time.
    pub meal_preferences: MealPreferences,
}

impl ExportDocument {
    /// Captures `preferences` as exported at `exported_at`.
    #[must_use]
    pub fn new(preferences: &MealPreferences, exported_at: DateTime<Utc>) -> Self {
        Self {
            export_date: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            meal_preferences: preferences.clone(),
        }
    }

    /// Serialises the document with two-space indentation.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::SerializeError`] if serialisation fails.
    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self).map_err(|e| ExportError::SerializeError {
            message: e.to_string(),
        })
    }

    /// Parses a previously exported document.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::ParseError`] if the JSON is malformed or does not
    /// match the export shape.
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        serde_json::from_str(json).map_err(|e| ExportError::ParseError {
            message: e.to_string(),
        })
    }
}

/// File name for an export taken at `exported_at`.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use meal_preferences::export_file_name;
///
/// let exported_at = Utc.with_ymd_and_hms(2026, 10, 19, 23, 59, 0).single().expect("valid time");
/// assert_eq!(export_file_name(exported_at).as_str(), "meal-preferences-2026-10-19.json");
/// ```
#[must_use]
pub fn export_file_name(exported_at: DateTime<Utc>) -> Utf8PathBuf {
    Utf8PathBuf::from(format!(
        "meal-preferences-{}.json",
        exported_at.format("%Y-%m-%d")
    ))
}

/// Writes the export document for `preferences` into `dir`.
///
/// The timestamp is read once from `clock` and used for both the document and
/// the file name. Returns the file name written, relative to `dir`.
///
/// # Errors
///
/// Returns [`ExportError`] if serialisation or the atomic write fails.
pub fn write_export(
    dir: &Dir,
    preferences: &MealPreferences,
    clock: &dyn Clock,
) -> Result<Utf8PathBuf, ExportError> {
    let exported_at = clock.utc();
    let document = ExportDocument::new(preferences, exported_at);
    let json = document.to_json_pretty()?;
    let file_name = export_file_name(exported_at);

    write_atomic(dir, &file_name, &json)?;
    info!(
        file = %file_name,
        favorites = preferences.favorite_food.len(),
        dislikes = preferences.disliked_food.len(),
        allergies = preferences.allergies.len(),
        "meal preferences exported"
    );
    Ok(file_name)
}

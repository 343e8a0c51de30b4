//! Input checks applied before calling into the store.
//!
//! The store only trims names. Rejecting blank names or over-long
//! instructions is the caller's job, and these helpers are what callers use.
//!
//! Lengths are counted in Unicode scalar values, not bytes.

/// Maximum length of the special instructions text.
pub const SPECIAL_INSTRUCTIONS_MAX: usize = 500;

/// Remaining-character count at or below which the caller should warn.
pub const NEAR_LIMIT_THRESHOLD: usize = 50;

/// Returns `true` if `text` contains anything other than whitespace.
///
/// # Examples
///
/// ```
/// use meal_preferences::validate_required;
///
/// assert!(validate_required(" Soup "));
/// assert!(!validate_required("   "));
/// ```
#[must_use]
pub fn validate_required(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Returns `true` if `text` is at most `limit` characters long.
///
/// # Examples
///
/// ```
/// use meal_preferences::validate_max_length;
///
/// assert!(validate_max_length("abc", 3));
/// assert!(!validate_max_length("abcd", 3));
/// ```
#[must_use]
pub fn validate_max_length(text: &str, limit: usize) -> bool {
    text.chars().count() <= limit
}

/// Characters left before `text` reaches `limit`; negative once exceeded.
#[must_use]
pub fn remaining_characters(text: &str, limit: usize) -> i64 {
    let length = i64::try_from(text.chars().count()).unwrap_or(i64::MAX);
    let max = i64::try_from(limit).unwrap_or(i64::MAX);
    max.saturating_sub(length)
}

/// Returns `true` when `threshold` or fewer characters remain.
#[must_use]
pub fn is_near_limit(text: &str, limit: usize, threshold: usize) -> bool {
    remaining_characters(text, limit) <= i64::try_from(threshold).unwrap_or(i64::MAX)
}

/// Appends an example snippet as a bullet on its own line.
///
/// Returns `None` when the combined text would exceed `limit`, in which case
/// the caller keeps the current text unchanged.
///
/// # Examples
///
/// ```
/// use meal_preferences::append_instruction_example;
///
/// let first = append_instruction_example("", "Kosher dietary requirements", 500);
/// assert_eq!(first.as_deref(), Some("• Kosher dietary requirements"));
///
/// let second = append_instruction_example("• Soft food", "No spice", 500);
/// assert_eq!(second.as_deref(), Some("• Soft food\n• No spice"));
/// ```
#[must_use]
pub fn append_instruction_example(current: &str, example: &str, limit: usize) -> Option<String> {
    let combined = if current.is_empty() {
        format!("• {example}")
    } else {
        format!("{current}\n• {example}")
    };
    validate_max_length(&combined, limit).then_some(combined)
}

//! Error types for the meal-preferences crate.
//!
//! The store itself never fails: unknown identifiers are silent no-ops and
//! names are only trimmed. Errors exist for the edges around it: parsing
//! catalogue values, the opt-in instructions gate, settings, and export.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Error returned when a catalogue wire string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {input}")]
pub struct ParseCatalogueError {
    /// The catalogue being parsed, e.g. `"meal category"`.
    pub kind: &'static str,
    /// The unrecognised input value.
    pub input: String,
}

/// Errors raised by the optional validation gates in front of the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferencesError {
    /// Special instructions exceed the configured character limit.
    #[error("special instructions are {length} characters long; the limit is {max}")]
    InstructionsTooLong {
        /// Length of the rejected text in characters.
        length: usize,
        /// Configured maximum length.
        max: usize,
    },

    /// The settings document could not be parsed.
    #[error("invalid settings JSON: {message}")]
    InvalidSettings {
        /// Description of the parse error.
        message: String,
    },
}

/// Errors that can occur while exporting or re-reading preferences.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The export document could not be serialised.
    #[error("failed to serialise export document: {message}")]
    SerializeError {
        /// Description of the serialisation error.
        message: String,
    },

    /// The export JSON is malformed or missing required fields.
    #[error("invalid export JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The export file could not be written.
    #[error("failed to write export file at '{path}': {message}")]
    WriteError {
        /// Path to the export file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}

//! Error types for condition set construction and loading.

use thiserror::Error;

/// Errors produced while building or loading a
/// [`ConditionSet`](crate::ConditionSet).
///
/// Scoring itself never fails; all validation happens up front so that every
/// accepted condition set yields finite, non-negative scores.
#[derive(Debug, Error)]
pub enum ConditionError {
    /// A condition was declared without a field name.
    #[error("condition has an empty field name")]
    EmptyName,

    /// A weight was negative.
    #[error("condition '{name}' has a negative weight")]
    NegativeWeight { name: String },

    /// A weight was NaN or infinite.
    #[error("condition '{name}' has a non-finite weight")]
    NonFiniteWeight { name: String },

    /// A condition file had an extension other than `.toml` or `.json`.
    #[error("unsupported condition file format '{extension}'")]
    UnsupportedFormat { extension: String },

    /// Failed to parse a TOML condition table.
    #[error("invalid TOML condition table: {0}")]
    Toml(#[from] toml::de::Error),

    /// Failed to parse a JSON condition document.
    #[error("invalid JSON condition document: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read a condition file.
    #[error("failed to read condition file: {0}")]
    Io(#[from] std::io::Error),
}

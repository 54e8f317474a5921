//! Error types for table configuration and rendering.
//!
//! Rendering is pure layout arithmetic on top of a [`Canvas`](crate::writer::Canvas),
//! so the only failures are configurations (or rows) that the layout math
//! cannot honour.

/// Result type alias for table operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while configuring or drawing a table.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A per-column sequence disagrees with the configured column count
    #[error("Configuration mismatch: {what} has {found} entries, table has {expected} columns")]
    ConfigurationMismatch {
        /// What was being checked (row data, header titles, alignments)
        what: &'static str,
        /// Number of configured columns
        expected: usize,
        /// Number of entries actually supplied
        found: usize,
    },

    /// A dimension the layout math needs to be positive is not
    #[error("Invalid dimension: {what} = {value}")]
    InvalidDimension {
        /// Which dimension was rejected
        what: String,
        /// The rejected value
        value: f32,
    },

    /// Table configuration could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn mismatch(what: &'static str, expected: usize, found: usize) -> Self {
        Error::ConfigurationMismatch {
            what,
            expected,
            found,
        }
    }

    pub(crate) fn invalid_dimension(what: impl Into<String>, value: f32) -> Self {
        Error::InvalidDimension {
            what: what.into(),
            value,
        }
    }
}

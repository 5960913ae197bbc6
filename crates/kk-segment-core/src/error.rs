//! Error types for kk-segment-core.
//!
//! This module defines the central error type [`SegmentError`] used throughout
//! the crate, along with the [`SegmentResult<T>`] type alias.
//!
//! Input coercion never surfaces here: malformed ages become 0 and empty
//! categories become `"Unknown"` at the point of encoding. Undefined quality
//! metrics are `None`, not errors.
//!
//! # Examples
//!
//! ```rust
//! use kk_segment_core::SegmentError;
//!
//! let error = SegmentError::InsufficientData {
//!     view: "full".to_string(),
//!     rows: 0,
//! };
//! assert!(error.to_string().contains("full"));
//! ```

use thiserror::Error;

/// Top-level error type for segmentation operations.
#[derive(Debug, Error)]
pub enum SegmentError {
    /// Clustering was requested on an empty feature matrix.
    ///
    /// # When This Occurs
    ///
    /// - The respondent batch is empty
    /// - Every record was filtered out before encoding
    ///
    /// Callers skip the affected view rather than aborting the whole run.
    #[error("Insufficient data for {view} view: {rows} rows")]
    InsufficientData {
        /// Feature view being clustered
        view: String,
        /// Number of rows supplied
        rows: usize,
    },

    /// A clustering or recommendation parameter is out of range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A feature row does not have the dimensionality of its view.
    #[error("Feature dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimensionality declared by the view
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// Configuration is invalid or could not be loaded.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl SegmentError {
    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    /// Whether this error means the view should be skipped, not the run aborted.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData { .. })
    }
}

impl From<config::ConfigError> for SegmentError {
    fn from(err: config::ConfigError) -> Self {
        SegmentError::ConfigError(err.to_string())
    }
}

/// Result type alias for segmentation operations.
pub type SegmentResult<T> = Result<T, SegmentError>;

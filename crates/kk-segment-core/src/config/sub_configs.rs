//! Sub-configuration structures that have no better home.
//!
//! Clustering and recommendation parameters live beside the code that uses
//! them ([`crate::clustering::KMeansConfig`],
//! [`crate::recommend::RecommendationConfig`]).

use serde::{Deserialize, Serialize};

/// Pipeline execution settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// Cluster the full and focused views concurrently.
    #[serde(default)]
    pub parallel_views: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// "pretty" or "compact".
    pub format: String,
    pub include_location: bool,
}

impl LoggingConfig {
    pub const VALID_FORMATS: [&'static str; 2] = ["pretty", "compact"];
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            include_location: false,
        }
    }
}

//! Configuration for k-means clustering.
//!
//! Provides validated configuration for clustering parameters.

use serde::{Deserialize, Serialize};

use crate::error::{SegmentError, SegmentResult};

/// Configuration for k-means clustering.
///
/// # Validation
///
/// [`KMeansConfig::new`] validates all parameters. Configs built through
/// struct literals or deserialization should go through [`KMeansConfig::validate`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KMeansConfig {
    /// Number of clusters (k). Must be > 0.
    #[serde(default = "default_k")]
    pub k: usize,

    /// Number of independent initializations. The run with the lowest
    /// inertia is kept. Must be > 0.
    #[serde(default = "default_n_init")]
    pub n_init: usize,

    /// Maximum Lloyd iterations per initialization. Must be > 0.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Iteration stops when the largest centroid shift falls below this.
    /// Must be finite and > 0.0.
    #[serde(default = "default_convergence_threshold")]
    pub convergence_threshold: f64,

    /// Random seed (None = seeded from entropy on every call).
    ///
    /// Production leaves this unset so each request sees fresh groupings.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_k() -> usize {
    3
}

fn default_n_init() -> usize {
    10
}

fn default_max_iterations() -> usize {
    300
}

fn default_convergence_threshold() -> f64 {
    1e-4
}

impl KMeansConfig {
    /// Create a new configuration with validation.
    ///
    /// # Errors
    ///
    /// Returns `SegmentError::InvalidParameter` if any parameter is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use kk_segment_core::clustering::KMeansConfig;
    ///
    /// let config = KMeansConfig::new(3, 10, 300, 1e-4).unwrap();
    /// assert_eq!(config.k, 3);
    /// assert!(KMeansConfig::new(0, 10, 300, 1e-4).is_err());
    /// ```
    pub fn new(
        k: usize,
        n_init: usize,
        max_iterations: usize,
        convergence_threshold: f64,
    ) -> SegmentResult<Self> {
        let config = Self {
            k,
            n_init,
            max_iterations,
            convergence_threshold,
            seed: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Default configuration for the given number of clusters.
    pub fn with_k(k: usize) -> SegmentResult<Self> {
        Self::new(
            k,
            default_n_init(),
            default_max_iterations(),
            default_convergence_threshold(),
        )
    }

    /// Fix the random seed for reproducible partitions.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check all parameters.
    pub fn validate(&self) -> SegmentResult<()> {
        if self.k == 0 {
            return Err(SegmentError::invalid_parameter("k must be > 0"));
        }
        if self.n_init == 0 {
            return Err(SegmentError::invalid_parameter("n_init must be > 0"));
        }
        if self.max_iterations == 0 {
            return Err(SegmentError::invalid_parameter("max_iterations must be > 0"));
        }
        if !self.convergence_threshold.is_finite() {
            return Err(SegmentError::invalid_parameter(
                "convergence_threshold must be a finite positive number",
            ));
        }
        if self.convergence_threshold <= 0.0 {
            return Err(SegmentError::invalid_parameter(
                "convergence_threshold must be > 0.0",
            ));
        }
        Ok(())
    }
}

impl Default for KMeansConfig {
    /// k=3, n_init=10, max_iterations=300, convergence_threshold=1e-4, no seed.
    fn default() -> Self {
        Self {
            k: default_k(),
            n_init: default_n_init(),
            max_iterations: default_max_iterations(),
            convergence_threshold: default_convergence_threshold(),
            seed: None,
        }
    }
}

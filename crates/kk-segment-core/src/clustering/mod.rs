//! K-means clustering over respondent feature matrices.
//!
//! # Algorithm
//!
//! 1. Initialize k centroids using k-means++ (D² weighted sampling)
//! 2. Assign each row to its nearest centroid (Euclidean distance)
//! 3. Recompute centroids as the mean of assigned rows
//! 4. Repeat until assignments stop changing, centroids settle, or
//!    `max_iterations` is reached
//! 5. Repeat the whole run `n_init` times and keep the lowest inertia
//!
//! # Fail-Fast Validation
//!
//! - the feature matrix must not be empty (`InsufficientData`)
//! - k, n_init and max_iterations must be > 0
//! - convergence_threshold must be finite and > 0.0
//!
//! Fewer distinct rows than k is not an error: some groups stay empty and
//! quality metrics are reported as absent.

mod algorithms;
mod clusterer;
mod config;
pub mod metrics;
mod types;

pub use algorithms::{compute_centroids, compute_inertia, kmeans_plus_plus_init, nearest_centroid};
pub use clusterer::{KMeans, PartitionClusterer};
pub use config::KMeansConfig;
pub use metrics::QualityMetrics;
pub use types::{ClusteringResult, Partition};

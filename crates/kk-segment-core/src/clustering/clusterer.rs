//! K-means clustering implementation.
//!
//! Provides [`KMeans`], a k-means++ / Lloyd clusterer with multiple restarts.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::encoder::FeatureMatrix;
use crate::error::{SegmentError, SegmentResult};

use super::algorithms::lloyd;
use super::config::KMeansConfig;
use super::metrics::compute_quality;
use super::types::{ClusteringResult, Partition};

/// Trait for partition clustering over a feature matrix.
pub trait PartitionClusterer {
    /// Partition the rows of `matrix` into `config.k` groups.
    ///
    /// # Errors
    ///
    /// - `SegmentError::InsufficientData` if the matrix has no rows
    /// - `SegmentError::InvalidParameter` if the config is invalid
    fn partition(
        &self,
        matrix: &FeatureMatrix,
        config: &KMeansConfig,
    ) -> SegmentResult<ClusteringResult>;
}

/// Standard k-means with k-means++ initialization and `n_init` restarts.
///
/// Without a configured seed every call draws a fresh seed from entropy, so
/// repeated calls over the same data may return different groupings.
#[derive(Clone, Debug, Default)]
pub struct KMeans;

impl KMeans {
    pub fn new() -> Self {
        Self
    }
}

impl PartitionClusterer for KMeans {
    fn partition(
        &self,
        matrix: &FeatureMatrix,
        config: &KMeansConfig,
    ) -> SegmentResult<ClusteringResult> {
        config.validate()?;
        if matrix.is_empty() {
            return Err(SegmentError::InsufficientData {
                view: matrix.view().to_string(),
                rows: 0,
            });
        }

        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut rng = StdRng::seed_from_u64(seed);
        let vectors = matrix.rows();

        tracing::debug!(
            view = %matrix.view(),
            k = config.k,
            n = vectors.len(),
            n_init = config.n_init,
            seed,
            "Starting k-means"
        );

        let mut best = lloyd(
            vectors,
            config.k,
            config.max_iterations,
            config.convergence_threshold,
            &mut rng,
        );
        for _ in 1..config.n_init {
            let run = lloyd(
                vectors,
                config.k,
                config.max_iterations,
                config.convergence_threshold,
                &mut rng,
            );
            if run.inertia < best.inertia {
                best = run;
            }
        }

        if !best.converged {
            tracing::warn!(
                view = %matrix.view(),
                iterations = best.iterations,
                "k-means did not converge"
            );
        }

        let partition = Partition::new(best.assignments, config.k).ok_or_else(|| {
            SegmentError::invalid_parameter("k-means produced a label outside 0..k")
        })?;
        let quality = compute_quality(vectors, &partition);

        tracing::info!(
            view = %matrix.view(),
            groups = partition.effective_groups(),
            inertia = best.inertia,
            iterations = best.iterations,
            silhouette = ?quality.silhouette,
            "k-means completed"
        );

        Ok(ClusteringResult {
            partition,
            centroids: best.centroids,
            inertia: best.inertia,
            iterations: best.iterations,
            converged: best.converged,
            seed,
            quality,
        })
    }
}

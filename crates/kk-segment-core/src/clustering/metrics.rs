//! Distance functions and partition quality metrics.
//!
//! Three scores are reported for a partition:
//!
//! - **Silhouette**: mean of (b - a) / max(a, b) per point, in [-1, 1]
//! - **Calinski-Harabasz**: between/within dispersion ratio, higher is better
//! - **Davies-Bouldin**: mean worst-case similarity between clusters, lower is better
//!
//! All three are undefined when the partition has fewer than two non-empty
//! groups, when every point is its own group, or when the matrix has fewer
//! distinct rows than requested groups. They are then reported as `None`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::types::Partition;

/// Squared Euclidean distance. Uses squared distance to avoid sqrt for comparison.
#[inline]
pub fn euclidean_distance_squared(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}

#[inline]
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    euclidean_distance_squared(a, b).sqrt()
}

/// Quality scores of a partition. Each is `None` when undefined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    /// Average silhouette coefficient (cohesion/separation ratio).
    pub silhouette: Option<f64>,

    /// Calinski-Harabasz index (between/within dispersion ratio).
    pub calinski_harabasz: Option<f64>,

    /// Davies-Bouldin index (inverse-separation ratio).
    pub davies_bouldin: Option<f64>,
}

impl QualityMetrics {
    /// All metrics absent.
    pub fn undefined() -> Self {
        Self::default()
    }

    pub fn is_defined(&self) -> bool {
        self.silhouette.is_some() || self.calinski_harabasz.is_some() || self.davies_bouldin.is_some()
    }
}

/// Number of distinct rows, compared bit-for-bit.
pub fn distinct_rows(rows: &[Vec<f64>]) -> usize {
    rows.iter()
        .map(|row| row.iter().map(|v| v.to_bits()).collect::<Vec<u64>>())
        .collect::<HashSet<_>>()
        .len()
}

/// Whether quality metrics are defined for this partition of `rows`.
pub fn metrics_defined(rows: &[Vec<f64>], partition: &Partition) -> bool {
    let groups = partition.effective_groups();
    let n = rows.len();
    groups >= 2 && groups < n && distinct_rows(rows) >= partition.k()
}

/// Compute all quality metrics, or none if the partition is degenerate.
pub fn compute_quality(rows: &[Vec<f64>], partition: &Partition) -> QualityMetrics {
    if !metrics_defined(rows, partition) {
        tracing::debug!(
            rows = rows.len(),
            groups = partition.effective_groups(),
            "Quality metrics undefined for degenerate partition"
        );
        return QualityMetrics::undefined();
    }

    QualityMetrics {
        silhouette: Some(compute_silhouette(rows, partition)),
        calinski_harabasz: Some(compute_calinski_harabasz(rows, partition)),
        davies_bouldin: Some(compute_davies_bouldin(rows, partition)),
    }
}

/// Compute Silhouette coefficient for a single point.
///
/// s(i) = (b(i) - a(i)) / max(a(i), b(i))
///
/// Where a(i) is the mean distance to other points in the same cluster,
/// and b(i) is the minimum mean distance to points in any other non-empty
/// cluster. A point alone in its cluster scores 0.
///
/// Distances are accumulated per cluster as they are computed, so memory
/// stays O(k) per point.
pub fn silhouette_coefficient(point_idx: usize, rows: &[Vec<f64>], partition: &Partition) -> f64 {
    let labels = partition.labels();
    let own = labels[point_idx];

    let mut sums = vec![0.0; partition.k()];
    let mut counts = vec![0usize; partition.k()];
    for (i, (row, &label)) in rows.iter().zip(labels).enumerate() {
        if i == point_idx {
            continue;
        }
        sums[label] += euclidean_distance(&rows[point_idx], row);
        counts[label] += 1;
    }

    if counts[own] == 0 {
        return 0.0;
    }
    let a = sums[own] / counts[own] as f64;

    let b = (0..partition.k())
        .filter(|&c| c != own && counts[c] > 0)
        .map(|c| sums[c] / counts[c] as f64)
        .fold(None, |best: Option<f64>, mean| Some(best.map_or(mean, |b| b.min(mean))))
        .unwrap_or(0.0);

    let max_ab = a.max(b);
    if max_ab < f64::EPSILON {
        0.0
    } else {
        (b - a) / max_ab
    }
}

/// Average Silhouette coefficient over all points.
pub fn compute_silhouette(rows: &[Vec<f64>], partition: &Partition) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }

    let n = rows.len();
    let sum: f64 = (0..n)
        .map(|i| silhouette_coefficient(i, rows, partition))
        .sum();

    sum / n as f64
}

/// Calinski-Harabasz index.
///
/// CH = [B / (k - 1)] / [W / (n - k)], with k the number of non-empty groups.
/// Returns 1.0 when the within-cluster dispersion is zero.
pub fn compute_calinski_harabasz(rows: &[Vec<f64>], partition: &Partition) -> f64 {
    let n = rows.len();
    let groups = partition.effective_groups();
    if n == 0 || groups < 2 {
        return 0.0;
    }

    let overall = mean_row(rows.iter().map(Vec::as_slice), rows[0].len());
    let mut between = 0.0;
    let mut within = 0.0;

    for group in 0..partition.k() {
        let members = partition.members(group);
        if members.is_empty() {
            continue;
        }
        let centroid = mean_row(members.iter().map(|&i| rows[i].as_slice()), rows[0].len());
        between += members.len() as f64 * euclidean_distance_squared(&centroid, &overall);
        within += members
            .iter()
            .map(|&i| euclidean_distance_squared(&rows[i], &centroid))
            .sum::<f64>();
    }

    if within == 0.0 {
        1.0
    } else {
        between * (n - groups) as f64 / (within * (groups - 1) as f64)
    }
}

/// Davies-Bouldin index.
///
/// Mean over clusters of max_{j != i} (s_i + s_j) / d_ij, where s is the mean
/// member distance to the centroid and d the centroid distance. Pairs with
/// coincident centroids contribute 0.
pub fn compute_davies_bouldin(rows: &[Vec<f64>], partition: &Partition) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    let dim = rows[0].len();

    let mut centroids = Vec::new();
    let mut scatter = Vec::new();
    for group in 0..partition.k() {
        let members = partition.members(group);
        if members.is_empty() {
            continue;
        }
        let centroid = mean_row(members.iter().map(|&i| rows[i].as_slice()), dim);
        let s = members
            .iter()
            .map(|&i| euclidean_distance(&rows[i], &centroid))
            .sum::<f64>()
            / members.len() as f64;
        centroids.push(centroid);
        scatter.push(s);
    }

    let m = centroids.len();
    if m < 2 || scatter.iter().all(|&s| s == 0.0) {
        return 0.0;
    }

    let mut total = 0.0;
    for i in 0..m {
        let mut worst = 0.0f64;
        for j in 0..m {
            if i == j {
                continue;
            }
            let d = euclidean_distance(&centroids[i], &centroids[j]);
            if d > 0.0 {
                worst = worst.max((scatter[i] + scatter[j]) / d);
            }
        }
        total += worst;
    }

    total / m as f64
}

/// Component-wise mean of a set of rows.
pub fn mean_row<'a, I>(rows: I, dim: usize) -> Vec<f64>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    let mut sum = vec![0.0; dim];
    let mut count = 0usize;
    for row in rows {
        for (acc, v) in sum.iter_mut().zip(row) {
            *acc += v;
        }
        count += 1;
    }
    if count > 0 {
        for elem in sum.iter_mut() {
            *elem /= count as f64;
        }
    }
    sum
}

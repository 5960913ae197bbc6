//! Type definitions for clustering results.

use serde::{Deserialize, Serialize};

use super::metrics::QualityMetrics;

/// Assignment of every row index to one of `k` group ids.
///
/// Group ids are `0..k` and carry no ordering meaning. A group may be empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    labels: Vec<usize>,
    k: usize,
}

impl Partition {
    /// Build a partition. Returns `None` if any label is `>= k`.
    pub fn new(labels: Vec<usize>, k: usize) -> Option<Self> {
        if labels.iter().any(|&label| label >= k) {
            return None;
        }
        Some(Self { labels, k })
    }

    /// Group id of every row, index-aligned with the input.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn label(&self, row: usize) -> Option<usize> {
        self.labels.get(row).copied()
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of rows partitioned.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Row indices belonging to a group, in ascending order.
    pub fn members(&self, group: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, &label)| label == group)
            .map(|(row, _)| row)
            .collect()
    }

    /// Member count of every group, indexed by group id.
    pub fn counts(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.k];
        for &label in &self.labels {
            counts[label] += 1;
        }
        counts
    }

    /// Number of non-empty groups.
    pub fn effective_groups(&self) -> usize {
        self.counts().iter().filter(|&&c| c > 0).count()
    }
}

/// Result of a clustering run over one feature view.
#[derive(Clone, Debug, Serialize)]
pub struct ClusteringResult {
    pub partition: Partition,

    /// Final centroids, indexed by group id.
    pub centroids: Vec<Vec<f64>>,

    /// Within-cluster sum of squared distances of the kept run.
    pub inertia: f64,

    /// Lloyd iterations used by the kept run.
    pub iterations: usize,

    /// Whether the kept run converged before `max_iterations`.
    pub converged: bool,

    /// Seed the run was drawn from.
    pub seed: u64,

    /// Cohesion/separation scores; absent when the partition degenerates.
    pub quality: QualityMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_rejects_out_of_range_labels() {
        assert!(Partition::new(vec![0, 1, 3], 3).is_none());
        assert!(Partition::new(vec![0, 1, 2], 3).is_some());
    }

    #[test]
    fn test_members_and_counts() {
        let partition = Partition::new(vec![2, 0, 2, 2], 3).unwrap();

        assert_eq!(partition.members(2), vec![0, 2, 3]);
        assert_eq!(partition.members(1), Vec::<usize>::new());
        assert_eq!(partition.counts(), vec![1, 0, 3]);
        assert_eq!(partition.effective_groups(), 2);
        assert_eq!(partition.counts().iter().sum::<usize>(), partition.len());
    }
}

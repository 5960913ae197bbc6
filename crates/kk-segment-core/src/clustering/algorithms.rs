//! Clustering algorithms and helper functions.
//!
//! Contains k-means++ initialization, the Lloyd iteration and centroid
//! computation. All randomness comes from the caller's RNG.

use rand::Rng;

use super::metrics::{euclidean_distance_squared, mean_row};

/// Outcome of a single k-means initialization.
#[derive(Debug, Clone)]
pub struct LloydRun {
    pub assignments: Vec<usize>,
    pub centroids: Vec<Vec<f64>>,
    pub inertia: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Initialize centroids using the k-means++ algorithm.
///
/// The first centroid is drawn uniformly; each further centroid is drawn with
/// probability proportional to its squared distance from the nearest chosen
/// centroid. When every point already coincides with a centroid, the next one
/// is drawn uniformly, which duplicates a centroid.
pub fn kmeans_plus_plus_init<R: Rng>(
    vectors: &[Vec<f64>],
    k: usize,
    rng: &mut R,
) -> Vec<Vec<f64>> {
    let n = vectors.len();
    let mut centroids: Vec<Vec<f64>> = Vec::with_capacity(k);
    centroids.push(vectors[rng.gen_range(0..n)].clone());

    // Distance from each point to nearest centroid
    let mut min_distances = vec![f64::MAX; n];

    for _ in 1..k {
        let last = centroids.len() - 1;
        for (i, vector) in vectors.iter().enumerate() {
            let dist = euclidean_distance_squared(vector, &centroids[last]);
            if dist < min_distances[i] {
                min_distances[i] = dist;
            }
        }

        let total: f64 = min_distances.iter().sum();
        let chosen = if total <= 0.0 {
            rng.gen_range(0..n)
        } else {
            let threshold = rng.gen::<f64>() * total;
            let mut cumsum = 0.0;
            let mut chosen = min_distances
                .iter()
                .rposition(|&d| d > 0.0)
                .unwrap_or(n - 1);
            for (i, &d) in min_distances.iter().enumerate() {
                cumsum += d;
                if d > 0.0 && cumsum >= threshold {
                    chosen = i;
                    break;
                }
            }
            chosen
        };
        centroids.push(vectors[chosen].clone());
    }

    centroids
}

/// Index of the nearest centroid. Ties go to the lowest index.
pub fn nearest_centroid(vector: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut min_dist = f64::MAX;
    let mut best_cluster = 0;

    for (j, centroid) in centroids.iter().enumerate() {
        let dist = euclidean_distance_squared(vector, centroid);
        if dist < min_dist {
            min_dist = dist;
            best_cluster = j;
        }
    }

    best_cluster
}

/// Compute new centroids as mean of assigned points.
///
/// A cluster with no members keeps its previous centroid.
pub fn compute_centroids(
    vectors: &[Vec<f64>],
    assignments: &[usize],
    previous: &[Vec<f64>],
) -> Vec<Vec<f64>> {
    let dim = previous.first().map_or(0, Vec::len);

    previous
        .iter()
        .enumerate()
        .map(|(cluster, old)| {
            let members = assignments
                .iter()
                .zip(vectors)
                .filter(|(&a, _)| a == cluster)
                .map(|(_, v)| v.as_slice());
            let mut members = members.peekable();
            if members.peek().is_none() {
                old.clone()
            } else {
                mean_row(members, dim)
            }
        })
        .collect()
}

/// Compute within-cluster sum of squares.
pub fn compute_inertia(vectors: &[Vec<f64>], assignments: &[usize], centroids: &[Vec<f64>]) -> f64 {
    vectors
        .iter()
        .zip(assignments.iter())
        .map(|(vector, &cluster)| euclidean_distance_squared(vector, &centroids[cluster]))
        .sum()
}

/// Run Lloyd's algorithm from one k-means++ initialization.
///
/// Stops when no assignment changes, when the largest centroid shift drops
/// below `convergence_threshold`, or after `max_iterations`.
pub fn lloyd<R: Rng>(
    vectors: &[Vec<f64>],
    k: usize,
    max_iterations: usize,
    convergence_threshold: f64,
    rng: &mut R,
) -> LloydRun {
    let mut centroids = kmeans_plus_plus_init(vectors, k, rng);
    let mut assignments = vec![usize::MAX; vectors.len()];
    let mut iterations = 0;
    let mut converged = false;

    for iter in 0..max_iterations {
        iterations = iter + 1;

        // Assignment step
        let mut changed = false;
        for (i, vector) in vectors.iter().enumerate() {
            let best = nearest_centroid(vector, &centroids);
            if assignments[i] != best {
                assignments[i] = best;
                changed = true;
            }
        }

        if !changed {
            converged = true;
            break;
        }

        // Update step
        let new_centroids = compute_centroids(vectors, &assignments, &centroids);
        let max_movement = centroids
            .iter()
            .zip(new_centroids.iter())
            .map(|(old, new)| euclidean_distance_squared(old, new).sqrt())
            .fold(0.0f64, f64::max);
        centroids = new_centroids;

        if max_movement < convergence_threshold {
            // Final assignment against the settled centroids
            for (i, vector) in vectors.iter().enumerate() {
                assignments[i] = nearest_centroid(vector, &centroids);
            }
            converged = true;
            break;
        }
    }

    if !converged {
        // Out of iterations: the last update moved the centroids
        for (i, vector) in vectors.iter().enumerate() {
            assignments[i] = nearest_centroid(vector, &centroids);
        }
    }

    let inertia = compute_inertia(vectors, &assignments, &centroids);

    LloydRun {
        assignments,
        centroids,
        inertia,
        iterations,
        converged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn blobs() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 0.0],
            vec![0.2, 0.1],
            vec![5.0, 5.0],
            vec![5.1, 4.9],
            vec![10.0, 0.0],
            vec![10.1, 0.2],
        ]
    }

    #[test]
    fn test_plus_plus_picks_distinct_points() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let centroids = kmeans_plus_plus_init(&blobs(), 3, &mut rng);
        assert_eq!(centroids.len(), 3);
        for i in 0..3 {
            for j in (i + 1)..3 {
                assert!(euclidean_distance_squared(&centroids[i], &centroids[j]) > 0.0);
            }
        }
    }

    #[test]
    fn test_plus_plus_identical_points() {
        let vectors = vec![vec![1.0, 1.0]; 5];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let centroids = kmeans_plus_plus_init(&vectors, 3, &mut rng);
        assert_eq!(centroids, vec![vec![1.0, 1.0]; 3]);
    }

    #[test]
    fn test_nearest_centroid_tie_goes_low() {
        let centroids = vec![vec![0.0], vec![0.0], vec![4.0]];
        assert_eq!(nearest_centroid(&[0.0], &centroids), 0);
        assert_eq!(nearest_centroid(&[2.0], &centroids), 0);
        assert_eq!(nearest_centroid(&[3.0], &centroids), 2);
    }

    #[test]
    fn test_empty_cluster_keeps_centroid() {
        let vectors = vec![vec![0.0], vec![2.0]];
        let previous = vec![vec![1.0], vec![9.0]];
        let centroids = compute_centroids(&vectors, &[0, 0], &previous);
        assert_eq!(centroids, vec![vec![1.0], vec![9.0]]);
    }

    #[test]
    fn test_lloyd_recovers_blobs() {
        let vectors = blobs();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let run = lloyd(&vectors, 3, 100, 1e-6, &mut rng);

        assert!(run.converged);
        assert_eq!(run.assignments[0], run.assignments[1]);
        assert_eq!(run.assignments[2], run.assignments[3]);
        assert_eq!(run.assignments[4], run.assignments[5]);
        assert_ne!(run.assignments[0], run.assignments[2]);
        assert_ne!(run.assignments[2], run.assignments[4]);
        assert!(run.inertia < 0.2, "inertia = {}", run.inertia);
    }

    #[test]
    fn test_iteration_cap_reports_final_assignment() {
        let vectors = vec![
            vec![0.0],
            vec![1.0],
            vec![2.0],
            vec![3.0],
            vec![10.0],
            vec![11.0],
            vec![12.0],
            vec![30.0],
        ];

        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let run = lloyd(&vectors, 3, 1, 1e-12, &mut rng);

            for (vector, &cluster) in vectors.iter().zip(&run.assignments) {
                assert_eq!(cluster, nearest_centroid(vector, &run.centroids), "seed {}", seed);
            }
            let expected = compute_inertia(&vectors, &run.assignments, &run.centroids);
            assert!((run.inertia - expected).abs() < 1e-12, "seed {}", seed);
        }
    }
}

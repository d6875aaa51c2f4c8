mod test_utils;

use cluster_engine::error::ClusterError;
use cluster_engine::{cluster, cluster_batch, ClusterConfig, PointSet};
use test_utils::*;

// ============================================================================
// End-to-end clustering
// ============================================================================

#[test]
fn test_cluster_produces_a_complete_outcome() {
    let set = two_blob_points();
    let cfg = ClusterConfig::new(2).with_seed(17);

    let outcome = cluster(set, &cfg).expect("clustering succeeds");

    assert!(outcome.converged);
    assert_eq!(outcome.center_history.len(), outcome.iterations + 1);
    assert_eq!(outcome.labels.len(), 4);

    let labels: Vec<usize> = outcome.labels.iter().copied().flatten().collect();
    assert_eq!(labels.len(), 4);
    assert!(labels.iter().all(|&l| l < 2));

    // The two tight pairs must land in the same cluster as each other
    assert_eq!(labels[0], labels[1]);
    assert_eq!(labels[2], labels[3]);
    assert_ne!(labels[0], labels[2]);
}

#[test]
fn test_fixed_seed_makes_runs_identical() {
    let coords = gaussian_clusters(3, 30, 2, 12.0, 4);
    let cfg = ClusterConfig::new(3).with_seed(1234);

    let a = cluster(PointSet::new(coords.clone()).unwrap(), &cfg).unwrap();
    let b = cluster(PointSet::new(coords).unwrap(), &cfg).unwrap();

    assert_eq!(a.labels, b.labels);
    assert_eq!(a.center_history, b.center_history);
    assert_eq!(a.iterations, b.iterations);
}

#[test]
fn test_history_starts_at_the_sampled_initial_centers() {
    let set = two_blob_points();
    let candidates = set.distinct_coordinates();
    let cfg = ClusterConfig::new(2).with_seed(5);

    let outcome = cluster(set, &cfg).unwrap();

    for center in &outcome.center_history[0] {
        assert!(candidates.contains(&center.coordinate));
    }
}

#[test]
fn test_iteration_cap_reports_unconverged() {
    let set = two_blob_points();
    let cfg = ClusterConfig::new(2).with_seed(17).with_max_iterations(0);

    let outcome = cluster(set, &cfg).unwrap();

    assert!(!outcome.converged);
    assert_eq!(outcome.iterations, 0);
    assert_eq!(outcome.center_history.len(), 1);

    // No step ran, so no point may pretend to carry a classification
    assert!(outcome.labels.iter().all(|l| l.is_none()));
}

#[test]
fn test_insufficient_distinct_points_propagates() {
    let set = point_set_2d(&[(1.0, 1.0), (1.0, 1.0), (2.0, 2.0)]);
    let cfg = ClusterConfig::new(3).with_seed(0);

    let err = cluster(set, &cfg).unwrap_err();
    assert_eq!(
        err,
        ClusterError::InsufficientDistinctPoints { k: 3, distinct: 2 }
    );
}

// ============================================================================
// Batched attribute-pair runs
// ============================================================================

#[test]
fn test_batch_runs_each_dataset_independently() {
    let datasets = vec![
        two_blob_points(),
        point_set_2d(&[(0.0, 0.0), (0.0, 1.0), (5.0, 5.0), (5.0, 6.0)]),
        point_set_2d(&[(1.0, 1.0), (1.0, 2.0), (9.0, 9.0), (9.0, 8.0)]),
    ];
    let cfg = ClusterConfig::new(2).with_seed(100);

    let outcomes = cluster_batch(datasets, &cfg);

    assert_eq!(outcomes.len(), 3);
    for outcome in &outcomes {
        let outcome = outcome.as_ref().expect("each task succeeds");
        assert!(outcome.converged);
        assert_eq!(outcome.labels.len(), 4);
    }
}

#[test]
fn test_batch_seeds_match_sequential_runs() {
    // Task i of a batch under seed s behaves like a lone run under s+i
    let datasets = vec![two_blob_points(), two_blob_points()];
    let cfg = ClusterConfig::new(2).with_seed(7);

    let batch = cluster_batch(datasets, &cfg);

    let lone_0 = cluster(two_blob_points(), &ClusterConfig::new(2).with_seed(7)).unwrap();
    let lone_1 = cluster(two_blob_points(), &ClusterConfig::new(2).with_seed(8)).unwrap();

    assert_eq!(batch[0].as_ref().unwrap().center_history, lone_0.center_history);
    assert_eq!(batch[1].as_ref().unwrap().center_history, lone_1.center_history);
}

#[test]
fn test_batch_failures_are_per_task() {
    // Second dataset cannot supply 2 distinct centers; the first still runs
    let datasets = vec![
        two_blob_points(),
        point_set_2d(&[(3.0, 3.0), (3.0, 3.0)]),
    ];
    let cfg = ClusterConfig::new(2).with_seed(21);

    let outcomes = cluster_batch(datasets, &cfg);

    assert!(outcomes[0].is_ok());
    assert_eq!(
        outcomes[1].as_ref().unwrap_err(),
        &ClusterError::InsufficientDistinctPoints { k: 2, distinct: 1 }
    );
}

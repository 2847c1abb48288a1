use crate::jaccard::{jaccard_between, jaccard_measure, pairs, round_to};
use crate::partition::ClusterPartition;
use crate::NscError;

fn clusters_of(labels: &[usize], k: usize) -> Vec<Vec<usize>> {
    ClusterPartition::from_labels(labels, k)
        .unwrap()
        .clusters()
        .to_vec()
}

#[test]
fn test_pairs_and_rounding() {
    assert_eq!(pairs(0), 0);
    assert_eq!(pairs(1), 0);
    assert_eq!(pairs(4), 6);
    assert_eq!(round_to(0.33333, 3), 0.333);
    assert_eq!(round_to(0.6666, 3), 0.667);
}

#[test]
fn test_rounding_exact_halves_to_even() {
    assert_eq!(round_to(0.0625, 3), 0.062);
    assert_eq!(round_to(0.1875, 3), 0.188);
    // Stored just above one half, so it rounds up
    assert_eq!(round_to(0.0005, 3), 0.001);
    // Stored just below one half
    assert_eq!(round_to(2.675, 2), 2.67);
}

#[test]
fn test_one_sixteenth_rounds_to_even() {
    // both = 1, real pairs 1 + 1 = 2, empirical pairs C(6, 2) = 15 → 1 / 16
    let real = vec![0, 0, 1, 1, 2, 3, 4, 5];
    let empirical = vec![0, 0, 1, 2, 0, 0, 0, 0];

    let score = jaccard_measure(&real, &empirical, &clusters_of(&empirical, 6), 6).unwrap();
    assert_eq!(score, 0.062);
}

#[test]
fn test_identical_partitions_score_one() {
    let labels = vec![0, 0, 1, 1, 2, 2, 2];
    let score = jaccard_measure(&labels, &labels, &clusters_of(&labels, 3), 3).unwrap();
    assert_eq!(score, 1.0);
}

#[test]
fn test_relabelled_partition_scores_one() {
    let real = vec![0, 0, 1, 1];
    let empirical = vec![1, 1, 0, 0];
    let score = jaccard_measure(&real, &empirical, &clusters_of(&empirical, 2), 2).unwrap();
    assert_eq!(score, 1.0);
}

#[test]
fn test_disjoint_pairings_score_zero() {
    // {0,1},{2,3} against four singletons: numerator 0, denominator 2
    let real = vec![0, 0, 1, 1];
    let empirical = vec![0, 1, 2, 3];
    let score = jaccard_measure(&real, &empirical, &clusters_of(&empirical, 4), 4).unwrap();
    assert_eq!(score, 0.0);

    // and the other way round
    let score = jaccard_measure(&empirical, &real, &clusters_of(&real, 4), 4).unwrap();
    assert_eq!(score, 0.0);
}

#[test]
fn test_partial_agreement() {
    // real {0,1,2},{3,4,5}; empirical {0,1},{2,3,4,5}
    // both: {0,1} + {3,4},{3,5},{4,5} = 4
    // real pairs 6, empirical pairs 1 + 6 = 7 → 4 / (6 + 7 − 4) = 0.444
    let real = vec![0, 0, 0, 1, 1, 1];
    let empirical = vec![0, 0, 1, 1, 1, 1];
    let score = jaccard_measure(&real, &empirical, &clusters_of(&empirical, 2), 2).unwrap();
    assert_eq!(score, 0.444);
}

#[test]
fn test_all_singletons_is_degenerate() {
    let labels = vec![0, 1, 2];
    assert_eq!(
        jaccard_measure(&labels, &labels, &clusters_of(&labels, 3), 3).unwrap_err(),
        NscError::DegenerateJaccard
    );
}

#[test]
fn test_label_out_of_range() {
    let real = vec![0, 0, 1];
    let empirical = vec![0, 2, 1];
    assert_eq!(
        jaccard_measure(&real, &empirical, &[vec![0], vec![2], vec![1]], 2).unwrap_err(),
        NscError::LabelOutOfRange { label: 2, k: 2 }
    );
    assert_eq!(
        jaccard_measure(&empirical, &real, &[vec![0, 1], vec![2]], 2).unwrap_err(),
        NscError::LabelOutOfRange { label: 2, k: 2 }
    );
}

#[test]
fn test_length_mismatch() {
    assert_eq!(
        jaccard_measure(&[0, 1], &[0, 1, 1], &[vec![0], vec![1, 2]], 2).unwrap_err(),
        NscError::DimensionMismatch {
            expected: 2,
            got: 3
        }
    );
}

#[test]
fn test_between_uses_larger_k() {
    // Ground truth has 2 clusters, the empirical partition 3
    let real = ClusterPartition::from_labels(&[0, 0, 1, 1, 1], 2).unwrap();
    let empirical = ClusterPartition::from_labels(&[0, 0, 1, 1, 2], 3).unwrap();

    // both = 1 + 1 = 2, real pairs 1 + 3 = 4, empirical 1 + 1 = 2 → 2 / 4
    assert_eq!(jaccard_between(&real, &empirical).unwrap(), 0.5);
}

#[test]
fn test_partition_round_trip() {
    let p = ClusterPartition::from_labels(&[2, 0, 2, 1], 4).unwrap();
    assert_eq!(p.clusters().to_vec(), vec![vec![1], vec![3], vec![0, 2], vec![]]);
    assert_eq!(p.sizes(), vec![1, 1, 2, 0]);
    assert_eq!(p.non_empty(), 3);
    assert_eq!(p.labels(), vec![2, 0, 2, 1]);
}

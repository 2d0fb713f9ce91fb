//! Integration tests for input validation and error reporting.

use ruvector_augment::validation::{validate_edge_list, MAX_VERTICES};
use ruvector_augment::{
    augment_connectivity, verify_augmentation, AugmentConfig, AugmentError, Augmenter, Graph,
    ValidationError,
};

#[test]
fn test_self_loop_reports_position() {
    let err = augment_connectivity(&[(0, 1), (1, 2), (2, 2)], 1).unwrap_err();
    assert!(err.is_validation_error());
    assert_eq!(
        err.to_string(),
        "invalid graph: self-loop on vertex 2 at edge index 2"
    );
}

#[test]
fn test_duplicate_in_either_orientation() {
    for edges in [[(0, 1), (0, 1)], [(0, 1), (1, 0)]] {
        let err = augment_connectivity(&edges, 1).unwrap_err();
        match err {
            AugmentError::InvalidGraph(ValidationError::DuplicateEdge { index, .. }) => {
                assert_eq!(index, 1)
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn test_too_few_vertices() {
    let err = augment_connectivity(&[], 0).unwrap_err();
    assert!(matches!(
        err,
        AugmentError::InvalidGraph(ValidationError::TooFewVertices { count: 0, min: 2 })
    ));

    let augmenter = Augmenter::default();
    let err = augmenter.augment(&Graph::with_vertices([1]), 0).unwrap_err();
    assert!(err.is_graph_structure_error());
}

#[test]
fn test_single_edge_is_valid() {
    let result = augment_connectivity(&[(5, 9)], 0).unwrap();
    assert_eq!(result.connectivity, 1);
    assert!(result.new_edges.is_empty());
}

#[test]
fn test_vertex_limit() {
    let edges: Vec<(u64, u64)> = (0..MAX_VERTICES as u64).map(|i| (i, i + 1)).collect();
    let err = validate_edge_list(&edges).unwrap_err();
    assert!(matches!(err, ValidationError::ParameterOutOfRange { .. }));
}

#[test]
fn test_invalid_config() {
    let err = Augmenter::new(AugmentConfig {
        strategic_budget: 0,
        ..Default::default()
    })
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid configuration: parameter out of range: strategic_budget = 0 (expected >= 1)"
    );
}

#[test]
fn test_verifier_rejects_malformed_original() {
    assert!(verify_augmentation(&[(0, 1), (1, 0)], &[], 0).is_err());
    assert!(verify_augmentation(&[(3, 3)], &[], 0).is_err());
    assert!(verify_augmentation(&[(0, 1)], &[], 0).unwrap());
}

//! Independent check of an augmentation.
//!
//! Rebuilds `original ∪ new` from scratch and measures it, so a result can be
//! checked without trusting the working state the strategies maintained.

use std::collections::BTreeSet;

use crate::connectivity::ConnectivityOracle;
use crate::error::{AugmentError, Result};
use crate::graph::{Edge, Graph, VertexId};
use crate::validation::validate_edge_list;

/// Whether `original ∪ new_edges` is more than `k` edge-connected.
///
/// Pairs in `new_edges` that repeat an original edge, or each other, are
/// counted once.
///
/// # Errors
///
/// Fails if `original` is not a valid simple edge list, or if `new_edges`
/// contains a self-loop.
///
/// # Examples
///
/// ```
/// use ruvector_augment::verify_augmentation;
///
/// let square = [(0, 1), (1, 2), (2, 3), (3, 0)];
/// assert!(!verify_augmentation(&square, &[], 2)?);
/// assert!(verify_augmentation(&square, &[(0, 2), (1, 3)], 2)?);
/// # Ok::<(), ruvector_augment::AugmentError>(())
/// ```
pub fn verify_augmentation(
    original: &[(VertexId, VertexId)],
    new_edges: &[(VertexId, VertexId)],
    k: usize,
) -> Result<bool> {
    validate_edge_list(original)?;
    let union = union_graph(original, new_edges)?;
    let connectivity = ConnectivityOracle::default().edge_connectivity(&union)?;

    tracing::debug!(
        original = original.len(),
        added = new_edges.len(),
        k,
        connectivity,
        "augmentation verified"
    );

    Ok(connectivity > k)
}

/// Connectivity of `original` with `new_edges` added, measured on a fresh
/// copy
pub(crate) fn achieved_connectivity(
    oracle: &ConnectivityOracle,
    original: &Graph,
    new_edges: &[Edge],
) -> Result<usize> {
    let mut graph = original.clone();
    for edge in new_edges {
        if !graph.has_edge(edge.source, edge.target) {
            graph.insert_edge(edge.source, edge.target)?;
        }
    }
    oracle.edge_connectivity(&graph)
}

fn union_graph(original: &[(VertexId, VertexId)], new_edges: &[(VertexId, VertexId)]) -> Result<Graph> {
    let edges: BTreeSet<Edge> = original
        .iter()
        .chain(new_edges)
        .map(|&(u, v)| {
            if u == v {
                Err(AugmentError::InvalidEdge(u, v))
            } else {
                Ok(Edge::new(u, v))
            }
        })
        .collect::<Result<_>>()?;

    let mut graph = Graph::new();
    for edge in edges {
        graph.insert_edge(edge.source, edge.target)?;
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_count_once() {
        let triangle = [(0, 1), (1, 2), (2, 0)];
        assert!(verify_augmentation(&triangle, &[(1, 0), (0, 1)], 1).unwrap());
        assert!(!verify_augmentation(&triangle, &[(1, 0)], 2).unwrap());
    }

    #[test]
    fn new_vertices_join_the_union() {
        // A pendant vertex drops connectivity to 1
        let triangle = [(0, 1), (1, 2), (2, 0)];
        assert!(!verify_augmentation(&triangle, &[(2, 3)], 1).unwrap());
        assert!(verify_augmentation(&triangle, &[(2, 3), (3, 0)], 1).unwrap());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(verify_augmentation(&[(0, 0)], &[], 1).is_err());
        assert!(matches!(
            verify_augmentation(&[(0, 1)], &[(1, 1)], 0),
            Err(AugmentError::InvalidEdge(1, 1))
        ));
    }

    #[test]
    fn achieved_matches_union() {
        let g = Graph::from_edges(&[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        let oracle = ConnectivityOracle::sequential();
        let added = [Edge::new(0, 2), Edge::new(1, 3)];
        assert_eq!(achieved_connectivity(&oracle, &g, &added).unwrap(), 3);
        assert_eq!(achieved_connectivity(&oracle, &g, &[]).unwrap(), 2);
    }
}

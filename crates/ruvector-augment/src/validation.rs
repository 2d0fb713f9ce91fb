//! Input validation for augmentation requests.
//!
//! All validation functions run eagerly before any computation begins, so a
//! malformed edge list fails fast with a positional diagnostic instead of
//! producing a partial augmentation. Every public function returns
//! [`ValidationError`], which converts into [`AugmentError::InvalidGraph`]
//! via `From`.
//!
//! # Limits
//!
//! | Resource  | Limit   | Constant         |
//! |-----------|---------|------------------|
//! | Vertices  | ≥ 2     | [`MIN_VERTICES`] |
//! | Vertices  | 50,000  | [`MAX_VERTICES`] |
//!
//! The upper bound exists because complement construction is quadratic in
//! the vertex count.
//!
//! [`AugmentError::InvalidGraph`]: crate::error::AugmentError::InvalidGraph

use std::collections::BTreeSet;

use crate::augment::AugmentConfig;
use crate::error::ValidationError;
use crate::graph::{Edge, Graph, VertexId};

/// Edge connectivity is undefined below this many vertices.
pub const MIN_VERTICES: usize = 2;

/// Maximum number of vertices accepted by the orchestrator.
pub const MAX_VERTICES: usize = 50_000;

/// Validate a raw edge list describing a simple undirected graph.
///
/// Checks, in order:
///
/// 1. No edge is a self-loop.
/// 2. No unordered pair appears twice (`(u, v)` and `(v, u)` collide).
/// 3. The edges span between [`MIN_VERTICES`] and [`MAX_VERTICES`] vertices.
///
/// # Errors
///
/// Returns [`ValidationError`] describing the first violation found.
///
/// # Examples
///
/// ```
/// use ruvector_augment::validation::validate_edge_list;
///
/// assert!(validate_edge_list(&[(0, 1), (1, 2)]).is_ok());
/// assert!(validate_edge_list(&[(0, 1), (1, 0)]).is_err());
/// ```
pub fn validate_edge_list(edges: &[(VertexId, VertexId)]) -> Result<(), ValidationError> {
    let mut seen = BTreeSet::new();
    let mut vertices = BTreeSet::new();

    for (index, &(u, v)) in edges.iter().enumerate() {
        if u == v {
            return Err(ValidationError::SelfLoop { vertex: u, index });
        }
        if !seen.insert(Edge::new(u, v)) {
            return Err(ValidationError::DuplicateEdge { u, v, index });
        }
        vertices.insert(u);
        vertices.insert(v);
    }

    validate_vertex_count(vertices.len())
}

/// Validate an already-built graph.
///
/// A [`Graph`] cannot hold self-loops or parallel edges, so only the vertex
/// count is checked.
pub fn validate_graph(graph: &Graph) -> Result<(), ValidationError> {
    validate_vertex_count(graph.num_vertices())
}

/// Validate orchestrator configuration.
///
/// # Errors
///
/// Returns [`ValidationError::ParameterOutOfRange`] for a zero attempt
/// budget.
pub fn validate_config(config: &AugmentConfig) -> Result<(), ValidationError> {
    if config.strategic_budget == 0 {
        return Err(ValidationError::ParameterOutOfRange {
            name: "strategic_budget".into(),
            value: config.strategic_budget.to_string(),
            expected: ">= 1".into(),
        });
    }
    if config.forced_budget == 0 {
        return Err(ValidationError::ParameterOutOfRange {
            name: "forced_budget".into(),
            value: config.forced_budget.to_string(),
            expected: ">= 1".into(),
        });
    }
    Ok(())
}

fn validate_vertex_count(count: usize) -> Result<(), ValidationError> {
    if count < MIN_VERTICES {
        return Err(ValidationError::TooFewVertices {
            count,
            min: MIN_VERTICES,
        });
    }
    if count > MAX_VERTICES {
        return Err(ValidationError::ParameterOutOfRange {
            name: "vertices".into(),
            value: count.to_string(),
            expected: format!("<= {MAX_VERTICES}"),
        });
    }
    Ok(())
}

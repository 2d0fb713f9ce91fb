//! Error types for connectivity augmentation.
//!
//! Structural problems with the input graph are raised eagerly as
//! [`ValidationError`] and surface through [`AugmentError::InvalidGraph`].
//! Strategy-level "no improvement" conditions are never errors: the
//! orchestrator falls through to the next strategy and reports an
//! [`AugmentationOutcome`](crate::augment::AugmentationOutcome) instead.

use crate::graph::VertexId;

/// Result type for augmentation operations
pub type Result<T> = std::result::Result<T, AugmentError>;

/// Primary error type for augmentation operations.
#[derive(Debug, thiserror::Error)]
pub enum AugmentError {
    /// The input graph is malformed.
    #[error("invalid graph: {0}")]
    InvalidGraph(#[from] ValidationError),

    /// The orchestrator configuration is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(ValidationError),

    /// Edge connectivity is undefined below two vertices.
    #[error("edge connectivity is undefined for a graph with {vertices} vertices")]
    TooFewVertices {
        /// Number of vertices in the offending graph.
        vertices: usize,
    },

    /// A vertex that is not part of the graph was referenced.
    #[error("invalid vertex ID: {0}")]
    InvalidVertex(VertexId),

    /// Self-loops cannot be stored.
    #[error("invalid edge: ({0}, {1})")]
    InvalidEdge(VertexId, VertexId),

    /// The edge is already present.
    #[error("edge already exists: ({0}, {1})")]
    EdgeExists(VertexId, VertexId),
}

/// Validation errors for augmentation inputs.
///
/// These are raised before any computation begins so that callers get a
/// precise diagnostic instead of a half-finished augmentation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// An edge connects a vertex to itself.
    #[error("self-loop on vertex {vertex} at edge index {index}")]
    SelfLoop {
        /// The looping vertex.
        vertex: VertexId,
        /// Position of the edge in the input list.
        index: usize,
    },

    /// The same unordered pair appears twice.
    #[error("duplicate edge ({u}, {v}) at edge index {index}")]
    DuplicateEdge {
        /// First endpoint as given.
        u: VertexId,
        /// Second endpoint as given.
        v: VertexId,
        /// Position of the repeated edge in the input list.
        index: usize,
    },

    /// The graph has too few vertices for connectivity to be defined.
    #[error("graph has {count} vertices (at least {min} required)")]
    TooFewVertices {
        /// Observed vertex count.
        count: usize,
        /// Required minimum.
        min: usize,
    },

    /// A configuration parameter is outside its valid range.
    #[error("parameter out of range: {name} = {value} (expected {expected})")]
    ParameterOutOfRange {
        /// Name of the parameter.
        name: String,
        /// The invalid value, rendered as a string.
        value: String,
        /// Human-readable description of the valid range.
        expected: String,
    },
}

impl AugmentError {
    /// Whether the error was raised by eager input validation
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            AugmentError::InvalidGraph(_) | AugmentError::InvalidConfig(_)
        )
    }

    /// Whether the error indicates a problem with the graph structure
    pub fn is_graph_structure_error(&self) -> bool {
        matches!(
            self,
            AugmentError::InvalidGraph(_)
                | AugmentError::TooFewVertices { .. }
                | AugmentError::InvalidVertex(_)
                | AugmentError::InvalidEdge(_, _)
                | AugmentError::EdgeExists(_, _)
        )
    }
}

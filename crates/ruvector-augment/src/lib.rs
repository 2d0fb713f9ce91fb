//! # RuVector Augment
//!
//! Edge-connectivity augmentation for simple undirected graphs.
//!
//! Given a graph `G` and a threshold `k`, this crate adds new edges until the
//! global edge connectivity of `G` strictly exceeds `k`, preferring few
//! insertions. It carries its own exact connectivity oracle (unit-capacity
//! max-flow) and a general-graph maximum matching (Edmonds' blossom
//! algorithm); the orchestrator combines them into a chain of strategies
//! that ends in a bounded, seeded fallback.
//!
//! ## Quick Start
//!
//! ```rust
//! use ruvector_augment::prelude::*;
//!
//! // Two triangles sharing no vertex: disconnected, connectivity 0
//! let edges = [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)];
//! let result = augment_connectivity(&edges, 2)?;
//!
//! assert_eq!(result.outcome, AugmentationOutcome::Augmented);
//! assert!(result.connectivity > 2);
//! assert!(verify_augmentation(&edges, &result.new_edge_list(), 2)?);
//! # Ok::<(), AugmentError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`]: ordered adjacency-set graph with complement and induced
//!   subgraph views
//! - [`connectivity`]: global edge connectivity and deterministic minimum cuts
//! - [`matching`]: maximum-cardinality matching on general graphs
//! - [`augment`]: the strategy chain and its configuration
//! - [`verify`]: independent re-measurement of `original ∪ new`
//! - [`validation`], [`budget`], [`events`]: input checks, insertion
//!   budgets, and the per-run event log
//!
//! ## Feature Flags
//!
//! - `parallel` (default): run the `|V| - 1` max-flow probes of each
//!   connectivity measurement on the rayon pool

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod augment;
pub mod budget;
pub mod connectivity;
pub mod error;
pub mod events;
pub mod graph;
pub mod matching;
pub mod validation;
pub mod verify;

pub use augment::{
    augment_connectivity, AugmentConfig, AugmentationOutcome, AugmentationResult, Augmenter,
    Strategy,
};
pub use connectivity::{
    connectivity_status, edge_connectivity, is_at_least_k_plus_one_edge_connected, minimum_cut,
    minimum_cut_edges, ConnectivityOracle, ConnectivityStatus, MinCut,
};
pub use error::{AugmentError, Result, ValidationError};
pub use events::AugmentEvent;
pub use graph::{Edge, Graph, GraphStats, VertexId};
pub use matching::{maximum_matching, unmatched_vertices, Matching};
pub use verify::verify_augmentation;

/// Commonly used types and functions
pub mod prelude {
    pub use crate::{
        augment_connectivity, edge_connectivity, maximum_matching, minimum_cut_edges,
        verify_augmentation, AugmentConfig, AugmentError, AugmentationOutcome,
        AugmentationResult, Augmenter, ConnectivityStatus, Edge, Graph, Result, Strategy,
        VertexId,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let g = Graph::from_edges(&[(0, 1), (1, 2), (2, 0)]).unwrap();
        assert_eq!(edge_connectivity(&g).unwrap(), 2);
        assert_eq!(maximum_matching(&g).len(), 1);
        assert_eq!(minimum_cut_edges(&g).unwrap().len(), 2);
    }
}

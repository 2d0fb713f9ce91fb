//! Augmentation orchestrator.
//!
//! [`Augmenter`] runs a fixed chain of strategies against a working copy of
//! the input graph, moving to the next strategy only while the target
//! `edge_connectivity > k` has not been reached:
//!
//! | # | Strategy | Entered when |
//! |---|----------|--------------|
//! | 1 | [`Strategy::AlreadySufficient`] | always |
//! | 2 | [`Strategy::DegreeMatching`] | some vertex has degree exactly `k` |
//! | 2b | [`Strategy::PathAugmentation`] | the matching left degree-`k` vertices exposed |
//! | 3 | [`Strategy::BottleneckTargeting`] | 2/2b ran and fell short |
//! | 4 | [`Strategy::ForcedFallback`] | everything above fell short |
//!
//! Edges accumulate across transitions, with two exceptions: bottleneck
//! targeting discards its insertions when connectivity did not improve, and
//! the forced fallback discards insertions past the best prefix it found.
//! The result is re-verified against the original edge list before it is
//! returned.
//!
//! ```
//! use ruvector_augment::augment_connectivity;
//!
//! let square = [(0, 1), (1, 2), (2, 3), (3, 0)];
//! let result = augment_connectivity(&square, 2)?;
//! assert_eq!(result.connectivity, 3);
//! assert_eq!(result.new_edges.len(), 2);
//! # Ok::<(), ruvector_augment::AugmentError>(())
//! ```

mod bottleneck;
mod degree;
mod forced;
mod working;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::budget::{DEFAULT_FORCED_BUDGET, DEFAULT_STRATEGIC_BUDGET};
use crate::connectivity::{ConnectivityOracle, ConnectivityStatus};
use crate::error::{AugmentError, Result};
use crate::events::AugmentEvent;
use crate::graph::{Edge, Graph, VertexId};
use crate::validation::{validate_config, validate_edge_list, validate_graph};
use crate::verify::achieved_connectivity;

use working::WorkingGraph;

/// Default seed for the forced fallback shuffle
pub const DEFAULT_SEED: u64 = 42;

/// Orchestrator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentConfig {
    /// Insertion budget for bottleneck targeting
    pub strategic_budget: usize,
    /// Insertion budget for the forced fallback, shared by both its phases
    pub forced_budget: usize,
    /// Seed for the forced fallback shuffle
    pub seed: u64,
    /// Run connectivity probes on the rayon pool. Ignored without the
    /// `parallel` feature.
    pub parallel: bool,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            strategic_budget: DEFAULT_STRATEGIC_BUDGET,
            forced_budget: DEFAULT_FORCED_BUDGET,
            seed: DEFAULT_SEED,
            parallel: true,
        }
    }
}

impl AugmentConfig {
    /// Reject zero budgets
    pub fn validate(&self) -> Result<()> {
        validate_config(self).map_err(AugmentError::InvalidConfig)
    }
}

/// Strategies of the orchestrator, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Strategy {
    /// The input already exceeds `k`.
    AlreadySufficient,
    /// Maximum matching in the complement of the degree-`k` subgraph.
    DegreeMatching,
    /// Length-2 paths between vertices the matching left exposed.
    PathAugmentation,
    /// Edges between endpoints of the current minimum cut.
    BottleneckTargeting,
    /// Low-degree pairs, then a seeded shuffle of the complement.
    ForcedFallback,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::AlreadySufficient => write!(f, "already-sufficient"),
            Strategy::DegreeMatching => write!(f, "degree-matching"),
            Strategy::PathAugmentation => write!(f, "path-augmentation"),
            Strategy::BottleneckTargeting => write!(f, "bottleneck-targeting"),
            Strategy::ForcedFallback => write!(f, "forced-fallback"),
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AugmentationOutcome {
    /// Connectivity already exceeded `k`; nothing was added.
    AlreadySufficient,
    /// New edges lifted connectivity above `k`.
    Augmented,
    /// Every strategy ran without exceeding `k`. The edges found are still
    /// reported.
    Incomplete,
}

/// Result of an augmentation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugmentationResult {
    /// Original graph plus every new edge
    pub graph: Graph,
    /// Edges added, in insertion order
    pub new_edges: Vec<Edge>,
    /// Requested threshold; success means `connectivity > k`
    pub k: usize,
    /// Connectivity of the input
    pub initial_connectivity: usize,
    /// Connectivity of [`graph`](Self::graph)
    pub connectivity: usize,
    /// How the run ended
    pub outcome: AugmentationOutcome,
    /// Last strategy that ran
    pub final_strategy: Strategy,
    /// Per-strategy log
    pub events: Vec<AugmentEvent>,
}

impl AugmentationResult {
    /// Whether the target `connectivity > k` was reached
    pub fn is_complete(&self) -> bool {
        self.connectivity > self.k
    }

    /// Every edge of the augmented graph, in lexicographic order
    pub fn augmented_edges(&self) -> Vec<(VertexId, VertexId)> {
        self.graph.edge_list()
    }

    /// New edges as endpoint tuples, in insertion order
    pub fn new_edge_list(&self) -> Vec<(VertexId, VertexId)> {
        self.new_edges.iter().map(|e| e.endpoints()).collect()
    }

    /// Connectivity of the augmented graph as a status
    pub fn status(&self) -> ConnectivityStatus {
        ConnectivityStatus::from(self.connectivity)
    }
}

/// Runs the strategy chain with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Augmenter {
    config: AugmentConfig,
    oracle: ConnectivityOracle,
}

impl Augmenter {
    /// Build an augmenter, validating `config`
    pub fn new(config: AugmentConfig) -> Result<Self> {
        config.validate()?;
        let oracle = ConnectivityOracle::with_parallel(config.parallel);
        Ok(Self { config, oracle })
    }

    /// The active configuration
    pub fn config(&self) -> &AugmentConfig {
        &self.config
    }

    /// Validate and augment a raw edge list
    pub fn augment_edges(&self, edges: &[(VertexId, VertexId)], k: usize) -> Result<AugmentationResult> {
        validate_edge_list(edges)?;
        let graph = Graph::from_edges(edges)?;
        self.augment(&graph, k)
    }

    /// Add edges to a copy of `graph` until its edge connectivity exceeds
    /// `k`, or every strategy has run.
    ///
    /// `graph` is never modified.
    #[instrument(skip(self, graph), fields(vertices = graph.num_vertices(), edges = graph.num_edges()))]
    pub fn augment(&self, graph: &Graph, k: usize) -> Result<AugmentationResult> {
        validate_graph(graph)?;

        let initial = self.oracle.edge_connectivity(graph)?;
        let mut work = WorkingGraph::new(graph, &self.oracle, initial, k);
        work.started(Strategy::AlreadySufficient);

        if work.satisfied() {
            info!(k, connectivity = initial, "already sufficient");
            return self.finish(graph, work, initial, Strategy::AlreadySufficient);
        }

        let critical = graph.vertices_of_degree(k);

        if critical.is_empty() {
            work.fell_through(
                Strategy::AlreadySufficient,
                Strategy::ForcedFallback,
                format!("no vertex has degree {k}"),
            );
        } else {
            work.fell_through(
                Strategy::AlreadySufficient,
                Strategy::DegreeMatching,
                format!("connectivity {initial} <= {k}"),
            );
            let mut last = degree::run(&mut work, &critical)?;
            if work.satisfied() {
                return self.finish(graph, work, initial, last);
            }

            work.fell_through(
                last,
                Strategy::BottleneckTargeting,
                format!("connectivity {} <= {k}", work.connectivity),
            );
            last = Strategy::BottleneckTargeting;
            if bottleneck::run(&mut work, self.config.strategic_budget)? && work.satisfied() {
                return self.finish(graph, work, initial, last);
            }

            work.fell_through(
                last,
                Strategy::ForcedFallback,
                format!("connectivity {} <= {k}", work.connectivity),
            );
        }

        forced::run(&mut work, self.config.forced_budget, self.config.seed)?;
        self.finish(graph, work, initial, Strategy::ForcedFallback)
    }

    fn finish(
        &self,
        original: &Graph,
        work: WorkingGraph<'_>,
        initial: usize,
        final_strategy: Strategy,
    ) -> Result<AugmentationResult> {
        let k = work.k;
        let connectivity = achieved_connectivity(&self.oracle, original, &work.added)?;

        let outcome = if final_strategy == Strategy::AlreadySufficient {
            AugmentationOutcome::AlreadySufficient
        } else if connectivity > k {
            AugmentationOutcome::Augmented
        } else {
            AugmentationOutcome::Incomplete
        };

        match outcome {
            AugmentationOutcome::Incomplete => warn!(
                k,
                initial,
                connectivity,
                edges_added = work.added.len(),
                strategy = %final_strategy,
                "augmentation incomplete"
            ),
            _ => info!(
                k,
                initial,
                connectivity,
                edges_added = work.added.len(),
                strategy = %final_strategy,
                "augmentation finished"
            ),
        }

        Ok(AugmentationResult {
            graph: work.graph,
            new_edges: work.added,
            k,
            initial_connectivity: initial,
            connectivity,
            outcome,
            final_strategy,
            events: work.events,
        })
    }
}

/// Augment `edges` with the default configuration.
///
/// # Errors
///
/// [`AugmentError::InvalidGraph`](crate::AugmentError::InvalidGraph) for a
/// self-loop, a repeated unordered pair, or fewer than two vertices.
/// Failing to reach `k` is not an error; check
/// [`AugmentationResult::outcome`].
pub fn augment_connectivity(edges: &[(VertexId, VertexId)], k: usize) -> Result<AugmentationResult> {
    Augmenter::default().augment_edges(edges, k)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(n: u64) -> Vec<(u64, u64)> {
        (0..n)
            .flat_map(|a| (a + 1..n).map(move |b| (a, b)))
            .collect()
    }

    #[test]
    fn test_already_sufficient() {
        let result = augment_connectivity(&complete(5), 2).unwrap();
        assert_eq!(result.outcome, AugmentationOutcome::AlreadySufficient);
        assert!(result.new_edges.is_empty());
        assert_eq!(result.augmented_edges(), complete(5));
        assert_eq!(result.connectivity, 4);
        assert_eq!(result.final_strategy, Strategy::AlreadySufficient);
    }

    #[test]
    fn test_square_gets_diagonals() {
        let result = augment_connectivity(&[(0, 1), (1, 2), (2, 3), (3, 0)], 2).unwrap();
        assert_eq!(result.new_edges, vec![Edge::new(0, 2), Edge::new(1, 3)]);
        assert_eq!(result.connectivity, 3);
        assert_eq!(result.outcome, AugmentationOutcome::Augmented);
        assert_eq!(result.final_strategy, Strategy::DegreeMatching);
    }

    #[test]
    fn test_k4_cannot_reach_four() {
        let result = augment_connectivity(&complete(4), 3).unwrap();
        assert!(result.new_edges.is_empty());
        assert_eq!(result.connectivity, 3);
        assert_eq!(result.outcome, AugmentationOutcome::Incomplete);
        assert!(!result.is_complete());
        assert_eq!(result.final_strategy, Strategy::ForcedFallback);
    }

    #[test]
    fn test_no_degree_k_vertex_skips_to_forced() {
        // Path 0-1-2 with k = 0: no isolated vertex, so D_0 is empty
        let result = augment_connectivity(&[(0, 1), (1, 2)], 0).unwrap();
        assert_eq!(result.outcome, AugmentationOutcome::AlreadySufficient);

        // Star with k = 2: no vertex of degree 2
        let result = augment_connectivity(&[(0, 1), (0, 2), (0, 3)], 2).unwrap();
        assert!(result.events.iter().any(|e| matches!(
            e,
            AugmentEvent::StrategyFellThrough {
                from: Strategy::AlreadySufficient,
                to: Strategy::ForcedFallback,
                ..
            }
        )));
        assert!(result.connectivity >= 1);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let graph = Graph::from_edges(&[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        let before = graph.clone();
        let augmenter = Augmenter::new(AugmentConfig::default()).unwrap();
        let result = augmenter.augment(&graph, 2).unwrap();
        assert_eq!(graph, before);
        assert_eq!(result.graph.num_edges(), 6);
    }

    #[test]
    fn test_invalid_inputs() {
        let err = augment_connectivity(&[(0, 0)], 1).unwrap_err();
        assert!(err.is_validation_error());

        let err = augment_connectivity(&[(0, 1), (1, 0)], 1).unwrap_err();
        assert!(matches!(err, AugmentError::InvalidGraph(_)));

        let err = Augmenter::new(AugmentConfig {
            strategic_budget: 0,
            ..Default::default()
        })
        .unwrap_err();
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: AugmentConfig = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.strategic_budget, 5);
        assert_eq!(config.forced_budget, 10);
        assert!(config.parallel);
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(Strategy::DegreeMatching.to_string(), "degree-matching");
        assert_eq!(Strategy::ForcedFallback.to_string(), "forced-fallback");
    }
}

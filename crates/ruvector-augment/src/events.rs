//! Event log for augmentation runs.
//!
//! Every run records [`AugmentEvent`]s on its
//! [`AugmentationResult`](crate::augment::AugmentationResult): which
//! strategies were entered, which edges each one committed, and why the
//! orchestrator fell through. A driver can render progress from the log
//! without the core ever printing.

use serde::{Deserialize, Serialize};

use crate::augment::Strategy;
use crate::graph::Edge;

/// Events emitted during an augmentation run.
///
/// Events are tagged with `#[serde(tag = "type")]` so they serialise as
/// `{ "type": "StrategyStarted", ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AugmentEvent {
    /// A strategy is about to run.
    StrategyStarted {
        /// Strategy being entered.
        strategy: Strategy,
        /// Connectivity of the working graph on entry.
        connectivity: usize,
    },

    /// A strategy committed edges to the working graph.
    EdgesCommitted {
        /// Strategy that chose the edges.
        strategy: Strategy,
        /// The committed edges, in insertion order.
        edges: Vec<Edge>,
        /// Connectivity after the commit.
        connectivity: usize,
    },

    /// The orchestrator moved on to the next strategy.
    StrategyFellThrough {
        /// Strategy that did not reach the target.
        from: Strategy,
        /// Strategy that runs next.
        to: Strategy,
        /// Human-readable reason.
        reason: String,
    },

    /// A strategy stopped because its insertion budget ran out.
    BudgetExhausted {
        /// Strategy that was running.
        strategy: Strategy,
        /// The exhausted limit.
        limit: usize,
    },
}

impl AugmentEvent {
    /// Strategy the event refers to (the source strategy for fall-throughs)
    pub fn strategy(&self) -> Strategy {
        match self {
            AugmentEvent::StrategyStarted { strategy, .. }
            | AugmentEvent::EdgesCommitted { strategy, .. }
            | AugmentEvent::BudgetExhausted { strategy, .. } => *strategy,
            AugmentEvent::StrategyFellThrough { from, .. } => *from,
        }
    }
}

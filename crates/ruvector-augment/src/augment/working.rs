//! Mutable working copy shared by the strategies.

use crate::connectivity::{ConnectivityOracle, MinCut};
use crate::error::Result;
use crate::events::AugmentEvent;
use crate::graph::{Edge, Graph};

use super::Strategy;

/// The caller's graph plus every edge committed so far.
///
/// Strategies insert into `graph` and record the insertion in `added`;
/// rolling back rebuilds from `original` so the input is never touched.
pub(crate) struct WorkingGraph<'a> {
    original: &'a Graph,
    oracle: &'a ConnectivityOracle,
    pub graph: Graph,
    pub added: Vec<Edge>,
    /// Connectivity of `graph` as of the last [`refresh`](Self::refresh)
    pub connectivity: usize,
    pub k: usize,
    pub events: Vec<AugmentEvent>,
}

impl<'a> WorkingGraph<'a> {
    pub fn new(
        original: &'a Graph,
        oracle: &'a ConnectivityOracle,
        connectivity: usize,
        k: usize,
    ) -> Self {
        Self {
            original,
            oracle,
            graph: original.clone(),
            added: Vec::new(),
            connectivity,
            k,
            events: Vec::new(),
        }
    }

    pub fn original(&self) -> &Graph {
        self.original
    }

    /// Whether the target `> k` has been reached
    pub fn satisfied(&self) -> bool {
        self.connectivity > self.k
    }

    /// Insert `edge` unless it is a self-loop or already present.
    ///
    /// Does not re-measure; call [`refresh`](Self::refresh) afterwards.
    pub fn try_insert(&mut self, edge: Edge) -> Result<bool> {
        if edge.is_self_loop() || self.graph.has_edge(edge.source, edge.target) {
            return Ok(false);
        }
        self.graph.insert_edge(edge.source, edge.target)?;
        self.added.push(edge);
        Ok(true)
    }

    /// Re-measure connectivity of the working graph
    pub fn refresh(&mut self) -> Result<usize> {
        self.connectivity = self.oracle.edge_connectivity(&self.graph)?;
        Ok(self.connectivity)
    }

    pub fn minimum_cut(&self) -> Result<MinCut> {
        self.oracle.minimum_cut(&self.graph)
    }

    /// Drop every edge committed after the first `len`, restoring the
    /// connectivity that was measured for that prefix
    pub fn rollback(&mut self, len: usize, connectivity: usize) -> Result<()> {
        if len < self.added.len() {
            self.added.truncate(len);
            self.graph = self.original.with_edges(&self.added)?;
        }
        self.connectivity = connectivity;
        Ok(())
    }

    pub fn record(&mut self, event: AugmentEvent) {
        self.events.push(event);
    }

    pub fn started(&mut self, strategy: Strategy) {
        tracing::debug!(%strategy, connectivity = self.connectivity, k = self.k, "strategy started");
        self.record(AugmentEvent::StrategyStarted {
            strategy,
            connectivity: self.connectivity,
        });
    }

    /// Log the edges added since `from` as a single commit
    pub fn committed(&mut self, strategy: Strategy, from: usize) {
        let edges = self.added[from.min(self.added.len())..].to_vec();
        if edges.is_empty() {
            return;
        }
        tracing::debug!(
            %strategy,
            edges_added = edges.len(),
            connectivity = self.connectivity,
            "edges committed"
        );
        self.record(AugmentEvent::EdgesCommitted {
            strategy,
            edges,
            connectivity: self.connectivity,
        });
    }

    pub fn fell_through(&mut self, from: Strategy, to: Strategy, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::info!(%from, %to, connectivity = self.connectivity, k = self.k, %reason, "falling through");
        self.record(AugmentEvent::StrategyFellThrough { from, to, reason });
    }

    pub fn budget_exhausted(&mut self, strategy: Strategy, limit: usize) {
        tracing::warn!(%strategy, limit, "attempt budget exhausted");
        self.record(AugmentEvent::BudgetExhausted { strategy, limit });
    }
}

//! Global edge connectivity and minimum cuts
//!
//! The global minimum edge cut of an undirected graph separates the smallest
//! vertex `s` from *some* other vertex `t`. Fixing `s` and probing every
//! other vertex with a unit-capacity max-flow therefore finds it with
//! `|V| - 1` probes instead of `|V|²`.
//!
//! # Overview
//!
//! - [`ConnectivityOracle::edge_connectivity`]: minimum over all probes
//! - [`ConnectivityOracle::minimum_cut`]: partition and crossing edges of the
//!   cut found by the first minimising probe (ascending vertex order)
//! - [`ConnectivityStatus`]: distinguishes a disconnected graph (value 0)
//!   from an error
//!
//! Probes are independent and read an immutable network, so with the
//! `parallel` feature they run on the rayon pool and the result is reduced
//! by taking the minimum. Cut selection stays deterministic either way.

pub(crate) mod flow;

use serde::{Deserialize, Serialize};

use crate::error::{AugmentError, Result};
use crate::graph::{Edge, Graph, VertexId};
use flow::UnitFlowNetwork;

/// Connectivity of a graph with at least two vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectivityStatus {
    /// The graph falls apart into several components (connectivity 0)
    Disconnected,
    /// Connected with the given edge connectivity (always ≥ 1)
    Connected(usize),
}

impl ConnectivityStatus {
    /// Numeric edge connectivity
    pub fn value(&self) -> usize {
        match self {
            ConnectivityStatus::Disconnected => 0,
            ConnectivityStatus::Connected(c) => *c,
        }
    }

    /// Whether the graph is disconnected
    pub fn is_disconnected(&self) -> bool {
        matches!(self, ConnectivityStatus::Disconnected)
    }
}

impl From<usize> for ConnectivityStatus {
    fn from(value: usize) -> Self {
        match value {
            0 => ConnectivityStatus::Disconnected,
            c => ConnectivityStatus::Connected(c),
        }
    }
}

/// A minimum edge cut
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinCut {
    /// Number of crossing edges
    pub value: usize,
    /// Side containing the smallest vertex, ascending
    pub source_side: Vec<VertexId>,
    /// The other side, ascending
    pub sink_side: Vec<VertexId>,
    /// Edges with one endpoint on each side, sorted
    pub crossing_edges: Vec<Edge>,
}

impl MinCut {
    /// Endpoints of the crossing edges, ascending and deduplicated
    pub fn bottleneck_vertices(&self) -> Vec<VertexId> {
        let mut vertices: Vec<VertexId> = self
            .crossing_edges
            .iter()
            .flat_map(|e| [e.source, e.target])
            .collect();
        vertices.sort_unstable();
        vertices.dedup();
        vertices
    }

    /// Whether `u` and `v` lie on different sides
    pub fn separates(&self, u: VertexId, v: VertexId) -> bool {
        let u_in = self.source_side.binary_search(&u).is_ok();
        let v_in = self.source_side.binary_search(&v).is_ok();
        u_in != v_in
    }
}

/// Computes edge connectivity and minimum cuts by max-flow probing
#[derive(Debug, Clone)]
pub struct ConnectivityOracle {
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    parallel: bool,
}

impl Default for ConnectivityOracle {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl ConnectivityOracle {
    /// Oracle that parallelises probes when the `parallel` feature is enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Oracle that always probes sequentially
    pub fn sequential() -> Self {
        Self { parallel: false }
    }

    /// Oracle with an explicit parallelism preference
    pub fn with_parallel(parallel: bool) -> Self {
        Self { parallel }
    }

    /// Size of the global minimum edge cut.
    ///
    /// Returns `Ok(0)` for a disconnected graph and
    /// [`AugmentError::TooFewVertices`] below two vertices.
    pub fn edge_connectivity(&self, graph: &Graph) -> Result<usize> {
        Self::check_size(graph)?;
        if !graph.is_connected() {
            return Ok(0);
        }

        let network = UnitFlowNetwork::new(&graph.compact());
        let values = self.probe_values(&network);
        Ok(values.into_iter().min().unwrap_or(0))
    }

    /// Edge connectivity with the disconnected case made explicit
    pub fn connectivity_status(&self, graph: &Graph) -> Result<ConnectivityStatus> {
        match self.edge_connectivity(graph)? {
            0 => Ok(ConnectivityStatus::Disconnected),
            c => Ok(ConnectivityStatus::Connected(c)),
        }
    }

    /// `edge_connectivity(graph) > k`
    pub fn is_at_least_k_plus_one_edge_connected(&self, graph: &Graph, k: usize) -> Result<bool> {
        Ok(self.edge_connectivity(graph)? > k)
    }

    /// A global minimum cut.
    ///
    /// Among several minimum cuts, the one returned is the source side of
    /// the first target vertex (ascending) whose probe attains the minimum,
    /// so the answer is stable for a fixed input.
    pub fn minimum_cut(&self, graph: &Graph) -> Result<MinCut> {
        Self::check_size(graph)?;

        let compact = graph.compact();
        let network = UnitFlowNetwork::new(&compact);
        let values = self.probe_values(&network);

        let (offset, _) = values
            .iter()
            .enumerate()
            .min_by_key(|&(i, &value)| (value, i))
            .ok_or(AugmentError::TooFewVertices { vertices: compact.len() })?;
        let target = offset + 1;

        let probe = network.max_flow(0, target);
        let on_source_side = network.source_side(&probe);

        let mut source_side = Vec::new();
        let mut sink_side = Vec::new();
        for (i, &id) in compact.ids.iter().enumerate() {
            if on_source_side[i] {
                source_side.push(id);
            } else {
                sink_side.push(id);
            }
        }

        let crossing_edges = graph
            .edges()
            .into_iter()
            .filter(|e| match (compact.index_of(e.source), compact.index_of(e.target)) {
                (Some(a), Some(b)) => on_source_side[a] != on_source_side[b],
                _ => false,
            })
            .collect::<Vec<_>>();

        tracing::trace!(
            value = probe.value,
            target = compact.ids[target],
            source_side = source_side.len(),
            "minimum cut located"
        );

        Ok(MinCut {
            value: probe.value,
            source_side,
            sink_side,
            crossing_edges,
        })
    }

    /// Crossing edges of [`minimum_cut`](Self::minimum_cut)
    pub fn minimum_cut_edges(&self, graph: &Graph) -> Result<Vec<Edge>> {
        Ok(self.minimum_cut(graph)?.crossing_edges)
    }

    fn check_size(graph: &Graph) -> Result<()> {
        let vertices = graph.num_vertices();
        if vertices < 2 {
            return Err(AugmentError::TooFewVertices { vertices });
        }
        Ok(())
    }

    /// Flow value from vertex 0 to each of `1..n`, in target order
    fn probe_values(&self, network: &UnitFlowNetwork) -> Vec<usize> {
        let n = network.num_vertices();

        #[cfg(feature = "parallel")]
        {
            if self.parallel {
                use rayon::prelude::*;
                return (1..n)
                    .into_par_iter()
                    .map(|t| network.max_flow(0, t).value)
                    .collect();
            }
        }

        (1..n).map(|t| network.max_flow(0, t).value).collect()
    }
}

/// Global edge connectivity with the default oracle
pub fn edge_connectivity(graph: &Graph) -> Result<usize> {
    ConnectivityOracle::default().edge_connectivity(graph)
}

/// Connectivity status with the default oracle
pub fn connectivity_status(graph: &Graph) -> Result<ConnectivityStatus> {
    ConnectivityOracle::default().connectivity_status(graph)
}

/// Deterministic global minimum cut with the default oracle
pub fn minimum_cut(graph: &Graph) -> Result<MinCut> {
    ConnectivityOracle::default().minimum_cut(graph)
}

/// Crossing edges of a deterministic global minimum cut
pub fn minimum_cut_edges(graph: &Graph) -> Result<Vec<Edge>> {
    ConnectivityOracle::default().minimum_cut_edges(graph)
}

/// `edge_connectivity(graph) > k`
pub fn is_at_least_k_plus_one_edge_connected(graph: &Graph, k: usize) -> Result<bool> {
    ConnectivityOracle::default().is_at_least_k_plus_one_edge_connected(graph, k)
}

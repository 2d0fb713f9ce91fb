//! Graph representation for connectivity augmentation
//!
//! Provides an ordered adjacency structure for simple undirected graphs:
//! - O(log n) edge existence queries
//! - Deterministic (ascending) vertex and neighbor iteration
//! - Induced subgraphs and complements as fresh graphs
//!
//! Every algorithm in this crate iterates vertices in ascending order, so
//! results are reproducible for a fixed input.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::ops::Bound::{Excluded, Unbounded};

use serde::{Deserialize, Serialize};

use crate::error::{AugmentError, Result};

/// Unique vertex identifier
pub type VertexId = u64;

/// An undirected edge stored with canonical endpoints (`source < target`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    /// Smaller endpoint
    pub source: VertexId,
    /// Larger endpoint
    pub target: VertexId,
}

impl Edge {
    /// Create an edge, normalizing the endpoint order
    pub fn new(u: VertexId, v: VertexId) -> Self {
        if u <= v {
            Self { source: u, target: v }
        } else {
            Self { source: v, target: u }
        }
    }

    /// Both endpoints as a tuple
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.source, self.target)
    }

    /// Get the other endpoint of the edge given one endpoint
    pub fn other(&self, v: VertexId) -> Option<VertexId> {
        if self.source == v {
            Some(self.target)
        } else if self.target == v {
            Some(self.source)
        } else {
            None
        }
    }

    /// Whether `v` is an endpoint
    pub fn contains(&self, v: VertexId) -> bool {
        self.source == v || self.target == v
    }

    /// Whether both endpoints coincide
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from((u, v): (VertexId, VertexId)) -> Self {
        Edge::new(u, v)
    }
}

impl From<Edge> for (VertexId, VertexId) {
    fn from(edge: Edge) -> Self {
        edge.endpoints()
    }
}

/// Statistics about the graph
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphStats {
    /// Number of vertices in the graph
    pub num_vertices: usize,
    /// Number of edges in the graph
    pub num_edges: usize,
    /// Minimum vertex degree
    pub min_degree: usize,
    /// Maximum vertex degree
    pub max_degree: usize,
    /// Average vertex degree
    pub avg_degree: f64,
}

/// Simple undirected graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    /// Adjacency: vertex -> ordered neighbor set
    adjacency: BTreeMap<VertexId, BTreeSet<VertexId>>,
    /// Number of undirected edges
    num_edges: usize,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with the given isolated vertices
    pub fn with_vertices<I: IntoIterator<Item = VertexId>>(vertices: I) -> Self {
        let mut graph = Self::new();
        for v in vertices {
            graph.add_vertex(v);
        }
        graph
    }

    /// Build a graph from an edge list.
    ///
    /// Fails on the first self-loop or repeated unordered pair. Use
    /// [`validate_edge_list`](crate::validation::validate_edge_list) first
    /// when a positional diagnostic is wanted.
    pub fn from_edges(edges: &[(VertexId, VertexId)]) -> Result<Self> {
        let mut graph = Self::new();
        for &(u, v) in edges {
            graph.insert_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Add a vertex (returns true if new)
    pub fn add_vertex(&mut self, v: VertexId) -> bool {
        if self.adjacency.contains_key(&v) {
            false
        } else {
            self.adjacency.insert(v, BTreeSet::new());
            true
        }
    }

    /// Check if vertex exists
    pub fn has_vertex(&self, v: VertexId) -> bool {
        self.adjacency.contains_key(&v)
    }

    /// Insert an edge, adding missing endpoints
    pub fn insert_edge(&mut self, u: VertexId, v: VertexId) -> Result<Edge> {
        if u == v {
            return Err(AugmentError::InvalidEdge(u, v));
        }
        if self.has_edge(u, v) {
            return Err(AugmentError::EdgeExists(u, v));
        }

        self.adjacency.entry(u).or_default().insert(v);
        self.adjacency.entry(v).or_default().insert(u);
        self.num_edges += 1;

        Ok(Edge::new(u, v))
    }

    /// Check if edge exists
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.adjacency
            .get(&u)
            .map(|neighbors| neighbors.contains(&v))
            .unwrap_or(false)
    }

    /// Neighbors of a vertex in ascending order (empty for unknown vertices)
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency
            .get(&v)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().copied())
    }

    /// Get degree of vertex
    pub fn degree(&self, v: VertexId) -> usize {
        self.adjacency
            .get(&v)
            .map(|neighbors| neighbors.len())
            .unwrap_or(0)
    }

    /// Get number of vertices
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Get number of edges
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// All vertices in ascending order
    pub fn vertices(&self) -> Vec<VertexId> {
        self.adjacency.keys().copied().collect()
    }

    /// All edges in lexicographic order
    pub fn edges(&self) -> Vec<Edge> {
        self.adjacency
            .iter()
            .flat_map(|(&u, neighbors)| {
                neighbors
                    .range((Excluded(u), Unbounded))
                    .map(move |&v| Edge { source: u, target: v })
            })
            .collect()
    }

    /// All edges as endpoint tuples
    pub fn edge_list(&self) -> Vec<(VertexId, VertexId)> {
        self.edges().iter().map(Edge::endpoints).collect()
    }

    /// Vertices whose degree is exactly `k`, ascending
    pub fn vertices_of_degree(&self, k: usize) -> Vec<VertexId> {
        self.adjacency
            .iter()
            .filter(|(_, neighbors)| neighbors.len() == k)
            .map(|(&v, _)| v)
            .collect()
    }

    /// Subgraph induced by `vertices`.
    ///
    /// Vertices not present in `self` are ignored.
    pub fn induced_subgraph(&self, vertices: &[VertexId]) -> Graph {
        let keep: BTreeSet<VertexId> = vertices
            .iter()
            .copied()
            .filter(|v| self.has_vertex(*v))
            .collect();

        let mut sub = Graph::with_vertices(keep.iter().copied());
        for &u in &keep {
            for v in self.neighbors(u) {
                if u < v && keep.contains(&v) {
                    sub.link(u, v);
                }
            }
        }
        sub
    }

    /// Complement graph over the same vertex set.
    ///
    /// Examines every vertex pair, so this is O(V²) regardless of density.
    pub fn complement(&self) -> Graph {
        let vertices = self.vertices();
        let mut comp = Graph::with_vertices(vertices.iter().copied());

        for (i, &u) in vertices.iter().enumerate() {
            for &v in &vertices[i + 1..] {
                if !self.has_edge(u, v) {
                    comp.link(u, v);
                }
            }
        }
        comp
    }

    /// Copy of this graph with extra edges inserted
    pub fn with_edges(&self, extra: &[Edge]) -> Result<Graph> {
        let mut graph = self.clone();
        for edge in extra {
            graph.insert_edge(edge.source, edge.target)?;
        }
        Ok(graph)
    }

    /// Check if graph is connected using BFS
    pub fn is_connected(&self) -> bool {
        let start = match self.adjacency.keys().next() {
            Some(&v) => v,
            None => return true, // Empty graph is considered connected
        };
        self.bfs_distances(start).len() == self.num_vertices()
    }

    /// Connected components, each sorted, ordered by smallest member
    pub fn connected_components(&self) -> Vec<Vec<VertexId>> {
        let mut visited = BTreeSet::new();
        let mut components = Vec::new();

        for &start in self.adjacency.keys() {
            if visited.contains(&start) {
                continue;
            }
            let component: Vec<VertexId> = self.bfs_distances(start).into_keys().collect();
            visited.extend(component.iter().copied());
            components.push(component);
        }

        components
    }

    /// Hop distance between `u` and `v`, or `None` when unreachable
    pub fn shortest_path_len(&self, u: VertexId, v: VertexId) -> Option<usize> {
        if !self.has_vertex(u) || !self.has_vertex(v) {
            return None;
        }
        self.bfs_distances(u).get(&v).copied()
    }

    /// BFS distances from `source` to every reachable vertex
    pub fn bfs_distances(&self, source: VertexId) -> BTreeMap<VertexId, usize> {
        let mut dist = BTreeMap::new();
        if !self.has_vertex(source) {
            return dist;
        }

        let mut queue = VecDeque::new();
        dist.insert(source, 0);
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            let du = dist[&u];
            for w in self.neighbors(u) {
                if !dist.contains_key(&w) {
                    dist.insert(w, du + 1);
                    queue.push_back(w);
                }
            }
        }

        dist
    }

    /// Get graph statistics
    pub fn stats(&self) -> GraphStats {
        let num_vertices = self.num_vertices();
        if num_vertices == 0 {
            return GraphStats::default();
        }

        let degrees = self.adjacency.values().map(BTreeSet::len);
        let min_degree = degrees.clone().min().unwrap_or(0);
        let max_degree = degrees.max().unwrap_or(0);

        GraphStats {
            num_vertices,
            num_edges: self.num_edges,
            min_degree,
            max_degree,
            avg_degree: (2 * self.num_edges) as f64 / num_vertices as f64,
        }
    }

    /// Dense index view for the flow and matching kernels
    pub(crate) fn compact(&self) -> CompactAdjacency {
        let ids = self.vertices();
        let adj = ids
            .iter()
            .map(|&v| {
                self.neighbors(v)
                    .filter_map(|w| ids.binary_search(&w).ok())
                    .collect()
            })
            .collect();
        CompactAdjacency { ids, adj }
    }

    // Unchecked insert for graphs whose construction already rules out
    // duplicates and self-loops.
    fn link(&mut self, u: VertexId, v: VertexId) {
        let fresh = self.adjacency.entry(u).or_default().insert(v);
        self.adjacency.entry(v).or_default().insert(u);
        if fresh {
            self.num_edges += 1;
        }
    }
}

/// Vertices renumbered `0..n` in ascending id order, with index adjacency
#[derive(Debug, Clone)]
pub(crate) struct CompactAdjacency {
    pub ids: Vec<VertexId>,
    pub adj: Vec<Vec<usize>>,
}

impl CompactAdjacency {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn index_of(&self, v: VertexId) -> Option<usize> {
        self.ids.binary_search(&v).ok()
    }
}

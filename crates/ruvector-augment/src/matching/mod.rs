//! Maximum-cardinality matching on general graphs
//!
//! Implements Edmonds' blossom algorithm: for each exposed vertex grow an
//! alternating BFS tree; when an edge closes an odd cycle between two even
//! vertices, contract the cycle (the *blossom*) onto its base and keep
//! searching; an exposed odd-side vertex ends an augmenting path. Bipartite
//! or greedy matchers are incorrect on odd cycles, which is why the
//! contraction step exists.
//!
//! Runs in O(V³). A greedy pass seeds the matching so most roots are already
//! covered before the first search.

use std::collections::{BTreeSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::graph::{CompactAdjacency, Edge, Graph, VertexId};

/// A set of pairwise vertex-disjoint edges
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matching {
    edges: Vec<Edge>,
}

impl Matching {
    /// Build a matching from edges, rejecting any that share a vertex
    pub fn from_edges(edges: Vec<Edge>) -> Option<Self> {
        let mut seen = BTreeSet::new();
        for edge in &edges {
            if edge.is_self_loop() || !seen.insert(edge.source) || !seen.insert(edge.target) {
                return None;
            }
        }
        let mut edges = edges;
        edges.sort_unstable();
        Some(Self { edges })
    }

    /// Matched edges, sorted
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Consume into the edge list
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }

    /// Number of matched edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether no edge is matched
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Every vertex covered by the matching
    pub fn matched_vertices(&self) -> BTreeSet<VertexId> {
        self.edges
            .iter()
            .flat_map(|e| [e.source, e.target])
            .collect()
    }

    /// Partner of `v`, if matched
    pub fn mate(&self, v: VertexId) -> Option<VertexId> {
        self.edges.iter().find_map(|e| e.other(v))
    }

    /// Whether the matched vertex set is exactly `vertices`
    pub fn covers_exactly(&self, vertices: &[VertexId]) -> bool {
        let wanted: BTreeSet<VertexId> = vertices.iter().copied().collect();
        self.matched_vertices() == wanted
    }

    /// Whether every edge belongs to `graph` and no vertex repeats
    pub fn is_valid_for(&self, graph: &Graph) -> bool {
        let mut seen = BTreeSet::new();
        self.edges.iter().all(|e| {
            graph.has_edge(e.source, e.target) && seen.insert(e.source) && seen.insert(e.target)
        })
    }
}

/// Maximum-cardinality matching of `graph`
pub fn maximum_matching(graph: &Graph) -> Matching {
    let compact = graph.compact();
    let mate = BlossomMatcher::new(&compact).solve();

    let edges = mate
        .iter()
        .enumerate()
        .filter_map(|(u, m)| match m {
            Some(v) if u < *v => Some(Edge::new(compact.ids[u], compact.ids[*v])),
            _ => None,
        })
        .collect();

    tracing::trace!(
        vertices = compact.len(),
        "maximum matching computed"
    );

    Matching { edges }
}

/// Vertices of `graph` not covered by `matching`, ascending
pub fn unmatched_vertices(graph: &Graph, matching: &Matching) -> Vec<VertexId> {
    let matched = matching.matched_vertices();
    graph
        .vertices()
        .into_iter()
        .filter(|v| !matched.contains(v))
        .collect()
}

struct BlossomMatcher<'a> {
    adj: &'a [Vec<usize>],
    mate: Vec<Option<usize>>,
    /// Alternating-tree parent of odd vertices
    parent: Vec<Option<usize>>,
    /// Base of the blossom each vertex currently belongs to
    base: Vec<usize>,
    /// Even (outer) vertices of the current tree
    used: Vec<bool>,
    blossom: Vec<bool>,
    queue: VecDeque<usize>,
}

impl<'a> BlossomMatcher<'a> {
    fn new(graph: &'a CompactAdjacency) -> Self {
        let n = graph.len();
        Self {
            adj: &graph.adj,
            mate: vec![None; n],
            parent: vec![None; n],
            base: (0..n).collect(),
            used: vec![false; n],
            blossom: vec![false; n],
            queue: VecDeque::with_capacity(n),
        }
    }

    fn solve(mut self) -> Vec<Option<usize>> {
        let n = self.adj.len();
        self.greedy_seed();

        for root in 0..n {
            if self.mate[root].is_none() {
                if let Some(end) = self.find_augmenting_path(root) {
                    self.augment(end);
                }
            }
        }

        self.mate
    }

    fn greedy_seed(&mut self) {
        for v in 0..self.adj.len() {
            if self.mate[v].is_some() {
                continue;
            }
            let free = self.adj[v].iter().copied().find(|&w| self.mate[w].is_none());
            if let Some(w) = free {
                self.mate[v] = Some(w);
                self.mate[w] = Some(v);
            }
        }
    }

    /// Grow an alternating tree from `root`; returns the exposed endpoint
    /// of an augmenting path if one exists
    fn find_augmenting_path(&mut self, root: usize) -> Option<usize> {
        let n = self.adj.len();
        self.used.iter_mut().for_each(|u| *u = false);
        self.parent.iter_mut().for_each(|p| *p = None);
        for (i, b) in self.base.iter_mut().enumerate() {
            *b = i;
        }

        self.used[root] = true;
        self.queue.clear();
        self.queue.push_back(root);

        while let Some(v) = self.queue.pop_front() {
            for i in 0..self.adj[v].len() {
                let to = self.adj[v][i];
                if self.base[v] == self.base[to] || self.mate[v] == Some(to) {
                    continue;
                }

                let to_is_even = to == root
                    || self.mate[to].map_or(false, |m| self.parent[m].is_some());

                if to_is_even {
                    // Odd cycle: contract it onto the common base
                    let cur_base = self.lowest_common_base(v, to);
                    self.blossom.iter_mut().for_each(|b| *b = false);
                    self.mark_path(v, cur_base, to);
                    self.mark_path(to, cur_base, v);

                    for u in 0..n {
                        if self.blossom[self.base[u]] {
                            self.base[u] = cur_base;
                            if !self.used[u] {
                                self.used[u] = true;
                                self.queue.push_back(u);
                            }
                        }
                    }
                } else if self.parent[to].is_none() {
                    self.parent[to] = Some(v);
                    match self.mate[to] {
                        None => return Some(to),
                        Some(m) => {
                            self.used[m] = true;
                            self.queue.push_back(m);
                        }
                    }
                }
            }
        }

        None
    }

    fn lowest_common_base(&self, a: usize, b: usize) -> usize {
        let mut on_path = vec![false; self.adj.len()];

        let mut a = a;
        loop {
            a = self.base[a];
            on_path[a] = true;
            match self.mate[a].and_then(|m| self.parent[m]) {
                Some(next) => a = next,
                None => break,
            }
        }

        let mut b = b;
        loop {
            b = self.base[b];
            if on_path[b] {
                return b;
            }
            match self.mate[b].and_then(|m| self.parent[m]) {
                Some(next) => b = next,
                None => return b,
            }
        }
    }

    fn mark_path(&mut self, v: usize, cur_base: usize, child: usize) {
        let mut v = v;
        let mut child = child;
        while self.base[v] != cur_base {
            let Some(m) = self.mate[v] else { break };
            self.blossom[self.base[v]] = true;
            self.blossom[self.base[m]] = true;
            self.parent[v] = Some(child);
            child = m;
            match self.parent[m] {
                Some(next) => v = next,
                None => break,
            }
        }
    }

    /// Flip matched/unmatched edges along the path ending at `end`
    fn augment(&mut self, end: usize) {
        let mut cursor = Some(end);
        while let Some(v) = cursor {
            let Some(pv) = self.parent[v] else { break };
            let next = self.mate[pv];
            self.mate[v] = Some(pv);
            self.mate[pv] = Some(v);
            cursor = next;
        }
    }
}

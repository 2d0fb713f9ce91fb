//! Shared test helpers for the ruvector-augment integration test suite.
//!
//! Provides deterministic graph generators and brute-force reference
//! implementations of edge connectivity and maximum matching for small
//! graphs.

#![allow(dead_code)]

use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Random number generator (simple LCG for deterministic reproducibility)
// ---------------------------------------------------------------------------

/// A minimal linear congruential generator for deterministic test data.
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Create a new LCG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate the next u64 value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    /// Generate a uniform f64 in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Generate a uniform integer in [0, n).
    pub fn next_below(&mut self, n: u64) -> u64 {
        (self.next_u64() >> 33) % n
    }
}

// ---------------------------------------------------------------------------
// Graph generators
// ---------------------------------------------------------------------------

/// Connected Erdős–Rényi style graph on `0..n`.
///
/// A random spanning tree guarantees connectivity; every other pair is then
/// added with probability `p`.
pub fn connected_random_graph(n: u64, p: f64, seed: u64) -> Vec<(u64, u64)> {
    let mut rng = Lcg::new(seed);
    let mut edges = BTreeSet::new();

    for v in 1..n {
        let parent = rng.next_below(v);
        edges.insert((parent, v));
    }
    for u in 0..n {
        for v in u + 1..n {
            if !edges.contains(&(u, v)) && rng.next_f64() < p {
                edges.insert((u, v));
            }
        }
    }
    edges.into_iter().collect()
}

/// Cycle `0 - 1 - ... - (n-1) - 0`.
pub fn cycle(n: u64) -> Vec<(u64, u64)> {
    (0..n).map(|i| (i, (i + 1) % n)).collect()
}

/// Path `0 - 1 - ... - (n-1)`.
pub fn path(n: u64) -> Vec<(u64, u64)> {
    (1..n).map(|i| (i - 1, i)).collect()
}

/// Complete graph on `0..n`.
pub fn complete(n: u64) -> Vec<(u64, u64)> {
    (0..n)
        .flat_map(|a| (a + 1..n).map(move |b| (a, b)))
        .collect()
}

/// The Petersen graph: 3-regular, 3-edge-connected, 10 vertices.
pub fn petersen() -> Vec<(u64, u64)> {
    let outer = (0..5).map(|i| (i, (i + 1) % 5));
    let spokes = (0..5).map(|i| (i, i + 5));
    let inner = (0..5).map(|i| (5 + i, 5 + (i + 2) % 5));
    outer.chain(spokes).chain(inner).collect()
}

/// Two vertex-disjoint triangles.
pub fn two_triangles() -> Vec<(u64, u64)> {
    vec![(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]
}

/// 6-cycle with the chords (0, 2) and (3, 5).
pub fn six_cycle_with_chords() -> Vec<(u64, u64)> {
    vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (0, 2), (3, 5)]
}

/// Edge list on `0..n` selected by the bits of `mask` over pairs in
/// lexicographic order. Falls back to `(0, 1)` when no bit selects a pair.
pub fn edges_from_mask(n: u64, mask: u64) -> Vec<(u64, u64)> {
    let edges: Vec<(u64, u64)> = complete(n)
        .into_iter()
        .enumerate()
        .filter(|(i, _)| *i < 64 && mask & (1u64 << i) != 0)
        .map(|(_, e)| e)
        .collect();
    if edges.is_empty() {
        vec![(0, 1)]
    } else {
        edges
    }
}

// ---------------------------------------------------------------------------
// Brute-force references
// ---------------------------------------------------------------------------

/// Vertices touched by `edges`, ascending.
pub fn vertex_set(edges: &[(u64, u64)]) -> Vec<u64> {
    let set: BTreeSet<u64> = edges.iter().flat_map(|&(u, v)| [u, v]).collect();
    set.into_iter().collect()
}

/// Edge connectivity by enumerating every bipartition that keeps the first
/// vertex on one side. Exponential; only for graphs with a handful of
/// vertices.
pub fn brute_force_connectivity(edges: &[(u64, u64)]) -> usize {
    let vertices = vertex_set(edges);
    let n = vertices.len();
    assert!(n >= 2 && n <= 16, "brute force only for small graphs");
    let index = |v: u64| vertices.binary_search(&v).unwrap();

    let mut best = usize::MAX;
    // Bit i set means vertex i + 1 is on the far side; vertex 0 stays near.
    for mask in 1u32..(1u32 << (n - 1)) {
        let far = |i: usize| i > 0 && mask & (1 << (i - 1)) != 0;
        let crossing = edges
            .iter()
            .filter(|&&(u, v)| far(index(u)) != far(index(v)))
            .count();
        best = best.min(crossing);
    }
    best
}

/// Size of a maximum matching by exhaustive search.
pub fn brute_force_matching_size(edges: &[(u64, u64)]) -> usize {
    fn search(edges: &[(u64, u64)], used: &mut BTreeSet<u64>) -> usize {
        let Some((&(u, v), rest)) = edges.split_first() else {
            return 0;
        };
        let skip = search(rest, used);
        if used.contains(&u) || used.contains(&v) {
            return skip;
        }
        used.insert(u);
        used.insert(v);
        let take = 1 + search(rest, used);
        used.remove(&u);
        used.remove(&v);
        skip.max(take)
    }
    search(edges, &mut BTreeSet::new())
}

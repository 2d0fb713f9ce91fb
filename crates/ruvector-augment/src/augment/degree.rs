//! Degree-k matching and path augmentation.
//!
//! Every vertex of degree exactly `k` needs at least one new incident edge
//! before the graph can be `(k+1)`-edge-connected. A maximum matching in the
//! complement of the subgraph induced on those vertices gives each of them
//! one new edge with the fewest insertions. When the matching leaves some of
//! them exposed it is not applied; the exposed vertices are paired through
//! length-2 paths instead.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::graph::{Edge, Graph, VertexId};
use crate::matching::maximum_matching;

use super::working::WorkingGraph;
use super::Strategy;

/// Run the degree-k matching strategy over `critical`, the vertices of
/// degree exactly `k`, falling into path augmentation on a partial cover.
///
/// Leaves the working graph re-measured and returns the last strategy that
/// ran. The caller decides whether to fall through.
pub(crate) fn run(work: &mut WorkingGraph<'_>, critical: &[VertexId]) -> Result<Strategy> {
    work.started(Strategy::DegreeMatching);

    let induced = work.original().induced_subgraph(critical);
    let complement = induced.complement();
    let matching = maximum_matching(&complement);

    tracing::debug!(
        critical = critical.len(),
        complement_edges = complement.num_edges(),
        matched = matching.len(),
        "degree-k matching computed"
    );

    if matching.covers_exactly(critical) {
        let start = work.added.len();
        for edge in matching.edges() {
            work.try_insert(*edge)?;
        }
        work.refresh()?;
        work.committed(Strategy::DegreeMatching, start);
        return Ok(Strategy::DegreeMatching);
    }

    // A partial matching is discarded; only the exposed vertices are paired.
    let matched = matching.matched_vertices();
    let unmatched: Vec<VertexId> = critical
        .iter()
        .copied()
        .filter(|v| !matched.contains(v))
        .collect();

    work.fell_through(
        Strategy::DegreeMatching,
        Strategy::PathAugmentation,
        format!("{} degree-{} vertices left unmatched", unmatched.len(), work.k),
    );

    augment_paths(work, &complement, &unmatched)?;
    Ok(Strategy::PathAugmentation)
}

/// Pair up `unmatched` vertices through length-2 paths.
///
/// Tiers, per pair: a common neighbour in `complement`, then a vertex on the
/// current minimum cut, then a direct edge. The first two tiers scan pairs
/// greedily; the direct tier pairs the leftovers in order and an odd one out
/// stays untouched.
fn augment_paths(
    work: &mut WorkingGraph<'_>,
    complement: &Graph,
    unmatched: &[VertexId],
) -> Result<()> {
    work.started(Strategy::PathAugmentation);
    let start = work.added.len();
    let mut paired = BTreeSet::new();

    for (i, &u) in unmatched.iter().enumerate() {
        if paired.contains(&u) {
            continue;
        }
        for &v in &unmatched[i + 1..] {
            if paired.contains(&v) {
                continue;
            }
            if let Some(w) = common_neighbor(complement, &work.graph, u, v) {
                work.try_insert(Edge::new(u, w))?;
                work.try_insert(Edge::new(w, v))?;
                paired.insert(u);
                paired.insert(v);
                break;
            }
        }
    }

    let leftover: Vec<VertexId> = unmatched
        .iter()
        .copied()
        .filter(|v| !paired.contains(v))
        .collect();

    for pair in leftover.chunks_exact(2) {
        let (u, v) = (pair[0], pair[1]);
        match cut_relay(work, u, v)? {
            Some(w) => {
                work.try_insert(Edge::new(u, w))?;
                work.try_insert(Edge::new(w, v))?;
            }
            None => {
                work.try_insert(Edge::new(u, v))?;
            }
        }
    }

    work.refresh()?;
    work.committed(Strategy::PathAugmentation, start);
    Ok(())
}

/// Smallest `w` adjacent to both `u` and `v` in `complement` whose path
/// `u - w - v` is still absent from `graph`
fn common_neighbor(complement: &Graph, graph: &Graph, u: VertexId, v: VertexId) -> Option<VertexId> {
    complement.neighbors(u).find(|&w| {
        w != v
            && complement.has_edge(w, v)
            && !graph.has_edge(u, w)
            && !graph.has_edge(w, v)
    })
}

/// Smallest endpoint of a current minimum-cut edge that can relay `u` to `v`
fn cut_relay(work: &WorkingGraph<'_>, u: VertexId, v: VertexId) -> Result<Option<VertexId>> {
    let cut = work.minimum_cut()?;
    Ok(cut.bottleneck_vertices().into_iter().find(|&w| {
        w != u && w != v && !work.graph.has_edge(u, w) && !work.graph.has_edge(w, v)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectivity::ConnectivityOracle;

    fn graph(edges: &[(u64, u64)]) -> Graph {
        Graph::from_edges(edges).unwrap()
    }

    #[test]
    fn full_cover_adds_matching() {
        // 4-cycle: the complement on D_2 is the two diagonals
        let g = graph(&[(0, 1), (1, 2), (2, 3), (3, 0)]);
        let oracle = ConnectivityOracle::sequential();
        let mut w = WorkingGraph::new(&g, &oracle, 2, 2);

        let last = run(&mut w, &g.vertices_of_degree(2)).unwrap();

        assert_eq!(last, Strategy::DegreeMatching);
        assert_eq!(w.added, vec![Edge::new(0, 2), Edge::new(1, 3)]);
        assert_eq!(w.connectivity, 3);
        assert!(w.satisfied());
    }

    #[test]
    fn partial_cover_enters_path_augmentation() {
        // Star centred on 0 with leaves 1, 2, 3 plus 4 hanging off 1.
        // D_1 = {2, 3, 4}; the complement on D_1 is a triangle, so one
        // vertex stays unmatched and has no partner for a path.
        let g = graph(&[(0, 1), (0, 2), (0, 3), (1, 4)]);
        let oracle = ConnectivityOracle::sequential();
        let mut w = WorkingGraph::new(&g, &oracle, 1, 1);

        let critical = g.vertices_of_degree(1);
        assert_eq!(critical, vec![2, 3, 4]);
        let last = run(&mut w, &critical).unwrap();

        assert_eq!(last, Strategy::PathAugmentation);
        assert!(w
            .events
            .iter()
            .any(|e| e.strategy() == Strategy::PathAugmentation));
        assert!(w.added.is_empty());
        assert_eq!(w.connectivity, 1);
    }

    #[test]
    fn partial_matching_is_not_applied() {
        // D_2 = {0, 1, 2, 3}: a triangle on 1, 2, 3 and vertex 0 hanging off
        // a dense block on 4..8. The complement on D_2 is the star at 0, so
        // one leaf is matched and the other two are relayed through 0.
        let g = graph(&[
            (1, 2),
            (2, 3),
            (1, 3),
            (0, 4),
            (0, 5),
            (4, 5),
            (4, 6),
            (4, 7),
            (5, 6),
            (5, 7),
            (6, 7),
        ]);
        let oracle = ConnectivityOracle::sequential();
        let mut w = WorkingGraph::new(&g, &oracle, 0, 2);

        let critical = g.vertices_of_degree(2);
        assert_eq!(critical, vec![0, 1, 2, 3]);
        assert_eq!(run(&mut w, &critical).unwrap(), Strategy::PathAugmentation);

        // Only the two path edges land; the matched leaf stays unattached.
        assert_eq!(w.added.len(), 2);
        assert_eq!((1..=3).filter(|&v| w.graph.has_edge(0, v)).count(), 2);
        assert!(!w.events.iter().any(|e| matches!(
            e,
            crate::events::AugmentEvent::EdgesCommitted {
                strategy: Strategy::DegreeMatching,
                ..
            }
        )));
        assert_eq!(w.connectivity, 2);
    }

    #[test]
    fn common_neighbor_respects_existing_edges() {
        let complement = graph(&[(0, 2), (2, 1), (0, 3), (3, 1)]);
        let mut g = graph(&[(0, 1), (4, 5)]);
        assert_eq!(common_neighbor(&complement, &g, 0, 1), Some(2));

        g.insert_edge(0, 2).unwrap();
        assert_eq!(common_neighbor(&complement, &g, 0, 1), Some(3));
    }

    #[test]
    fn unmatched_pairs_fall_back_to_direct_edges() {
        // D_3 of K4 has an empty complement, and every relay or direct edge
        // already exists, so nothing is added.
        let g = graph(&[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        let oracle = ConnectivityOracle::sequential();
        let mut w = WorkingGraph::new(&g, &oracle, 3, 3);

        run(&mut w, &g.vertices_of_degree(3)).unwrap();

        assert!(w.added.is_empty());
        assert_eq!(w.connectivity, 3);
        assert!(!w.satisfied());
    }
}

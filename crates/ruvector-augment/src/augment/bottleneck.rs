//! Strategic bottleneck targeting.
//!
//! Adds edges between endpoints of the current minimum cut, farthest pairs
//! first, until connectivity strictly improves or the budget runs out.
//! Insertions that never improved connectivity are discarded.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::budget::AttemptBudget;
use crate::error::Result;
use crate::graph::{Edge, Graph, VertexId};

use super::working::WorkingGraph;
use super::Strategy;

/// Returns whether connectivity strictly improved. Without improvement the
/// working graph is rolled back to its state on entry.
pub(crate) fn run(work: &mut WorkingGraph<'_>, limit: usize) -> Result<bool> {
    work.started(Strategy::BottleneckTargeting);

    let before = work.connectivity;
    let start = work.added.len();
    let cut = work.minimum_cut()?;
    let candidates = rank_candidates(&work.graph, &cut.bottleneck_vertices());

    tracing::debug!(
        cut_value = cut.value,
        candidates = candidates.len(),
        "bottleneck candidates ranked"
    );

    let mut budget = AttemptBudget::new(limit);
    let mut improved = false;

    for edge in candidates {
        if !budget.try_consume() {
            work.budget_exhausted(Strategy::BottleneckTargeting, budget.limit());
            break;
        }
        work.try_insert(edge)?;
        if work.refresh()? > before {
            improved = true;
            break;
        }
    }

    tracing::debug!(
        attempts = budget.used(),
        elapsed_us = budget.elapsed_us(),
        improved,
        "bottleneck targeting finished"
    );

    if improved {
        work.committed(Strategy::BottleneckTargeting, start);
    } else {
        work.rollback(start, before)?;
    }
    Ok(improved)
}

/// Non-edges among `bottleneck`, by BFS distance descending.
///
/// Unreachable pairs come first; ties keep lexicographic edge order.
pub(crate) fn rank_candidates(graph: &Graph, bottleneck: &[VertexId]) -> Vec<Edge> {
    let distances: BTreeMap<VertexId, BTreeMap<VertexId, usize>> = bottleneck
        .iter()
        .map(|&v| (v, graph.bfs_distances(v)))
        .collect();

    let mut ranked: Vec<(Reverse<usize>, Edge)> = Vec::new();
    for (i, &u) in bottleneck.iter().enumerate() {
        for &v in &bottleneck[i + 1..] {
            if u == v || graph.has_edge(u, v) {
                continue;
            }
            let dist = distances
                .get(&u)
                .and_then(|d| d.get(&v))
                .copied()
                .unwrap_or(usize::MAX);
            ranked.push((Reverse(dist), Edge::new(u, v)));
        }
    }

    ranked.sort_unstable();
    ranked.into_iter().map(|(_, edge)| edge).collect()
}

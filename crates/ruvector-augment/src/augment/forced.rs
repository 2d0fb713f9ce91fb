//! Forced fallback.
//!
//! Last resort: complement edges between degree-`k` vertices first, then a
//! seeded shuffle of whatever complement edges remain. Both phases draw on a
//! single [`AttemptBudget`], so the strategy inserts at most `limit` edges.
//! Only the shortest prefix of those insertions that reached the best
//! connectivity seen is kept; the rest are discarded.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::budget::AttemptBudget;
use crate::error::Result;
use crate::graph::Edge;

use super::working::WorkingGraph;
use super::Strategy;

/// Best state seen so far: connectivity and the prefix length that reached it
#[derive(Debug, Clone, Copy)]
struct Best {
    connectivity: usize,
    len: usize,
}

impl Best {
    fn observe(&mut self, work: &WorkingGraph<'_>) {
        if work.connectivity > self.connectivity {
            self.connectivity = work.connectivity;
            self.len = work.added.len();
        }
    }
}

pub(crate) fn run(work: &mut WorkingGraph<'_>, limit: usize, seed: u64) -> Result<()> {
    work.started(Strategy::ForcedFallback);

    let start = work.added.len();
    let mut best = Best {
        connectivity: work.connectivity,
        len: start,
    };
    let mut budget = AttemptBudget::new(limit);

    priority_phase(work, &mut best, &mut budget)?;

    if !work.satisfied() && !budget.is_exhausted() {
        shuffled_phase(work, &mut best, &mut budget, seed)?;
    }

    tracing::debug!(
        attempts = budget.used(),
        elapsed_us = budget.elapsed_us(),
        "forced fallback finished"
    );

    if budget.is_exhausted() && !work.satisfied() {
        work.budget_exhausted(Strategy::ForcedFallback, budget.limit());
    }

    work.rollback(best.len, best.connectivity)?;
    work.committed(Strategy::ForcedFallback, start);

    if !work.satisfied() {
        tracing::warn!(
            k = work.k,
            connectivity = work.connectivity,
            edges_added = work.added.len(),
            "forced fallback exhausted without reaching target"
        );
    }
    Ok(())
}

/// Complement edges between vertices of degree exactly `k`. A pair is
/// skipped once either endpoint has already gained an edge here.
fn priority_phase(work: &mut WorkingGraph<'_>, best: &mut Best, budget: &mut AttemptBudget) -> Result<()> {
    let k = work.k;
    let low = work.graph.vertices_of_degree(k);

    let mut candidates = Vec::new();
    for (i, &u) in low.iter().enumerate() {
        for &v in &low[i + 1..] {
            if !work.graph.has_edge(u, v) {
                candidates.push(Edge::new(u, v));
            }
        }
    }

    tracing::debug!(low_degree = low.len(), candidates = candidates.len(), "forced priority phase");

    for edge in candidates {
        if work.graph.degree(edge.source) > k || work.graph.degree(edge.target) > k {
            continue;
        }
        if !budget.try_consume() {
            break;
        }
        work.try_insert(edge)?;
        work.refresh()?;
        best.observe(work);
        if work.satisfied() {
            break;
        }
    }
    Ok(())
}

/// Remaining complement edges in seeded random order, while `budget` lasts
fn shuffled_phase(
    work: &mut WorkingGraph<'_>,
    best: &mut Best,
    budget: &mut AttemptBudget,
    seed: u64,
) -> Result<()> {
    let mut remaining = work.graph.complement().edges();
    let mut rng = StdRng::seed_from_u64(seed);
    remaining.shuffle(&mut rng);

    tracing::debug!(candidates = remaining.len(), seed, "forced shuffled phase");

    for edge in remaining {
        if !budget.try_consume() {
            break;
        }
        work.try_insert(edge)?;
        work.refresh()?;
        best.observe(work);
        if work.satisfied() {
            break;
        }
    }
    Ok(())
}

//! Unit-capacity maximum flow on undirected simple graphs.
//!
//! Each undirected edge `{a, b}` becomes a pair of arcs `a -> b` and
//! `b -> a`, each with capacity 1 and each the residual of the other. Pushing
//! one unit across `a -> b` therefore drains that arc and doubles the spare
//! capacity of `b -> a`, which is exactly the residual network of an
//! undirected unit edge.
//!
//! Augmenting paths are found by BFS (Edmonds–Karp). The flow value of any
//! probe is bounded by `min(deg(s), deg(t))`, so a probe runs at most that
//! many BFS rounds.

use std::collections::VecDeque;

use crate::graph::CompactAdjacency;

/// Static topology of the flow network; probes copy the capacities
#[derive(Debug, Clone)]
pub(crate) struct UnitFlowNetwork {
    /// Arc head vertex, arcs `2e` and `2e + 1` are mutual reverses
    head: Vec<usize>,
    /// Outgoing arc indices per vertex
    out: Vec<Vec<usize>>,
}

/// Outcome of a single s–t probe
#[derive(Debug, Clone)]
pub(crate) struct FlowProbe {
    /// Maximum flow value, equal to the minimum s–t cut size
    pub value: usize,
    /// Residual capacity per arc after the final augmentation
    residual: Vec<u8>,
    source: usize,
}

impl UnitFlowNetwork {
    pub fn new(graph: &CompactAdjacency) -> Self {
        let n = graph.len();
        let mut head = Vec::new();
        let mut out = vec![Vec::new(); n];

        for (a, neighbors) in graph.adj.iter().enumerate() {
            for &b in neighbors {
                if a < b {
                    let arc = head.len();
                    head.push(b);
                    head.push(a);
                    out[a].push(arc);
                    out[b].push(arc + 1);
                }
            }
        }

        Self { head, out }
    }

    pub fn num_vertices(&self) -> usize {
        self.out.len()
    }

    /// Maximum s–t flow
    pub fn max_flow(&self, source: usize, sink: usize) -> FlowProbe {
        let n = self.num_vertices();
        let mut residual = vec![1u8; self.head.len()];
        let mut value = 0;

        if source == sink {
            return FlowProbe { value, residual, source };
        }

        let mut parent_arc: Vec<Option<usize>> = vec![None; n];
        let mut queue = VecDeque::with_capacity(n);

        loop {
            parent_arc.iter_mut().for_each(|p| *p = None);
            queue.clear();
            queue.push_back(source);
            let mut reached = false;

            'bfs: while let Some(u) = queue.pop_front() {
                for &arc in &self.out[u] {
                    let w = self.head[arc];
                    if residual[arc] == 0 || w == source || parent_arc[w].is_some() {
                        continue;
                    }
                    parent_arc[w] = Some(arc);
                    if w == sink {
                        reached = true;
                        break 'bfs;
                    }
                    queue.push_back(w);
                }
            }

            if !reached {
                break;
            }

            // Every arc has capacity 1 or 2, so the bottleneck is always 1
            let mut v = sink;
            while let Some(arc) = parent_arc[v] {
                residual[arc] -= 1;
                residual[arc ^ 1] += 1;
                v = self.head[arc ^ 1];
            }
            value += 1;
        }

        FlowProbe { value, residual, source }
    }

    /// Vertices reachable from the probe's source in its residual network
    pub fn source_side(&self, probe: &FlowProbe) -> Vec<bool> {
        let mut seen = vec![false; self.num_vertices()];
        let mut queue = VecDeque::new();
        seen[probe.source] = true;
        queue.push_back(probe.source);

        while let Some(u) = queue.pop_front() {
            for &arc in &self.out[u] {
                let w = self.head[arc];
                if probe.residual[arc] > 0 && !seen[w] {
                    seen[w] = true;
                    queue.push_back(w);
                }
            }
        }

        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn network(edges: &[(u64, u64)]) -> UnitFlowNetwork {
        UnitFlowNetwork::new(&Graph::from_edges(edges).unwrap().compact())
    }

    #[test]
    fn test_path_has_unit_flow() {
        let net = network(&[(0, 1), (1, 2), (2, 3)]);
        assert_eq!(net.max_flow(0, 3).value, 1);
    }

    #[test]
    fn test_cycle_has_two_disjoint_paths() {
        let net = network(&[(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(net.max_flow(0, 2).value, 2);
        assert_eq!(net.max_flow(0, 1).value, 2);
    }

    #[test]
    fn test_complete_graph_flow() {
        let mut edges = Vec::new();
        for u in 0..5 {
            for v in (u + 1)..5 {
                edges.push((u, v));
            }
        }
        let net = network(&edges);
        assert_eq!(net.max_flow(0, 4).value, 4);
    }

    #[test]
    fn test_flow_needs_reverse_arcs() {
        // The greedy path 0-1-2-5 blocks both disjoint paths unless flow
        // can be cancelled along 1-2.
        let net = network(&[(0, 1), (1, 2), (2, 5), (0, 3), (3, 2), (1, 4), (4, 5)]);
        assert_eq!(net.max_flow(0, 5).value, 2);
    }

    #[test]
    fn test_source_side_of_bridge() {
        // Two triangles joined by the bridge 2-3
        let net = network(&[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3)]);
        let probe = net.max_flow(0, 5);
        assert_eq!(probe.value, 1);
        let side = net.source_side(&probe);
        assert_eq!(side, vec![true, true, true, false, false, false]);
    }

    #[test]
    fn test_disconnected_probe() {
        let net = network(&[(0, 1), (2, 3)]);
        let probe = net.max_flow(0, 3);
        assert_eq!(probe.value, 0);
        assert_eq!(net.source_side(&probe), vec![true, true, false, false]);
    }
}

//! Leveled topological ordering (Kahn's algorithm with tiers).

use crate::graph::Graph;
use graflab_common::utils::hash::FxHashMap;
use graflab_common::VertexId;
use tracing::debug;

/// Outcome of a topological sort.
///
/// When `is_acyclic` is false the tiers are empty; partially built tiers are
/// discarded, not returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopoSortResult {
    /// Whether the directed-edge subgraph is acyclic.
    pub is_acyclic: bool,
    /// The ordered tiers; a vertex's tier index is its topological level,
    /// the longest directed-path length from any source of the DAG.
    pub tiers: Vec<Vec<VertexId>>,
}

impl TopoSortResult {
    fn cyclic() -> Self {
        Self {
            is_acyclic: false,
            tiers: Vec::new(),
        }
    }
}

/// Kahn's algorithm with tiering.
///
/// Preconditions: scratch state reset and in-degrees recalculated with
/// [`Graph::recalculate_in_degrees`]. The engine works on a local in-degree
/// snapshot and mutates nothing; only directed edges participate, undirected
/// edges never reduce an in-degree.
pub struct TopologicalSortAlgorithm<'g> {
    graph: &'g Graph,
}

impl<'g> TopologicalSortAlgorithm<'g> {
    /// Binds the engine to a graph.
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Runs the sort.
    ///
    /// The first tier is every vertex with in-degree 0; a non-empty graph
    /// without one is cyclic and fails immediately. Each tier is sorted by id
    /// ascending as it becomes current, then recorded. After the loop the
    /// processed count decides acyclicity: a shortfall means some vertices
    /// never reached in-degree 0, i.e. a cycle.
    pub fn sort(&self) -> TopoSortResult {
        // Local snapshot; decrements never touch the vertices themselves.
        // Signed so that stale in-degrees (caller forgot to recalculate)
        // go negative instead of wrapping.
        let mut in_degrees: FxHashMap<VertexId, i64> = self
            .graph
            .vertices()
            .map(|v| (v.id(), v.in_degree as i64))
            .collect();

        let mut current: Vec<VertexId> = self
            .graph
            .vertex_ids()
            .filter(|id| in_degrees.get(id) == Some(&0))
            .collect();

        if current.is_empty() && self.graph.vertex_count() > 0 {
            debug!("no vertex with in-degree 0; graph is cyclic");
            return TopoSortResult::cyclic();
        }

        let mut tiers: Vec<Vec<VertexId>> = Vec::new();
        let mut processed = 0usize;

        while !current.is_empty() {
            current.sort_unstable();
            debug!(tier = tiers.len(), vertices = ?current, "recording tier");
            tiers.push(current.clone());

            let mut next: Vec<VertexId> = Vec::new();
            for &u in &current {
                processed += 1;
                for (neighbor, edge_id) in self.graph.neighbors(u) {
                    // Only directed out-edges reduce in-degree; `neighbors`
                    // also yields undirected incidences, which are skipped.
                    let directed = self
                        .graph
                        .edge(edge_id)
                        .is_some_and(|e| e.is_directed() && e.from() == u);
                    if !directed {
                        continue;
                    }
                    if let Some(degree) = in_degrees.get_mut(&neighbor) {
                        *degree -= 1;
                        if *degree == 0 {
                            next.push(neighbor);
                        }
                    }
                }
            }
            current = next;
        }

        if processed == self.graph.vertex_count() {
            TopoSortResult {
                is_acyclic: true,
                tiers,
            }
        } else {
            debug!(
                processed,
                total = self.graph.vertex_count(),
                "cycle detected; discarding partial tiers"
            );
            TopoSortResult::cyclic()
        }
    }
}

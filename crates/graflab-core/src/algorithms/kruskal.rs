//! Minimum spanning tree/forest (Kruskal) via disjoint-set union.

use super::dsu::DisjointSetUnion;
use crate::graph::Graph;
use graflab_common::{Color, EdgeId};
use tracing::warn;

/// Outcome of a Kruskal run: the selected edges, in selection order
/// (weight-ascending), and their summed weight.
#[derive(Debug, Clone, PartialEq)]
pub struct MstResult {
    /// Selected edges, in selection order.
    pub edges: Vec<EdgeId>,
    /// Sum of the selected edges' weights.
    pub total_weight: f64,
}

impl MstResult {
    /// Whether the result spans a graph of `vertex_count` vertices as a
    /// single tree (`|edges| == |V| - 1`). A shortfall means the graph was
    /// disconnected and the result is a spanning forest.
    #[must_use]
    pub fn spans(&self, vertex_count: usize) -> bool {
        vertex_count == 0 || self.edges.len() == vertex_count - 1
    }
}

/// Kruskal's minimum-spanning-tree engine.
///
/// Treats every edge, directed or not, as connecting two components:
/// orientation is ignored. Selected edges are highlighted for the
/// presentation layer, and each vertex's `component_id` scratch field ends
/// up holding its final component representative.
pub struct KruskalAlgorithm<'g> {
    graph: &'g mut Graph,
}

impl<'g> KruskalAlgorithm<'g> {
    /// Binds the engine to a graph.
    pub fn new(graph: &'g mut Graph) -> Self {
        Self { graph }
    }

    /// Finds a minimum spanning tree, or forest when the graph is
    /// disconnected. The caller detects the forest case with
    /// [`MstResult::spans`].
    pub fn find_minimum_spanning_tree(&mut self) -> MstResult {
        // Stable sort keeps insertion order among equal weights, which is
        // the tie-break contract for edge selection.
        let mut sorted: Vec<(EdgeId, f64)> = self
            .graph
            .edges()
            .map(|e| (e.id(), e.weight))
            .collect();
        sorted.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut dsu = DisjointSetUnion::new(self.graph.vertex_ids());
        let vertex_count = self.graph.vertex_count();

        let mut selected = Vec::new();
        let mut total_weight = 0.0;
        for (edge_id, weight) in sorted {
            let Some(edge) = self.graph.edge(edge_id) else {
                continue;
            };
            let (u, v) = (edge.from(), edge.to());
            if dsu.find(u) == dsu.find(v) {
                continue; // would close a cycle
            }

            selected.push(edge_id);
            total_weight += weight;
            dsu.union(u, v);

            if selected.len() == vertex_count.saturating_sub(1) {
                break; // full spanning tree found
            }
        }

        if vertex_count > 0 && selected.len() < vertex_count - 1 {
            warn!(
                selected = selected.len(),
                expected = vertex_count - 1,
                "graph is disconnected; result is a spanning forest"
            );
        }

        // Publish results: highlight the selection, record final components.
        for &edge_id in &selected {
            if let Some(edge) = self.graph.edge_mut(edge_id) {
                edge.highlighted = true;
                edge.color = Color::RED;
            }
        }
        let components: Vec<_> = self
            .graph
            .vertex_ids()
            .map(|id| (id, dsu.find(id)))
            .collect();
        for (id, root) in components {
            if let Some(vertex) = self.graph.vertex_mut(id) {
                vertex.component_id = root.value();
            }
        }

        MstResult {
            edges: selected,
            total_weight,
        }
    }
}

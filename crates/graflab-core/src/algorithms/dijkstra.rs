//! Single-source shortest paths (Dijkstra) with path reconstruction.

use crate::graph::Graph;
use graflab_common::{Color, EdgeId, GraphError, Result, VertexId};
use tracing::{error, warn};

/// Dijkstra's shortest-path engine.
///
/// Constructed per run against a graph whose scratch state the caller has
/// reset with [`Graph::reset_algorithm_data`]. [`run`](Self::run) writes
/// distances and predecessors into the vertices; they persist until the next
/// reset, and [`get_path`](Self::get_path) depends on them persisting.
///
/// Precondition: non-negative edge weights. A negative weight is diagnosed
/// through a `tracing` warning and the run continues best-effort; results
/// are unreliable in that case (this is not Bellman-Ford).
pub struct DijkstraAlgorithm<'g> {
    graph: &'g mut Graph,
}

impl<'g> DijkstraAlgorithm<'g> {
    /// Binds the engine to a graph.
    pub fn new(graph: &'g mut Graph) -> Self {
        Self { graph }
    }

    /// Computes shortest distances from `start` to every reachable vertex.
    ///
    /// O(V^2): the candidate pool is scanned linearly for the unvisited
    /// vertex with minimum finite distance (ties broken by pool order, which
    /// is vertex insertion order minus removals - implementation-defined,
    /// not a contract). Acceptable for lab-scale graphs.
    pub fn run(&mut self, start: VertexId) -> Result<()> {
        let source = self
            .graph
            .vertex_mut(start)
            .ok_or(GraphError::VertexNotFound(start))?;
        source.distance = 0.0;

        let mut pool: Vec<VertexId> = self.graph.vertex_ids().collect();

        loop {
            // Pick the unvisited candidate with minimum finite distance.
            let mut current: Option<(usize, VertexId)> = None;
            let mut min_distance = f64::INFINITY;
            for (index, &id) in pool.iter().enumerate() {
                let Some(vertex) = self.graph.vertex(id) else {
                    continue;
                };
                if !vertex.visited && vertex.distance < min_distance {
                    min_distance = vertex.distance;
                    current = Some((index, id));
                }
            }

            // Everything left is unreachable (or already settled).
            let Some((index, u)) = current else {
                break;
            };
            pool.remove(index);
            let Some(settled) = self.graph.vertex_mut(u) else {
                continue;
            };
            settled.visited = true;
            let u_distance = settled.distance;

            let adjacent: Vec<(VertexId, EdgeId)> = self.graph.neighbors(u).collect();
            for (neighbor, edge_id) in adjacent {
                if self.graph.vertex(neighbor).is_some_and(|v| v.visited) {
                    continue;
                }
                let weight = self.graph.edge(edge_id).map_or(0.0, |e| e.weight);
                if weight < 0.0 {
                    warn!(
                        from = %u,
                        to = %neighbor,
                        weight,
                        "negative edge weight; Dijkstra results may be incorrect"
                    );
                }

                // Relaxation.
                let candidate = u_distance + weight;
                if let Some(vertex) = self.graph.vertex_mut(neighbor) {
                    if candidate < vertex.distance {
                        vertex.distance = candidate;
                        vertex.predecessor = Some(u);
                    }
                }
            }
        }

        Ok(())
    }

    /// Reconstructs the shortest path from the source of the last
    /// [`run`](Self::run) to `target`, as the sequence of edges read
    /// source -> target, highlighting each of them with a red stroke.
    ///
    /// Returns an empty sequence when the target is absent or unreachable.
    /// A predecessor hop with no connecting edge means the predecessor chain
    /// is corrupted; the remaining walk is aborted with an error event, never
    /// silently fabricated.
    pub fn get_path(&mut self, target: VertexId) -> Vec<EdgeId> {
        let mut path = Vec::new();
        let reachable = self
            .graph
            .vertex(target)
            .is_some_and(|v| v.distance.is_finite());
        if !reachable {
            return path;
        }

        let mut current = target;
        while let Some(predecessor) = self.graph.vertex(current).and_then(|v| v.predecessor) {
            match self.connecting_edge(predecessor, current) {
                Some(edge_id) => path.push(edge_id),
                None => {
                    error!(
                        from = %predecessor,
                        to = %current,
                        "no edge found while reconstructing path; predecessor chain is corrupted"
                    );
                    break;
                }
            }
            current = predecessor;
        }

        // Accumulated target -> source; flip it.
        path.reverse();
        for &edge_id in &path {
            if let Some(edge) = self.graph.edge_mut(edge_id) {
                edge.highlighted = true;
                edge.color = Color::RED;
            }
        }
        path
    }

    /// The edge actually traversable from `predecessor` to `current`: a
    /// directed edge in that orientation, or any undirected edge between the
    /// two. A reverse directed edge does not qualify.
    fn connecting_edge(&self, predecessor: VertexId, current: VertexId) -> Option<EdgeId> {
        self.graph
            .edges()
            .find(|e| {
                (e.from() == predecessor && e.to() == current)
                    || (!e.is_directed() && e.from() == current && e.to() == predecessor)
            })
            .map(crate::graph::Edge::id)
    }
}

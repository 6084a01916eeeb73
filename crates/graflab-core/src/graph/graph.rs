//! The mutable graph: vertex set, edge set, adjacency index.

use super::{Edge, Vertex};
use graflab_common::utils::hash::FxHashMap;
use graflab_common::{Color, EdgeId, GraphError, Point2, Result, VertexId};
use indexmap::IndexMap;
use smallvec::SmallVec;
use std::fmt;

/// What [`Graph::add_or_update_smart_edge`] did to satisfy the request.
///
/// Each variant carries the id of the edge that now connects the pair. The
/// `Display` form is the human-readable message channel for the interaction
/// layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmartEdgeOutcome {
    /// A new directed edge was inserted.
    AddedDirected(EdgeId),
    /// A new undirected edge was inserted.
    AddedUndirected(EdgeId),
    /// A directed edge of the requested orientation already existed; its
    /// weight was updated in place.
    DirectedWeightUpdated(EdgeId),
    /// An undirected edge already existed; its weight was updated in place.
    UndirectedWeightUpdated(EdgeId),
    /// The reverse directed edge existed; both orientations collapsed into
    /// one undirected edge with the new weight.
    MergedOpposing(EdgeId),
    /// Existing directed edge(s) between the pair were removed and replaced
    /// by one undirected edge with the new weight.
    ReplacedDirected(EdgeId),
}

impl SmartEdgeOutcome {
    /// The edge that connects the pair after the operation.
    #[must_use]
    pub fn edge_id(self) -> EdgeId {
        match self {
            Self::AddedDirected(id)
            | Self::AddedUndirected(id)
            | Self::DirectedWeightUpdated(id)
            | Self::UndirectedWeightUpdated(id)
            | Self::MergedOpposing(id)
            | Self::ReplacedDirected(id) => id,
        }
    }
}

impl fmt::Display for SmartEdgeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddedDirected(id) => write!(f, "added directed edge {id}"),
            Self::AddedUndirected(id) => write!(f, "added undirected edge {id}"),
            Self::DirectedWeightUpdated(id) => {
                write!(f, "updated weight of existing directed edge {id}")
            }
            Self::UndirectedWeightUpdated(id) => {
                write!(f, "updated weight of existing undirected edge {id}")
            }
            Self::MergedOpposing(id) => write!(
                f,
                "merged two opposing directed edges into undirected edge {id}"
            ),
            Self::ReplacedDirected(id) => {
                write!(f, "replaced directed edge(s) with undirected edge {id}")
            }
        }
    }
}

type AdjacencyEntry = SmallVec<[EdgeId; 4]>;

/// A mutable directed/undirected graph with an adjacency index.
///
/// Vertices and edges are insertion-ordered. At most one edge of any
/// orientation exists per unordered vertex pair, reconciled by
/// [`add_or_update_smart_edge`](Graph::add_or_update_smart_edge). Every edge
/// is registered in both endpoints' adjacency lists so it can be located and
/// purged from either side; orientation is applied by
/// [`neighbors`](Graph::neighbors).
///
/// Id allocation is owned by the graph: ids grow monotonically and are only
/// rewound by [`clear`](Graph::clear), which empties the graph first.
#[derive(Debug, Default)]
pub struct Graph {
    vertices: IndexMap<VertexId, Vertex>,
    edges: IndexMap<EdgeId, Edge>,
    adjacency: FxHashMap<VertexId, AdjacencyEntry>,
    next_vertex_id: u64,
    next_edge_id: u64,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ---- read access ----------------------------------------------------

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the given id names a vertex of this graph.
    #[must_use]
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Iterates vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Iterates vertex ids in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// Iterates edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Looks up a vertex.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Looks up a vertex for mutation.
    #[must_use]
    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.vertices.get_mut(&id)
    }

    /// Looks up an edge.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Looks up an edge for mutation.
    #[must_use]
    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(&id)
    }

    /// Finds any edge between `from` and `to`, probing directed `from -> to`,
    /// then directed `to -> from`, then undirected, returning the first match.
    #[must_use]
    pub fn find_edge(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        self.directed_edge_between(from, to)
            .or_else(|| self.directed_edge_between(to, from))
            .or_else(|| self.undirected_edge_between(from, to))
    }

    fn directed_edge_between(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        self.edges
            .values()
            .find(|e| e.is_directed() && e.from() == from && e.to() == to)
            .map(Edge::id)
    }

    fn undirected_edge_between(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        self.edges
            .values()
            .find(|e| !e.is_directed() && e.connects(a, b))
            .map(Edge::id)
    }

    /// Lazy, restartable iteration of `(neighbor, edge)` pairs incident to
    /// `vertex`.
    ///
    /// A directed edge yields only when `vertex` is its `from` endpoint; an
    /// undirected edge yields the other endpoint from either side. Unknown
    /// vertices yield nothing.
    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, EdgeId)> + '_ {
        self.adjacency
            .get(&vertex)
            .into_iter()
            .flat_map(|entry| entry.iter().copied())
            .filter_map(move |edge_id| {
                let edge = self.edges.get(&edge_id)?;
                edge.other_endpoint(vertex).map(|other| (other, edge_id))
            })
    }

    // ---- structural mutation --------------------------------------------

    /// Creates and registers a new vertex. Always succeeds; ids are unique
    /// by construction.
    pub fn add_vertex(&mut self, position: Point2, label: Option<&str>) -> VertexId {
        let id = VertexId::new(self.next_vertex_id);
        self.next_vertex_id += 1;
        self.vertices.insert(id, Vertex::new(id, position, label));
        self.adjacency.insert(id, AdjacencyEntry::new());
        id
    }

    /// Removes a vertex and every incident edge.
    ///
    /// Returns `false` when the vertex is absent. Cascades: incident edges
    /// leave the edge set and are purged from all adjacency lists, not only
    /// the removed vertex's own list.
    pub fn remove_vertex(&mut self, id: VertexId) -> bool {
        if !self.vertices.contains_key(&id) {
            return false;
        }

        let incident: Vec<EdgeId> = self
            .edges
            .values()
            .filter(|e| e.is_incident_to(id))
            .map(Edge::id)
            .collect();
        for edge_id in incident {
            self.remove_edge(edge_id);
        }

        self.vertices.shift_remove(&id);
        self.adjacency.remove(&id);
        true
    }

    /// Removes a single edge, purging it from both endpoints' adjacency
    /// lists. Returns `false` when the edge is absent.
    pub fn remove_edge(&mut self, id: EdgeId) -> bool {
        let Some(edge) = self.edges.shift_remove(&id) else {
            return false;
        };
        for endpoint in [edge.from(), edge.to()] {
            if let Some(entry) = self.adjacency.get_mut(&endpoint) {
                entry.retain(|&mut e| e != id);
            }
        }
        true
    }

    fn check_endpoints(&self, from: VertexId, to: VertexId) -> Result<()> {
        if !self.vertices.contains_key(&from) {
            return Err(GraphError::VertexNotFound(from));
        }
        if !self.vertices.contains_key(&to) {
            return Err(GraphError::VertexNotFound(to));
        }
        if from == to {
            return Err(GraphError::SelfLoop(from));
        }
        Ok(())
    }

    fn insert_edge(&mut self, from: VertexId, to: VertexId, weight: f64, directed: bool) -> EdgeId {
        let id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;
        self.edges.insert(id, Edge::new(id, from, to, weight, directed));
        // Both endpoints index the edge; orientation is applied on traversal.
        self.adjacency.entry(from).or_default().push(id);
        self.adjacency.entry(to).or_default().push(id);
        id
    }

    /// Low-level primitive: inserts a directed edge `from -> to`.
    ///
    /// Rejects when an undirected edge connects the pair or the same
    /// orientation already exists. The reverse orientation is permitted here;
    /// reconciliation of opposing directed edges belongs to
    /// [`add_or_update_smart_edge`](Graph::add_or_update_smart_edge).
    pub fn add_directed_edge(&mut self, from: VertexId, to: VertexId, weight: f64) -> Result<EdgeId> {
        self.check_endpoints(from, to)?;
        if self.undirected_edge_between(from, to).is_some() {
            return Err(GraphError::UndirectedConflict { a: from, b: to });
        }
        if self.directed_edge_between(from, to).is_some() {
            return Err(GraphError::EdgeExists { from, to });
        }
        Ok(self.insert_edge(from, to, weight, true))
    }

    /// Low-level primitive: inserts an undirected edge between `from` and
    /// `to`. Rejects when any edge, of either orientation, already connects
    /// the pair.
    pub fn add_undirected_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: f64,
    ) -> Result<EdgeId> {
        self.check_endpoints(from, to)?;
        if self.find_edge(from, to).is_some() {
            return Err(GraphError::EdgeExists { from, to });
        }
        Ok(self.insert_edge(from, to, weight, false))
    }

    /// The single edge-mutation entry point for callers: reconciles the
    /// requested edge against whatever already connects the pair.
    ///
    /// Policy, in order:
    /// 1. self-loop -> [`GraphError::SelfLoop`];
    /// 2. exact requested orientation exists -> update its weight in place;
    /// 3. directed requested over an existing undirected edge ->
    ///    [`GraphError::UndirectedConflict`] (remove the undirected edge
    ///    first);
    /// 4. directed requested while the reverse directed edge exists -> the
    ///    two orientations collapse into one undirected edge with the new
    ///    weight;
    /// 5. otherwise a directed request inserts a new directed edge;
    /// 6. undirected requested while directed edge(s) exist -> remove them
    ///    all, insert one undirected edge;
    /// 7. otherwise insert a new undirected edge.
    pub fn add_or_update_smart_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: f64,
        prefer_directed: bool,
    ) -> Result<SmartEdgeOutcome> {
        self.check_endpoints(from, to)?;

        let edge_from_to = self.directed_edge_between(from, to);
        let edge_to_from = self.directed_edge_between(to, from);
        let undirected = self.undirected_edge_between(from, to);

        if prefer_directed {
            if let Some(id) = edge_from_to {
                self.edges[&id].weight = weight;
                return Ok(SmartEdgeOutcome::DirectedWeightUpdated(id));
            }
            if undirected.is_some() {
                return Err(GraphError::UndirectedConflict { a: from, b: to });
            }
            if let Some(reverse) = edge_to_from {
                // Two opposing directed edges collapse to one undirected edge
                // carrying the newly requested weight.
                self.remove_edge(reverse);
                let id = self.insert_edge(from, to, weight, false);
                return Ok(SmartEdgeOutcome::MergedOpposing(id));
            }
            let id = self.insert_edge(from, to, weight, true);
            Ok(SmartEdgeOutcome::AddedDirected(id))
        } else {
            if let Some(id) = undirected {
                self.edges[&id].weight = weight;
                return Ok(SmartEdgeOutcome::UndirectedWeightUpdated(id));
            }
            let mut removed_any = false;
            for existing in [edge_from_to, edge_to_from].into_iter().flatten() {
                self.remove_edge(existing);
                removed_any = true;
            }
            let id = self.insert_edge(from, to, weight, false);
            if removed_any {
                Ok(SmartEdgeOutcome::ReplacedDirected(id))
            } else {
                Ok(SmartEdgeOutcome::AddedUndirected(id))
            }
        }
    }

    // ---- algorithm support ----------------------------------------------

    /// Zeroes every vertex's in-degree, then counts one per directed edge
    /// into its `to` endpoint. Undirected edges never contribute. Call after
    /// structural edits and before topological sort.
    pub fn recalculate_in_degrees(&mut self) {
        for vertex in self.vertices.values_mut() {
            vertex.in_degree = 0;
        }
        let targets: Vec<VertexId> = self
            .edges
            .values()
            .filter(|e| e.is_directed())
            .map(Edge::to)
            .collect();
        for to in targets {
            if let Some(vertex) = self.vertices.get_mut(&to) {
                vertex.in_degree += 1;
            }
        }
    }

    /// Restores every vertex's scratch fields to the baseline and clears
    /// every edge's highlight and solution stroke. Call before every
    /// algorithm run that is not a pure read.
    pub fn reset_algorithm_data(&mut self) {
        for vertex in self.vertices.values_mut() {
            vertex.reset_algorithm_data();
        }
        for edge in self.edges.values_mut() {
            edge.highlighted = false;
            edge.color = Color::BLACK;
        }
    }

    /// Empties vertices, edges, and the adjacency index, and rewinds both id
    /// allocators. The only operation that permits id reuse.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.adjacency.clear();
        self.next_vertex_id = 0;
        self.next_edge_id = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_vertices() -> (Graph, VertexId, VertexId) {
        let mut g = Graph::new();
        let a = g.add_vertex(Point2::ORIGIN, Some("A"));
        let b = g.add_vertex(Point2::new(1.0, 0.0), Some("B"));
        (g, a, b)
    }

    #[test]
    fn test_add_vertex_assigns_monotonic_ids() {
        let mut g = Graph::new();
        let a = g.add_vertex(Point2::ORIGIN, None);
        let b = g.add_vertex(Point2::ORIGIN, None);
        assert!(a < b);
        assert_eq!(g.vertex_count(), 2);
    }

    #[test]
    fn test_clear_rewinds_id_counter() {
        let mut g = Graph::new();
        let first = g.add_vertex(Point2::ORIGIN, None);
        g.add_vertex(Point2::ORIGIN, None);
        g.clear();
        assert_eq!(g.vertex_count(), 0);
        let reused = g.add_vertex(Point2::ORIGIN, None);
        assert_eq!(reused, first);
    }

    #[test]
    fn test_self_loop_rejected() {
        let (mut g, a, _) = two_vertices();
        assert_eq!(
            g.add_or_update_smart_edge(a, a, 1.0, true),
            Err(GraphError::SelfLoop(a))
        );
        assert_eq!(g.add_directed_edge(a, a, 1.0), Err(GraphError::SelfLoop(a)));
    }

    #[test]
    fn test_unknown_vertex_rejected() {
        let (mut g, a, _) = two_vertices();
        let ghost = VertexId::new(99);
        assert_eq!(
            g.add_or_update_smart_edge(a, ghost, 1.0, true),
            Err(GraphError::VertexNotFound(ghost))
        );
    }

    #[test]
    fn test_smart_edge_updates_weight_in_place() {
        let (mut g, a, b) = two_vertices();
        let first = g.add_or_update_smart_edge(a, b, 1.0, true).unwrap();
        let second = g.add_or_update_smart_edge(a, b, 5.0, true).unwrap();

        assert_eq!(
            second,
            SmartEdgeOutcome::DirectedWeightUpdated(first.edge_id())
        );
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edge(first.edge_id()).unwrap().weight, 5.0);
    }

    #[test]
    fn test_smart_edge_idempotence_undirected() {
        let (mut g, a, b) = two_vertices();
        g.add_or_update_smart_edge(a, b, 2.0, false).unwrap();
        let outcome = g.add_or_update_smart_edge(a, b, 3.0, false).unwrap();
        assert!(matches!(
            outcome,
            SmartEdgeOutcome::UndirectedWeightUpdated(_)
        ));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edge(outcome.edge_id()).unwrap().weight, 3.0);
    }

    #[test]
    fn test_smart_edge_rejects_directed_over_undirected() {
        let (mut g, a, b) = two_vertices();
        g.add_or_update_smart_edge(a, b, 1.0, false).unwrap();
        assert_eq!(
            g.add_or_update_smart_edge(a, b, 1.0, true),
            Err(GraphError::UndirectedConflict { a, b })
        );
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_smart_edge_merges_opposing_directed() {
        let (mut g, a, b) = two_vertices();
        g.add_or_update_smart_edge(b, a, 4.0, true).unwrap();
        let outcome = g.add_or_update_smart_edge(a, b, 7.0, true).unwrap();

        assert!(matches!(outcome, SmartEdgeOutcome::MergedOpposing(_)));
        assert_eq!(g.edge_count(), 1);
        let merged = g.edge(outcome.edge_id()).unwrap();
        assert!(!merged.is_directed());
        assert_eq!(merged.weight, 7.0);
    }

    #[test]
    fn test_smart_edge_undirected_replaces_directed() {
        let (mut g, a, b) = two_vertices();
        g.add_or_update_smart_edge(a, b, 1.0, true).unwrap();
        let outcome = g.add_or_update_smart_edge(a, b, 2.0, false).unwrap();

        assert!(matches!(outcome, SmartEdgeOutcome::ReplacedDirected(_)));
        assert_eq!(g.edge_count(), 1);
        assert!(!g.edge(outcome.edge_id()).unwrap().is_directed());
    }

    #[test]
    fn test_primitive_directed_allows_reverse() {
        let (mut g, a, b) = two_vertices();
        g.add_directed_edge(a, b, 1.0).unwrap();
        g.add_directed_edge(b, a, 1.0).unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(
            g.add_directed_edge(a, b, 1.0),
            Err(GraphError::EdgeExists { from: a, to: b })
        );
    }

    #[test]
    fn test_primitive_undirected_rejects_any_connection() {
        let (mut g, a, b) = two_vertices();
        g.add_directed_edge(a, b, 1.0).unwrap();
        assert_eq!(
            g.add_undirected_edge(b, a, 1.0),
            Err(GraphError::EdgeExists { from: b, to: a })
        );
    }

    #[test]
    fn test_neighbors_orientation() {
        let (mut g, a, b) = two_vertices();
        let c = g.add_vertex(Point2::ORIGIN, Some("C"));
        g.add_directed_edge(a, b, 1.0).unwrap();
        g.add_undirected_edge(a, c, 1.0).unwrap();

        let from_a: Vec<VertexId> = g.neighbors(a).map(|(v, _)| v).collect();
        assert_eq!(from_a, vec![b, c]);

        // Directed edges never yield from the 'to' side.
        let from_b: Vec<VertexId> = g.neighbors(b).map(|(v, _)| v).collect();
        assert!(from_b.is_empty());

        // Undirected edges yield from either side.
        let from_c: Vec<VertexId> = g.neighbors(c).map(|(v, _)| v).collect();
        assert_eq!(from_c, vec![a]);
    }

    #[test]
    fn test_neighbors_is_restartable() {
        let (mut g, a, b) = two_vertices();
        g.add_directed_edge(a, b, 1.0).unwrap();
        assert_eq!(g.neighbors(a).count(), 1);
        assert_eq!(g.neighbors(a).count(), 1);
    }

    #[test]
    fn test_remove_vertex_cascades() {
        let (mut g, a, b) = two_vertices();
        let c = g.add_vertex(Point2::ORIGIN, Some("C"));
        g.add_directed_edge(a, b, 1.0).unwrap();
        g.add_undirected_edge(b, c, 1.0).unwrap();
        g.add_directed_edge(c, a, 1.0).unwrap();

        assert!(g.remove_vertex(b));

        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 1);
        // No surviving edge references the removed vertex, from either side.
        assert!(g.edges().all(|e| !e.is_incident_to(b)));
        // Adjacency lists of the surviving endpoints were purged too.
        assert_eq!(g.neighbors(a).count(), 0);
        assert_eq!(g.neighbors(c).count(), 1);
    }

    #[test]
    fn test_remove_absent_vertex() {
        let mut g = Graph::new();
        assert!(!g.remove_vertex(VertexId::new(0)));
    }

    #[test]
    fn test_find_edge_probe_order() {
        let (mut g, a, b) = two_vertices();
        let ab = g.add_directed_edge(a, b, 1.0).unwrap();
        let ba = g.add_directed_edge(b, a, 1.0).unwrap();

        // Forward directed wins over reverse.
        assert_eq!(g.find_edge(a, b), Some(ab));
        assert_eq!(g.find_edge(b, a), Some(ba));

        let c = g.add_vertex(Point2::ORIGIN, None);
        let ac = g.add_undirected_edge(a, c, 1.0).unwrap();
        assert_eq!(g.find_edge(c, a), Some(ac));
        assert_eq!(g.find_edge(b, c), None);
    }

    #[test]
    fn test_recalculate_in_degrees() {
        let (mut g, a, b) = two_vertices();
        let c = g.add_vertex(Point2::ORIGIN, Some("C"));
        g.add_directed_edge(a, b, 1.0).unwrap();
        g.add_directed_edge(c, b, 1.0).unwrap();
        g.add_undirected_edge(a, c, 1.0).unwrap();

        g.recalculate_in_degrees();

        assert_eq!(g.vertex(a).unwrap().in_degree, 0);
        assert_eq!(g.vertex(b).unwrap().in_degree, 2);
        // Undirected edges never contribute.
        assert_eq!(g.vertex(c).unwrap().in_degree, 0);
    }

    #[test]
    fn test_reset_clears_scratch_and_highlights() {
        let (mut g, a, b) = two_vertices();
        let e = g.add_directed_edge(a, b, 1.0).unwrap();
        g.vertex_mut(a).unwrap().distance = 0.0;
        g.vertex_mut(b).unwrap().predecessor = Some(a);
        g.edge_mut(e).unwrap().highlighted = true;
        g.edge_mut(e).unwrap().color = Color::RED;

        g.reset_algorithm_data();

        assert!(g.vertex(a).unwrap().distance.is_infinite());
        assert_eq!(g.vertex(b).unwrap().predecessor, None);
        assert!(!g.edge(e).unwrap().highlighted);
        assert_eq!(g.edge(e).unwrap().color, Color::BLACK);
    }
}

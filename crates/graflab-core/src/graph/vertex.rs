//! Vertex entity.

use graflab_common::{Color, Point2, VertexId};
use std::hash::{Hash, Hasher};

/// An identity-bearing node of the graph.
///
/// Carries structural attributes (label, position, display color - the last
/// two are owned by the presentation layer and ignored by the algorithms)
/// plus transient algorithm scratch fields. The scratch fields are mutated
/// in place by the algorithm engines and must be restored to their baseline
/// with [`reset_algorithm_data`](Vertex::reset_algorithm_data) before each
/// run; [`crate::Graph::reset_algorithm_data`] does this for every vertex.
#[derive(Debug, Clone)]
pub struct Vertex {
    id: VertexId,
    /// Display label. Defaults to the id's decimal form.
    pub label: String,
    /// Canvas position, owned by the presentation layer.
    pub position: Point2,
    /// Fill color, owned by the presentation layer.
    pub display_color: Color,

    // Algorithm scratch.
    /// Whether the vertex has been settled by the current run.
    pub visited: bool,
    /// Current best distance from the source (Dijkstra).
    pub distance: f64,
    /// Vertex this one was reached from on the current best path (Dijkstra).
    pub predecessor: Option<VertexId>,
    /// Number of incoming directed edges (Kahn's algorithm).
    pub in_degree: usize,
    /// Connected-component marker (Kruskal).
    pub component_id: u64,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, position: Point2, label: Option<&str>) -> Self {
        // Scratch fields start at their reset baseline.
        Self {
            id,
            label: label.map_or_else(|| id.to_string(), str::to_owned),
            position,
            display_color: Color::SKY_BLUE,
            visited: false,
            distance: f64::INFINITY,
            predecessor: None,
            in_degree: 0,
            component_id: id.value(),
        }
    }

    /// Returns the vertex id.
    #[must_use]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Restores every scratch field to its canonical baseline: not visited,
    /// infinite distance, no predecessor, zero in-degree, own component.
    pub fn reset_algorithm_data(&mut self) {
        self.visited = false;
        self.distance = f64::INFINITY;
        self.predecessor = None;
        self.in_degree = 0;
        self.component_id = self.id.value();
    }
}

// Equality and hashing go by id only; attributes and scratch are ignored.
impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_defaults_to_id() {
        let v = Vertex::new(VertexId::new(7), Point2::ORIGIN, None);
        assert_eq!(v.label, "7");

        let named = Vertex::new(VertexId::new(8), Point2::ORIGIN, Some("A"));
        assert_eq!(named.label, "A");
    }

    #[test]
    fn test_reset_restores_baseline() {
        let mut v = Vertex::new(VertexId::new(3), Point2::ORIGIN, None);
        v.visited = true;
        v.distance = 12.5;
        v.predecessor = Some(VertexId::new(0));
        v.in_degree = 4;
        v.component_id = 99;

        v.reset_algorithm_data();

        assert!(!v.visited);
        assert!(v.distance.is_infinite());
        assert_eq!(v.predecessor, None);
        assert_eq!(v.in_degree, 0);
        assert_eq!(v.component_id, 3);
    }

    #[test]
    fn test_equality_by_id_only() {
        let mut a = Vertex::new(VertexId::new(1), Point2::ORIGIN, Some("A"));
        let b = Vertex::new(VertexId::new(1), Point2::new(5.0, 5.0), Some("B"));
        a.visited = true;
        assert_eq!(a, b);
    }
}

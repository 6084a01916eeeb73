//! Edge entity.

use graflab_common::{Color, EdgeId, VertexId};

/// A connector between two vertices.
///
/// Endpoints and directedness are fixed at creation; the weight is mutable.
/// The edge references its endpoints by id, it does not own them. The
/// `highlighted` flag is the sole output channel path reconstruction and the
/// MST result use to mark solution edges for the presentation layer; the
/// algorithms otherwise ignore the presentation fields.
#[derive(Debug, Clone)]
pub struct Edge {
    id: EdgeId,
    from: VertexId,
    to: VertexId,
    directed: bool,
    /// Edge weight. Kruskal orders edges by this, ascending, with ties broken
    /// by insertion order.
    pub weight: f64,
    /// Stroke color. Defaults to black; solution publication turns it red
    /// alongside `highlighted`, and a scratch reset restores the default.
    pub color: Color,
    /// Set when the edge is part of a solution (shortest path, MST).
    pub highlighted: bool,
}

impl Edge {
    pub(crate) fn new(id: EdgeId, from: VertexId, to: VertexId, weight: f64, directed: bool) -> Self {
        debug_assert_ne!(from, to, "self-loops are rejected before construction");
        Self {
            id,
            from,
            to,
            directed,
            weight,
            color: Color::BLACK,
            highlighted: false,
        }
    }

    /// Returns the edge id.
    #[must_use]
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Source endpoint (for an undirected edge, simply the first endpoint).
    #[must_use]
    pub fn from(&self) -> VertexId {
        self.from
    }

    /// Target endpoint (for an undirected edge, simply the second endpoint).
    #[must_use]
    pub fn to(&self) -> VertexId {
        self.to
    }

    /// Whether the edge is directed `from -> to`.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Whether the edge touches the given vertex on either side.
    #[must_use]
    pub fn is_incident_to(&self, vertex: VertexId) -> bool {
        self.from == vertex || self.to == vertex
    }

    /// Whether the edge connects the given unordered pair.
    #[must_use]
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// The endpoint opposite `current`, or `None` when `current` is not an
    /// endpoint. For a directed edge this only answers from the `from` side.
    #[must_use]
    pub fn other_endpoint(&self, current: VertexId) -> Option<VertexId> {
        if self.directed {
            return (current == self.from).then_some(self.to);
        }
        if current == self.from {
            Some(self.to)
        } else if current == self.to {
            Some(self.from)
        } else {
            None
        }
    }
}

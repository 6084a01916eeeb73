//! Graph model: vertices, edges, and the adjacency-indexed graph.
//!
//! The graph owns its vertex set, edge set, and an adjacency index, all
//! insertion-ordered. Edges are stored arena-style and referenced by
//! [`EdgeId`](graflab_common::EdgeId) from both endpoints' adjacency lists,
//! so removal is index invalidation rather than pointer hunting.

mod edge;
mod vertex;

#[allow(clippy::module_inception)]
mod graph;

pub use edge::Edge;
pub use graph::{Graph, SmartEdgeOutcome};
pub use vertex::Vertex;

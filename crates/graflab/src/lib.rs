//! # Graflab
//!
//! An interactive graph laboratory: a mutable directed/undirected graph
//! model plus three classical algorithm engines - single-source shortest
//! paths (Dijkstra), minimum spanning tree/forest (Kruskal), and leveled
//! topological ordering (Kahn's algorithm with tiers).
//!
//! If you're new here, start with [`Graph`] - it owns the vertices, edges,
//! and adjacency index, and is the only thing the engines run against.
//!
//! ## Quick Start
//!
//! ```rust
//! use graflab::{DijkstraAlgorithm, Graph, Point2};
//!
//! let mut graph = Graph::new();
//! let a = graph.add_vertex(Point2::new(0.0, 0.0), Some("A"));
//! let b = graph.add_vertex(Point2::new(100.0, 0.0), Some("B"));
//! graph.add_or_update_smart_edge(a, b, 2.5, true)?;
//!
//! // Scratch state must be reset before every run.
//! graph.reset_algorithm_data();
//! let mut dijkstra = DijkstraAlgorithm::new(&mut graph);
//! dijkstra.run(a)?;
//! let path = dijkstra.get_path(b);
//!
//! assert_eq!(path.len(), 1);
//! assert_eq!(graph.vertex(b).unwrap().distance, 2.5);
//! # Ok::<(), graflab::GraphError>(())
//! ```
//!
//! ## State model
//!
//! Results live on the graph itself: Dijkstra writes vertex `distance` and
//! `predecessor`, path reconstruction and the MST highlight edges, and the
//! tier list returned by the topological sort assigns each vertex its level.
//! They persist until the next [`Graph::reset_algorithm_data`], so a caller
//! tracks staleness as explicit external state.

#![warn(missing_docs)]

// Re-export the graph model and algorithm engines
pub use graflab_core::{
    DijkstraAlgorithm, DisjointSetUnion, Edge, Graph, KruskalAlgorithm, MstResult,
    SmartEdgeOutcome, TopoSortResult, TopologicalSortAlgorithm, Vertex,
};

// Re-export the foundation types you'll need for ids, geometry, and errors
pub use graflab_common::{Color, EdgeId, GraphError, Point2, Result, VertexId};

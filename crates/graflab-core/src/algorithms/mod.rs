//! Algorithm engines for the graph laboratory.
//!
//! Each engine is constructed per run against a [`Graph`](crate::Graph) and
//! uses the vertex scratch fields and edge highlight flags as its working
//! memory and output channel.
//!
//! ## Engines
//!
//! - [`dijkstra`] - Single-source shortest paths with path reconstruction
//! - [`kruskal`] - Minimum spanning tree/forest via disjoint-set union
//! - [`topo_sort`] - Kahn's algorithm producing layered "tiers"
//!
//! ## Usage
//!
//! ```ignore
//! use graflab_core::{DijkstraAlgorithm, Graph};
//!
//! let mut graph = Graph::new();
//! // ... populate graph ...
//!
//! graph.reset_algorithm_data();
//! let mut dijkstra = DijkstraAlgorithm::new(&mut graph);
//! dijkstra.run(source)?;
//! let path = dijkstra.get_path(target);
//! ```

mod dijkstra;
mod dsu;
mod kruskal;
mod topo_sort;

pub use dijkstra::DijkstraAlgorithm;
pub use dsu::DisjointSetUnion;
pub use kruskal::{KruskalAlgorithm, MstResult};
pub use topo_sort::{TopoSortResult, TopologicalSortAlgorithm};

//! # graflab-core
//!
//! Core layer for Graflab: the mutable graph model and the three algorithm
//! engines.
//!
//! This crate provides the graph laboratory's data structures and algorithms.
//! It depends only on `graflab-common`.
//!
//! ## Modules
//!
//! - [`graph`] - Graph model (vertices, edges, adjacency index, mutation)
//! - [`algorithms`] - Algorithm engines (Dijkstra, Kruskal, topological sort)
//!
//! ## State model
//!
//! The engines use vertex scratch fields (`visited`, `distance`,
//! `predecessor`, `in_degree`, `component_id`) and edge `highlighted` flags
//! as their working memory and output channel. A caller resets that state
//! with [`Graph::reset_algorithm_data`] before each run; results persist on
//! the graph until the next reset, and path reconstruction depends on them
//! persisting. Everything is single-threaded; callers serialize access.

pub mod algorithms;
pub mod graph;

// Re-export commonly used types
pub use algorithms::{
    DijkstraAlgorithm, DisjointSetUnion, KruskalAlgorithm, MstResult, TopoSortResult,
    TopologicalSortAlgorithm,
};
pub use graph::{Edge, Graph, SmartEdgeOutcome, Vertex};

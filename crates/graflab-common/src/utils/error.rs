//! Error types for graph mutation.
//!
//! Invalid input is rejected at the API boundary with one of these values;
//! nothing in the core panics. Expected algorithmic outcomes (a cyclic graph
//! for topological sort, a disconnected graph for Kruskal) are *not* errors,
//! they are fields of the respective result types.

use crate::types::VertexId;

/// Errors produced by graph mutation operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An endpoint id does not name a vertex of this graph.
    #[error("vertex {0} does not exist in this graph")]
    VertexNotFound(VertexId),

    /// Both endpoints are the same vertex. Self-loops are not supported.
    #[error("self-loops are not supported (vertex {0})")]
    SelfLoop(VertexId),

    /// Some edge already connects this pair; the low-level primitives do not
    /// replace.
    #[error("an edge already connects {from} and {to}")]
    EdgeExists {
        /// Requested source endpoint.
        from: VertexId,
        /// Requested target endpoint.
        to: VertexId,
    },

    /// A directed edge may not be layered over an existing undirected edge;
    /// the undirected edge must be removed first.
    #[error(
        "an undirected edge already connects {a} and {b}; remove it before adding a directed edge"
    )]
    UndirectedConflict {
        /// One endpoint of the existing undirected edge.
        a: VertexId,
        /// The other endpoint.
        b: VertexId,
    },
}

/// Result alias for graph mutation operations.
pub type Result<T, E = GraphError> = std::result::Result<T, E>;

//! # graflab-common
//!
//! Foundation layer for Graflab: identifier types, geometry, colors,
//! hashing aliases, and error definitions.
//!
//! This crate provides the fundamental building blocks used by the other
//! Graflab crates. It has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (VertexId, EdgeId, Point2, Color)
//! - [`utils`] - Utility helpers (hashing, errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{Color, EdgeId, Point2, VertexId};
pub use utils::error::{GraphError, Result};

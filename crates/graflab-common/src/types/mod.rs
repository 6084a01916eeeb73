//! Core type definitions for Graflab.
//!
//! This module contains the fundamental types used throughout the graph
//! laboratory:
//! - Identifier types ([`VertexId`], [`EdgeId`])
//! - Geometry ([`Point2`])
//! - Presentation color ([`Color`])

mod color;
mod geometry;
mod id;

pub use color::Color;
pub use geometry::Point2;
pub use id::{EdgeId, VertexId};

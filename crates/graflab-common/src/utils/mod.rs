//! Utility helpers shared across the Graflab crates.

pub mod error;
pub mod hash;

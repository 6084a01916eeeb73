//! Presentation colors for vertices and edges.
//!
//! Colors are carried on graph entities for the renderer's benefit and are
//! ignored by every algorithm.

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Default vertex fill.
    pub const SKY_BLUE: Self = Self::new(135, 206, 235);
    /// Default edge stroke.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Highlight stroke for solution paths.
    pub const RED: Self = Self::new(255, 0, 0);
}

//! Drawing interfaces. The core decides the order and position of draw calls;
//! the canvas behind the trait does the actual painting.

use crate::{
    NodeId,
    geom::{Color, Rect},
};

/// A drawing surface supplied by the platform backend for one frame.
pub trait Canvas {
    /// Fill a rectangle in window coordinates.
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

/// What a widget is told when asked to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawContext {
    /// The node being drawn.
    pub node: NodeId,
    /// The node's rectangle in window coordinates.
    pub rect: Rect,
}

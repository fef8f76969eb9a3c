use crate::{
    geom::{Color, Rect},
    render::Canvas,
};

/// Records every fill in call order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingCanvas {
    /// Fills received so far.
    pub fills: Vec<(Rect, Color)>,
}

impl RecordingCanvas {
    /// Rectangles filled with a given colour, in call order.
    pub fn rects_of(&self, color: Color) -> Vec<Rect> {
        self.fills
            .iter()
            .filter(|(_, c)| *c == color)
            .map(|(r, _)| *r)
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fills.push((rect, color));
    }
}

//! Geometry primitives used across trellis.

#![warn(missing_docs)]

/// Colour values.
mod color;
/// Error types for geometry operations.
mod error;
/// Margin boxes.
mod margin;
/// Point helpers.
mod point;
/// Rectangle operations.
mod rect;
/// Width/height size type.
mod size;
/// Floating point vectors.
mod vec2;

pub use color::Color;
pub use error::{Error, Result};
pub use margin::Margin;
pub use point::Point;
pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;

/// Add two unsigned values, saturating at `u32::MAX` instead of wrapping.
#[inline]
pub fn add_without_overflow(a: u32, b: u32) -> u32 {
    a.saturating_add(b)
}

/// Convert an unsigned extent into a signed coordinate, clamping at `i32::MAX`.
#[inline]
pub fn to_coord(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturating_helpers() {
        assert_eq!(add_without_overflow(1, 2), 3);
        assert_eq!(add_without_overflow(u32::MAX - 1, 5), u32::MAX);
        assert_eq!(to_coord(10), 10);
        assert_eq!(to_coord(u32::MAX), i32::MAX);
    }
}

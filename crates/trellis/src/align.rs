//! Alignment flags and the margin box.

use bitflags::bitflags;

use crate::geom::{Margin, add_without_overflow, to_coord};

bitflags! {
    /// Alignment flags, OR-able. The layout engine reads them per axis.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Align: u8 {
        /// Pin to the top edge.
        const TOP = 1;
        /// Pin to the bottom edge.
        const BOTTOM = 1 << 1;
        /// Pin to the left edge.
        const LEFT = 1 << 2;
        /// Pin to the right edge.
        const RIGHT = 1 << 3;
        /// Center horizontally.
        const HCENTER = 1 << 4;
        /// Center vertically.
        const VCENTER = 1 << 5;
        /// Center on both axes.
        const CENTER = Self::HCENTER.bits() | Self::VCENTER.bits();
    }
}

impl Default for Align {
    fn default() -> Self {
        Self::empty()
    }
}

/// A layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    pub fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// How a set of flags resolves along a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisAlign {
    /// No flag for this axis.
    None,
    /// Left or top.
    Leading,
    /// Right or bottom.
    Trailing,
    /// Centered.
    Center,
}

impl Align {
    /// Resolve the flags along one axis. Center wins over leading, leading over
    /// trailing.
    pub fn along(self, axis: Axis) -> AxisAlign {
        let (leading, trailing, center) = match axis {
            Axis::Horizontal => (Self::LEFT, Self::RIGHT, Self::HCENTER),
            Axis::Vertical => (Self::TOP, Self::BOTTOM, Self::VCENTER),
        };
        if self.contains(center) {
            AxisAlign::Center
        } else if self.contains(leading) {
            AxisAlign::Leading
        } else if self.contains(trailing) {
            AxisAlign::Trailing
        } else {
            AxisAlign::None
        }
    }
}

/// Per-widget alignment state: flags plus the margin box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    /// Alignment flags.
    pub align: Align,
    /// Outward margin.
    pub margin: Margin,
}

impl Alignment {
    /// The margin as the layout engine sees it, clamped to the signed range.
    pub fn layout_margin(&self) -> Margin {
        self.margin.clamped()
    }
}

/// Offset of a child along one axis inside `extent`. `size` is the child's own
/// size, `lead` and `trail` are its margins on that axis. The result includes
/// the leading margin.
pub fn align_child(extent: u32, size: u32, lead: u32, trail: u32, align: AxisAlign) -> i32 {
    let outer = add_without_overflow(add_without_overflow(size, lead), trail);
    let free = extent.saturating_sub(outer);
    let offset = match align {
        AxisAlign::Center => free / 2,
        AxisAlign::Trailing => free,
        AxisAlign::Leading | AxisAlign::None => 0,
    };
    to_coord(add_without_overflow(offset, lead))
}

/// Horizontal offset of a child of width `w` within `extent`.
pub fn align_child_h(extent: u32, w: u32, margin: Margin, align: Align) -> i32 {
    let m = margin.clamped();
    align_child(extent, w, m.left, m.right, align.along(Axis::Horizontal))
}

/// Vertical offset of a child of height `h` within `extent`.
pub fn align_child_v(extent: u32, h: u32, margin: Margin, align: Align) -> i32 {
    let m = margin.clamped();
    align_child(extent, h, m.top, m.bottom, align.along(Axis::Vertical))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn along_axis() {
        assert_eq!(Align::CENTER.along(Axis::Horizontal), AxisAlign::Center);
        assert_eq!(Align::CENTER.along(Axis::Vertical), AxisAlign::Center);
        assert_eq!(Align::LEFT.along(Axis::Horizontal), AxisAlign::Leading);
        assert_eq!(Align::LEFT.along(Axis::Vertical), AxisAlign::None);
        assert_eq!(Align::BOTTOM.along(Axis::Vertical), AxisAlign::Trailing);
        assert_eq!(
            (Align::LEFT | Align::HCENTER).along(Axis::Horizontal),
            AxisAlign::Center
        );
        assert_eq!(
            (Align::LEFT | Align::RIGHT).along(Axis::Horizontal),
            AxisAlign::Leading
        );
    }

    #[test]
    fn offsets() {
        let m = Margin::new(1, 2, 3, 4);
        assert_eq!(align_child_h(100, 10, m, Align::empty()), 3);
        assert_eq!(align_child_h(100, 10, m, Align::LEFT), 3);
        assert_eq!(align_child_h(100, 10, m, Align::RIGHT), 100 - 17 + 3);
        assert_eq!(align_child_h(100, 10, m, Align::HCENTER), (100 - 17) / 2 + 3);
        assert_eq!(align_child_v(20, 5, m, Align::BOTTOM), 20 - 8 + 1);
        assert_eq!(align_child_v(20, 5, m, Align::CENTER), (20 - 8) / 2 + 1);
    }

    #[test]
    fn oversize_child_pins_to_margin() {
        let m = Margin::uniform(2);
        assert_eq!(align_child_h(10, 50, m, Align::RIGHT), 2);
        assert_eq!(align_child_h(10, u32::MAX, Margin::uniform(u32::MAX), Align::CENTER), i32::MAX);
    }
}

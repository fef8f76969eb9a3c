use super::{Size, add_without_overflow};

/// Outward padding around a widget's own size box.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Margin {
    /// Top edge.
    pub top: u32,
    /// Bottom edge.
    pub bottom: u32,
    /// Left edge.
    pub left: u32,
    /// Right edge.
    pub right: u32,
}

/// Largest per-side margin the layout engine reasons about.
const MAX_SIDE: u32 = i32::MAX as u32;

impl Margin {
    /// Construct a margin from explicit sides.
    pub const fn new(top: u32, bottom: u32, left: u32, right: u32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// The same margin on every side.
    pub const fn uniform(v: u32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Horizontal and vertical margins.
    pub const fn symmetric(horizontal: u32, vertical: u32) -> Self {
        Self::new(vertical, vertical, horizontal, horizontal)
    }

    /// Total horizontal margin, saturating.
    pub fn horizontal(&self) -> u32 {
        add_without_overflow(self.left, self.right)
    }

    /// Total vertical margin, saturating.
    pub fn vertical(&self) -> u32 {
        add_without_overflow(self.top, self.bottom)
    }

    /// Clamp every side to the signed coordinate range.
    pub fn clamped(&self) -> Self {
        Self {
            top: self.top.min(MAX_SIDE),
            bottom: self.bottom.min(MAX_SIDE),
            left: self.left.min(MAX_SIDE),
            right: self.right.min(MAX_SIDE),
        }
    }

    /// The outer footprint of a box of the given size.
    pub fn outer_from_size(&self, size: Size) -> Size {
        Size {
            w: add_without_overflow(size.w, self.horizontal()),
            h: add_without_overflow(size.h, self.vertical()),
        }
    }

    /// The inner box left when this margin is removed from an outer footprint.
    pub fn inner_from_outer(&self, outer: Size) -> Size {
        Size {
            w: outer.w.saturating_sub(self.horizontal()),
            h: outer.h.saturating_sub(self.vertical()),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn outer_adds_both_sides() {
        let m = Margin::new(1, 2, 3, 4);
        assert_eq!(m.outer_from_size(Size::new(10, 10)), Size::new(17, 13));
        assert_eq!(m.inner_from_outer(Size::new(17, 13)), Size::new(10, 10));
    }

    #[test]
    fn clamped_limits_sides() {
        let m = Margin::uniform(u32::MAX).clamped();
        assert_eq!(m.left, i32::MAX as u32);
        assert_eq!(m.horizontal(), u32::MAX - 1);
    }

    proptest! {
        #[test]
        fn outer_never_wraps(w in any::<u32>(), h in any::<u32>(), side in any::<u32>()) {
            let m = Margin::uniform(side);
            let outer = m.outer_from_size(Size::new(w, h));
            prop_assert!(outer.w >= w && outer.h >= h);
            prop_assert!(outer.contains(&Size::new(w, h)));
        }
    }
}

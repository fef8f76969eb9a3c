//! The min / current / max size triple carried by every widget.
//!
//! Every mutator keeps `min <= size <= max` on both axes. Out-of-range sizes
//! are not clamped: the violated bound moves to meet the new size. Bounds
//! pushed past each other collapse all three values onto the incoming bound.

use bitflags::bitflags;

use crate::{
    geom::Size,
    policy::{SizePolicies, SizePolicy},
};

bitflags! {
    /// What a size mutation actually changed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SizeChanges: u8 {
        /// The current size changed.
        const SIZE = 1;
        /// The min or max size changed.
        const LIMITS = 1 << 1;
    }
}

impl SizeChanges {
    /// Compare two triples.
    pub fn between(before: &Sizable, after: &Sizable) -> Self {
        let mut changes = Self::empty();
        if before.size != after.size {
            changes |= Self::SIZE;
        }
        if before.min != after.min || before.max != after.max {
            changes |= Self::LIMITS;
        }
        changes
    }
}

/// A size with lower and upper bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sizable {
    /// Lower bound.
    min: Size,
    /// Current size.
    size: Size,
    /// Upper bound.
    max: Size,
}

impl Default for Sizable {
    fn default() -> Self {
        Self {
            min: Size::MIN,
            size: Size::MIN,
            max: Size::MAX,
        }
    }
}

/// One axis of the triple, borrowed mutably.
struct AxisMut<'a> {
    /// Lower bound.
    min: &'a mut u32,
    /// Current value.
    size: &'a mut u32,
    /// Upper bound.
    max: &'a mut u32,
}

impl AxisMut<'_> {
    /// Set the value, dragging whichever bound it crosses.
    fn set_size(&mut self, v: u32) {
        if v < *self.min {
            *self.min = v;
        }
        if v > *self.max {
            *self.max = v;
        }
        *self.size = v;
    }

    /// Set the lower bound.
    fn set_min(&mut self, v: u32) {
        if v > *self.max {
            self.collapse(v);
            return;
        }
        *self.min = v;
        if *self.size < v {
            *self.size = v;
        }
    }

    /// Set the upper bound.
    fn set_max(&mut self, v: u32) {
        if v < *self.min {
            self.collapse(v);
            return;
        }
        *self.max = v;
        if *self.size > v {
            *self.size = v;
        }
    }

    /// Pin min, size and max to a single value.
    fn collapse(&mut self, v: u32) {
        *self.min = v;
        *self.size = v;
        *self.max = v;
    }
}

impl Sizable {
    /// Construct a triple, normalising through `set_limits` and `set_size`.
    pub fn new(min: Size, size: Size, max: Size) -> Self {
        let mut s = Self::default();
        s.set_limits(min, max);
        s.set_size(size);
        s
    }

    /// Minimum size.
    pub fn min(&self) -> Size {
        self.min
    }

    /// Current size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Maximum size.
    pub fn max(&self) -> Size {
        self.max
    }

    /// Horizontal axis.
    fn width(&mut self) -> AxisMut<'_> {
        AxisMut {
            min: &mut self.min.w,
            size: &mut self.size.w,
            max: &mut self.max.w,
        }
    }

    /// Vertical axis.
    fn height(&mut self) -> AxisMut<'_> {
        AxisMut {
            min: &mut self.min.h,
            size: &mut self.size.h,
            max: &mut self.max.h,
        }
    }

    /// Run a mutation and report what it changed.
    fn track(&mut self, f: impl FnOnce(&mut Self)) -> SizeChanges {
        let before = *self;
        f(self);
        SizeChanges::between(&before, self)
    }

    /// Set the current size. A size outside the limits moves the limit.
    pub fn set_size(&mut self, size: Size) -> SizeChanges {
        if size == self.size {
            return SizeChanges::empty();
        }
        self.track(|s| {
            s.width().set_size(size.w);
            s.height().set_size(size.h);
        })
    }

    /// Set the lower bound, raising size and max as needed.
    pub fn set_min_size(&mut self, min: Size) -> SizeChanges {
        self.track(|s| {
            s.width().set_min(min.w);
            s.height().set_min(min.h);
        })
    }

    /// Set the upper bound, lowering size and min as needed.
    pub fn set_max_size(&mut self, max: Size) -> SizeChanges {
        self.track(|s| {
            s.width().set_max(max.w);
            s.height().set_max(max.h);
        })
    }

    /// Set both bounds. When `min > max` on an axis, the max bound is applied
    /// last and wins.
    pub fn set_limits(&mut self, min: Size, max: Size) -> SizeChanges {
        self.track(|s| {
            s.width().set_min(min.w);
            s.width().set_max(max.w);
            s.height().set_min(min.h);
            s.height().set_max(max.h);
        })
    }

    /// The limits the layout engine may use, with each axis restricted by its
    /// policy: an axis that may not grow has its max pinned to the current
    /// size, one that may not shrink has its min pinned.
    pub fn limits_with_policy(&self, policy: SizePolicies) -> (Size, Size) {
        let axis = |p: SizePolicy, min: u32, size: u32, max: u32| {
            let lo = if p.contains(SizePolicy::SHRINK) {
                min
            } else {
                size
            };
            let hi = if p.contains(SizePolicy::GROW) { max } else { size };
            (lo, hi)
        };
        let (min_w, max_w) = axis(policy.horizontal, self.min.w, self.size.w, self.max.w);
        let (min_h, max_h) = axis(policy.vertical, self.min.h, self.size.h, self.max.h);
        (Size::new(min_w, min_h), Size::new(max_w, max_h))
    }

    /// True if the triple is ordered on both axes.
    pub fn is_ordered(&self) -> bool {
        self.max.contains(&self.size) && self.size.contains(&self.min)
    }
}

use std::ops::Add;

use super::{Point, Rect};

/// A `Size` is a width and height with no location.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Size {
    /// Width.
    pub w: u32,
    /// Height.
    pub h: u32,
}

impl Size {
    /// The zero size.
    pub const MIN: Self = Self { w: 0, h: 0 };
    /// Sentinel for an unbounded size.
    pub const MAX: Self = Self {
        w: u32::MAX,
        h: u32::MAX,
    };

    /// Construct a new size.
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// True if this size can completely enclose the target size in both dimensions.
    pub fn contains(&self, other: &Self) -> bool {
        self.w >= other.w && self.h >= other.h
    }

    /// True if either dimension of `other` is larger than ours.
    pub fn exceeded_by(&self, other: &Self) -> bool {
        other.w > self.w || other.h > self.h
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self {
            w: self.w.max(other.w),
            h: self.h.max(other.h),
        }
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        Self {
            w: self.w.min(other.w),
            h: self.h.min(other.h),
        }
    }

    /// Component-wise saturating addition.
    pub fn saturating_add(self, other: Self) -> Self {
        Self {
            w: self.w.saturating_add(other.w),
            h: self.h.saturating_add(other.h),
        }
    }

    /// Component-wise saturating subtraction.
    pub fn saturating_sub(self, other: Self) -> Self {
        Self {
            w: self.w.saturating_sub(other.w),
            h: self.h.saturating_sub(other.h),
        }
    }

    /// Return a `Rect` of this size located at `tl`.
    pub fn at(&self, tl: Point) -> Rect {
        Rect {
            tl,
            w: self.w,
            h: self.h,
        }
    }
}

/// Saturating addition; sizes never wrap.
impl Add for Size {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

impl From<(u32, u32)> for Size {
    fn from(v: (u32, u32)) -> Self {
        Self { w: v.0, h: v.1 }
    }
}

impl From<Rect> for Size {
    fn from(r: Rect) -> Self {
        Self { w: r.w, h: r.h }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn sentinels() {
        assert_eq!(Size::MIN, Size::new(0, 0));
        assert!(Size::MAX.contains(&Size::new(10, 10)));
        assert!(Size::new(5, 5).exceeded_by(&Size::new(5, 6)));
        assert!(!Size::new(5, 5).exceeded_by(&Size::new(5, 5)));
    }

    #[test]
    fn add_saturates() {
        assert_eq!(Size::MAX + Size::new(1, 1), Size::MAX);
        assert_eq!(Size::new(1, 2) + Size::new(3, 4), Size::new(4, 6));
    }

    proptest! {
        #[test]
        fn max_min_bracket(a in any::<(u32, u32)>(), b in any::<(u32, u32)>()) {
            let a = Size::from(a);
            let b = Size::from(b);
            let hi = a.max(b);
            let lo = a.min(b);
            prop_assert!(hi.contains(&a) && hi.contains(&b));
            prop_assert!(a.contains(&lo) && b.contains(&lo));
            prop_assert!((a + b).contains(&hi));
        }
    }
}

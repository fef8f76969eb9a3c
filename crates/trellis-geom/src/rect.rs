use super::{Point, Size, to_coord};

/// A rectangle with a signed top-left corner and an unsigned extent.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub tl: Point,
    /// Width.
    pub w: u32,
    /// Height.
    pub h: u32,
}

impl Rect {
    /// Construct a new rectangle.
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self {
            tl: Point { x, y },
            w,
            h,
        }
    }

    /// A zero-sized rectangle at the origin.
    pub fn zero() -> Self {
        Self::default()
    }

    /// The size of this rectangle.
    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    /// True if the point lies inside the rectangle. The right and bottom edges
    /// are exclusive.
    pub fn contains_point(&self, p: Point) -> bool {
        let x = i64::from(p.x) - i64::from(self.tl.x);
        let y = i64::from(p.y) - i64::from(self.tl.y);
        x >= 0 && y >= 0 && x < i64::from(self.w) && y < i64::from(self.h)
    }

    /// Shift the rectangle by a point offset.
    pub fn shift(&self, by: Point) -> Self {
        Self {
            tl: self.tl + by,
            ..*self
        }
    }

    /// The bottom-right corner, exclusive, saturating at `i32::MAX`.
    pub fn br(&self) -> Point {
        Point::new(
            self.tl.x.saturating_add(to_coord(self.w)),
            self.tl.y.saturating_add(to_coord(self.h)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_point_is_half_open() {
        let r = Rect::new(10, 10, 5, 5);
        assert!(r.contains_point(Point::new(10, 10)));
        assert!(r.contains_point(Point::new(14, 14)));
        assert!(!r.contains_point(Point::new(15, 10)));
        assert!(!r.contains_point(Point::new(9, 12)));
        assert!(!Rect::new(0, 0, 0, 0).contains_point(Point::zero()));
    }

    #[test]
    fn huge_rect_does_not_overflow() {
        let r = Rect::new(i32::MAX - 1, 0, u32::MAX, 1);
        assert!(r.contains_point(Point::new(i32::MAX, 0)));
        assert_eq!(r.br(), Point::new(i32::MAX, 1));
    }
}

use core::ops::{Add, AddAssign};

use super::{Point, Size};

/// Position expressed as a fraction of the canvas extent.
///
/// Script commands use the `[-1, 1]` range on both axes; negative values land
/// outside the canvas and are clipped when drawn.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RelativePoint {
    pub x: f64,
    pub y: f64,
}

impl RelativePoint {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Converts to absolute pixels: multiply by the extent, truncate toward zero.
    #[inline]
    pub fn to_abs(self, size: Size) -> Point {
        Point::new(
            (self.x * f64::from(size.width)) as i32,
            (self.y * f64::from(size.height)) as i32,
        )
    }
}

impl Add for RelativePoint {
    type Output = RelativePoint;
    #[inline]
    fn add(self, rhs: RelativePoint) -> RelativePoint {
        RelativePoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for RelativePoint {
    #[inline]
    fn add_assign(&mut self, rhs: RelativePoint) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_abs_scales_by_extent() {
        let p = RelativePoint::new(0.5, 0.25).to_abs(Size::new(800, 400));
        assert_eq!(p, Point::new(400, 100));
    }

    #[test]
    fn to_abs_truncates_toward_zero() {
        let size = Size::square(10);
        assert_eq!(RelativePoint::new(0.19, 0.99).to_abs(size), Point::new(1, 9));
        assert_eq!(RelativePoint::new(-0.19, -0.99).to_abs(size), Point::new(-1, -9));
    }

    #[test]
    fn add_assign_offsets_both_axes() {
        let mut p = RelativePoint::new(0.5, 0.5);
        p += RelativePoint::new(0.2, -0.1);
        assert!((p.x - 0.7).abs() < 1e-9);
        assert!((p.y - 0.4).abs() < 1e-9);
    }
}

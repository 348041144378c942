use crate::canvas::Canvas;
use crate::coords::{Color, Point, Rect, RelativePoint};

/// Half the length of each bar of the figure glyph, in pixels.
pub const FIGURE_HALF_LENGTH: i32 = 115;
/// Half the thickness of each bar of the figure glyph, in pixels.
pub const FIGURE_HALF_WIDTH: i32 = 35;
pub const FIGURE_COLOR: Color = Color::YELLOW;

/// Solid color over the whole canvas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Fill {
    pub color: Color,
}

impl Fill {
    #[inline]
    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(Color::WHITE)
    }

    #[inline]
    pub const fn green() -> Self {
        Self::new(Color::GREEN)
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let bounds = canvas.bounds();
        canvas.fill(bounds, self.color);
    }
}

/// Black rectangle between two relative corners.
///
/// Corners are used as given: `min` past `max` on an axis yields an empty
/// rectangle and nothing is drawn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BackgroundRect {
    pub min: RelativePoint,
    pub max: RelativePoint,
}

impl BackgroundRect {
    #[inline]
    pub const fn new(min: RelativePoint, max: RelativePoint) -> Self {
        Self { min, max }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let size = canvas.size();
        let rect = Rect::new(self.min.to_abs(size), self.max.to_abs(size));
        canvas.fill(rect, Color::BLACK);
    }
}

/// T-shaped glyph centered on a relative point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Figure {
    pub center: RelativePoint,
}

impl Figure {
    #[inline]
    pub const fn new(center: RelativePoint) -> Self {
        Self { center }
    }

    /// The glyph's two bars around an absolute center: `[horizontal, vertical]`.
    ///
    /// The horizontal bar caps the top of the vertical one.
    pub fn glyph(center: Point) -> [Rect; 2] {
        let (x, y) = (center.x, center.y);
        let (len, width) = (FIGURE_HALF_LENGTH, FIGURE_HALF_WIDTH);

        // Centers on huge canvases sit near i32::MAX; the bars saturate there.
        let top = y.saturating_sub(len);
        let horizontal = Rect::from_coords(
            x.saturating_sub(len),
            top,
            x.saturating_add(len),
            top.saturating_add(width * 2),
        );
        let vertical = Rect::from_coords(
            x.saturating_sub(width),
            top,
            x.saturating_add(width),
            y.saturating_add(len),
        );
        [horizontal, vertical]
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let center = self.center.to_abs(canvas.size());
        for bar in Self::glyph(center) {
            canvas.fill(bar, FIGURE_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Size;
    use crate::painter::testing::RecordingCanvas;

    #[test]
    fn fill_covers_bounds() {
        let mut canvas = RecordingCanvas::new(Size::new(400, 300));
        Fill::green().draw(&mut canvas);
        assert_eq!(canvas.fills, vec![(Rect::from_coords(0, 0, 400, 300), Color::GREEN)]);
    }

    #[test]
    fn background_rect_converts_corners() {
        let mut canvas = RecordingCanvas::new(Size::square(400));
        BackgroundRect::new(RelativePoint::new(0.25, 0.5), RelativePoint::new(0.75, 1.0))
            .draw(&mut canvas);
        assert_eq!(canvas.fills, vec![(Rect::from_coords(100, 200, 300, 400), Color::BLACK)]);
    }

    #[test]
    fn background_rect_keeps_inverted_corners() {
        let mut canvas = RecordingCanvas::new(Size::square(100));
        BackgroundRect::new(RelativePoint::new(0.5, 0.5), RelativePoint::new(0.1, 0.9))
            .draw(&mut canvas);
        let (rect, _) = canvas.fills[0];
        assert_eq!(rect, Rect::from_coords(50, 50, 10, 90));
        assert!(rect.is_empty());
    }

    #[test]
    fn figure_draws_two_bars_around_center() {
        let mut canvas = RecordingCanvas::new(Size::square(800));
        Figure::new(RelativePoint::new(0.5, 0.5)).draw(&mut canvas);

        assert_eq!(canvas.fills.len(), 2);
        assert_eq!(canvas.fills[0], (Rect::from_coords(285, 285, 515, 355), FIGURE_COLOR));
        assert_eq!(canvas.fills[1], (Rect::from_coords(365, 285, 435, 515), FIGURE_COLOR));
    }

    #[test]
    fn figure_on_extreme_canvas_saturates() {
        let mut canvas = RecordingCanvas::new(Size::new(u32::MAX, 10));
        Figure::new(RelativePoint::new(1.0, 0.5)).draw(&mut canvas);

        let [horizontal, vertical] = [canvas.fills[0].0, canvas.fills[1].0];
        assert_eq!(horizontal.max.x, i32::MAX);
        assert_eq!(vertical.max.x, i32::MAX);
        assert_eq!(horizontal.min.x, i32::MAX - FIGURE_HALF_LENGTH);
    }

    #[test]
    fn glyph_bars_share_top_edge() {
        let [horizontal, vertical] = Figure::glyph(Point::new(0, 0));
        assert_eq!(horizontal.min.y, vertical.min.y);
        assert!(horizontal.width() > vertical.width());
        assert!(vertical.height() > horizontal.height());
    }
}

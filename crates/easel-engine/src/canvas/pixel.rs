use image::{imageops, RgbaImage};

use crate::coords::{Color, Point, Rect, Size};

use super::{Canvas, CanvasError, CanvasFactory};

/// In-memory RGBA raster.
///
/// Starts fully transparent. Every write is clipped to the canvas bounds.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    image: RgbaImage,
}

impl PixelCanvas {
    pub fn new(size: Size) -> Result<Self, CanvasError> {
        if !size.is_valid() {
            return Err(CanvasError::InvalidSize(size));
        }
        Ok(Self { image: RgbaImage::new(size.width, size.height) })
    }

    /// Color at `p`, or `None` outside the canvas.
    pub fn pixel(&self, p: Point) -> Option<Color> {
        if !self.bounds().contains(p) {
            return None;
        }
        Some(Color::from_rgba(*self.image.get_pixel(p.x as u32, p.y as u32)))
    }

    /// Borrow the backing raster (e.g. to encode it).
    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

impl Canvas for PixelCanvas {
    #[inline]
    fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }

    fn fill(&mut self, rect: Rect, color: Color) {
        let Some(clipped) = rect.intersect(self.bounds()) else {
            return;
        };
        let px = color.to_rgba();

        // Clipped coordinates are within [0, size), so the casts are lossless.
        for y in clipped.min.y..clipped.max.y {
            for x in clipped.min.x..clipped.max.x {
                self.image.put_pixel(x as u32, y as u32, px);
            }
        }
    }

    fn upload(&mut self, origin: Point, block: &RgbaImage) {
        imageops::replace(&mut self.image, block, i64::from(origin.x), i64::from(origin.y));
    }
}

/// Factory producing [`PixelCanvas`] buffers.
#[derive(Debug, Copy, Clone, Default)]
pub struct PixelCanvasFactory;

impl CanvasFactory for PixelCanvasFactory {
    type Canvas = PixelCanvas;

    fn new_canvas(&self, size: Size) -> Result<PixelCanvas, CanvasError> {
        PixelCanvas::new(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(side: u32) -> PixelCanvas {
        PixelCanvas::new(Size::square(side)).unwrap()
    }

    // ── allocation ────────────────────────────────────────────────────────

    #[test]
    fn zero_size_is_rejected() {
        let err = PixelCanvas::new(Size::new(0, 10)).unwrap_err();
        assert_eq!(err, CanvasError::InvalidSize(Size::new(0, 10)));
    }

    #[test]
    fn starts_transparent() {
        let c = canvas(4);
        assert_eq!(c.pixel(Point::new(3, 3)), Some(Color::transparent()));
        assert_eq!(c.bounds(), Rect::from_coords(0, 0, 4, 4));
    }

    // ── fill ──────────────────────────────────────────────────────────────

    #[test]
    fn fill_is_half_open() {
        let mut c = canvas(10);
        c.fill(Rect::from_coords(2, 2, 4, 4), Color::WHITE);
        assert_eq!(c.pixel(Point::new(2, 2)), Some(Color::WHITE));
        assert_eq!(c.pixel(Point::new(3, 3)), Some(Color::WHITE));
        assert_eq!(c.pixel(Point::new(4, 4)), Some(Color::transparent()));
    }

    #[test]
    fn fill_clips_to_bounds() {
        let mut c = canvas(10);
        c.fill(Rect::from_coords(-5, -5, 3, 100), Color::GREEN);
        assert_eq!(c.pixel(Point::new(0, 9)), Some(Color::GREEN));
        assert_eq!(c.pixel(Point::new(3, 0)), Some(Color::transparent()));
    }

    #[test]
    fn fill_inverted_rect_draws_nothing() {
        let mut c = canvas(10);
        c.fill(Rect::from_coords(8, 8, 2, 2), Color::WHITE);
        assert!(c.image().pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn fill_fully_outside_draws_nothing() {
        let mut c = canvas(10);
        c.fill(Rect::from_coords(20, 20, 30, 30), Color::WHITE);
        assert!(c.image().pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    // ── upload ────────────────────────────────────────────────────────────

    #[test]
    fn upload_copies_block_at_origin() {
        let mut c = canvas(8);
        let block = RgbaImage::from_pixel(2, 2, Color::YELLOW.to_rgba());
        c.upload(Point::new(5, 6), &block);
        assert_eq!(c.pixel(Point::new(5, 6)), Some(Color::YELLOW));
        assert_eq!(c.pixel(Point::new(6, 7)), Some(Color::YELLOW));
        assert_eq!(c.pixel(Point::new(4, 6)), Some(Color::transparent()));
    }

    #[test]
    fn upload_clips_overhanging_block() {
        let mut c = canvas(4);
        let block = RgbaImage::from_pixel(3, 3, Color::WHITE.to_rgba());
        c.upload(Point::new(-1, 2), &block);
        assert_eq!(c.pixel(Point::new(0, 2)), Some(Color::WHITE));
        assert_eq!(c.pixel(Point::new(1, 3)), Some(Color::WHITE));
        assert_eq!(c.pixel(Point::new(2, 2)), Some(Color::transparent()));
    }
}

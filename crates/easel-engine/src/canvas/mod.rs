//! Canvas capability.
//!
//! The loop only ever talks to a surface through [`Canvas`], and only ever
//! allocates one through [`CanvasFactory`]. [`PixelCanvas`] is the stock
//! in-memory raster; display shells may provide their own.

mod error;
mod pixel;

pub use error::CanvasError;
pub use pixel::{PixelCanvas, PixelCanvasFactory};

use crate::coords::{Color, Point, Rect, Size};

/// A rectangular pixel surface with a fixed size.
pub trait Canvas {
    /// Extent in pixels. Never changes for a given canvas.
    fn size(&self) -> Size;

    /// Full surface rectangle, anchored at the origin.
    fn bounds(&self) -> Rect {
        Rect::from_size(self.size())
    }

    /// Fills `rect` with `color`, replacing what was there.
    ///
    /// The part of `rect` outside [`bounds`](Self::bounds) is ignored; an empty
    /// rectangle draws nothing.
    fn fill(&mut self, rect: Rect, color: Color);

    /// Copies a raw RGBA block with its top-left corner at `origin`, clipped to bounds.
    fn upload(&mut self, origin: Point, block: &image::RgbaImage);
}

/// Allocates canvases for the loop's buffer pair.
pub trait CanvasFactory {
    type Canvas: Canvas + Send + Sync + 'static;

    fn new_canvas(&self, size: Size) -> Result<Self::Canvas, CanvasError>;
}

//! Canvas doubles shared by the painter tests.

use crate::canvas::{Canvas, CanvasError, CanvasFactory};
use crate::coords::{Color, Point, Rect, Size};

/// Records every fill instead of rasterizing it.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub size: Size,
    pub fills: Vec<(Rect, Color)>,
}

impl RecordingCanvas {
    pub fn new(size: Size) -> Self {
        Self { size, ..Self::default() }
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> Size {
        self.size
    }

    fn fill(&mut self, rect: Rect, color: Color) {
        self.fills.push((rect, color));
    }

    fn upload(&mut self, _origin: Point, _block: &image::RgbaImage) {}
}

#[derive(Debug, Copy, Clone, Default)]
pub struct RecordingFactory;

impl CanvasFactory for RecordingFactory {
    type Canvas = RecordingCanvas;

    fn new_canvas(&self, size: Size) -> Result<RecordingCanvas, CanvasError> {
        Ok(RecordingCanvas::new(size))
    }
}

/// Factory that always fails, for allocation-error paths.
#[derive(Debug, Copy, Clone, Default)]
pub struct FailingFactory;

impl CanvasFactory for FailingFactory {
    type Canvas = RecordingCanvas;

    fn new_canvas(&self, _size: Size) -> Result<RecordingCanvas, CanvasError> {
        Err(CanvasError::Backend("out of textures".to_string()))
    }
}

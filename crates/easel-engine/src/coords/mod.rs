//! Coordinate and geometry types shared by canvases and operations.
//!
//! Canonical canvas space:
//! - integer pixels
//! - origin top-left
//! - +X right, +Y down
//!
//! Script commands speak in [`RelativePoint`]s, which are converted to pixels
//! against the canvas [`Size`] at draw time.

mod color;
mod point;
mod rect;
mod relative;
mod size;

pub use color::Color;
pub use point::Point;
pub use rect::Rect;
pub use relative::RelativePoint;
pub use size::Size;

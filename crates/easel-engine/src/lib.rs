//! Easel engine crate.
//!
//! Owns the drawing core used by the script and studio layers: geometry,
//! the canvas capability, the painting loop, and logger setup.

pub mod canvas;
pub mod coords;
pub mod logging;
pub mod painter;
pub mod time;

//! Publish timing.
//!
//! The loop owns one [`FrameClock`] per run and ticks it once per published
//! frame, so receivers can tell frames apart and pace their display.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};

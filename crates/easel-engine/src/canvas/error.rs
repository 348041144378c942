use std::fmt;

use crate::coords::Size;

/// Failure to allocate a canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    /// Width or height is zero.
    InvalidSize(Size),
    /// Backend-specific allocation failure.
    Backend(String),
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasError::InvalidSize(size) => {
                write!(f, "invalid canvas size {}x{}", size.width, size.height)
            }
            CanvasError::Backend(msg) => write!(f, "canvas allocation failed: {msg}"),
        }
    }
}

impl std::error::Error for CanvasError {}

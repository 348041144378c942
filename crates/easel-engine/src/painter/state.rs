use crate::canvas::Canvas;
use crate::coords::RelativePoint;

use super::shapes::{BackgroundRect, Figure, Fill};
use super::Operation;

/// A state-affecting command's effect on [`DrawingState`].
///
/// Adding a command kind means adding a variant here and an arm in
/// [`DrawingState::apply`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Tweak {
    /// Replaces the background fill.
    Background(Fill),
    /// Replaces the background rectangle.
    BackgroundRect(BackgroundRect),
    /// Appends a figure.
    Figure(Figure),
    /// Offsets every figure accumulated so far.
    Move(RelativePoint),
    /// Clears fill, rectangle and figures.
    Reset,
}

/// Accumulated picture built up by tweaks.
///
/// Invariants:
/// - at most one background fill and one background rectangle (last write wins)
/// - figures are append-only until a reset, in insertion order
///
/// As an operation it draws background fill, then rectangle, then figures, and
/// is never ready on its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawingState {
    background: Option<Fill>,
    background_rect: Option<BackgroundRect>,
    figures: Vec<Figure>,
}

impl DrawingState {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, tweak: Tweak) {
        match tweak {
            Tweak::Background(fill) => self.background = Some(fill),
            Tweak::BackgroundRect(rect) => self.background_rect = Some(rect),
            Tweak::Figure(figure) => self.figures.push(figure),
            Tweak::Move(offset) => {
                for figure in &mut self.figures {
                    figure.center += offset;
                }
            }
            Tweak::Reset => {
                self.background = None;
                self.background_rect = None;
                self.figures.clear();
            }
        }
    }

    /// Deep copy of the current state as an operation.
    ///
    /// Later tweaks never reach a snapshot that was already taken.
    #[inline]
    pub fn snapshot(&self) -> Operation {
        Operation::State(self.clone())
    }

    #[inline]
    pub fn background(&self) -> Option<&Fill> {
        self.background.as_ref()
    }

    #[inline]
    pub fn background_rect(&self) -> Option<&BackgroundRect> {
        self.background_rect.as_ref()
    }

    #[inline]
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn is_empty(&self) -> bool {
        self.background.is_none() && self.background_rect.is_none() && self.figures.is_empty()
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) -> bool {
        if let Some(fill) = &self.background {
            fill.draw(canvas);
        }
        if let Some(rect) = &self.background_rect {
            rect.draw(canvas);
        }
        for figure in &self.figures {
            figure.draw(canvas);
        }
        false
    }
}

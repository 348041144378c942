use std::fmt;
use std::sync::Arc;

use crate::canvas::Canvas;

use super::shapes::{BackgroundRect, Figure, Fill};
use super::state::DrawingState;

/// Closure payload of [`Operation::Func`].
pub type CanvasFn = dyn Fn(&mut dyn Canvas) + Send + Sync;

/// Unit of work applied by the loop to its building canvas.
///
/// [`apply`](Operation::apply) reports whether the canvas should be published
/// afterwards; only [`Operation::Update`] (directly or inside a list) does.
#[derive(Clone)]
pub enum Operation {
    Fill(Fill),
    BackgroundRect(BackgroundRect),
    Figure(Figure),
    /// Draws nothing; marks the canvas ready.
    Update,
    /// Applies members in order; ready if any member was.
    List(Vec<Operation>),
    /// Snapshot of the interpreter's drawing state.
    State(DrawingState),
    /// Arbitrary canvas work. Never ready.
    Func(Arc<CanvasFn>),
}

impl Operation {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&mut dyn Canvas) + Send + Sync + 'static,
    {
        Operation::Func(Arc::new(f))
    }

    pub fn apply(&self, canvas: &mut dyn Canvas) -> bool {
        match self {
            Operation::Fill(fill) => {
                fill.draw(canvas);
                false
            }
            Operation::BackgroundRect(rect) => {
                rect.draw(canvas);
                false
            }
            Operation::Figure(figure) => {
                figure.draw(canvas);
                false
            }
            Operation::Update => true,
            // Every member runs even after one reported ready.
            Operation::List(ops) => ops.iter().fold(false, |ready, op| op.apply(canvas) || ready),
            Operation::State(state) => state.draw(canvas),
            Operation::Func(f) => {
                f(canvas);
                false
            }
        }
    }

    /// True for a list with nothing to apply. Such operations are refused by the loop.
    pub fn is_empty(&self) -> bool {
        match self {
            Operation::List(ops) => ops.iter().all(Operation::is_empty),
            _ => false,
        }
    }

    #[inline]
    pub fn is_update(&self) -> bool {
        matches!(self, Operation::Update)
    }

    #[inline]
    pub fn as_state(&self) -> Option<&DrawingState> {
        match self {
            Operation::State(state) => Some(state),
            _ => None,
        }
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Fill(fill) => f.debug_tuple("Fill").field(fill).finish(),
            Operation::BackgroundRect(rect) => f.debug_tuple("BackgroundRect").field(rect).finish(),
            Operation::Figure(figure) => f.debug_tuple("Figure").field(figure).finish(),
            Operation::Update => f.write_str("Update"),
            Operation::List(ops) => f.debug_tuple("List").field(ops).finish(),
            Operation::State(state) => f.debug_tuple("State").field(state).finish(),
            Operation::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl From<Vec<Operation>> for Operation {
    fn from(ops: Vec<Operation>) -> Self {
        Operation::List(ops)
    }
}

/// Paints the whole canvas white. For use with [`Operation::from_fn`].
pub fn white_fill(canvas: &mut dyn Canvas) {
    Fill::white().draw(canvas);
}

/// Paints the whole canvas green. For use with [`Operation::from_fn`].
pub fn green_fill(canvas: &mut dyn Canvas) {
    Fill::green().draw(canvas);
}

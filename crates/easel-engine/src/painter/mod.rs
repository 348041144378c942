//! Off-screen painting loop.
//!
//! Callers [`post`](EventLoop::post) [`Operation`]s from any thread. A single
//! worker applies them in order to the building half of a canvas pair and,
//! whenever an operation reports ready, hands that canvas to a [`Receiver`]
//! and swaps the pair.
//!
//! ```text
//! post ──► OpQueue (bounded, FIFO) ──► worker ──apply──► building canvas
//!                                          │
//!                                   ready? └──► Receiver::on_publish, swap
//! ```
//!
//! [`DrawingState`] and [`Tweak`] hold the picture a script builds up; the
//! parser in `easel-script` produces them.

mod error;
mod event_loop;
mod op;
mod queue;
mod receiver;
mod shapes;
mod state;

#[cfg(test)]
mod testing;

pub use error::LoopError;
pub use event_loop::{EventLoop, LoopConfig, LoopStatus};
pub use op::{green_fill, white_fill, CanvasFn, Operation};
pub use queue::DEFAULT_QUEUE_CAPACITY;
pub use receiver::{ChannelReceiver, Frame, PublishedCanvas, Receiver};
pub use shapes::{
    BackgroundRect, Figure, Fill, FIGURE_COLOR, FIGURE_HALF_LENGTH, FIGURE_HALF_WIDTH,
};
pub use state::{DrawingState, Tweak};

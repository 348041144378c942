use std::sync::mpsc;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use crate::time::FrameTime;

/// Read-only handle to a canvas the loop has published.
///
/// The loop keeps drawing into the *other* buffer until the next publish, so
/// reading through this handle never observes a frame mid-build. A receiver
/// that keeps a handle across two publishes will find the loop reusing that
/// buffer; reads then wait for the current operation to finish.
pub struct PublishedCanvas<C> {
    inner: Arc<RwLock<C>>,
}

impl<C> PublishedCanvas<C> {
    #[inline]
    pub(crate) fn new(inner: Arc<RwLock<C>>) -> Self {
        Self { inner }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, C> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// True when both handles refer to the same buffer of the pair.
    #[inline]
    pub fn ptr_eq(&self, other: &PublishedCanvas<C>) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<C> Clone for PublishedCanvas<C> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

/// A published canvas plus its timing.
pub struct Frame<C> {
    pub canvas: PublishedCanvas<C>,
    pub time: FrameTime,
}

impl<C> Clone for Frame<C> {
    fn clone(&self) -> Self {
        Self { canvas: self.canvas.clone(), time: self.time }
    }
}

/// Display sink for published frames.
///
/// Called on the loop's worker thread; implementations should hand the frame
/// off rather than do heavy work inline, since the loop waits for the call.
pub trait Receiver<C>: Send + Sync {
    fn on_publish(&self, frame: Frame<C>);
}

impl<C, F> Receiver<C> for F
where
    F: Fn(Frame<C>) + Send + Sync,
{
    fn on_publish(&self, frame: Frame<C>) {
        self(frame)
    }
}

/// Receiver that forwards frames into an mpsc channel, for a display thread
/// to pick up at its own pace.
pub struct ChannelReceiver<C> {
    tx: mpsc::Sender<Frame<C>>,
}

impl<C> ChannelReceiver<C> {
    pub fn new() -> (Self, mpsc::Receiver<Frame<C>>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }
}

impl<C: Send + Sync> Receiver<C> for ChannelReceiver<C> {
    fn on_publish(&self, frame: Frame<C>) {
        let index = frame.time.frame_index;
        if self.tx.send(frame).is_err() {
            log::debug!("frame {index} dropped: display side has hung up");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FrameClock;

    fn frame(value: u32, clock: &mut FrameClock) -> Frame<u32> {
        Frame { canvas: PublishedCanvas::new(Arc::new(RwLock::new(value))), time: clock.tick() }
    }

    #[test]
    fn channel_receiver_forwards_in_order() {
        let mut clock = FrameClock::new();
        let (receiver, rx) = ChannelReceiver::<u32>::new();

        receiver.on_publish(frame(1, &mut clock));
        receiver.on_publish(frame(2, &mut clock));

        let got: Vec<(u64, u32)> = rx
            .try_iter()
            .map(|f| {
                let value = *f.canvas.read();
                (f.time.frame_index, value)
            })
            .collect();
        assert_eq!(got, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn channel_receiver_survives_hung_up_display() {
        let mut clock = FrameClock::new();
        let (receiver, rx) = ChannelReceiver::<u32>::new();
        drop(rx);
        receiver.on_publish(frame(1, &mut clock));
    }

    #[test]
    fn ptr_eq_tracks_buffer_identity() {
        let mut clock = FrameClock::new();
        let a = frame(1, &mut clock);
        let b = a.clone();
        let c = frame(1, &mut clock);
        assert!(a.canvas.ptr_eq(&b.canvas));
        assert!(!a.canvas.ptr_eq(&c.canvas));
    }
}

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use std::thread::{self, JoinHandle};

use crate::canvas::{Canvas, CanvasFactory};
use crate::coords::Size;
use crate::time::FrameClock;

use super::queue::{Message, OpQueue, DEFAULT_QUEUE_CAPACITY};
use super::receiver::{Frame, PublishedCanvas, Receiver};
use super::{LoopError, Operation};

/// Event loop configuration.
#[derive(Debug, Clone)]
pub struct LoopConfig {
    /// Size of both buffers of the canvas pair.
    pub canvas_size: Size,
    /// Operations held before `post` starts blocking.
    pub queue_capacity: usize,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            canvas_size: Size::square(800),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

/// Observable lifecycle state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopStatus {
    NotStarted,
    Running,
    Stopping,
    Stopped,
}

struct Running {
    queue: Arc<OpQueue>,
    handle: JoinHandle<()>,
}

enum Lifecycle {
    NotStarted,
    Running(Running),
    Stopping,
    Stopped,
}

impl Lifecycle {
    fn status(&self) -> LoopStatus {
        match self {
            Lifecycle::NotStarted => LoopStatus::NotStarted,
            Lifecycle::Running(_) => LoopStatus::Running,
            Lifecycle::Stopping => LoopStatus::Stopping,
            Lifecycle::Stopped => LoopStatus::Stopped,
        }
    }
}

/// Single-consumer loop applying posted operations to an off-screen canvas.
///
/// One worker thread per run drains a bounded queue in FIFO order. When an
/// operation reports ready, the building canvas is handed to the
/// [`Receiver`] and the two buffers swap, so the next operations draw onto
/// the buffer published the time before, never onto the one just handed out.
///
/// `post` and `stop_and_wait` take `&self` and may be called from any thread.
/// Dropping a running loop stops it and waits for the queue to drain.
pub struct EventLoop<C>
where
    C: Canvas + Send + Sync + 'static,
{
    config: LoopConfig,
    receiver: Arc<dyn Receiver<C>>,
    lifecycle: Mutex<Lifecycle>,
}

impl<C> EventLoop<C>
where
    C: Canvas + Send + Sync + 'static,
{
    pub fn new(receiver: Arc<dyn Receiver<C>>) -> Self {
        Self::with_config(LoopConfig::default(), receiver)
    }

    pub fn with_config(config: LoopConfig, receiver: Arc<dyn Receiver<C>>) -> Self {
        Self {
            config,
            receiver,
            lifecycle: Mutex::new(Lifecycle::NotStarted),
        }
    }

    #[inline]
    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    pub fn status(&self) -> LoopStatus {
        self.lock().status()
    }

    fn lock(&self) -> MutexGuard<'_, Lifecycle> {
        self.lifecycle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Allocates the canvas pair and a fresh queue, then launches the worker.
    ///
    /// Starting a running loop first stops it (draining everything already
    /// posted) and then reinitializes from scratch.
    pub fn start<F>(&mut self, factory: &F) -> Result<(), LoopError>
    where
        F: CanvasFactory<Canvas = C> + ?Sized,
    {
        if self.status() == LoopStatus::Running {
            log::debug!("event loop restarting; draining the previous run first");
            if let Err(err) = self.stop_and_wait() {
                log::warn!("previous event loop run ended badly: {err}");
            }
        }

        let size = self.config.canvas_size;
        let building = factory.new_canvas(size)?;
        let published = factory.new_canvas(size)?;
        let queue = Arc::new(OpQueue::with_capacity(self.config.queue_capacity));

        let worker = Worker {
            queue: Arc::clone(&queue),
            building: Arc::new(RwLock::new(building)),
            published: Arc::new(RwLock::new(published)),
            receiver: Arc::clone(&self.receiver),
            clock: FrameClock::new(),
            applied: 0,
        };

        let handle = thread::Builder::new()
            .name("easel-loop".to_string())
            .spawn(move || worker.run())
            .map_err(|err| LoopError::Spawn(err.to_string()))?;

        *self.lifecycle.get_mut().unwrap_or_else(PoisonError::into_inner) =
            Lifecycle::Running(Running { queue, handle });

        log::info!(
            "event loop started ({}x{} canvas, queue capacity {})",
            size.width,
            size.height,
            self.config.queue_capacity
        );
        Ok(())
    }

    /// Queues `op` for the worker.
    ///
    /// Blocks while the queue is full. Fails without touching the queue when
    /// the loop is not running or `op` is empty.
    pub fn post(&self, op: Operation) -> Result<(), LoopError> {
        let queue = match &*self.lock() {
            Lifecycle::Running(running) => Arc::clone(&running.queue),
            _ => return Err(LoopError::NotRunning),
        };

        if op.is_empty() {
            return Err(LoopError::EmptyOperation);
        }

        // A stop may have closed the queue since the lifecycle check.
        queue.push(op).map_err(|_| LoopError::NotRunning)
    }

    /// Stops accepting operations, waits until everything posted before this
    /// call has been applied, and joins the worker.
    pub fn stop_and_wait(&self) -> Result<(), LoopError> {
        let running = {
            let mut lifecycle = self.lock();
            match std::mem::replace(&mut *lifecycle, Lifecycle::Stopping) {
                Lifecycle::Running(running) if !running.is_current_thread() => running,
                other => {
                    let err = match other {
                        Lifecycle::Running(_) => LoopError::OnWorkerThread,
                        _ => LoopError::NotRunning,
                    };
                    *lifecycle = other;
                    return Err(err);
                }
            }
        };

        log::debug!("event loop stopping with {} operation(s) queued", running.queue.len());
        if running.queue.close().is_err() {
            log::warn!("event loop worker was gone before the stop request");
        }

        let joined = running.handle.join();
        *self.lock() = Lifecycle::Stopped;

        match joined {
            Ok(()) => {
                log::info!("event loop stopped");
                Ok(())
            }
            Err(_) => {
                log::error!("event loop worker panicked");
                Err(LoopError::WorkerPanicked)
            }
        }
    }
}

impl Running {
    fn is_current_thread(&self) -> bool {
        self.handle.thread().id() == thread::current().id()
    }
}

impl<C> Drop for EventLoop<C>
where
    C: Canvas + Send + Sync + 'static,
{
    fn drop(&mut self) {
        let lifecycle = self.lifecycle.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Lifecycle::Running(running) = std::mem::replace(lifecycle, Lifecycle::Stopped) {
            let _ = running.queue.close();
            if !running.is_current_thread() && running.handle.join().is_err() {
                log::error!("event loop worker panicked");
            }
        }
    }
}

// ── worker ────────────────────────────────────────────────────────────────

struct Worker<C> {
    queue: Arc<OpQueue>,
    building: Arc<RwLock<C>>,
    published: Arc<RwLock<C>>,
    receiver: Arc<dyn Receiver<C>>,
    clock: FrameClock,
    applied: u64,
}

impl<C> Worker<C>
where
    C: Canvas + Send + Sync + 'static,
{
    fn run(mut self) {
        let mut stop_requested = false;

        // `pop` only returns `None` once the queue is closed and drained.
        while let Some(message) = self.queue.pop() {
            match message {
                Message::Op(op) => self.process(&op),
                Message::Stop => stop_requested = true,
            }
        }

        debug_assert!(stop_requested, "queue closed without a stop sentinel");
        log::debug!(
            "event loop worker exiting: {} operation(s) applied, {} frame(s) published",
            self.applied,
            self.clock.frames()
        );
    }

    fn process(&mut self, op: &Operation) {
        let ready = {
            let mut canvas = self.building.write().unwrap_or_else(PoisonError::into_inner);
            op.apply(&mut *canvas)
        };
        self.applied += 1;

        if ready {
            self.publish();
        }
    }

    fn publish(&mut self) {
        let time = self.clock.tick();
        log::trace!("publishing frame {} (dt {:?})", time.frame_index, time.dt);

        self.receiver.on_publish(Frame {
            canvas: PublishedCanvas::new(Arc::clone(&self.building)),
            time,
        });
        std::mem::swap(&mut self.building, &mut self.published);
    }
}

impl<C> Drop for Worker<C> {
    fn drop(&mut self) {
        // Runs on normal exit too, when the queue is already closed and empty.
        let dropped = self.queue.abandon();
        if dropped > 0 {
            log::warn!("event loop worker discarded {dropped} queued operation(s)");
        }
    }
}

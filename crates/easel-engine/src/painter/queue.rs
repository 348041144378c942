use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use super::Operation;

/// Default number of operations the queue holds before producers block.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// Item travelling from callers to the worker.
#[derive(Debug)]
pub(crate) enum Message {
    Op(Operation),
    /// Stop sentinel. Nothing is accepted after it.
    Stop,
}

/// The queue no longer accepts messages.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct Closed;

struct Inner {
    items: VecDeque<Message>,
    closed: bool,
}

/// Bounded blocking FIFO between posting callers and the single worker.
///
/// - `push` blocks while full, fails once closed
/// - `pop` blocks while empty, returns `None` once closed and drained
pub(crate) struct OpQueue {
    inner: Mutex<Inner>,
    not_empty: Condvar,
    not_full: Condvar,
    capacity: usize,
}

impl OpQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner: Mutex::new(Inner { items: VecDeque::with_capacity(capacity), closed: false }),
            not_empty: Condvar::new(),
            not_full: Condvar::new(),
            capacity,
        }
    }

    // Poisoning is ignored: every critical section leaves deque and flag consistent.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push(&self, op: Operation) -> Result<(), Closed> {
        self.enqueue(Message::Op(op), false)
    }

    /// Enqueues the stop sentinel behind everything already queued and closes
    /// the queue to new messages.
    pub fn close(&self) -> Result<(), Closed> {
        self.enqueue(Message::Stop, true)
    }

    fn enqueue(&self, message: Message, closing: bool) -> Result<(), Closed> {
        let mut inner = self.lock();
        loop {
            if inner.closed {
                return Err(Closed);
            }
            if inner.items.len() < self.capacity {
                break;
            }
            inner = self.not_full.wait(inner).unwrap_or_else(PoisonError::into_inner);
        }

        inner.items.push_back(message);
        if closing {
            inner.closed = true;
        }
        drop(inner);

        self.not_empty.notify_one();
        if closing {
            // Producers still waiting for space must observe the close.
            self.not_full.notify_all();
        }
        Ok(())
    }

    pub fn pop(&self) -> Option<Message> {
        let mut inner = self.lock();
        loop {
            if let Some(message) = inner.items.pop_front() {
                drop(inner);
                self.not_full.notify_one();
                return Some(message);
            }
            if inner.closed {
                return None;
            }
            inner = self.not_empty.wait(inner).unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Closes the queue and discards anything pending. Used when the worker
    /// goes away without draining.
    pub fn abandon(&self) -> usize {
        let mut inner = self.lock();
        inner.closed = true;
        let dropped = inner.items.len();
        inner.items.clear();
        drop(inner);

        self.not_empty.notify_all();
        self.not_full.notify_all();
        dropped
    }

    pub fn len(&self) -> usize {
        self.lock().items.len()
    }
}

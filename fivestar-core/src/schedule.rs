//! Deferred render coalescing.
//!
//! A dirty flag plus a next-turn flush: the first request in a turn
//! schedules one deferred task, later requests only observe the flag.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Work deferred to the host's next task turn.
pub type Task = Box<dyn FnOnce()>;

/// Defers a task to a later turn of the host's task queue. Implementations
/// must never run the task synchronously inside `schedule`.
pub trait Scheduler {
    fn schedule(&self, task: Task);
}

/// Pending-render flag.
#[derive(Debug, Default)]
pub struct RenderQueue {
    pending: Cell<bool>,
}

impl RenderQueue {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: Cell::new(false),
        }
    }

    /// Mark a render as wanted. Returns `true` only for the request that
    /// found the flag clear; that caller schedules the flush.
    pub fn request(&self) -> bool {
        !self.pending.replace(true)
    }

    /// Clear the flag at flush time. Returns whether a render was pending.
    pub fn take(&self) -> bool {
        self.pending.replace(false)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

/// Scheduler whose queue is drained explicitly.
#[derive(Default)]
pub struct ManualScheduler {
    tasks: RefCell<VecDeque<Task>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Run the tasks queued before this call. Tasks they schedule wait for
    /// the next call, as they would wait for the next turn.
    pub fn run_pending(&self) -> usize {
        let batch: Vec<Task> = self.tasks.borrow_mut().drain(..).collect();
        let ran = batch.len();
        for task in batch {
            task();
        }
        ran
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, task: Task) {
        self.tasks.borrow_mut().push_back(task);
    }
}

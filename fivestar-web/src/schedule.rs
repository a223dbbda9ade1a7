use fivestar_core::{Scheduler, Task};

use crate::dom;

/// Defers tasks to the next macrotask with `setTimeout(…, 0)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, task: Task) {
        if let Err(err) = dom::set_timeout_0(task) {
            dom::console_error(&format!(
                "Failed to schedule rating render: {}",
                dom::js_error_message(&err)
            ));
        }
    }
}

//! Ownership of cancellable timer tasks.
//!
//! A view keeps one `TimerSlot` per timer it runs. Arming a slot cancels
//! whatever it held before, so a slot never has more than one live task.

use dioxus::prelude::Task;

/// A handle to a running task that can be cancelled.
pub trait Cancel {
    fn cancel(self);
}

impl Cancel for Task {
    fn cancel(self) {
        Task::cancel(self);
    }
}

#[derive(Debug)]
pub struct TimerSlot<H: Cancel = Task> {
    handle: Option<H>,
}

impl<H: Cancel> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H: Cancel> TimerSlot<H> {
    pub fn arm(&mut self, handle: H) {
        self.cancel();
        self.handle = Some(handle);
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}

//! Delayed display continuations.
//!
//! The module never sleeps. Anything that should happen "a moment later"
//! comes back to the host as a [`ScheduledTask`] tagged with the session
//! generation it belongs to; the host fires it when the delay has passed.
//! [`TaskQueue`] is a small virtual-clock queue hosts and tests can use for
//! that bookkeeping.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeferredAction {
    /// Put the current question back on screen and accept input again.
    ShowQuestion,
    /// Blank the display.
    ClearScreen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub generation: u64,
    pub delay: Duration,
    pub action: DeferredAction,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    due: Duration,
    task: ScheduledTask,
}

/// Tasks ordered by due time on a virtual clock; equal due times fire in
/// scheduling order.
#[derive(Debug, Clone, Default)]
pub struct TaskQueue {
    now: Duration,
    pending: VecDeque<Pending>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, task: ScheduledTask) {
        let due = self.now + task.delay;
        let at = self.pending.iter().position(|p| p.due > due).unwrap_or(self.pending.len());
        self.pending.insert(at, Pending { due, task });
    }

    pub fn schedule_all(&mut self, tasks: impl IntoIterator<Item = ScheduledTask>) {
        for task in tasks {
            self.schedule(task);
        }
    }

    /// Move the clock forward and hand back every task that came due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<ScheduledTask> {
        self.now += elapsed;
        let mut due = Vec::new();
        while let Some(front) = self.pending.front() {
            if front.due > self.now {
                break;
            }
            if let Some(p) = self.pending.pop_front() {
                due.push(p.task);
            }
        }
        due
    }

    /// Time until the next task is due, if any.
    pub fn next_due_in(&self) -> Option<Duration> {
        self.pending.front().map(|p| p.due.saturating_sub(self.now))
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

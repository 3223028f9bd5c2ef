//! Deferred continuations on a simulated clock.
//!
//! Sessions never sleep. They queue an event with a delay, and the host drives
//! time forward with `tick(dt_ms)`. Each session owns its scheduler, so
//! dropping or resetting the session drops every pending continuation with it.
//!
//! Events are handed out one at a time with [`Scheduler::pop_due`] so that a
//! handler can queue follow-up events that still fall inside the same tick.

/// Handle for a queued event; pass it to [`Scheduler::cancel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug, Clone)]
struct Task<E> {
    id: TaskId,
    due_ms: u64,
    period_ms: Option<u64>,
    event: E,
}

#[derive(Debug, Clone)]
pub struct Scheduler<E> {
    now_ms: u64,
    next_id: u64,
    tasks: Vec<Task<E>>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Scheduler { now_ms: 0, next_id: 0, tasks: Vec::new() }
    }
}

impl<E: Clone> Scheduler<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulated milliseconds since this scheduler was created.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Fire `event` once, `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: u64, event: E) -> TaskId {
        self.push(delay_ms, None, event)
    }

    /// Fire `event` every `period_ms` until cancelled. A zero period is
    /// treated as 1 ms so the queue always makes progress.
    pub fn schedule_repeating(&mut self, period_ms: u64, event: E) -> TaskId {
        let period = period_ms.max(1);
        self.push(period, Some(period), event)
    }

    /// Drop a queued event. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    pub fn pending_count(&self) -> usize {
        self.tasks.len()
    }

    /// Take the earliest event due at or before `until_ms`, moving the clock
    /// to its due time. Ties fire in scheduling order.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<E> {
        let idx = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= until_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.id.0))
            .map(|(i, _)| i)?;

        let task = self.tasks.remove(idx);
        self.now_ms = self.now_ms.max(task.due_ms);
        if let Some(period) = task.period_ms {
            self.tasks.push(Task {
                id: task.id,
                due_ms: task.due_ms + period,
                period_ms: Some(period),
                event: task.event.clone(),
            });
        }
        Some(task.event)
    }

    /// Move the clock forward to `until_ms` once every due event was taken.
    pub fn advance_to(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }

    fn push(&mut self, delay_ms: u64, period_ms: Option<u64>, event: E) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task { id, due_ms: self.now_ms + delay_ms, period_ms, event });
        id
    }
}

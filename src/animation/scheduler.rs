use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Handle to a scheduled timer. Ids are never reused within a scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Single-threaded timer queue running on virtual time.
///
/// Nothing fires on its own: the owner drains due timers with [`pop_due`]
/// after moving time forward, so every callback runs on the caller's thread
/// and sees the deadline it was scheduled for as [`now`].
///
/// [`pop_due`]: Scheduler::pop_due
/// [`now`]: Scheduler::now
pub struct Scheduler<E> {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, TimerId), E>,
    deadlines: HashMap<TimerId, Duration>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Deadlines saturate at `Duration::MAX`.
    pub fn schedule(&mut self, delay: Duration, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let at = self.now.saturating_add(delay);
        self.queue.insert((at, id), event);
        self.deadlines.insert(id, at);
        id
    }

    /// Returns false if the timer already fired or was cancelled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.deadlines.remove(&id) {
            Some(at) => {
                self.queue.remove(&(at, id));
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.queue.len();
        self.queue.clear();
        self.deadlines.clear();
        cancelled
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|&(at, _)| at)
    }

    /// Pop the earliest timer due at or before `until`.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, E)> {
        let &(at, _) = self.queue.keys().next()?;
        if at > until {
            return None;
        }
        self.pop_next()
    }

    /// Pop the earliest timer regardless of its deadline, jumping time to it.
    pub fn pop_next(&mut self) -> Option<(TimerId, E)> {
        let ((at, id), event) = self.queue.pop_first()?;
        self.deadlines.remove(&id);
        self.now = self.now.max(at);
        Some((id, event))
    }

    /// Deadline `elapsed` from now, saturating like [`schedule`].
    ///
    /// [`schedule`]: Scheduler::schedule
    pub fn horizon(&self, elapsed: Duration) -> Duration {
        self.now.saturating_add(elapsed)
    }

    /// Move time forward to `until` once everything due has been drained.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

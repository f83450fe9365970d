//! Logical deferred-event timeline.
//!
//! Every animated component owns exactly one `Timeline`. Events are scheduled at absolute
//! offsets measured from mount and handed back, in fire order, by [`Timeline::drain_due`].
//! Tearing the owner down drops whatever has not fired yet; nothing scheduled afterwards
//! is ever delivered.

use std::{collections::BTreeMap, mem, time::Duration};

/// Cancellation handle returned by [`Timeline::schedule_at`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    due: Duration,
    seq: u64,
}

impl TimerHandle {
    pub fn due(&self) -> Duration {
        self.due
    }
}

#[derive(Debug)]
pub struct Timeline<E> {
    // Keyed by (due, insertion order) so ties fire in the order they were scheduled.
    pending: BTreeMap<(Duration, u64), E>,
    next_seq: u64,
    torn_down: bool,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self {
            pending: BTreeMap::new(),
            next_seq: 0,
            torn_down: false,
        }
    }
}

impl<E> Timeline<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` to fire at absolute time `due`.
    /// After teardown the event is dropped immediately and the handle cancels nothing.
    pub fn schedule_at(&mut self, due: Duration, event: E) -> TimerHandle {
        let handle = TimerHandle {
            due,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        if !self.torn_down {
            self.pending.insert((handle.due, handle.seq), event);
        }
        handle
    }

    /// Schedule `event` to fire `delay` after `now`.
    pub fn schedule(&mut self, now: Duration, delay: Duration, event: E) -> TimerHandle {
        self.schedule_at(now.saturating_add(delay), event)
    }

    /// Returns false if the event already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.pending.remove(&(handle.due, handle.seq)).is_some()
    }

    /// Drops every pending event. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    /// Cancel everything and refuse all future scheduling.
    pub fn teardown(&mut self) -> usize {
        self.torn_down = true;
        self.cancel_all()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Fire time of the earliest pending event.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(due, _)| *due)
    }

    /// Remove and return every event due at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: Duration) -> Vec<E> {
        if self.torn_down {
            return Vec::new();
        }
        let due = match now.checked_add(Duration::from_nanos(1)) {
            Some(cutoff) => {
                let later = self.pending.split_off(&(cutoff, 0));
                mem::replace(&mut self.pending, later)
            }
            None => mem::take(&mut self.pending),
        };
        due.into_values().collect()
    }

    /// Remove and return every pending event regardless of its fire time.
    pub fn drain_all(&mut self) -> Vec<E> {
        self.drain_due(Duration::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn events_fire_in_due_order() {
        let mut tl = Timeline::new();
        tl.schedule_at(ms(300), "c");
        tl.schedule_at(ms(100), "a");
        tl.schedule_at(ms(200), "b");

        assert_eq!(tl.next_due(), Some(ms(100)));
        assert!(tl.drain_due(ms(99)).is_empty());
        assert_eq!(tl.drain_due(ms(200)), vec!["a", "b"]);
        assert_eq!(tl.pending(), 1);
        assert_eq!(tl.drain_due(ms(10_000)), vec!["c"]);
        assert!(tl.is_idle());
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut tl = Timeline::new();
        for i in 0..5 {
            tl.schedule_at(ms(50), i);
        }
        assert_eq!(tl.drain_due(ms(50)), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn relative_schedule_adds_to_now() {
        let mut tl = Timeline::new();
        let handle = tl.schedule(ms(1_000), ms(250), ());
        assert_eq!(handle.due(), ms(1_250));
        assert_eq!(tl.next_due(), Some(ms(1_250)));
    }

    #[test]
    fn cancelled_event_never_fires() {
        let mut tl = Timeline::new();
        let keep = tl.schedule_at(ms(10), "keep");
        let drop = tl.schedule_at(ms(10), "drop");
        assert!(tl.cancel(drop));
        assert!(!tl.cancel(drop));
        assert_eq!(tl.drain_due(ms(10)), vec!["keep"]);
        assert!(!tl.cancel(keep));
    }

    #[test]
    fn teardown_drops_pending_and_future_events() {
        let mut tl = Timeline::new();
        tl.schedule_at(ms(10), 1);
        tl.schedule_at(ms(20), 2);
        assert_eq!(tl.teardown(), 2);

        tl.schedule_at(ms(5), 3);
        assert_eq!(tl.pending(), 0);
        assert!(tl.drain_due(ms(1_000)).is_empty());
        assert!(tl.is_torn_down());
    }

    #[test]
    fn drain_all_ignores_time() {
        let mut tl = Timeline::new();
        tl.schedule_at(Duration::MAX, "last");
        tl.schedule_at(ms(1), "first");
        assert_eq!(tl.drain_all(), vec!["first", "last"]);
    }
}

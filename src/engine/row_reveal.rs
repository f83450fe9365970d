//! Staged counter for list rows.

use std::time::Duration;

#[cfg(debug_assertions)]
use crate::config::DF;
use crate::engine::Timeline;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RowReveal {
    index: usize,
    at: Duration,
}

/// Reveals row `i` at `start + i * per_row_delay`. The count only ever goes up.
#[derive(Debug, Default)]
pub struct RowRevealCounter {
    row_count: usize,
    revealed: usize,
    // Fire time of each revealed row, used by the renderer for the fade-in.
    revealed_at: Vec<Duration>,
    started: bool,
    timeline: Timeline<RowReveal>,
}

impl RowRevealCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin revealing. Returns false if already started or torn down.
    pub fn start(&mut self, row_count: usize, per_row_delay: Duration, now: Duration) -> bool {
        if self.started || self.timeline.is_torn_down() {
            return false;
        }
        self.started = true;
        self.row_count = row_count;
        self.revealed_at.reserve(row_count);
        for index in 0..row_count {
            let offset = per_row_delay.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX));
            let at = now.saturating_add(offset);
            self.timeline.schedule_at(at, RowReveal { index, at });
        }
        true
    }

    /// Returns how many rows became visible.
    pub fn advance(&mut self, now: Duration) -> usize {
        let fired = self.timeline.drain_due(now);
        self.apply(&fired)
    }

    pub fn finish(&mut self) -> usize {
        let fired = self.timeline.drain_all();
        self.apply(&fired)
    }

    fn apply(&mut self, fired: &[RowReveal]) -> usize {
        let before = self.revealed;
        for reveal in fired {
            if self.revealed < self.row_count {
                self.revealed += 1;
                self.revealed_at.push(reveal.at);
                #[cfg(debug_assertions)]
                if DF.log_row_reveal {
                    log::info!("Row {} revealed at {:?}", reveal.index, reveal.at);
                }
            }
        }
        self.revealed - before
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    pub fn is_row_visible(&self, index: usize) -> bool {
        index < self.revealed
    }

    /// When row `index` became visible, if it has.
    pub fn revealed_at(&self, index: usize) -> Option<Duration> {
        self.revealed_at.get(index).copied()
    }

    /// Time the most recent row appeared.
    pub fn last_revealed_at(&self) -> Option<Duration> {
        self.revealed_at.last().copied()
    }

    pub fn is_complete(&self) -> bool {
        self.started && self.revealed == self.row_count
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.timeline.next_due()
    }

    pub fn teardown(&mut self) -> usize {
        self.timeline.teardown()
    }
}

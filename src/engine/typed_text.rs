//! Character-by-character text reveal.

use std::time::Duration;

#[cfg(debug_assertions)]
use crate::config::DF;
use crate::engine::Timeline;

/// One typed line. Character `i` appears at `start + i * char_interval` (absolute offsets,
/// all scheduled up front). Instances share nothing.
#[derive(Debug)]
pub struct TypedText {
    full_text: String,
    char_count: usize,
    revealed: usize,
    is_animating: bool,
    timeline: Timeline<usize>,
}

impl TypedText {
    /// Start typing `text` at `now`. Empty text is finished immediately with nothing scheduled.
    pub fn animate(text: impl Into<String>, char_interval: Duration, now: Duration) -> Self {
        let full_text = text.into();
        let char_count = full_text.chars().count();
        let mut timeline = Timeline::new();
        for index in 0..char_count {
            let offset = char_interval.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX));
            timeline.schedule_at(now.saturating_add(offset), index);
        }
        Self {
            full_text,
            char_count,
            revealed: 0,
            is_animating: char_count > 0,
            timeline,
        }
    }

    /// Append every character due by `now`. Returns true if the display changed.
    pub fn advance(&mut self, now: Duration) -> bool {
        let fired = self.timeline.drain_due(now);
        self.apply(&fired)
    }

    /// Reveal the rest of the text immediately.
    pub fn finish(&mut self) -> bool {
        let fired = self.timeline.drain_all();
        self.apply(&fired)
    }

    fn apply(&mut self, fired: &[usize]) -> bool {
        for &index in fired {
            self.revealed = self.revealed.max(index + 1).min(self.char_count);
            if index + 1 == self.char_count {
                self.is_animating = false;
                #[cfg(debug_assertions)]
                if DF.log_typed_text {
                    log::info!("Typed text complete: {:?}", self.full_text);
                }
            }
        }
        !fired.is_empty()
    }

    /// Swap in a fresh version of a finished line (e.g. the clock ticking over).
    /// Ignored while typing is still in progress or after teardown.
    pub fn settle_text(&mut self, text: &str) -> bool {
        if self.is_animating || self.timeline.is_torn_down() || self.full_text == text {
            return false;
        }
        self.full_text = text.to_string();
        self.char_count = self.full_text.chars().count();
        self.revealed = self.char_count;
        true
    }

    /// The currently visible prefix.
    pub fn displayed(&self) -> &str {
        match self.full_text.char_indices().nth(self.revealed) {
            Some((byte_index, _)) => &self.full_text[..byte_index],
            None => &self.full_text,
        }
    }

    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    pub fn pending(&self) -> usize {
        self.timeline.pending()
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.timeline.next_due()
    }

    pub fn teardown(&mut self) -> usize {
        self.timeline.teardown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const INTERVAL: Duration = Duration::from_millis(50);

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn empty_text_is_done_with_nothing_scheduled() {
        let text = TypedText::animate("", INTERVAL, Duration::ZERO);
        assert!(!text.is_animating());
        assert_eq!(text.pending(), 0);
        assert_eq!(text.displayed(), "");
        assert_eq!(text.next_due(), None);
    }

    #[test]
    fn first_char_appears_at_start_time() {
        let mut text = TypedText::animate("ETH", INTERVAL, ms(1_000));
        assert!(text.is_animating());
        assert_eq!(text.displayed(), "");
        assert!(text.advance(ms(1_000)));
        assert_eq!(text.displayed(), "E");
        assert!(!text.advance(ms(1_049)));
        assert!(text.advance(ms(1_050)));
        assert_eq!(text.displayed(), "ET");
    }

    #[test]
    fn completes_after_len_minus_one_intervals() {
        let mut text = TypedText::animate("Total", INTERVAL, Duration::ZERO);
        text.advance(ms(199));
        assert_eq!(text.displayed(), "Tota");
        assert!(text.is_animating());

        text.advance(ms(200));
        assert_eq!(text.displayed(), "Total");
        assert!(!text.is_animating());
        assert_eq!(text.pending(), 0);
    }

    #[test]
    fn multibyte_characters_are_never_split() {
        let mut text = TypedText::animate("Ξ→ok", INTERVAL, Duration::ZERO);
        text.advance(ms(50));
        assert_eq!(text.displayed(), "Ξ→");
        assert_eq!(text.char_count(), 4);
    }

    #[test]
    fn teardown_means_no_further_appends() {
        let mut text = TypedText::animate("address", INTERVAL, Duration::ZERO);
        assert_eq!(text.teardown(), 7);
        assert!(!text.advance(Duration::from_secs(10)));
        assert_eq!(text.displayed(), "");
        assert_eq!(text.revealed_len(), 0);
    }

    #[test]
    fn instances_are_independent() {
        let mut a = TypedText::animate("aaaa", INTERVAL, Duration::ZERO);
        let mut b = TypedText::animate("bbbb", INTERVAL, ms(100));
        a.advance(ms(100));
        b.advance(ms(100));
        assert_eq!(a.displayed(), "aaa");
        assert_eq!(b.displayed(), "b");
        a.teardown();
        b.advance(ms(250));
        assert_eq!(b.displayed(), "bbbb");
    }

    #[test]
    fn settle_only_after_finish() {
        let mut clock = TypedText::animate("02:05 PM", INTERVAL, Duration::ZERO);
        assert!(!clock.settle_text("02:06 PM"));
        clock.finish();
        assert!(clock.settle_text("02:06 PM"));
        assert_eq!(clock.displayed(), "02:06 PM");
        assert_eq!(clock.revealed_len(), clock.char_count());
        assert!(!clock.settle_text("02:06 PM"));
    }

    proptest! {
        #[test]
        fn prefix_never_runs_ahead_of_schedule(text in "[a-zA-Z0-9 $,.:]{0,40}", t in 0u64..3_000) {
            let mut typed = TypedText::animate(text.clone(), INTERVAL, Duration::ZERO);
            typed.advance(ms(t));
            let len = text.chars().count();
            // characters 0..=t/50 are due
            let expected = ((t / 50) as usize + 1).min(len);
            prop_assert_eq!(typed.revealed_len(), expected);
            prop_assert!(text.starts_with(typed.displayed()));
            prop_assert_eq!(typed.is_animating(), expected < len);

            // done by (L - 1) * interval
            typed.advance(INTERVAL * (len.saturating_sub(1) as u32));
            prop_assert_eq!(typed.displayed(), text.as_str());
            prop_assert!(!typed.is_animating());
        }
    }
}

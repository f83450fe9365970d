//! Staged reveal: a single monotonically increasing stage driven by an ordered schedule.

use std::time::Duration;

use anyhow::{Result, bail};

#[cfg(debug_assertions)]
use crate::config::DF;
use crate::config::{REVEAL, RevealConfig};
use crate::engine::Timeline;

pub type RevealStage = u32;

/// One transition: fire `delay` after the previous transition fired, then set `stage`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub stage: RevealStage,
    pub delay: Duration,
}

impl ScheduleEntry {
    pub const fn new(stage: RevealStage, delay: Duration) -> Self {
        Self { stage, delay }
    }
}

/// A transition that has fired, with the time it was due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageTransition {
    pub stage: RevealStage,
    pub at: Duration,
}

/// Ordered, immutable list of transitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealSchedule {
    entries: Vec<ScheduleEntry>,
}

impl RevealSchedule {
    /// Stages must start above 0 and strictly increase.
    pub fn new(entries: Vec<ScheduleEntry>) -> Result<Self> {
        if entries.is_empty() {
            bail!("reveal schedule has no entries");
        }
        let mut previous = 0;
        for entry in &entries {
            if entry.stage <= previous {
                bail!(
                    "reveal schedule stages must strictly increase from 0 (stage {} follows {})",
                    entry.stage,
                    previous
                );
            }
            previous = entry.stage;
        }
        Ok(Self { entries })
    }

    /// Default dashboard schedule for `wallet_count` wallet lines.
    pub fn for_wallets(wallet_count: usize) -> Self {
        Self::from_config(&REVEAL, wallet_count)
    }

    pub fn from_config(config: &RevealConfig, wallet_count: usize) -> Self {
        let wallets = u32::try_from(wallet_count).unwrap_or(u32::MAX / 2);
        let final_stage = config.stages_before_wallets + wallets + config.stages_after_wallets;
        let entries = (1..=final_stage)
            .map(|stage| {
                let delay = match stage {
                    1 => config.first_delay,
                    s if s <= 1 + config.clock_steps => config.clock_step,
                    _ => config.section_step,
                };
                ScheduleEntry::new(stage, delay)
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// N: the stage reached when the schedule has fully run.
    pub fn final_stage(&self) -> RevealStage {
        self.entries.last().map_or(0, |e| e.stage)
    }

    /// Absolute fire offsets: prefix sums of the relative delays.
    pub fn fire_times(&self) -> impl Iterator<Item = StageTransition> + '_ {
        self.entries.iter().scan(Duration::ZERO, |at, entry| {
            *at = at.saturating_add(entry.delay);
            Some(StageTransition {
                stage: entry.stage,
                at: *at,
            })
        })
    }

    /// Time from start until the final stage fires.
    pub fn total_duration(&self) -> Duration {
        self.entries
            .iter()
            .fold(Duration::ZERO, |acc, e| acc.saturating_add(e.delay))
    }
}

/// Owns the current stage of one presentation. Not restartable.
#[derive(Debug, Default)]
pub struct RevealSequencer {
    stage: RevealStage,
    final_stage: RevealStage,
    started: bool,
    timeline: Timeline<StageTransition>,
}

impl RevealSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin the single run. Returns false (and does nothing) if already started or torn down.
    pub fn start(&mut self, schedule: &RevealSchedule, now: Duration) -> bool {
        if self.started || self.timeline.is_torn_down() {
            log::warn!("Reveal sequencer already used; ignoring start request");
            return false;
        }
        self.started = true;
        self.final_stage = schedule.final_stage();
        for transition in schedule.fire_times() {
            let at = now.saturating_add(transition.at);
            self.timeline.schedule_at(
                at,
                StageTransition {
                    stage: transition.stage,
                    at,
                },
            );
        }
        true
    }

    /// Fire every transition due by `now`. Returns them in schedule order.
    pub fn advance(&mut self, now: Duration) -> Vec<StageTransition> {
        let fired = self.timeline.drain_due(now);
        self.apply(&fired);
        fired
    }

    /// Fire every remaining transition immediately.
    pub fn fast_forward(&mut self) -> Vec<StageTransition> {
        let fired = self.timeline.drain_all();
        self.apply(&fired);
        fired
    }

    fn apply(&mut self, fired: &[StageTransition]) {
        for transition in fired {
            self.stage = self.stage.max(transition.stage);
            #[cfg(debug_assertions)]
            if DF.log_stage_changes {
                log::info!(
                    "Reveal stage {} / {} at {:?}",
                    self.stage,
                    self.final_stage,
                    transition.at
                );
            }
        }
    }

    pub fn current_stage(&self) -> RevealStage {
        self.stage
    }

    pub fn final_stage(&self) -> RevealStage {
        self.final_stage
    }

    /// Visibility of a section gated at `threshold`.
    pub fn is_visible(&self, threshold: RevealStage) -> bool {
        self.stage >= threshold
    }

    pub fn is_complete(&self) -> bool {
        self.started && self.timeline.is_idle() && self.stage == self.final_stage
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.timeline.next_due()
    }

    pub fn pending(&self) -> usize {
        self.timeline.pending()
    }

    /// Cancel every pending transition. The stage stays where it is.
    pub fn teardown(&mut self) -> usize {
        self.timeline.teardown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn default_schedule_matches_dashboard_layout() {
        let schedule = RevealSchedule::for_wallets(2);
        assert_eq!(schedule.final_stage(), 8);
        let delays: Vec<_> = schedule.entries().iter().map(|e| e.delay).collect();
        assert_eq!(
            delays,
            vec![
                ms(100),
                ms(1_000),
                ms(1_000),
                ms(2_000),
                ms(2_000),
                ms(2_000),
                ms(2_000),
                ms(2_000),
            ]
        );
        assert_eq!(schedule.total_duration(), ms(12_100));
    }

    #[test]
    fn fire_times_are_prefix_sums() {
        let schedule = RevealSchedule::for_wallets(2);
        let times: Vec<_> = schedule.fire_times().map(|t| (t.stage, t.at)).collect();
        assert_eq!(times[0], (1, ms(100)));
        assert_eq!(times[1], (2, ms(1_100)));
        assert_eq!(times[2], (3, ms(2_100)));
        assert_eq!(times[3], (4, ms(4_100)));
        assert_eq!(times[7], (8, ms(12_100)));
    }

    #[test]
    fn rejects_bad_schedules() {
        assert!(RevealSchedule::new(vec![]).is_err());
        assert!(RevealSchedule::new(vec![ScheduleEntry::new(0, ms(1))]).is_err());
        assert!(
            RevealSchedule::new(vec![ScheduleEntry::new(2, ms(1)), ScheduleEntry::new(2, ms(1))])
                .is_err()
        );
        assert!(
            RevealSchedule::new(vec![ScheduleEntry::new(1, ms(1)), ScheduleEntry::new(3, ms(1))])
                .is_ok()
        );
    }

    #[test]
    fn reaches_final_stage_exactly_at_total_duration() {
        let schedule = RevealSchedule::for_wallets(2);
        let mut seq = RevealSequencer::new();
        assert!(seq.start(&schedule, Duration::ZERO));

        let total = schedule.total_duration();
        seq.advance(total - Duration::from_nanos(1));
        assert_eq!(seq.current_stage(), schedule.final_stage() - 1);
        assert!(!seq.is_complete());

        seq.advance(total);
        assert_eq!(seq.current_stage(), schedule.final_stage());
        assert!(seq.is_complete());
    }

    #[test]
    fn start_offset_shifts_every_transition() {
        let schedule = RevealSchedule::new(vec![
            ScheduleEntry::new(1, ms(100)),
            ScheduleEntry::new(2, ms(100)),
        ])
        .unwrap();
        let mut seq = RevealSequencer::new();
        seq.start(&schedule, ms(5_000));
        assert!(seq.advance(ms(5_099)).is_empty());
        let fired = seq.advance(ms(5_200));
        assert_eq!(
            fired,
            vec![
                StageTransition {
                    stage: 1,
                    at: ms(5_100),
                },
                StageTransition {
                    stage: 2,
                    at: ms(5_200),
                },
            ]
        );
    }

    #[test]
    fn cannot_restart() {
        let schedule = RevealSchedule::for_wallets(1);
        let mut seq = RevealSequencer::new();
        assert!(seq.start(&schedule, Duration::ZERO));
        seq.advance(Duration::from_secs(60));
        assert!(!seq.start(&schedule, Duration::from_secs(60)));
        assert_eq!(seq.pending(), 0);
        assert_eq!(seq.current_stage(), schedule.final_stage());
    }

    #[test]
    fn teardown_freezes_stage() {
        let schedule = RevealSchedule::for_wallets(2);
        let mut seq = RevealSequencer::new();
        seq.start(&schedule, Duration::ZERO);
        seq.advance(ms(1_100));
        assert_eq!(seq.current_stage(), 2);

        assert_eq!(seq.teardown(), 6);
        assert!(seq.advance(Duration::from_secs(3_600)).is_empty());
        assert_eq!(seq.current_stage(), 2);
        assert!(!seq.start(&schedule, Duration::ZERO));
    }

    #[test]
    fn teardown_before_first_fire_means_no_mutation() {
        let schedule = RevealSchedule::for_wallets(2);
        let mut seq = RevealSequencer::new();
        seq.start(&schedule, Duration::ZERO);
        seq.teardown();
        seq.advance(schedule.total_duration() * 2);
        assert_eq!(seq.current_stage(), 0);
        assert!(!seq.is_visible(1));
    }

    #[test]
    fn fast_forward_fires_everything_in_order() {
        let schedule = RevealSchedule::for_wallets(3);
        let mut seq = RevealSequencer::new();
        seq.start(&schedule, Duration::ZERO);
        let stages: Vec<_> = seq.fast_forward().iter().map(|t| t.stage).collect();
        assert_eq!(stages, (1..=9).collect::<Vec<_>>());
        assert!(seq.is_complete());
    }

    proptest! {
        #[test]
        fn stage_is_monotonic_and_never_early(
            delays in proptest::collection::vec(0u64..3_000, 1..12),
            probes in proptest::collection::vec(0u64..40_000, 1..40),
        ) {
            let entries = delays
                .iter()
                .enumerate()
                .map(|(i, d)| ScheduleEntry::new(i as u32 + 1, ms(*d)))
                .collect();
            let schedule = RevealSchedule::new(entries).unwrap();
            let total = schedule.total_duration();
            let final_stage = schedule.final_stage();

            let mut probes = probes;
            probes.sort_unstable();

            let mut seq = RevealSequencer::new();
            seq.start(&schedule, Duration::ZERO);
            let mut last = 0;
            for t in probes {
                let now = ms(t);
                seq.advance(now);
                let stage = seq.current_stage();
                prop_assert!(stage >= last);
                prop_assert!(stage <= final_stage);
                if now < total {
                    prop_assert!(stage < final_stage);
                }
                last = stage;
            }
            seq.advance(total);
            prop_assert_eq!(seq.current_stage(), final_stage);
        }
    }
}

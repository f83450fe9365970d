// src/app/state.rs

use std::time::Duration;

use chrono::{DateTime, TimeZone};

#[cfg(debug_assertions)]
use crate::config::DF;
use crate::{
    config::{ANIMATION, AnimationConfig, PLOT_CONFIG, SyntheticSeriesConfig},
    engine::{
        RevealSchedule, RevealSequencer, RevealStage, RowRevealCounter, StageTransition,
        TrimAnimation, TypedText,
    },
    geometry::DisplayWindow,
    models::{Portfolio, PriceSeries},
    ui::UI_TEXT,
    utils::{TimeUtils, ease_in_out, format_fixed, progress_fraction},
};

/// A stage-gated block of the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Date,
    Time,
    Wallet(usize),
    Chart,
    Totals,
    Table,
}

impl Section {
    /// Lowest stage at which the section is on screen.
    pub fn threshold(&self, wallet_count: usize) -> RevealStage {
        let wallets = wallet_count as RevealStage;
        match self {
            Self::Date => 1,
            Self::Time => 2,
            Self::Wallet(index) => 3 + *index as RevealStage,
            Self::Chart | Self::Totals => wallets + 3,
            Self::Table => wallets + 4,
        }
    }

    /// Every section in top-to-bottom screen order.
    pub fn all(wallet_count: usize) -> Vec<Section> {
        let mut sections = vec![Self::Date, Self::Time];
        sections.extend((0..wallet_count).map(Self::Wallet));
        sections.extend([Self::Chart, Self::Totals, Self::Table]);
        sections
    }

    /// Sections whose threshold is exactly `stage`.
    pub fn opened_at(stage: RevealStage, wallet_count: usize) -> Vec<Section> {
        Self::all(wallet_count)
            .into_iter()
            .filter(|s| s.threshold(wallet_count) == stage)
            .collect()
    }

    pub fn label(&self) -> String {
        match self {
            Self::Date => "Date".to_string(),
            Self::Time => "Time".to_string(),
            Self::Wallet(index) => format!("Wallet {}", index + 1),
            Self::Chart => "Chart".to_string(),
            Self::Totals => "Totals".to_string(),
            Self::Table => "Asset table".to_string(),
        }
    }
}

/// Which series the chart plots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartSource {
    /// The fixed portfolio history in the declared [1.0M, 1.4M] window.
    #[default]
    Portfolio,
    /// The generated series in a window of base price + noise range.
    Synthetic,
}

/// Values and window the chart is projected from.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    pub values: Vec<f64>,
    pub window: DisplayWindow,
}

impl ChartData {
    pub fn portfolio() -> Self {
        Self {
            values: PLOT_CONFIG.portfolio_points.to_vec(),
            window: DisplayWindow::new(PLOT_CONFIG.declared_min, PLOT_CONFIG.declared_max),
        }
    }

    pub fn synthetic(series: &PriceSeries, config: &SyntheticSeriesConfig) -> Self {
        let (lo, hi) = if config.noise_min <= config.noise_max {
            (config.noise_min, config.noise_max)
        } else {
            (config.noise_max, config.noise_min)
        };
        Self {
            values: series.values(),
            window: DisplayWindow::new(config.base_price + lo, config.base_price + hi),
        }
    }

    pub fn resolve(
        source: ChartSource,
        series: &PriceSeries,
        config: &SyntheticSeriesConfig,
    ) -> Self {
        match source {
            ChartSource::Portfolio => Self::portfolio(),
            ChartSource::Synthetic => Self::synthetic(series, config),
        }
    }
}

/// All animation state for one mount of the dashboard.
///
/// Time is logical: `now` is the elapsed time since mount. Components are started at the
/// scheduled time of the stage that opens them, not at the frame that noticed it, so frame
/// jitter never shifts the choreography.
pub struct Presentation {
    portfolio: Portfolio,
    history: PriceSeries,
    chart: ChartData,
    schedule: RevealSchedule,
    timings: &'static AnimationConfig,

    sequencer: RevealSequencer,
    date_line: Option<TypedText>,
    time_line: Option<TypedText>,
    wallet_lines: Vec<Option<TypedText>>,
    total_line: Option<TypedText>,
    asset_count_line: Option<TypedText>,
    trim: TrimAnimation,
    rows: RowRevealCounter,
    // set by fast_forward: revealed rows show at full opacity straight away
    skip_fades: bool,
    torn_down: bool,
}

impl Presentation {
    pub fn new(portfolio: Portfolio, history: PriceSeries, chart: ChartData) -> Self {
        let schedule = RevealSchedule::for_wallets(portfolio.wallet_count());
        Self::with_schedule(portfolio, history, chart, schedule, &ANIMATION)
    }

    pub fn with_schedule(
        portfolio: Portfolio,
        history: PriceSeries,
        chart: ChartData,
        schedule: RevealSchedule,
        timings: &'static AnimationConfig,
    ) -> Self {
        let wallet_lines = (0..portfolio.wallet_count()).map(|_| None).collect();
        Self {
            portfolio,
            history,
            chart,
            schedule,
            timings,
            sequencer: RevealSequencer::new(),
            date_line: None,
            time_line: None,
            wallet_lines,
            total_line: None,
            asset_count_line: None,
            trim: TrimAnimation::new(timings.trim_duration),
            rows: RowRevealCounter::new(),
            skip_fades: false,
            torn_down: false,
        }
    }

    /// Kick off the reveal sequence. Only the first call does anything.
    pub fn mount(&mut self, now: Duration) -> bool {
        if self.torn_down {
            return false;
        }
        self.sequencer.start(&self.schedule, now)
    }

    /// Fire everything due by `now`. Returns the stage transitions that fired this call.
    pub fn update<Tz: TimeZone>(
        &mut self,
        now: Duration,
        wall: &DateTime<Tz>,
    ) -> Vec<StageTransition>
    where
        Tz::Offset: std::fmt::Display,
    {
        if self.torn_down {
            return Vec::new();
        }
        let fired = self.sequencer.advance(now);
        for transition in &fired {
            self.open_sections(*transition, wall);
        }
        self.advance_components(now);
        self.follow_clock(wall);
        fired
    }

    /// Jump straight to the fully revealed end state.
    pub fn fast_forward<Tz: TimeZone>(&mut self, wall: &DateTime<Tz>) -> Vec<StageTransition>
    where
        Tz::Offset: std::fmt::Display,
    {
        if self.torn_down {
            return Vec::new();
        }
        let fired = self.sequencer.fast_forward();
        for transition in &fired {
            self.open_sections(*transition, wall);
        }
        for line in self.typed_lines_mut() {
            line.finish();
        }
        self.trim.finish();
        self.rows.finish();
        self.skip_fades = true;
        self.follow_clock(wall);
        fired
    }

    /// Start the animators of every section `transition` uncovers, timed from when it fired.
    fn open_sections<Tz: TimeZone>(&mut self, transition: StageTransition, wall: &DateTime<Tz>)
    where
        Tz::Offset: std::fmt::Display,
    {
        let StageTransition { stage, at } = transition;
        let interval = self.timings.char_interval;
        let wallet_count = self.portfolio.wallet_count();
        let reached = |section: Section| stage >= section.threshold(wallet_count);

        if reached(Section::Date) && self.date_line.is_none() {
            let date = TimeUtils::clock_date_string(wall);
            self.date_line = Some(TypedText::animate(date, interval, at));
        }
        if reached(Section::Time) && self.time_line.is_none() {
            let time = TimeUtils::clock_time_string(wall);
            self.time_line = Some(TypedText::animate(time, interval, at));
        }
        for index in 0..wallet_count {
            if reached(Section::Wallet(index)) && self.wallet_lines[index].is_none() {
                let address = self.portfolio.wallets[index].address.clone();
                self.wallet_lines[index] = Some(TypedText::animate(address, interval, at));
            }
        }
        if reached(Section::Chart) {
            self.trim.start(at);
        }
        if reached(Section::Totals) && self.total_line.is_none() {
            let total = format!(
                "{} ${}",
                UI_TEXT.label_total_value,
                format_fixed(self.portfolio.total_value, 2)
            );
            let count = format!("{} {}", self.portfolio.asset_count(), UI_TEXT.label_assets);
            self.total_line = Some(TypedText::animate(total, interval, at));
            self.asset_count_line = Some(TypedText::animate(count, interval, at));
        }
        if reached(Section::Table) {
            self.rows.start(self.portfolio.asset_count(), self.timings.row_delay, at);
        }
    }

    fn advance_components(&mut self, now: Duration) {
        for line in self.typed_lines_mut() {
            line.advance(now);
        }
        self.trim.advance(now);
        self.rows.advance(now);
    }

    /// Finished clock lines track the live clock.
    fn follow_clock<Tz: TimeZone>(&mut self, wall: &DateTime<Tz>)
    where
        Tz::Offset: std::fmt::Display,
    {
        if let Some(line) = &mut self.date_line {
            line.settle_text(&TimeUtils::clock_date_string(wall));
        }
        if let Some(line) = &mut self.time_line {
            line.settle_text(&TimeUtils::clock_time_string(wall));
        }
    }

    fn typed_lines_mut(&mut self) -> impl Iterator<Item = &mut TypedText> {
        self.date_line
            .iter_mut()
            .chain(self.time_line.iter_mut())
            .chain(self.wallet_lines.iter_mut().flatten())
            .chain(self.total_line.iter_mut())
            .chain(self.asset_count_line.iter_mut())
    }

    fn typed_lines(&self) -> impl Iterator<Item = &TypedText> {
        self.date_line
            .iter()
            .chain(self.time_line.iter())
            .chain(self.wallet_lines.iter().flatten())
            .chain(self.total_line.iter())
            .chain(self.asset_count_line.iter())
    }

    /// Earliest logical time anything changes on screen. `Some(now)` while a continuous
    /// animation (chart trim, row fade) is running.
    pub fn next_wake(&self, now: Duration) -> Option<Duration> {
        if self.torn_down {
            return None;
        }
        if self.trim.is_running() || self.is_row_fading(now) {
            return Some(now);
        }
        std::iter::once(self.sequencer.next_due())
            .chain(self.typed_lines().map(TypedText::next_due))
            .chain(std::iter::once(self.rows.next_due()))
            .flatten()
            .min()
    }

    fn is_row_fading(&self, now: Duration) -> bool {
        !self.skip_fades
            && self
                .rows
                .last_revealed_at()
                .is_some_and(|at| now < at.saturating_add(self.timings.row_fade))
    }

    /// Fade-in opacity of asset row `index` (0.0 while hidden).
    pub fn row_opacity(&self, index: usize, now: Duration) -> f32 {
        match self.rows.revealed_at(index) {
            Some(_) if self.skip_fades => 1.0,
            Some(at) => {
                ease_in_out(progress_fraction(now.saturating_sub(at), self.timings.row_fade))
            }
            None => 0.0,
        }
    }

    /// Nothing left to fire or draw.
    pub fn is_settled(&self) -> bool {
        self.sequencer.is_complete()
            && self.typed_lines().all(|l| !l.is_animating())
            && self.trim.is_complete()
            && self.rows.is_complete()
    }

    /// Cancel every pending timer. Later updates are no-ops.
    pub fn teardown(&mut self) -> usize {
        if self.torn_down {
            return 0;
        }
        self.torn_down = true;
        let mut cancelled = self.sequencer.teardown() + self.rows.teardown();
        for line in self.typed_lines_mut() {
            cancelled += line.teardown();
        }
        self.trim.teardown();
        #[cfg(debug_assertions)]
        if DF.log_timeline {
            log::info!("Dashboard torn down; {} pending timers cancelled", cancelled);
        }
        cancelled
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.sequencer
            .is_visible(section.threshold(self.portfolio.wallet_count()))
    }

    pub fn stage(&self) -> RevealStage {
        self.sequencer.current_stage()
    }

    pub fn final_stage(&self) -> RevealStage {
        self.schedule.final_stage()
    }

    pub fn schedule(&self) -> &RevealSchedule {
        &self.schedule
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn history(&self) -> &PriceSeries {
        &self.history
    }

    pub fn chart(&self) -> &ChartData {
        &self.chart
    }

    pub fn trim_fraction(&self) -> f32 {
        self.trim.fraction()
    }

    pub fn rows(&self) -> &RowRevealCounter {
        &self.rows
    }

    pub fn date_line(&self) -> Option<&TypedText> {
        self.date_line.as_ref()
    }

    pub fn time_line(&self) -> Option<&TypedText> {
        self.time_line.as_ref()
    }

    pub fn wallet_line(&self, index: usize) -> Option<&TypedText> {
        self.wallet_lines.get(index).and_then(Option::as_ref)
    }

    pub fn total_line(&self) -> Option<&TypedText> {
        self.total_line.as_ref()
    }

    pub fn asset_count_line(&self) -> Option<&TypedText> {
        self.asset_count_line.as_ref()
    }
}

impl Drop for Presentation {
    fn drop(&mut self) {
        self.teardown();
    }
}

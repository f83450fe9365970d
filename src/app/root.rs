use std::time::Duration;

use eframe::{Frame, egui::Context};

#[cfg(debug_assertions)]
use crate::config::DF;
use crate::{
    Cli,
    app::{ChartData, MountClock, Presentation},
    config::DEMO,
    models::{Portfolio, PriceSeries},
    ui::{Background, ChartView, render_dashboard, setup_custom_visuals},
    utils::TimeUtils,
};

/// Longest gap between two frames once nothing is animating; keeps the live clock current.
const CLOCK_TICK: Duration = Duration::from_secs(1);

pub struct App {
    presentation: Presentation,
    clock: MountClock,
    chart_view: ChartView,
    background: Background,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let mut rng = args.rng();
        let wall = TimeUtils::now_local();
        let history = PriceSeries::synthetic(&DEMO.synthetic, wall, &mut rng);
        let chart = ChartData::resolve(args.chart_source(), &history, &DEMO.synthetic);
        let chart_view = ChartView::new(&chart, &history);
        let background = Background::generate(&mut rng);

        let mut presentation = Presentation::new(Portfolio::demo(), history, chart);
        presentation.mount(Duration::ZERO);
        if args.skip_intro {
            presentation.fast_forward(&wall);
        }

        #[cfg(debug_assertions)]
        if DF.log_startup {
            log::info!(
                "Mounted dashboard: {} wallets, {} assets, {} chart points, {} stages over {:?} at {}x{}",
                presentation.portfolio().wallet_count(),
                presentation.portfolio().asset_count(),
                presentation.chart().values.len(),
                presentation.final_stage(),
                presentation.schedule().total_duration(),
                args.speed,
                if args.skip_intro { " (intro skipped)" } else { "" },
            );
            if let Some((low, high)) = presentation.history().bounds() {
                log::info!("History range {:.2} .. {:.2}", low, high);
            }
        }

        Self {
            presentation,
            clock: MountClock::start(args.speed),
            chart_view,
            background,
        }
    }

    /// Ask egui to come back when the next timer is due, scaled back into wall time.
    fn schedule_repaint(&self, ctx: &Context, now: Duration) {
        let delay = match self.presentation.next_wake(now) {
            Some(due) => self.clock.to_real(due.saturating_sub(now)).min(CLOCK_TICK),
            None => CLOCK_TICK,
        };
        if delay.is_zero() {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(delay);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = self.clock.now();
        let wall = TimeUtils::now_local();
        self.presentation.update(now, &wall);
        render_dashboard(
            ctx,
            &self.presentation,
            &mut self.chart_view,
            &self.background,
            now,
        );
        self.schedule_repaint(ctx, now);
    }
}

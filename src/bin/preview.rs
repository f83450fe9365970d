//! Headless run of the reveal sequence on a virtual clock, printed as text tables.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use tabled::{Table, Tabled, settings::Style};
use terminal_crypto::{
    Cli, Presentation,
    app::{ChartData, MountClock, Section},
    config::{ANIMATION, DEMO},
    models::{AssetColumn, Portfolio, PriceSeries},
    utils::{TimeUtils, format_fixed, time_utils::format_elapsed},
};

#[derive(Tabled)]
struct StageRow {
    #[tabled(rename = "Stage")]
    stage: u32,
    #[tabled(rename = "At")]
    at: String,
    #[tabled(rename = "Opens")]
    opens: String,
}

#[derive(Tabled)]
struct PointRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct AssetView {
    #[tabled(rename = "Asset")]
    asset: String,
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Value")]
    value: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Cli::parse();
    args.validate().context("invalid arguments")?;

    let clock = MountClock::start(args.speed);
    let wall = TimeUtils::now_local();
    let mut rng = args.rng();
    let history = PriceSeries::synthetic(&DEMO.synthetic, wall, &mut rng);
    let chart = ChartData::resolve(args.chart_source(), &history, &DEMO.synthetic);
    let mut presentation = Presentation::new(Portfolio::demo(), history, chart);
    let wallet_count = presentation.portfolio().wallet_count();

    presentation.mount(Duration::ZERO);
    let mut fired = Vec::new();
    if args.skip_intro {
        fired.extend(presentation.fast_forward(&wall));
    } else {
        // step at the typing rate until everything has settled
        let limit = presentation.schedule().total_duration() + Duration::from_secs(10);
        let mut now = Duration::ZERO;
        while !presentation.is_settled() && now <= limit {
            fired.extend(presentation.update(now, &wall));
            now += ANIMATION.char_interval;
        }
    }

    let stages: Vec<StageRow> = fired
        .iter()
        .map(|t| StageRow {
            stage: t.stage,
            at: format_elapsed(clock.to_real(t.at)),
            opens: Section::opened_at(t.stage, wallet_count)
                .iter()
                .map(Section::label)
                .join(", "),
        })
        .collect();
    print_table("Reveal timeline", stages);

    let points: Vec<PointRow> = presentation
        .history()
        .points()
        .iter()
        .map(|p| PointRow {
            time: p.timestamp.format(TimeUtils::STANDARD_TIME_FORMAT).to_string(),
            value: format_fixed(p.value, 2),
        })
        .collect();
    print_table("Synthetic series", points);
    if let Some((low, high)) = presentation.history().bounds() {
        println!("Observed range {} .. {}", format_fixed(low, 2), format_fixed(high, 2));
    }

    let assets: Vec<AssetView> = presentation
        .portfolio()
        .assets
        .iter()
        .map(|row| AssetView {
            asset: AssetColumn::Asset.cell(row),
            quantity: AssetColumn::Quantity.cell(row),
            price: AssetColumn::Price.cell(row),
            value: AssetColumn::Value.cell(row),
        })
        .collect();
    print_table("Assets", assets);

    let lines = [presentation.total_line(), presentation.asset_count_line()];
    for line in lines.into_iter().flatten() {
        println!("{}", line.displayed());
    }
    println!(
        "Final stage {} / {}, settled: {}",
        presentation.stage(),
        presentation.final_stage(),
        presentation.is_settled()
    );
    Ok(())
}

fn print_table<T: Tabled>(title: &str, rows: Vec<T>) {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("\n{}\n{}", title, table);
}

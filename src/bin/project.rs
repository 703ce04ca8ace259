//! Run a single projection from the command line
//!
//! Writes the monthly series to CSV and optionally the chart as SVG

use anyhow::Context;
use clap::Parser;
use portfolio_projection::allocation::Asset;
use portfolio_projection::format::{format_percent, format_thousands};
use portfolio_projection::projection::{
    compute, ProjectionInput, DEFAULT_PLOT_HEIGHT, DEFAULT_RATE_A, DEFAULT_RATE_B, DEFAULT_RATE_C,
    DEFAULT_TOTAL_MONTHLY, DEFAULT_YEARS,
};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "project", about = "Project a three-asset monthly contribution plan")]
struct Args {
    /// Total contribution per month
    #[arg(long, default_value_t = DEFAULT_TOTAL_MONTHLY)]
    total_monthly: u64,

    /// Horizon in years
    #[arg(long, default_value_t = DEFAULT_YEARS)]
    years: u32,

    /// Annual return for asset A (2330), percent
    #[arg(long, default_value_t = DEFAULT_RATE_A, allow_negative_numbers = true)]
    rate_a: f64,

    /// Annual return for asset B (0050), percent
    #[arg(long, default_value_t = DEFAULT_RATE_B, allow_negative_numbers = true)]
    rate_b: f64,

    /// Annual return for asset C (00770), percent
    #[arg(long, default_value_t = DEFAULT_RATE_C, allow_negative_numbers = true)]
    rate_c: f64,

    /// Chart height in inches
    #[arg(long, default_value_t = DEFAULT_PLOT_HEIGHT)]
    plot_height: f64,

    /// Monthly series output
    #[arg(long, default_value = "projection_output.csv")]
    output: PathBuf,

    /// Also write the chart as SVG
    #[arg(long)]
    chart: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let input = ProjectionInput {
        total_monthly: args.total_monthly,
        years: args.years,
        rate_a: args.rate_a,
        rate_b: args.rate_b,
        rate_c: args.rate_c,
        plot_height: args.plot_height,
    };
    input.validate()?;

    let start = Instant::now();
    let result = compute(&input).context("projection failed")?;
    log::info!("Projected {} months in {:?}", input.months(), start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("cannot create {}", args.output.display()))?;
    for row in result.projection.series.rows() {
        writer.serialize(row)?;
    }
    writer.flush()?;
    log::info!("Monthly series written to {}", args.output.display());

    if let Some(path) = &args.chart {
        fs::write(path, result.chart.svg())
            .with_context(|| format!("cannot write {}", path.display()))?;
        log::info!("Chart written to {}", path.display());
    }

    let summary = &result.projection.summary;
    log::info!("Summary over {} years:", input.years);
    for asset in Asset::ALL {
        let line = summary.asset(asset);
        log::info!(
            "  {:<40} {:>10}/month  final {:>14}",
            line.label,
            format_thousands(line.monthly_contribution as f64),
            format_thousands(line.final_value)
        );
    }
    log::info!("  Monthly total:   {}", format_thousands(summary.monthly_total as f64));
    log::info!("  Total invested:  {}", format_thousands(summary.total_invested as f64));
    log::info!("  Total assets:    {}", format_thousands(summary.total_asset));
    log::info!("  Total profit:    {}", format_thousands(summary.total_profit));
    log::info!("  Profit rate:     {}%", format_percent(summary.profit_rate));

    Ok(())
}

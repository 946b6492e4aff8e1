//! Convert an amount between two months using the monthly inflation table
//!
//! Example: `convert --amount 100 --from 2017-01 --to 2017-04 --timeline`

use anyhow::{Context, Result};
use clap::Parser;
use inflation_calculator::format::{
    format_currency_with, format_percentage, purchasing_power_sentence,
};
use inflation_calculator::{sweep, CalculatorConfig, CompoundingRequest, DateCursor, Timeline};
use log::info;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "convert",
    about = "Purchasing-power equivalent of an amount between two months"
)]
struct Args {
    /// Amount at the starting month
    #[arg(long, allow_hyphen_values = true)]
    amount: f64,

    /// Starting month, YYYY-MM
    #[arg(long)]
    from: DateCursor,

    /// Target month, YYYY-MM
    #[arg(long)]
    to: DateCursor,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV of year,month,rate rows (overrides the config)
    #[arg(long)]
    rates: Option<PathBuf>,

    /// Print the month-by-month timeline
    #[arg(long)]
    timeline: bool,

    /// Write the timeline to a CSV file
    #[arg(long)]
    timeline_csv: Option<PathBuf>,

    /// Print the result and timeline as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Value of the amount at `--to` for every observed starting month
    #[arg(long)]
    sweep: bool,
}

/// Flat timeline row for CSV output
#[derive(Debug, Serialize)]
struct TimelineRow {
    date: String,
    month_year: String,
    amount: f64,
    monthly_inflation: f64,
    cumulative_inflation: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => CalculatorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CalculatorConfig::default(),
    };
    if args.rates.is_some() {
        config.rates_csv = args.rates.clone();
    }
    config.timeline |= args.timeline;

    let table = config.rate_table().context("Failed to load rate table")?;
    info!("Using {} monthly rates", table.len());

    let request = CompoundingRequest::new(args.amount, args.from, args.to)
        .context("Cannot compute a result for this input")?;
    let result = request.compound(&table);
    let timeline = request.timeline(&table);

    if let Some(path) = &args.timeline_csv {
        write_timeline_csv(path, &timeline)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Timeline written to {}", path.display());
    }

    if args.json {
        let output = serde_json::json!({
            "request": request,
            "result": result,
            "timeline": timeline,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let symbol = config.currency_symbol.as_str();
    println!(
        "Equivalent value: {}",
        format_currency_with(result.final_amount, symbol)
    );
    println!(
        "Total inflation:  {}",
        format_percentage(result.total_change_percent)
    );
    println!("Calculated over {} months", result.months_applied);
    let summary =
        purchasing_power_sentence(request.amount(), request.from(), request.to(), &result, symbol);
    println!("{}", summary);

    if config.timeline {
        print_timeline(&timeline, symbol);
    }

    if args.sweep {
        let rows = sweep(&table, args.amount, args.to)?;
        println!("\nValue in {} by starting month:", args.to.label());
        println!("{:<8} {:>20} {:>12} {:>7}", "From", "Equivalent", "Change", "Months");
        for (from, row) in rows {
            println!(
                "{:<8} {:>20} {:>12} {:>7}",
                from.to_string(),
                format_currency_with(row.final_amount, symbol),
                format_percentage(row.total_change_percent),
                row.months_applied
            );
        }
    }

    Ok(())
}

fn print_timeline(timeline: &Timeline, symbol: &str) {
    if !timeline.is_plottable() {
        println!("\nNothing to plot for this range");
        return;
    }
    println!("\n{:<16} {:>20} {:>10} {:>12}", "Month", "Amount", "Monthly", "Cumulative");
    for step in timeline {
        println!(
            "{:<16} {:>20} {:>10} {:>12}",
            step.cursor.label(),
            format_currency_with(step.amount, symbol),
            format_percentage(step.step_rate_percent),
            format_percentage(step.cumulative_change_percent)
        );
    }
}

fn write_timeline_csv(path: &Path, timeline: &Timeline) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for step in timeline {
        writer.serialize(TimelineRow {
            date: step.cursor.to_string(),
            month_year: step.cursor.label(),
            amount: step.amount,
            monthly_inflation: step.step_rate_percent,
            cumulative_inflation: step.cumulative_change_percent,
        })?;
    }
    writer.flush()?;
    Ok(())
}

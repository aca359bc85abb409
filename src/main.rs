//! Command line front end: loads a NASA POWER daily CSV once and prints the JSON
//! description of one dashboard view.
//!
//! Usage:
//!   climate-dashboard --data POWER_Point_Daily.csv --view overview --window 5
//!   climate-dashboard --config dashboard.json --view monthly --month Jul --pretty
//!   climate-dashboard --list-views

use anyhow::{Context, Result};
use clap::Parser;
use climate_dashboard::{
    CalendarMonth, ClimateDashboard, DashboardConfig, RollingWindow, StartEndDate, View, ViewParams,
};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "climate-dashboard", version, about = "Describe climate dashboard views from NASA POWER daily data")]
struct Args {
    /// JSON config file. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Daily POWER CSV to read.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Number of preamble lines before the CSV header.
    #[arg(long)]
    skip_rows: Option<usize>,

    /// First day (or year) to analyse, e.g. 2005 or 2005-03-01.
    #[arg(long)]
    from: Option<String>,

    /// Last day (or year) to analyse.
    #[arg(long)]
    to: Option<String>,

    /// View to describe, by name or slug.
    #[arg(long, default_value = "overview")]
    view: String,

    /// Rolling trend window in years: 3, 5 or 10.
    #[arg(long, default_value_t = 3)]
    window: usize,

    /// Month for the monthly trends view.
    #[arg(long, default_value = "Jan")]
    month: String,

    /// Print every aggregate table instead of a view.
    #[arg(long)]
    aggregates: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,

    /// List the available views and exit.
    #[arg(long)]
    list_views: bool,
}

fn to_json(value: &impl serde::Serialize, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();
    let args = Args::parse();

    if args.list_views {
        for view in View::ALL {
            println!("{:<20} {}", view.slug(), view.title());
        }
        return Ok(());
    }

    let view: View = args.view.parse()?;
    let params = ViewParams {
        rolling_window: RollingWindow::try_from(args.window)?,
        month: args.month.parse::<CalendarMonth>()?,
    };

    let config = match &args.config {
        Some(path) => DashboardConfig::from_json_file(path)?,
        None => DashboardConfig::default(),
    };

    let dashboard = ClimateDashboard::load()
        .config(config)
        .maybe_data_path(args.data)
        .maybe_preamble_lines(args.skip_rows)
        .maybe_period(StartEndDate::from_bounds(args.from, args.to)?)
        .call()
        .context("Failed to load the climate dataset")?;

    let output = if args.aggregates {
        to_json(dashboard.aggregates(), args.pretty)?
    } else {
        info!("Rendering view '{}'", view);
        to_json(&dashboard.view(view, &params), args.pretty)?
    };
    println!("{output}");
    Ok(())
}

//! # Prayer Times Application Entry Point
//!
//! Command-line front end: reads the config file, lets flags override any of
//! its values, computes one or more days and prints them as a table or as
//! JSON.


use anyhow::Context;
use chrono::{Datelike, Local};
use clap::Parser;
use std::path::PathBuf;

use prayer_times_lib::config::{Config, CONFIG_FILE};
use prayer_times_lib::renderer::{draw_table, render_json};
use prayer_times_lib::schedule::{schedule, start_date};
use prayer_times_lib::Method;

/// Islamic prayer times for a place and a run of days.
#[derive(Debug, Parser)]
#[command(name = "prayer-times", version, about)]
struct Cli {
    /// Year of the first day [default: today]
    #[arg(long, allow_hyphen_values = true)]
    year: Option<i32>,

    /// Month of the first day, 1-12 [default: today]
    #[arg(long)]
    month: Option<u32>,

    /// Day of the first day, 1-31 [default: today]
    #[arg(long)]
    day: Option<u32>,

    /// Hours from UTC, e.g. 7 or -5 or 5.5
    #[arg(long, allow_hyphen_values = true)]
    timezone: Option<f64>,

    /// Daylight-saving hours in effect
    #[arg(long, allow_hyphen_values = true)]
    dst: Option<f64>,

    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude in degrees, east positive
    #[arg(long = "long", allow_hyphen_values = true)]
    longitude: Option<f64>,

    /// Elevation in metres
    #[arg(long, allow_hyphen_values = true)]
    elevation: Option<f64>,

    /// Number of consecutive days
    #[arg(long, default_value_t = 1)]
    n: u32,

    /// Show sunrise, sunset and midnight as well
    #[arg(long)]
    detailed: bool,

    /// Calculation method: mwl, isna, egypt, makkah, karachi, tehran, jafari, indonesia
    #[arg(long)]
    method: Option<Method>,

    /// Minutes added to every time
    #[arg(long, allow_hyphen_values = true)]
    tune: Option<f64>,

    /// Config file
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Fold command-line overrides into the loaded configuration.
    fn apply(&self, config: &mut Config) {
        let location = &mut config.location;
        if let Some(lat) = self.lat {
            location.latitude = lat;
        }
        if let Some(lng) = self.longitude {
            location.longitude = lng;
        }
        if let Some(elevation) = self.elevation {
            location.elevation = elevation;
        }
        if let Some(timezone) = self.timezone {
            location.timezone = timezone;
        }
        if let Some(dst) = self.dst {
            location.dst = dst;
        }

        let calculation = &mut config.calculation;
        if let Some(method) = self.method {
            calculation.method = method;
        }
        if let Some(tune) = self.tune {
            calculation.tune = tune;
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut config = Config::load_from_path(&cli.config);
    cli.apply(&mut config);

    let today = Local::now().date_naive();
    let year = cli.year.unwrap_or(today.year());
    let month = cli.month.unwrap_or(today.month());
    let day = cli.day.unwrap_or(today.day());
    let start = start_date(year, month, day).context("bad --year/--month/--day")?;

    let days = schedule(
        &config.engine(),
        start,
        cli.n,
        &config.location(),
        config.zone(),
    );

    if cli.json {
        println!("{}", render_json(&days).context("failed to encode times as JSON")?);
    } else {
        draw_table(&days, cli.detailed);
    }

    Ok(())
}

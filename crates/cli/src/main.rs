// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod output;

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use color_eyre::{Result, eyre::Context};
use cto_planner_api::{
    CompanyDayInput, HolidayInput, OptimizeRequest, OptimizeResponse, optimize_request,
    parse_company_days_csv, parse_company_days_json, parse_holidays_csv, parse_holidays_json,
};
use time::{Date, OffsetDateTime};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // RUST_LOG wins over the verbosity flag
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.log_level().into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Plan CTO days around weekends, public holidays and company days off
#[derive(Debug, Parser)]
#[command(name = "cto-planner", author, version, about, long_about = None)]
struct Args {
    /// Number of CTO days to place
    #[arg(short = 'n', long = "days", allow_negative_numbers = true)]
    days: i32,

    /// Strategy: balanced, mini-breaks, long-weekends, week-long-breaks, extended-vacations
    #[arg(short, long)]
    strategy: Option<String>,

    /// Target year (defaults to the year of --today)
    #[arg(short, long)]
    year: Option<i32>,

    /// Current date as YYYY-MM-DD (defaults to the system date, UTC)
    #[arg(long)]
    today: Option<String>,

    /// Public holidays file (`.json`, or CSV with `date,name` columns)
    #[arg(long)]
    holidays: Option<PathBuf>,

    /// Company days off file (`.json`, or CSV with `name` and `date` or
    /// `weekday,start_date,end_date` columns)
    #[arg(long)]
    company_days: Option<PathBuf>,

    /// Weekend weekday indices, 0 = Sunday (e.g. `0,6`)
    #[arg(long, value_delimiter = ',')]
    weekend: Option<Vec<u8>>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Breaks and statistics as plain text
    Text,
    /// The full response as pretty-printed JSON
    Json,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn run(self) -> Result<()> {
        let holidays: Vec<HolidayInput> = match &self.holidays {
            Some(path) => read_holidays(path)?,
            None => Vec::new(),
        };
        let company_days_off: Vec<CompanyDayInput> = match &self.company_days {
            Some(path) => read_company_days(path)?,
            None => Vec::new(),
        };
        info!(
            holidays = holidays.len(),
            company_days_off = company_days_off.len(),
            "Calendars loaded"
        );

        let request: OptimizeRequest = OptimizeRequest {
            number_of_days: self.days,
            strategy: self.strategy,
            year: self.year,
            today: self.today,
            holidays,
            company_days_off,
            weekend_days: self.weekend,
        };

        let clock: Date = OffsetDateTime::now_utc().date();
        let response: OptimizeResponse =
            optimize_request(&request, clock).wrap_err("Failed to plan CTO days")?;

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
            OutputFormat::Text => print!("{}", output::render_text(&response)),
        }
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn read_file(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "Reading calendar file");
    std::fs::read_to_string(path).wrap_err_with(|| format!("Failed to read {}", path.display()))
}

fn read_holidays(path: &Path) -> Result<Vec<HolidayInput>> {
    let content: String = read_file(path)?;
    let holidays: Vec<HolidayInput> = if is_json(path) {
        parse_holidays_json(&content)
    } else {
        parse_holidays_csv(&content)
    }
    .wrap_err_with(|| format!("Invalid holidays file {}", path.display()))?;
    Ok(holidays)
}

fn read_company_days(path: &Path) -> Result<Vec<CompanyDayInput>> {
    let content: String = read_file(path)?;
    let entries: Vec<CompanyDayInput> = if is_json(path) {
        parse_company_days_json(&content)
    } else {
        parse_company_days_csv(&content)
    }
    .wrap_err_with(|| format!("Invalid company days file {}", path.display()))?;
    Ok(entries)
}

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for inspection priority ranking and dashboard analytics.
//!
//! Reads water body, facility and sensor collections from JSON files,
//! runs them through the priority engine and prints the result to stdout.

mod input;

use std::path::PathBuf;

use chrono::Datelike as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use hydro_map_facility_models::{ObjectKind, TechnicalCondition};
use hydro_map_priority::export::{export_csv, export_json};
use hydro_map_priority::{apply_filter, rank_objects, sort_ranked};
use hydro_map_priority_models::{LevelFilter, PriorityConfig, PriorityFilter, SortKey};

#[derive(Parser)]
#[command(name = "hydro_map", about = "Inspection priority tool")]
struct Cli {
    /// TOML config file (default passport age, unknown region label)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Year used to compute passport ages (defaults to the current year)
    #[arg(long, global = true)]
    year: Option<i32>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score, filter and sort water bodies and facilities
    Rank {
        #[command(flatten)]
        inputs: ObjectInputs,
        /// Priority level to keep: all, high, medium or low
        #[arg(long, default_value = "all")]
        level: LevelFilter,
        /// Sort order (e.g. `priority_desc`, `name_asc`, `passport_old`)
        #[arg(long, default_value = "priority_desc")]
        sort: SortKey,
        /// Case-insensitive text matched against name and region
        #[arg(long)]
        search: Option<String>,
        /// Exact region name
        #[arg(long)]
        region: Option<String>,
        /// Object kind: `water_body` or `facility`
        #[arg(long)]
        kind: Option<ObjectKind>,
        /// Technical condition category (1-5)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        condition: Option<u8>,
        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
    /// Print the full dashboard analytics report as JSON
    Analytics {
        #[command(flatten)]
        inputs: ObjectInputs,
        /// JSON array of sensors
        #[arg(long)]
        sensors: Option<PathBuf>,
    },
}

#[derive(Args)]
struct ObjectInputs {
    /// JSON array of water bodies
    #[arg(long)]
    water_bodies: Option<PathBuf>,
    /// JSON array of hydraulic facilities
    #[arg(long)]
    facilities: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PriorityConfig::load(path)?,
        None => PriorityConfig::default(),
    };
    let current_year = cli.year.unwrap_or_else(|| chrono::Local::now().year());
    log::debug!("Using {config:?} for year {current_year}");

    match cli.command {
        Commands::Rank {
            inputs,
            level,
            sort,
            search,
            region,
            kind,
            condition,
            format,
        } => {
            let mut objects = input::load(inputs.water_bodies.as_deref(), ObjectKind::WaterBody)?;
            objects.extend(input::load(
                inputs.facilities.as_deref(),
                ObjectKind::Facility,
            )?);

            let filter = PriorityFilter {
                search,
                region,
                kind,
                level,
                condition: condition.map(TechnicalCondition::from_value).transpose()?,
            };

            let ranked = rank_objects(&objects, current_year, config.default_passport_age);
            let selected = sort_ranked(&apply_filter(&ranked, &filter), sort);

            log::info!(
                "{} of {} objects match, sorted by {sort}",
                selected.len(),
                ranked.len()
            );

            let output = match format {
                OutputFormat::Json => export_json(&selected)?,
                OutputFormat::Csv => export_csv(&selected)?,
            };
            println!("{output}");
        }
        Commands::Analytics { inputs, sensors } => {
            let input = input::load_all(
                inputs.water_bodies.as_deref(),
                inputs.facilities.as_deref(),
                sensors.as_deref(),
            )?;
            let report = hydro_map_analytics::build_report(&input, &config, current_year);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

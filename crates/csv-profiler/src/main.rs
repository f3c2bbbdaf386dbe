//! CLI entry point for the CSV profiler and cleaner.

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};
use csv_profiler::{
    CleaningOutcome, CleaningPlan, DataCleaner, DataProfiler, ProfileReport, ProfilerConfig,
    read_csv_path, write_csv_path,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Correlations at or above this magnitude are listed in the summary.
const STRONG_CORRELATION: f64 = 0.7;

#[derive(Parser, Debug)]
#[command(
    name = "csv-profiler",
    version,
    about = "Profile and clean CSV files",
    long_about = "Profile a CSV file for data-quality issues and apply simple cleaning operations.\n\n\
                  EXAMPLES:\n  \
                  # Column table, duplicates and correlations\n  \
                  csv-profiler profile -i data.csv\n\n  \
                  # Full report as JSON\n  \
                  csv-profiler profile -i data.csv --json | jq .duplicate_row_count\n\n  \
                  # Remove duplicates and fill gaps\n  \
                  csv-profiler clean -i data.csv -o cleaned.csv --drop-duplicates --fill-numeric-mean"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Suppress progress output (only show warnings and the final result)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the data-quality report for a CSV file.
    Profile(ProfileArgs),

    /// Apply cleaning operations and write the cleaned CSV.
    Clean(CleanArgs),
}

#[derive(Args, Debug)]
struct ProfileArgs {
    /// Path to the CSV file to profile
    #[arg(short, long)]
    input: PathBuf,

    /// Number of histogram bins per numeric column
    #[arg(long, default_value = "10")]
    bins: usize,

    /// Output JSON to stdout instead of the human-readable summary
    ///
    /// Disables all progress logs; only outputs the report.
    #[arg(long)]
    json: bool,

    /// Write the JSON report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct CleanArgs {
    /// Path to the CSV file to clean
    #[arg(short, long)]
    input: PathBuf,

    /// Path of the cleaned CSV file
    #[arg(short, long)]
    output: PathBuf,

    /// Column to drop (repeatable)
    #[arg(long = "drop-column", value_name = "NAME")]
    drop_columns: Vec<String>,

    /// Remove exact duplicate rows, keeping the first occurrence
    #[arg(long)]
    drop_duplicates: bool,

    /// Drop columns whose missing fraction exceeds --missing-threshold
    #[arg(long)]
    drop_high_missing: bool,

    /// Missing column threshold (0.0 - 1.0)
    #[arg(long, default_value = "0.5")]
    missing_threshold: f64,

    /// Fill missing numeric cells with the column mean
    #[arg(long)]
    fill_numeric_mean: bool,

    /// Fill missing non-numeric cells with the column mode
    #[arg(long)]
    fill_text_mode: bool,
}

impl CleanArgs {
    fn plan(&self, config: &ProfilerConfig) -> CleaningPlan {
        CleaningPlan {
            drop_columns: self.drop_columns.iter().cloned().collect(),
            remove_duplicates: self.drop_duplicates,
            drop_high_missing: self
                .drop_high_missing
                .then_some(config.missing_column_threshold),
            fill_numeric_mean: self.fill_numeric_mean,
            fill_text_mode: self.fill_text_mode,
        }
    }
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is disabled so stdout only holds JSON.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let json_output = matches!(&cli.command, Command::Profile(args) if args.json);
    init_logging(&cli.log_level, cli.quiet, json_output);

    match &cli.command {
        Command::Profile(args) => run_profile(args),
        Command::Clean(args) => run_clean(args),
    }
}

fn ensure_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(anyhow!("Input file not found: {}", path.display()));
    }
    Ok(())
}

fn run_profile(args: &ProfileArgs) -> Result<()> {
    ensure_exists(&args.input)?;

    let config = ProfilerConfig::builder().histogram_bins(args.bins).build()?;

    let data = read_csv_path(&args.input, &config)?;
    info!("Dataset loaded successfully: {:?}", data.shape());

    let report = DataProfiler::profile_dataset(&data, &config)?;

    if let Some(ref path) = args.output {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
        info!("Report written to: {}", path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&args.input, &report);
    Ok(())
}

fn run_clean(args: &CleanArgs) -> Result<()> {
    ensure_exists(&args.input)?;

    let config = ProfilerConfig::builder()
        .missing_column_threshold(args.missing_threshold)
        .build()?;

    let plan = args.plan(&config);
    if plan.is_empty() {
        return Err(anyhow!(
            "No cleaning operation selected; see `csv-profiler clean --help`"
        ));
    }
    debug!("Cleaning plan: {:?}", plan);

    let data = read_csv_path(&args.input, &config)?;

    let outcome = DataCleaner::apply_plan(&data, &plan)?;
    write_csv_path(&outcome.data, &args.output)?;
    info!("Cleaned dataset written to: {}", args.output.display());

    print_outcome(&args.output, &outcome);
    Ok(())
}

/// Print the profile summary.
///
/// Uses `println!` for user-facing output so it shows regardless of log level.
fn print_report(input: &Path, report: &ProfileReport) {
    println!("\n{}", "=".repeat(80));
    println!("DATA QUALITY REPORT");
    println!("{}\n", "=".repeat(80));

    println!("DATASET OVERVIEW");
    println!("{}", "-".repeat(40));
    println!("  File: {}", input.display());
    println!("  Rows: {}", report.row_count);
    println!("  Columns: {}", report.column_count);
    println!("  Duplicate rows: {}", report.duplicate_row_count);
    println!();

    println!("COLUMN PROFILES");
    println!("{}", "-".repeat(40));
    println!(
        "{:<20} {:<10} {:<10} {:<10} {:<10} {:<12}",
        "Column", "Kind", "Missing", "Missing %", "Unique", "Mean"
    );
    println!("{}", "-".repeat(76));

    for col in &report.columns {
        let mean = col
            .numeric
            .as_ref()
            .map(|s| format!("{:.2}", s.mean))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<20} {:<10} {:<10} {:<10.1} {:<10} {:<12}",
            truncate_str(&col.name, 19),
            format!("{:?}", col.kind),
            col.missing_count,
            col.missing_percentage,
            col.unique_count,
            mean
        );
    }
    println!();

    println!("CORRELATIONS");
    println!("{}", "-".repeat(40));
    match &report.correlation {
        None => println!("  Fewer than two numeric columns"),
        Some(matrix) => {
            let pairs = matrix.strong_pairs(STRONG_CORRELATION);
            if pairs.is_empty() {
                println!("  No pairs with |r| >= {:.1}", STRONG_CORRELATION);
            }
            for (a, b, r) in pairs {
                println!("  {} ~ {}: {:.3}", a, b, r);
            }
        }
    }
    println!();

    if !report.warnings.is_empty() {
        println!("WARNINGS");
        println!("{}", "-".repeat(40));
        for warning in &report.warnings {
            println!("  - {}", warning);
        }
        println!();
    }
}

fn print_outcome(output: &Path, outcome: &CleaningOutcome) {
    println!("\n{}", "=".repeat(80));
    println!("CLEANING SUMMARY");
    println!("{}\n", "=".repeat(80));
    println!(
        "  Shape: ({}, {}) -> ({}, {})",
        outcome.rows_before, outcome.columns_before, outcome.rows_after, outcome.columns_after
    );
    println!("  Output: {}", output.display());
    println!();
    for action in &outcome.actions {
        println!("  - {}", action);
    }
    println!();
}

/// Truncate a string to `max_len` characters, adding "..." when cut.
fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

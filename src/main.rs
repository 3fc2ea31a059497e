// loglens - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Pipeline wiring: source -> loader -> stats -> filter -> report

use clap::{Parser, ValueEnum};
use loglens::app::{report, source};
use loglens::core::{filter, parser, stats};
use loglens::util;
use loglens::util::error::Result;
use std::io;
use std::path::PathBuf;

/// loglens - Command-line log file analyser.
///
/// Point loglens at a log file to get per-level entry counts, and
/// optionally a detail listing for one severity level.
#[derive(Parser, Debug)]
#[command(name = "loglens", version, about)]
struct Cli {
    /// Log file to analyse.
    path: PathBuf,

    /// Severity level for the detail listing (case-insensitive).
    level: Option<String>,

    /// Output format for the analysis.
    #[arg(short = 'o', long = "format", value_enum, default_value = "table")]
    format: OutputFormat,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
enum OutputFormat {
    /// Human-readable counts table and detail listing.
    #[default]
    Table,
    /// Machine-readable JSON object.
    Json,
    /// CSV records of the per-level counts.
    Csv,
}

fn main() {
    let cli = Cli::parse();

    // Initialise logging subsystem
    util::logging::init(cli.debug);

    tracing::info!(
        version = util::constants::APP_VERSION,
        path = %cli.path.display(),
        "loglens starting"
    );

    if let Err(e) = run(&cli) {
        tracing::error!(error = %e, "Analysis failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Acquire the line source. The only fatal failure mode lives here;
    // everything after this point degrades gracefully.
    let lines = source::read_lines(&cli.path)?;

    let result = parser::load_lines(&lines);

    // Per-line warnings go to stderr regardless of output format, so
    // machine-readable stdout stays clean.
    report::render_rejections(&result.rejections, io::stderr().lock())?;

    let counts = stats::count_by_level(&result.entries);
    let filtered = cli
        .level
        .as_deref()
        .map(|level| (level, filter::by_level(&result.entries, level)));

    let stdout = io::stdout().lock();
    match cli.format {
        OutputFormat::Table => {
            if result.entries.is_empty() {
                println!("{}", report::NO_ENTRIES_MESSAGE);
                return Ok(());
            }
            let mut stdout = stdout;
            report::render_counts_table(&counts, &mut stdout)?;
            if let Some((level, entries)) = &filtered {
                report::render_details(entries, level, &mut stdout)?;
            }
        }
        OutputFormat::Json => {
            report::render_json(
                &counts,
                result.entries.len(),
                &result.rejections,
                filtered
                    .as_ref()
                    .map(|(level, entries)| (*level, entries.as_slice())),
                stdout,
            )?;
        }
        OutputFormat::Csv => {
            report::render_csv_counts(&counts, stdout)?;
        }
    }

    Ok(())
}

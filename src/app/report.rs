// loglens - app/report.rs
//
// The reporting collaborator: renders the structured analysis for the
// operator. All formatting lives here; the core returns data only.
// Every renderer writes to any Write trait object so tests can capture
// output in a buffer.

use crate::core::model::{LevelCounts, LogEntry, Rejection};
use crate::util::constants::MAX_REJECTION_WARNINGS;
use crate::util::error::ReportError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

/// Zero-state message when the whole file yields no valid entries.
pub const NO_ENTRIES_MESSAGE: &str = "No valid log entries found.";

// =============================================================================
// Table rendition
// =============================================================================

/// Render the per-level counts as a two-column table.
///
/// Levels are sorted lexicographically so repeated runs over the same file
/// produce byte-identical output; the underlying map stays unordered.
pub fn render_counts_table<W: Write>(counts: &LevelCounts, mut writer: W) -> Result<(), ReportError> {
    let io = |source| ReportError::Io { source };

    writeln!(writer, "Log Level       | Count").map_err(io)?;
    writeln!(writer, "----------------|-------").map_err(io)?;

    let mut levels: Vec<_> = counts.keys().collect();
    levels.sort();
    for level in levels {
        writeln!(writer, "{level:<15} | {}", counts[level]).map_err(io)?;
    }
    Ok(())
}

/// Render the detail listing for a level filter: one `date time - message`
/// line per matching entry, in original file order. An empty match set gets
/// its own zero-state line instead of a bare header.
pub fn render_details<W: Write>(
    entries: &[&LogEntry],
    level: &str,
    mut writer: W,
) -> Result<(), ReportError> {
    let io = |source| ReportError::Io { source };
    let level_upper = level.to_uppercase();

    if entries.is_empty() {
        writeln!(writer, "No log entries found for level '{level_upper}'.").map_err(io)?;
        return Ok(());
    }

    writeln!(writer, "\nLog details for level '{level_upper}':").map_err(io)?;
    for entry in entries {
        writeln!(writer, "{} {} - {}", entry.date, entry.time, entry.message).map_err(io)?;
    }
    Ok(())
}

/// Write one warning line per rejected input line.
///
/// Warnings go to the caller's stderr-backed writer, never stdout, so the
/// analysis output stays pipeline-clean. Output is capped at
/// `MAX_REJECTION_WARNINGS` with a suppression notice; the structural
/// rejection list itself is never truncated.
pub fn render_rejections<W: Write>(
    rejections: &[Rejection],
    mut writer: W,
) -> Result<(), ReportError> {
    let io = |source| ReportError::Io { source };

    for rejection in rejections.iter().take(MAX_REJECTION_WARNINGS) {
        writeln!(
            writer,
            "Warning: could not parse line {}: {}",
            rejection.line_number, rejection.raw_text
        )
        .map_err(io)?;
    }

    if rejections.len() > MAX_REJECTION_WARNINGS {
        writeln!(
            writer,
            "Warning: {} further unparseable lines not shown",
            rejections.len() - MAX_REJECTION_WARNINGS
        )
        .map_err(io)?;
    }
    Ok(())
}

// =============================================================================
// JSON rendition
// =============================================================================

/// Machine-readable rendition of the full analysis.
#[derive(Serialize)]
struct JsonReport<'a> {
    total_entries: usize,
    /// BTreeMap for deterministic key order in the serialised output.
    counts: BTreeMap<&'a str, usize>,
    rejections: &'a [Rejection],
    #[serde(skip_serializing_if = "Option::is_none")]
    filter_level: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    entries: Option<&'a [&'a LogEntry]>,
}

/// Render the analysis as a pretty-printed JSON object. The filtered entry
/// listing is included only when a level filter was requested.
pub fn render_json<W: Write>(
    counts: &LevelCounts,
    total_entries: usize,
    rejections: &[Rejection],
    filtered: Option<(&str, &[&LogEntry])>,
    mut writer: W,
) -> Result<(), ReportError> {
    let report = JsonReport {
        total_entries,
        counts: counts.iter().map(|(k, v)| (k.as_str(), *v)).collect(),
        rejections,
        filter_level: filtered.map(|(level, _)| level),
        entries: filtered.map(|(_, entries)| entries),
    };

    serde_json::to_writer_pretty(&mut writer, &report)
        .map_err(|source| ReportError::Json { source })?;
    writeln!(writer).map_err(|source| ReportError::Io { source })?;
    Ok(())
}

// =============================================================================
// CSV rendition
// =============================================================================

/// Render the per-level counts as CSV records (`level,count` after a
/// header), levels sorted as in the table rendition.
pub fn render_csv_counts<W: Write>(counts: &LevelCounts, writer: W) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["level", "count"])
        .map_err(|source| ReportError::Csv { source })?;

    let mut levels: Vec<_> = counts.keys().collect();
    levels.sort();
    for level in levels {
        csv_writer
            .write_record([level.as_str(), &counts[level].to_string()])
            .map_err(|source| ReportError::Csv { source })?;
    }

    csv_writer
        .flush()
        .map_err(|source| ReportError::Io { source })?;
    Ok(())
}

// loglens - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no rendering,
// no platform dependencies (core depends on std + serde only).
//
// These types are the shared vocabulary across all layers.

use serde::Serialize;
use std::collections::HashMap;

// =============================================================================
// Log Entry (validated output of parsing)
// =============================================================================

/// A single validated log record.
///
/// Created only by `core::parser::parse_line` on a successful grammar match
/// and never mutated afterwards. All four fields are captured verbatim from
/// the source line, so re-joining them with single spaces reproduces the
/// trimmed original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// Calendar date in textual `YYYY-MM-DD` form (shape-validated only).
    pub date: String,

    /// Time of day in textual `HH:MM:SS` form (shape-validated only).
    pub time: String,

    /// Severity label as it appeared in the source: a free-form
    /// non-whitespace token, case preserved.
    pub level: String,

    /// Remainder of the line after the three leading tokens. May contain
    /// arbitrary text including further whitespace; not trimmed beyond the
    /// line-level trim.
    pub message: String,
}

// =============================================================================
// Rejection (a line that failed the grammar)
// =============================================================================

/// A non-blank line that did not match the line grammar.
///
/// Rejections are routine, not exceptional: the loader records them and
/// carries on. Rendering the operator-facing warning text is the reporting
/// layer's concern, so the core stays free of output side effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// 1-based line number in the input sequence.
    pub line_number: u64,

    /// The trimmed original text of the rejected line.
    pub raw_text: String,
}

// =============================================================================
// Load Result
// =============================================================================

/// Result of loading a sequence of raw lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadResult {
    /// Successfully parsed entries, in encounter order.
    pub entries: Vec<LogEntry>,

    /// Non-blank lines that failed the grammar, in encounter order.
    pub rejections: Vec<Rejection>,

    /// Total lines consumed, including blank lines.
    pub lines_processed: u64,
}

// =============================================================================
// Level Counts
// =============================================================================

/// Occurrence count per raw level token.
///
/// Keys are the level strings exactly as captured — `"Error"` and `"ERROR"`
/// are distinct keys. A key exists only once its level has been seen, and
/// its count starts at 1.
pub type LevelCounts = HashMap<String, usize>;

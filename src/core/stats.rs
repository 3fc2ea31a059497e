// loglens - core/stats.rs
//
// Per-level aggregation of parsed entries.
// Core layer: pure logic, no I/O or rendering dependencies.

use crate::core::model::{LevelCounts, LogEntry};

/// Count occurrences of each raw level token.
///
/// The key is the entry's `level` exactly as captured — no case
/// normalisation, so `"Error"` and `"ERROR"` are distinct keys. This
/// mirrors the case-preserving capture; the case-insensitive comparison
/// belongs to filtering only.
///
/// Explicit insert-or-increment: a key appears only once its level has been
/// seen, and its count starts at 1. Deterministic for a given collection;
/// an empty collection yields an empty map.
pub fn count_by_level(entries: &[LogEntry]) -> LevelCounts {
    let mut counts = LevelCounts::new();
    for entry in entries {
        *counts.entry(entry.level.clone()).or_insert(0) += 1;
    }
    counts
}

// loglens - core/filter.rs
//
// Level filtering of parsed entries.
// Core layer: pure logic, no I/O or rendering dependencies.

use crate::core::model::LogEntry;

/// Select the entries whose level matches `target`, case-insensitively.
///
/// An entry matches iff its `level`, upper-cased, equals `target`
/// upper-cased — so a target of `"error"` selects both `ERROR` and `error`
/// entries, in their original file order.
///
/// Returns a borrowed view of the matching subsequence. The input is never
/// mutated, and no match yields an empty Vec, not an error.
pub fn by_level<'a>(entries: &'a [LogEntry], target: &str) -> Vec<&'a LogEntry> {
    let target_upper = target.to_uppercase();
    entries
        .iter()
        .filter(|entry| entry.level.to_uppercase() == target_upper)
        .collect()
}

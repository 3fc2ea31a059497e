// loglens - core/parser.rs
//
// Line-oriented log parsing against the fixed line grammar.
// Core layer: accepts in-memory line sequences, never touches the
// filesystem directly.

use crate::core::model::{LoadResult, LogEntry, Rejection};
use regex::Regex;
use std::sync::OnceLock;

/// The fixed line grammar, anchored at both ends:
///
/// ```text
/// <date> <time> <level> <message>
/// ```
///
/// `<date>` is exactly `DDDD-DD-DD` digits, `<time>` exactly `DD:DD:DD`
/// digits, `<level>` one or more non-whitespace characters, and `<message>`
/// everything remaining after the third space-delimited token, embedded
/// spaces included. Separators are single spaces.
const LINE_PATTERN: &str = r"^(\d{4}-\d{2}-\d{2}) (\d{2}:\d{2}:\d{2}) (\S+) (.+)$";

/// Compiled line grammar, built once per process.
fn line_regex() -> &'static Regex {
    static LINE_RE: OnceLock<Regex> = OnceLock::new();
    // The pattern is a compile-time constant exercised by the unit tests
    // below, so a mistake shows up as a failing test rather than a runtime
    // panic.
    LINE_RE.get_or_init(|| Regex::new(LINE_PATTERN).expect("line grammar: invalid regex"))
}

/// Parse a single raw line against the line grammar.
///
/// The line is trimmed of leading and trailing whitespace before matching;
/// the grammar must then match the entire trimmed line. On a match the four
/// capture groups become the entry's fields verbatim. On a non-match the
/// line is rejected whole — no partial extraction, no panic, no error:
/// malformed input is an expected, common case.
///
/// No side effects.
pub fn parse_line(line: &str) -> Option<LogEntry> {
    let trimmed = line.trim();
    let caps = line_regex().captures(trimmed)?;

    Some(LogEntry {
        date: caps[1].to_string(),
        time: caps[2].to_string(),
        level: caps[3].to_string(),
        message: caps[4].to_string(),
    })
}

/// Load an ordered sequence of raw lines into a [`LoadResult`].
///
/// Iterates the input exactly once, in order:
/// - Blank or whitespace-only lines are skipped — not entries, not
///   rejections (they still count towards `lines_processed`).
/// - Every other line goes through [`parse_line`]. Accepted entries are
///   appended in encounter order; rejected lines are recorded with their
///   1-based line number and trimmed original text, and loading continues.
///   A single malformed line never aborts the load.
///
/// The loader has no failure mode of its own given a valid line sequence;
/// an unreadable source is the line-source collaborator's fatal error and
/// is raised before this function ever runs.
pub fn load_lines<I, S>(lines: I) -> LoadResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = LoadResult::default();

    for (line_idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        result.lines_processed += 1;
        let line_number = (line_idx as u64) + 1;

        // Skip empty lines
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Some(entry) => result.entries.push(entry),
            None => result.rejections.push(Rejection {
                line_number,
                raw_text: line.trim().to_string(),
            }),
        }
    }

    tracing::debug!(
        entries = result.entries.len(),
        rejections = result.rejections.len(),
        lines = result.lines_processed,
        "Load complete"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // parse_line: grammar acceptance
    // -------------------------------------------------------------------------

    #[test]
    fn test_parse_well_formed_line() {
        let entry = parse_line("2024-01-01 10:00:00 INFO Service started").unwrap();
        assert_eq!(entry.date, "2024-01-01");
        assert_eq!(entry.time, "10:00:00");
        assert_eq!(entry.level, "INFO");
        assert_eq!(entry.message, "Service started");
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let entry = parse_line("  2024-01-01 10:00:00 INFO Service started \n").unwrap();
        assert_eq!(entry.message, "Service started");
    }

    /// The message is everything after the third token, embedded spaces and
    /// all, and is not trimmed beyond the line-level trim.
    #[test]
    fn test_parse_message_keeps_internal_whitespace() {
        let entry = parse_line("2024-01-01 10:00:00 WARN disk  almost   full").unwrap();
        assert_eq!(entry.message, "disk  almost   full");
    }

    /// Level is any non-whitespace token, case preserved as captured.
    #[test]
    fn test_parse_level_is_free_form_and_case_preserving() {
        let entry = parse_line("2024-01-01 10:00:00 [warn!] something").unwrap();
        assert_eq!(entry.level, "[warn!]");

        let entry = parse_line("2024-01-01 10:00:00 error Retrying").unwrap();
        assert_eq!(entry.level, "error");
    }

    /// Round-trip: re-joining the four fields with single spaces reproduces
    /// the trimmed original line.
    #[test]
    fn test_parse_round_trip() {
        let lines = [
            "2024-01-01 10:00:00 INFO Service started",
            "2024-03-15 23:59:59 DEBUG x=1 y=2  z=3",
            "2024-12-31 00:00:01 CRIT!! total melt-down",
        ];
        for line in lines {
            let e = parse_line(line).unwrap();
            let rejoined = format!("{} {} {} {}", e.date, e.time, e.level, e.message);
            assert_eq!(rejoined, line, "round-trip should reproduce {line:?}");
        }
    }

    /// The date/time validation is shape-only: any digits of the right
    /// arrangement match, calendar validity is not checked.
    #[test]
    fn test_parse_shape_only_date_validation() {
        assert!(parse_line("9999-99-99 99:99:99 INFO impossible but well-shaped").is_some());
    }

    // -------------------------------------------------------------------------
    // parse_line: grammar rejection
    // -------------------------------------------------------------------------

    #[test]
    fn test_parse_rejects_malformed_lines() {
        let bad = [
            "garbage line",
            "2024-01-01 10:00:00 INFO",             // missing message
            "2024-01-01 10:00:00",                  // missing level and message
            "2024-1-01 10:00:00 INFO short date",   // date shape wrong
            "2024-01-01 10:00 INFO short time",     // time shape wrong
            "24-01-01 10:00:00 INFO two-digit year",
            "2024/01/01 10:00:00 INFO wrong separators",
            "",
            "   ",
        ];
        for line in bad {
            assert!(parse_line(line).is_none(), "should reject {line:?}");
        }
    }

    /// The grammar is anchored: trailing garbage after a valid prefix is not
    /// an issue (message swallows it), but a leading prefix before the date
    /// rejects the whole line.
    #[test]
    fn test_parse_anchored_at_start() {
        assert!(parse_line("x 2024-01-01 10:00:00 INFO msg").is_none());
    }

    // -------------------------------------------------------------------------
    // load_lines
    // -------------------------------------------------------------------------

    /// Mixed input: three accepted entries, one rejection with its 1-based
    /// line number and original text.
    #[test]
    fn test_load_mixed_lines() {
        let lines = [
            "2024-01-01 10:00:00 INFO Service started",
            "2024-01-01 10:00:05 ERROR Connection failed",
            "garbage line",
            "2024-01-01 10:00:10 error Retrying",
        ];

        let result = load_lines(lines);

        assert_eq!(result.entries.len(), 3);
        assert_eq!(result.lines_processed, 4);
        assert_eq!(
            result.rejections,
            vec![Rejection {
                line_number: 3,
                raw_text: "garbage line".to_string(),
            }]
        );
        // Encounter order is preserved.
        assert_eq!(result.entries[0].level, "INFO");
        assert_eq!(result.entries[1].level, "ERROR");
        assert_eq!(result.entries[2].level, "error");
    }

    /// Blank lines are skipped silently: no entry, no rejection. Line
    /// numbers of later rejections still refer to the original sequence.
    #[test]
    fn test_load_blank_lines_not_rejected() {
        let lines = [
            "",
            "2024-01-01 10:00:00 INFO ok",
            "   ",
            "\t",
            "broken",
        ];

        let result = load_lines(lines);

        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.rejections.len(), 1);
        assert_eq!(result.rejections[0].line_number, 5);
        assert_eq!(result.lines_processed, 5);
    }

    #[test]
    fn test_load_empty_input() {
        let result = load_lines(Vec::<String>::new());
        assert!(result.entries.is_empty());
        assert!(result.rejections.is_empty());
        assert_eq!(result.lines_processed, 0);
    }

    /// A malformed line never aborts the load; everything after it still
    /// parses.
    #[test]
    fn test_load_is_partial_failure_tolerant() {
        let lines = [
            "not a log line at all",
            "also broken",
            "2024-01-01 10:00:00 INFO survived",
        ];
        let result = load_lines(lines);
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.rejections.len(), 2);
        assert_eq!(result.entries[0].message, "survived");
    }

    /// Loading the same sequence twice yields identical results.
    #[test]
    fn test_load_is_deterministic() {
        let lines = [
            "2024-01-01 10:00:00 INFO one",
            "junk",
            "2024-01-01 10:00:01 WARN two",
        ];
        let first = load_lines(lines);
        let second = load_lines(lines);
        assert_eq!(first, second);
    }
}

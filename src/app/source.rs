// loglens - app/source.rs
//
// The line-source collaborator: owns file access so the core pipeline only
// ever sees an in-memory sequence of text lines. The only fatal failure
// kind in the whole program lives here — a source that cannot be read.

use crate::util::error::SourceError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read the log file at `path` into an ordered sequence of lines.
///
/// The path is validated up front so the operator gets a precise failure
/// kind (missing vs. not-a-file vs. I/O) rather than a bare OS error.
/// Line terminators are stripped; line content is otherwise untouched —
/// trimming is the parser's concern.
pub fn read_lines(path: &Path) -> Result<Vec<String>, SourceError> {
    if !path.exists() {
        return Err(SourceError::NotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(SourceError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|e| SourceError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line.map_err(|e| SourceError::Io {
            path: path.to_path_buf(),
            source: e,
        })?);
    }

    tracing::debug!(
        path = %path.display(),
        lines = lines.len(),
        "Source file read"
    );

    Ok(lines)
}

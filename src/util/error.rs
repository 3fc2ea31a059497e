// loglens - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; every variant names the resource or
// operation that failed so the operator message is actionable.
//
// Data-shape problems (malformed lines) are deliberately NOT errors — they
// travel as `core::model::Rejection` values. Only resource acquisition and
// rendering failures escalate through this hierarchy.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all loglens operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum LogLensError {
    /// The log file source could not be read.
    Source(SourceError),

    /// Rendering the analysis to the output stream failed.
    Report(ReportError),
}

impl fmt::Display for LogLensError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(e) => write!(f, "Source error: {e}"),
            Self::Report(e) => write!(f, "Report error: {e}"),
        }
    }
}

impl std::error::Error for LogLensError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source(e) => Some(e),
            Self::Report(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Source errors
// ---------------------------------------------------------------------------

/// Errors acquiring the line source. Fatal to the invocation: parsing never
/// starts when the file itself cannot be read.
#[derive(Debug)]
pub enum SourceError {
    /// The log file does not exist.
    NotFound { path: PathBuf },

    /// The path exists but is not a regular file.
    NotAFile { path: PathBuf },

    /// I/O error opening or reading the file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "Log file not found: '{}'", path.display())
            }
            Self::NotAFile { path } => {
                write!(f, "'{}' is not a regular file", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Error reading log file '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<SourceError> for LogLensError {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}

// ---------------------------------------------------------------------------
// Report errors
// ---------------------------------------------------------------------------

/// Errors rendering the analysis to an output stream.
#[derive(Debug)]
pub enum ReportError {
    /// I/O error writing to the output stream.
    Io { source: io::Error },

    /// CSV serialisation error.
    Csv { source: csv::Error },

    /// JSON serialisation error.
    Json { source: serde_json::Error },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { source } => write!(f, "output write failed: {source}"),
            Self::Csv { source } => write!(f, "CSV rendering failed: {source}"),
            Self::Json { source } => write!(f, "JSON rendering failed: {source}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source } => Some(source),
            Self::Csv { source } => Some(source),
            Self::Json { source } => Some(source),
        }
    }
}

impl From<ReportError> for LogLensError {
    fn from(e: ReportError) -> Self {
        Self::Report(e)
    }
}

/// Convenience type alias for loglens results.
pub type Result<T> = std::result::Result<T, LogLensError>;

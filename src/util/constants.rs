// loglens - util/constants.rs
//
// Single source of truth for named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "loglens";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Reporting limits
// =============================================================================

/// Maximum number of per-rejection warning lines printed to stderr.
///
/// Bounds operator-facing noise when a file is mostly unparseable. Display
/// truncation only: the structural rejection list returned by the loader is
/// never capped, and a suppression notice states how many were withheld.
pub const MAX_REJECTION_WARNINGS: usize = 100;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

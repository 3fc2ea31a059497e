// loglens - app/mod.rs
//
// The app layer: I/O collaborators around the pure core. `source` supplies
// the line sequence; `report` renders the structured results.

pub mod report;
pub mod source;

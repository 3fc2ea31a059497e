// loglens - core/mod.rs
//
// The core layer: the parse -> validate -> aggregate -> filter pipeline.
// Pure logic over in-memory line sequences; no I/O, no rendering. The app
// layer supplies the lines and consumes the structured results.

pub mod filter;
pub mod model;
pub mod parser;
pub mod stats;

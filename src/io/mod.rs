//! Input/output: CLI, errors, progress display, and PNG export

/// Command-line interface for the demo generator
pub mod cli;
/// Engine constants and runtime defaults
pub mod configuration;
/// Error types and the crate result alias
pub mod error;
/// PNG export of resolved lattice slices
pub mod image;
/// Progress display for collapse runs
pub mod progress;

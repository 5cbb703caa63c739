//! Command layer, configuration, errors and file output

/// Command-line parsing and batch generation
pub mod cli;
/// Maze commands and their artifacts
pub mod commands;
/// Defaults and fixed parameters
pub mod configuration;
/// Error types
pub mod error;
/// PNG export
pub mod export;
/// Batch progress display
pub mod progress;

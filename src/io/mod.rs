//! Input/output, configuration and error handling

/// Command-line parsing and the generation driver
pub mod cli;
/// JSON config file and command-line overrides
pub mod config_file;
/// Compile-time defaults and limits
pub mod configuration;
/// Error types
pub mod error;
/// Canvas image loading and PNG export
pub mod image;
/// Placement progress display
pub mod progress;
/// Randomized settings for extracted palettes
pub mod sampling;

//! Input/output around the in-memory core
//!
//! Nothing in here is needed to run an engine; these modules load and save
//! images, hold configuration constants and errors, and drive the CLI.

/// Command-line parsing and batch processing
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error type and result alias
pub mod error;
/// Image file decoding and encoding
pub mod image;
/// Progress display
pub mod progress;

//! Command-line front end for scanview.
//!
//! - `args` - clap argument definitions
//! - `commands` - subcommand implementations, returning rendered output
//! - `tracing_config` - opt-in tracing subscriber

pub mod args;
pub mod commands;
pub mod tracing_config;

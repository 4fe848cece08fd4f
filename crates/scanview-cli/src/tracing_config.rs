//! Tracing configuration for the scanview CLI.
//!
//! Logging is off unless `SCANVIEW_LOG` (or `RUST_LOG`) is set. A bare level
//! in `SCANVIEW_LOG` only applies to the scanview crates, so
//! `SCANVIEW_LOG=trace` shows formatter decisions without dependency noise;
//! full `EnvFilter` directives are used as written.
//!
//! `SCANVIEW_LOG_FORMAT` picks the output:
//!
//! - `text` (default): flat `tracing-subscriber` lines
//! - `tree`: indented spans via `tracing-tree`
//! - `json`: one JSON object per event
//!
//! ```bash
//! SCANVIEW_LOG=debug scanview tokens --tokens tokens.json --source input.ts
//! SCANVIEW_LOG=trace SCANVIEW_LOG_FORMAT=tree scanview format 0x108 --known ModifierFlags
//! SCANVIEW_LOG="scanview_enums=trace" SCANVIEW_LOG_FORMAT=json scanview members --known TokenFlags
//! ```

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Crates whose events a bare `SCANVIEW_LOG` level enables.
pub const LOG_TARGETS: &[&str] = &["scanview_enums", "scanview_tokens", "scanview_cli"];

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Parse a format name; unknown names fall back to `Text`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Resolved logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    directives: String,
    format: LogFormat,
}

impl TracingConfig {
    /// Read `SCANVIEW_LOG`, `RUST_LOG` and `SCANVIEW_LOG_FORMAT`.
    pub fn from_env() -> Option<Self> {
        Self::resolve(
            std::env::var("SCANVIEW_LOG").ok().as_deref(),
            std::env::var("RUST_LOG").ok().as_deref(),
            std::env::var("SCANVIEW_LOG_FORMAT").ok().as_deref(),
        )
    }

    /// Settings for the given variable values, or `None` when logging stays
    /// off. `SCANVIEW_LOG` wins over `RUST_LOG`; blank values count as unset.
    pub fn resolve(
        scanview_log: Option<&str>,
        rust_log: Option<&str>,
        format: Option<&str>,
    ) -> Option<Self> {
        let directives = match non_blank(scanview_log) {
            Some(value) => scoped_directives(value),
            None => non_blank(rust_log)?.to_string(),
        };
        Some(Self {
            directives,
            format: format.map(LogFormat::parse).unwrap_or_default(),
        })
    }

    pub fn directives(&self) -> &str {
        &self.directives
    }

    pub fn format(&self) -> LogFormat {
        self.format
    }

    pub fn filter(&self) -> EnvFilter {
        EnvFilter::builder().parse_lossy(&self.directives)
    }

    /// Install the global subscriber. Output goes to stderr so it never
    /// mixes with command output. Does nothing if one is already installed.
    pub fn init(&self) {
        let filter = self.filter();

        let installed = match self.format {
            LogFormat::Tree => {
                let tree_layer = tracing_tree::HierarchicalLayer::new(2)
                    .with_indent_lines(true)
                    .with_deferred_spans(true)
                    .with_targets(true);
                Registry::default().with(filter).with(tree_layer).try_init().is_ok()
            }
            LogFormat::Json => {
                let json_layer = fmt::layer().json().with_writer(std::io::stderr);
                Registry::default().with(filter).with(json_layer).try_init().is_ok()
            }
            LogFormat::Text => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .is_ok(),
        };

        if installed {
            tracing::debug!(directives = %self.directives, format = ?self.format, "tracing enabled");
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// A bare level applies to the scanview crates only.
fn scoped_directives(value: &str) -> String {
    match value.parse::<LevelFilter>() {
        Ok(level) => {
            let level = level.to_string().to_ascii_lowercase();
            LOG_TARGETS
                .iter()
                .map(|target| format!("{target}={level}"))
                .collect::<Vec<_>>()
                .join(",")
        }
        Err(_) => value.to_string(),
    }
}

/// Initialise tracing from the environment, if logging was requested.
pub fn init_tracing() {
    if let Some(config) = TracingConfig::from_env() {
        config.init();
    }
}

#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tests;

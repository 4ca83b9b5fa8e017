//! Log filter and destination selection
//!
//! The full-screen UI owns the terminal in raw mode, so logs are discarded
//! there; problems are already shown in its Messages panel.

use std::io;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

const DEFAULT_DIRECTIVE: &str = "mastermind=warn";
const VERBOSE_DIRECTIVE: &str = "mastermind=debug";

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Stderr,
    Discard,
}

impl LogOutput {
    /// Stderr for line-based commands, nothing while the TUI is on screen
    #[must_use]
    pub const fn for_mode(full_screen: bool) -> Self {
        if full_screen {
            Self::Discard
        } else {
            Self::Stderr
        }
    }

    #[must_use]
    pub fn writer(self) -> BoxMakeWriter {
        match self {
            Self::Stderr => BoxMakeWriter::new(io::stderr),
            Self::Discard => BoxMakeWriter::new(io::sink),
        }
    }
}

/// Directives to filter with
///
/// `rust_log` (the `RUST_LOG` value) replaces the default when set and
/// non-empty; `verbose` raises this crate to debug on top of either.
#[must_use]
pub fn filter_directives(verbose: bool, rust_log: Option<&str>) -> String {
    let base = rust_log
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_DIRECTIVE);

    if verbose {
        format!("{base},{VERBOSE_DIRECTIVE}")
    } else {
        base.to_string()
    }
}

/// Install the global subscriber
pub fn init(verbose: bool, output: LogOutput) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::new(filter_directives(verbose, rust_log.as_deref()));

    tracing_subscriber::fmt()
        .with_writer(output.writer())
        .with_env_filter(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_warn_for_this_crate() {
        assert_eq!(filter_directives(false, None), "mastermind=warn");
        assert_eq!(filter_directives(false, Some("  ")), "mastermind=warn");
    }

    #[test]
    fn rust_log_is_not_overridden() {
        assert_eq!(
            filter_directives(false, Some("mastermind=trace")),
            "mastermind=trace"
        );

        let filter = EnvFilter::new(filter_directives(false, Some("mastermind=trace")));
        assert!(filter.to_string().contains("mastermind=trace"));
        assert!(!filter.to_string().contains("mastermind=warn"));
    }

    #[test]
    fn verbose_raises_crate_to_debug() {
        assert_eq!(filter_directives(true, None), "mastermind=warn,mastermind=debug");
        assert_eq!(
            filter_directives(true, Some("info")),
            "info,mastermind=debug"
        );
    }

    #[test]
    fn full_screen_discards_logs() {
        assert_eq!(LogOutput::for_mode(true), LogOutput::Discard);
        assert_eq!(LogOutput::for_mode(false), LogOutput::Stderr);
    }
}

//! Command-line interface

use crate::config::parse_duration;
use std::io::IsTerminal;
use std::time::Duration;

use clap::Parser;

/// Response Time Probe - repeatedly GET a URL and check response latency
#[derive(Parser, Debug, Clone)]
#[command(name = "rtp")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Target URL to probe [default: http://spicy.kebab.solutions:31000]
    #[arg(long)]
    pub url: Option<String>,

    /// Number of concurrent virtual users [default: 1]
    #[arg(long)]
    pub vus: Option<u32>,

    /// Total run duration, e.g. 90s, 2m, 1h [default: 2m]
    #[arg(short, long, value_parser = duration_value)]
    pub duration: Option<Duration>,

    /// Delay between iterations, e.g. 10s [default: 10s]
    #[arg(long, value_parser = duration_value)]
    pub sleep: Option<Duration>,

    /// Response-time check threshold in milliseconds [default: 500]
    #[arg(long)]
    pub threshold_ms: Option<f64>,

    /// Per-request timeout, e.g. 10s [default: 10s]
    #[arg(short, long, value_parser = duration_value)]
    pub timeout: Option<Duration>,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Emit logs as JSON instead of console lines
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        if self.vus == Some(0) {
            return Err("Virtual user count must be at least 1".to_string());
        }

        Ok(())
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        if self.color {
            true // Force color output when --color is specified
        } else if self.no_color {
            false // Disable color output when --no-color is specified
        } else {
            supports_color() // Use automatic detection
        }
    }
}

/// clap value parser for human-friendly duration strings
fn duration_value(s: &str) -> Result<Duration, String> {
    parse_duration(s).map_err(|e| e.to_string())
}

/// Detect whether the terminal supports colored output
fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if matches!(std::env::var("TERM").as_deref(), Ok("dumb")) {
        return false;
    }

    std::io::stdout().is_terminal()
}

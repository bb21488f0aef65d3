//! Response Time Probe
//!
//! A command-line HTTP response-time probe. It repeatedly issues GET
//! requests against a target URL, records one named latency check per
//! iteration, sleeps between iterations, and reports aggregate check
//! outcomes and latency statistics for a bounded wall-clock run.

pub mod checks;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod probe;
pub mod stats;

// Re-export commonly used types
pub use checks::{Check, CheckOutcome, CheckSink, LoggingSink, SummarySink};
pub use client::{HttpProber, ReqwestProber};
pub use config::{parse_duration, ProbeConfig};
pub use error::{ProbeError, Result};
pub use models::{ProbeStatus, RunSummary, Sample};
pub use probe::ProbeLoop;
pub use stats::LatencyStats;

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Default configuration values
pub mod defaults {
    use std::time::Duration;

    pub const DEFAULT_TARGET_URL: &str = "http://spicy.kebab.solutions:31000";
    pub const DEFAULT_VUS: u32 = 1;
    pub const DEFAULT_DURATION: Duration = Duration::from_secs(120);
    pub const DEFAULT_SLEEP: Duration = Duration::from_secs(10);
    pub const DEFAULT_THRESHOLD_MS: f64 = 500.0;
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
    pub const DEFAULT_ENABLE_COLOR: bool = true;
}

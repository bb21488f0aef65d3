//! Aggregate results of a probe run

use crate::stats::LatencyStats;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Aggregate outcome of a complete probe run across all virtual users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Name of the check evaluated each iteration
    pub check_name: String,

    /// Total iterations performed
    pub iterations: u64,

    /// Number of iterations where the check passed
    pub checks_passed: u64,

    /// Number of iterations where the check failed
    pub checks_failed: u64,

    /// Number of iterations where the request errored or timed out
    pub error_count: u64,

    /// Wall-clock time the run took
    pub elapsed: Duration,

    /// Latency statistics over valid samples
    pub latency: LatencyStats,
}

impl RunSummary {
    pub fn new(
        check_name: String,
        iterations: u64,
        checks_passed: u64,
        error_count: u64,
        elapsed: Duration,
        latency: LatencyStats,
    ) -> Self {
        Self {
            check_name,
            iterations,
            checks_passed,
            checks_failed: iterations - checks_passed,
            error_count,
            elapsed,
            latency,
        }
    }

    /// Check pass rate as a percentage
    pub fn pass_rate(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            (self.checks_passed as f64 / self.iterations as f64) * 100.0
        }
    }

    /// Whether any iteration hit a transport error or timeout
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_rate() {
        let summary = RunSummary::new(
            "Response time is less than 500ms".to_string(),
            4,
            3,
            0,
            Duration::from_secs(40),
            LatencyStats::empty(),
        );

        assert_eq!(summary.checks_failed, 1);
        assert_eq!(summary.pass_rate(), 75.0);
        assert!(!summary.has_errors());
    }

    #[test]
    fn test_empty_run() {
        let summary = RunSummary::new(
            "Response time is less than 500ms".to_string(),
            0,
            0,
            0,
            Duration::ZERO,
            LatencyStats::empty(),
        );

        assert_eq!(summary.pass_rate(), 0.0);
    }
}

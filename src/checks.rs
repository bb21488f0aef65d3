//! Named latency checks and the sinks that record their outcomes
//!
//! A check is a named boolean assertion evaluated once per iteration.
//! A failed check is recorded, never raised: the probe loop keeps going
//! regardless of the outcome.

use crate::logging::Logger;
use crate::models::Sample;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// A named latency assertion against a response-time threshold
#[derive(Debug, Clone)]
pub struct Check {
    name: String,
    threshold_ms: f64,
}

impl Check {
    /// Build the standard latency check for a threshold in milliseconds.
    /// The default threshold of 500 renders the name
    /// `Response time is less than 500ms`.
    pub fn latency_below(threshold_ms: f64) -> Self {
        Self {
            name: format!("Response time is less than {}ms", threshold_ms),
            threshold_ms,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn threshold_ms(&self) -> f64 {
        self.threshold_ms
    }

    /// Evaluate the check against a sample. The comparison is strict:
    /// a duration exactly equal to the threshold fails. A sample with no
    /// valid timing (transport error or timeout) records `false` so an
    /// unreachable target is never counted as meeting the latency goal.
    pub fn evaluate(&self, sample: &Sample) -> CheckOutcome {
        let (passed, duration_ms) = if sample.is_valid() {
            let ms = sample.duration_ms();
            (ms < self.threshold_ms, Some(ms))
        } else {
            (false, None)
        };

        CheckOutcome {
            name: self.name.clone(),
            passed,
            duration_ms,
        }
    }
}

/// Recorded result of one check evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Name of the check that produced this outcome
    pub name: String,

    /// Whether the assertion held
    pub passed: bool,

    /// Observed response time in milliseconds, when a valid sample existed
    pub duration_ms: Option<f64>,
}

/// Receiver for check outcomes, one `(name, passed)` pair per iteration
pub trait CheckSink: Send + Sync {
    fn record(&self, outcome: &CheckOutcome);
}

/// Sink that aggregates pass/fail counts for inspection after a run
#[derive(Debug, Default)]
pub struct SummarySink {
    outcomes: Mutex<Vec<CheckOutcome>>,
}

impl SummarySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of outcomes recorded so far
    pub fn recorded(&self) -> usize {
        self.outcomes.lock().map(|o| o.len()).unwrap_or(0)
    }

    /// Number of passing outcomes recorded so far
    pub fn passed(&self) -> usize {
        self.outcomes
            .lock()
            .map(|o| o.iter().filter(|c| c.passed).count())
            .unwrap_or(0)
    }

    /// Snapshot of all recorded outcomes
    pub fn snapshot(&self) -> Vec<CheckOutcome> {
        self.outcomes.lock().map(|o| o.clone()).unwrap_or_default()
    }
}

impl CheckSink for SummarySink {
    fn record(&self, outcome: &CheckOutcome) {
        if let Ok(mut outcomes) = self.outcomes.lock() {
            outcomes.push(outcome.clone());
        }
    }
}

/// Sink that logs each outcome as it is recorded, for live feedback
pub struct LoggingSink {
    logger: Arc<Logger>,
}

impl LoggingSink {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }
}

impl CheckSink for LoggingSink {
    fn record(&self, outcome: &CheckOutcome) {
        let timing = match outcome.duration_ms {
            Some(ms) => format!("{:.1}ms", ms),
            None => "no response".to_string(),
        };
        self.logger.debug(&format!(
            "check '{}' {} ({})",
            outcome.name,
            if outcome.passed { "passed" } else { "failed" },
            timing
        ));
    }
}

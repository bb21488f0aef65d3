//! Per-request sample data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome classification for a single probe request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbeStatus {
    /// Request completed and a response was received
    Success,
    /// Transport failure (connection refused, DNS failure, etc.)
    Failed,
    /// Request exceeded the configured timeout
    Timeout,
}

/// Record of a single HTTP probe request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    /// HTTP status code received (0 if the request never completed)
    pub http_status: u16,

    /// Wall-clock elapsed time between request send and response receipt
    pub duration: Duration,

    /// Probe outcome classification
    pub status: ProbeStatus,

    /// Timestamp when the request was issued
    pub timestamp: DateTime<Utc>,

    /// Error message if the request failed
    pub error_message: Option<String>,
}

impl Sample {
    /// Create a sample for a completed request
    pub fn success(http_status: u16, duration: Duration) -> Self {
        Self {
            http_status,
            duration,
            status: ProbeStatus::Success,
            timestamp: Utc::now(),
            error_message: None,
        }
    }

    /// Create a sample for a transport failure
    pub fn failed(error_message: String) -> Self {
        Self {
            http_status: 0,
            duration: Duration::ZERO,
            status: ProbeStatus::Failed,
            timestamp: Utc::now(),
            error_message: Some(error_message),
        }
    }

    /// Create a sample for a timed-out request
    pub fn timeout(elapsed: Duration) -> Self {
        Self {
            http_status: 0,
            duration: elapsed,
            status: ProbeStatus::Timeout,
            timestamp: Utc::now(),
            error_message: Some(format!(
                "Request timed out after {:.1}s",
                elapsed.as_secs_f64()
            )),
        }
    }

    /// A sample is valid when a response actually arrived and its timing
    /// can be compared against a latency threshold.
    pub fn is_valid(&self) -> bool {
        matches!(self.status, ProbeStatus::Success)
    }

    /// Elapsed time in milliseconds
    pub fn duration_ms(&self) -> f64 {
        self.duration.as_secs_f64() * 1000.0
    }
}

//! Latency statistics over probe samples

use crate::models::Sample;
use serde::{Deserialize, Serialize};

/// Statistical summary of response times across a probe run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyStats {
    /// Average response time (milliseconds)
    pub avg_ms: f64,

    /// Minimum response time (milliseconds)
    pub min_ms: f64,

    /// Maximum response time (milliseconds)
    pub max_ms: f64,

    /// Standard deviation of response times (milliseconds)
    pub std_dev_ms: f64,

    /// Number of valid samples included
    pub sample_count: usize,
}

impl LatencyStats {
    /// Calculate statistics from a collection of samples. Only valid
    /// samples (where a response actually arrived) are included.
    pub fn from_samples(samples: &[Sample]) -> Self {
        let times: Vec<f64> = samples
            .iter()
            .filter(|s| s.is_valid())
            .map(|s| s.duration_ms())
            .collect();

        let count = times.len();
        if count == 0 {
            return Self::empty();
        }

        let avg = times.iter().sum::<f64>() / count as f64;
        let min = times.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = times.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        let variance = if count > 1 {
            times.iter().map(|&x| (x - avg).powi(2)).sum::<f64>() / count as f64
        } else {
            0.0
        };

        Self {
            avg_ms: avg,
            min_ms: min,
            max_ms: max,
            std_dev_ms: variance.sqrt(),
            sample_count: count,
        }
    }

    /// Create empty statistics
    pub fn empty() -> Self {
        Self {
            avg_ms: 0.0,
            min_ms: 0.0,
            max_ms: 0.0,
            std_dev_ms: 0.0,
            sample_count: 0,
        }
    }

    /// Format average response time for display
    pub fn format_avg(&self) -> String {
        format!("{:.1}ms", self.avg_ms)
    }
}

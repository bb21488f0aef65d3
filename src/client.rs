//! HTTP client implementation and request timing

use crate::error::{ProbeError, Result};
use crate::models::Sample;
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};

/// HTTP prober trait for abstraction and testing
#[async_trait]
pub trait HttpProber: Send + Sync {
    /// Issue a GET request and measure its wall-clock duration.
    ///
    /// Transport failures are surfaced as a failed/errored [`Sample`]
    /// rather than an error: the probe loop does not branch on them.
    async fn get(&self, url: &str) -> Sample;
}

/// reqwest-backed prober used for real runs
pub struct ReqwestProber {
    client: Client,
}

impl ReqwestProber {
    /// Create a prober with the given per-request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("response-time-probe/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProbeError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpProber for ReqwestProber {
    async fn get(&self, url: &str) -> Sample {
        let start = Instant::now();

        match self.client.get(url).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                // Drain the body so the measured duration covers the full
                // exchange, not just the response headers.
                match response.bytes().await {
                    Ok(_) => Sample::success(status, start.elapsed()),
                    Err(e) if e.is_timeout() => Sample::timeout(start.elapsed()),
                    Err(e) => Sample::failed(e.to_string()),
                }
            }
            Err(e) if e.is_timeout() => Sample::timeout(start.elapsed()),
            Err(e) => Sample::failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProbeStatus;

    #[test]
    fn test_prober_construction() {
        let prober = ReqwestProber::new(Duration::from_secs(5));
        assert!(prober.is_ok());
    }

    #[test]
    fn test_connection_refused_becomes_failed_sample() {
        let sample = tokio_test::block_on(async {
            let prober = ReqwestProber::new(Duration::from_secs(2)).unwrap();
            // Port 1 is reserved and nothing listens on it
            prober.get("http://127.0.0.1:1").await
        });

        assert_eq!(sample.status, ProbeStatus::Failed);
        assert!(!sample.is_valid());
        assert!(sample.error_message.is_some());
    }
}

//! The probe loop: wall-clock-bounded GET / check / sleep iterations
//!
//! Each virtual user runs the same loop independently: issue a GET,
//! evaluate one named latency check, report the outcome to the sink,
//! then sleep before the next iteration. The run duration bounds the
//! whole loop, sleeps included; the final sleep is cut short rather
//! than letting the run overshoot.

use crate::checks::{Check, CheckOutcome, CheckSink};
use crate::client::HttpProber;
use crate::config::ProbeConfig;
use crate::error::{ProbeError, Result};
use crate::logging::Logger;
use crate::models::{RunSummary, Sample};
use crate::stats::LatencyStats;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Driver for a complete probe run
pub struct ProbeLoop {
    config: ProbeConfig,
    prober: Arc<dyn HttpProber>,
    sink: Arc<dyn CheckSink>,
    logger: Arc<Logger>,
    check: Check,
}

impl ProbeLoop {
    pub fn new(
        config: ProbeConfig,
        prober: Arc<dyn HttpProber>,
        sink: Arc<dyn CheckSink>,
        logger: Arc<Logger>,
    ) -> Self {
        let check = Check::latency_below(config.threshold_ms);
        Self {
            config,
            prober,
            sink,
            logger,
            check,
        }
    }

    /// The check this loop evaluates each iteration
    pub fn check(&self) -> &Check {
        &self.check
    }

    /// Run the probe loop with `vus` concurrent virtual users until the
    /// configured duration elapses, then aggregate the results.
    pub async fn run(&self) -> Result<RunSummary> {
        let started = Instant::now();
        let deadline = started + self.config.duration;

        let mut handles = Vec::with_capacity(self.config.vus as usize);
        for vu in 0..self.config.vus {
            let actor = VirtualUser {
                id: vu,
                url: self.config.target_url.clone(),
                sleep: self.config.sleep,
                deadline,
                prober: Arc::clone(&self.prober),
                sink: Arc::clone(&self.sink),
                check: self.check.clone(),
                logger: Arc::clone(&self.logger),
            };
            handles.push(tokio::spawn(actor.run()));
        }

        let mut samples = Vec::new();
        let mut checks_passed = 0u64;
        for joined in join_all(handles).await {
            let outcome = joined
                .map_err(|e| ProbeError::execution(format!("Virtual user task failed: {}", e)))?;
            checks_passed += outcome.checks_passed;
            samples.extend(outcome.samples);
        }

        let error_count = samples.iter().filter(|s| !s.is_valid()).count() as u64;
        let latency = LatencyStats::from_samples(&samples);

        Ok(RunSummary::new(
            self.check.name().to_string(),
            samples.len() as u64,
            checks_passed,
            error_count,
            started.elapsed(),
            latency,
        ))
    }
}

/// One simulated concurrent client executing the loop independently
struct VirtualUser {
    id: u32,
    url: String,
    sleep: Duration,
    deadline: Instant,
    prober: Arc<dyn HttpProber>,
    sink: Arc<dyn CheckSink>,
    check: Check,
    logger: Arc<Logger>,
}

/// Samples and pass count collected by one virtual user
struct ActorOutcome {
    samples: Vec<Sample>,
    checks_passed: u64,
}

impl VirtualUser {
    /// Sequential iterations until the shared deadline. Always performs
    /// at least one iteration, even if the first request outlives the
    /// configured duration.
    async fn run(self) -> ActorOutcome {
        let mut samples = Vec::new();
        let mut checks_passed = 0u64;

        loop {
            let (sample, outcome) =
                run_iteration(self.prober.as_ref(), &self.url, &self.check, self.sink.as_ref())
                    .await;

            if let Some(error) = &sample.error_message {
                self.logger
                    .warn(&format!("vu {}: request failed: {}", self.id, error));
            }

            if outcome.passed {
                checks_passed += 1;
            }
            samples.push(sample);

            let now = Instant::now();
            if now >= self.deadline {
                break;
            }

            let sleep_for = self.sleep.min(self.deadline - now);
            if sleep_for < self.sleep {
                // The deadline lands inside the sleep; wait it out and stop
                tokio::time::sleep(sleep_for).await;
                break;
            }
            if !sleep_for.is_zero() {
                tokio::time::sleep(sleep_for).await;
            }
        }

        self.logger.debug(&format!(
            "vu {}: finished after {} iterations",
            self.id,
            samples.len()
        ));

        ActorOutcome {
            samples,
            checks_passed,
        }
    }
}

/// One loop iteration body: GET the URL, evaluate the check, report the
/// outcome. Kept as a plain function so it can be tested in isolation.
pub async fn run_iteration(
    prober: &dyn HttpProber,
    url: &str,
    check: &Check,
    sink: &dyn CheckSink,
) -> (Sample, CheckOutcome) {
    let sample = prober.get(url).await;
    let outcome = check.evaluate(&sample);
    sink.record(&outcome);
    (sample, outcome)
}

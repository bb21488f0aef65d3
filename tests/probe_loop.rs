//! End-to-end probe loop tests against a mock HTTP server
//!
//! These run the real loop driver with the real reqwest prober, using
//! short durations and sleeps so each test finishes quickly.

use response_time_probe::{
    checks::SummarySink,
    client::ReqwestProber,
    config::ProbeConfig,
    logging::{LogFormat, LogLevel, Logger},
    probe::ProbeLoop,
};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn quiet_logger() -> Arc<Logger> {
    Arc::new(Logger::new(LogLevel::Error, LogFormat::Console, false))
}

fn short_run_config(target_url: String) -> ProbeConfig {
    ProbeConfig {
        target_url,
        vus: 1,
        duration: Duration::from_millis(300),
        sleep: Duration::from_millis(50),
        threshold_ms: 500.0,
        timeout: Duration::from_secs(5),
        enable_color: false,
        verbose: false,
        debug: false,
    }
}

fn probe_with_sink(config: ProbeConfig, sink: Arc<SummarySink>) -> ProbeLoop {
    let prober = Arc::new(ReqwestProber::new(config.timeout).expect("client should build"));
    ProbeLoop::new(config, prober, sink, quiet_logger())
}

#[tokio::test]
async fn probe_loop_records_one_check_per_iteration() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let sink = Arc::new(SummarySink::new());
    let probe = probe_with_sink(short_run_config(server.uri()), sink.clone());

    let summary = probe.run().await.expect("run should succeed");

    assert!(summary.iterations >= 1);
    assert_eq!(sink.recorded() as u64, summary.iterations);
    assert!(sink
        .snapshot()
        .iter()
        .all(|o| o.name == "Response time is less than 500ms"));

    // Local mock server responds well under the 500ms threshold
    assert_eq!(summary.checks_passed, summary.iterations);
    assert_eq!(summary.error_count, 0);
    assert_eq!(summary.latency.sample_count as u64, summary.iterations);
}

#[tokio::test]
async fn slow_responses_fail_the_check_without_erroring() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("slow")
                .set_delay(Duration::from_millis(120)),
        )
        .mount(&server)
        .await;

    let mut config = short_run_config(server.uri());
    // Threshold below the mock delay: every check should fail
    config.threshold_ms = 50.0;

    let sink = Arc::new(SummarySink::new());
    let probe = probe_with_sink(config, sink.clone());
    let summary = probe.run().await.expect("run should succeed");

    assert!(summary.iterations >= 1);
    assert_eq!(summary.checks_passed, 0);
    assert_eq!(summary.checks_failed, summary.iterations);
    assert_eq!(summary.error_count, 0);
    assert!(sink.snapshot().iter().all(|o| !o.passed));
}

#[tokio::test]
async fn non_2xx_responses_still_have_measurable_latency() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let sink = Arc::new(SummarySink::new());
    let probe = probe_with_sink(short_run_config(server.uri()), sink.clone());
    let summary = probe.run().await.expect("run should succeed");

    // A 404 is a response, not a transport error
    assert_eq!(summary.error_count, 0);
    assert_eq!(summary.checks_passed, summary.iterations);
}

#[tokio::test]
async fn unreachable_target_records_failed_checks() {
    // Port 1 is reserved; the connection is refused immediately
    let sink = Arc::new(SummarySink::new());
    let probe = probe_with_sink(
        short_run_config("http://127.0.0.1:1".to_string()),
        sink.clone(),
    );
    let summary = probe.run().await.expect("run should succeed");

    assert!(summary.iterations >= 1);
    assert_eq!(summary.checks_passed, 0);
    assert_eq!(summary.error_count, summary.iterations);
    // The check is still recorded once per iteration
    assert_eq!(sink.recorded() as u64, summary.iterations);
    assert!(sink.snapshot().iter().all(|o| o.duration_ms.is_none()));
}

#[tokio::test]
async fn multiple_virtual_users_share_one_sink() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut config = short_run_config(server.uri());
    config.vus = 3;

    let sink = Arc::new(SummarySink::new());
    let probe = probe_with_sink(config, sink.clone());
    let summary = probe.run().await.expect("run should succeed");

    assert!(summary.iterations >= 3);
    assert_eq!(sink.recorded() as u64, summary.iterations);
}

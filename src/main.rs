//! Response Time Probe - Main CLI Application
//!
//! Repeatedly issues GET requests against a target URL, records a named
//! response-time check per iteration, and reports aggregate results.

use clap::Parser;
use response_time_probe::{
    checks::LoggingSink,
    cli::Cli,
    client::ReqwestProber,
    config::parser::load_config,
    error::{ProbeError, Result},
    logging::{LogFormat, LogLevel, Logger},
    output::formatter_for,
    probe::ProbeLoop,
    PKG_NAME, VERSION,
};
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(1);
    }));

    // Parse command line arguments
    let cli = Cli::parse();

    if let Err(e) = run_application(cli).await {
        eprintln!("Error: {}", e);
        print_error_suggestions(&e);
        process::exit(e.exit_code());
    }
}

/// Main application logic
async fn run_application(cli: Cli) -> Result<()> {
    if cli.debug {
        println!("{} v{}", PKG_NAME, VERSION);
        println!("Debug mode enabled");
        println!();
    }

    let log_format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Console
    };

    // Load and validate configuration
    let config = load_config(cli)?;

    let min_level = if config.debug || config.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    let logger = Arc::new(Logger::new(min_level, log_format, config.enable_color));

    if config.debug {
        logger.debug("Configuration loaded successfully:");
        logger.debug(&format!("  Target URL: {}", config.target_url));
        logger.debug(&format!("  Virtual users: {}", config.vus));
        logger.debug(&format!("  Duration: {:.0}s", config.duration.as_secs_f64()));
        logger.debug(&format!("  Sleep: {:.0}s", config.sleep.as_secs_f64()));
        logger.debug(&format!("  Threshold: {}ms", config.threshold_ms));
        logger.debug(&format!("  Timeout: {:.0}s", config.timeout.as_secs_f64()));
    }

    logger.info(&format!(
        "starting probe run: {} (vus={}, duration={:.0}s)",
        config.target_url,
        config.vus,
        config.duration.as_secs_f64()
    ));

    // Build the prober, the check sink, and the loop driver
    let prober = Arc::new(ReqwestProber::new(config.timeout)?);
    let sink = Arc::new(LoggingSink::new(Arc::clone(&logger)));
    let probe = ProbeLoop::new(config.clone(), prober, sink, Arc::clone(&logger));

    // Execute the run
    let summary = probe.run().await?;

    logger.info(&format!(
        "run complete: {} iterations, {:.1}% pass rate",
        summary.iterations,
        summary.pass_rate()
    ));

    // Render the report. Failed checks are data, not a process failure:
    // the run exits 0 either way.
    let formatter = formatter_for(config.enable_color);
    println!("{}", formatter.format_report(&summary, &config)?);

    Ok(())
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &ProbeError) {
    match error {
        ProbeError::Config { .. } | ProbeError::Validation { .. } | ProbeError::Parse { .. } => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Verify the URL format (must start with http:// or https://)");
            eprintln!("  - Durations accept 500ms, 90s, 2m, or 1h forms");
            eprintln!("  - Virtual user count must be at least 1");
        }
        ProbeError::Network { .. } | ProbeError::HttpRequest { .. } => {
            eprintln!();
            eprintln!("Network troubleshooting:");
            eprintln!("  - Check your internet connection");
            eprintln!("  - Verify the target host is reachable");
            eprintln!("  - Test with a different target URL");
        }
        ProbeError::Timeout { .. } => {
            eprintln!();
            eprintln!("Timeout troubleshooting:");
            eprintln!("  - Increase the request timeout with --timeout");
            eprintln!("  - Check the target server load");
        }
        _ => {}
    }
}

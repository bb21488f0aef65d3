//! Configuration loading: defaults, environment, then CLI overrides

use crate::cli::Cli;
use crate::config::ProbeConfig;
use crate::error::{ProbeError, Result};

/// Build the effective configuration for a run.
///
/// Precedence, lowest to highest: built-in defaults, `.env` /
/// environment variables (`PROBE_*`), command-line arguments.
pub fn load_config(cli: Cli) -> Result<ProbeConfig> {
    // Pick up a .env file if one exists; absence is not an error
    dotenv::dotenv().ok();

    cli.validate().map_err(ProbeError::validation)?;

    let mut config = ProbeConfig::default();
    config.merge_from_env()?;
    apply_cli(&mut config, &cli);

    config.validate()?;
    Ok(config)
}

/// Overlay explicitly-passed CLI arguments onto the configuration
fn apply_cli(config: &mut ProbeConfig, cli: &Cli) {
    if let Some(url) = &cli.url {
        config.target_url = url.clone();
    }

    if let Some(vus) = cli.vus {
        config.vus = vus;
    }

    if let Some(duration) = cli.duration {
        config.duration = duration;
    }

    if let Some(sleep) = cli.sleep {
        config.sleep = sleep;
    }

    if let Some(threshold_ms) = cli.threshold_ms {
        config.threshold_ms = threshold_ms;
    }

    if let Some(timeout) = cli.timeout {
        config.timeout = timeout;
    }

    config.enable_color = cli.use_colors();
    config.verbose = cli.verbose;
    config.debug = cli.debug;
}

//! Configuration data model and validation

pub mod parser;

pub use parser::load_config;

use crate::defaults;
use crate::error::{ProbeError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main probe configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Target URL to probe
    #[serde(default = "default_target_url")]
    pub target_url: String,

    /// Number of concurrent virtual users running the loop
    #[serde(default = "default_vus")]
    pub vus: u32,

    /// Total wall-clock duration of the run
    #[serde(default = "default_duration")]
    pub duration: Duration,

    /// Delay between iterations within one virtual user
    #[serde(default = "default_sleep")]
    pub sleep: Duration,

    /// Response-time check threshold in milliseconds
    #[serde(default = "default_threshold_ms")]
    pub threshold_ms: f64,

    /// Per-request timeout
    #[serde(default = "default_timeout")]
    pub timeout: Duration,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

fn default_target_url() -> String {
    defaults::DEFAULT_TARGET_URL.to_string()
}

fn default_vus() -> u32 {
    defaults::DEFAULT_VUS
}

fn default_duration() -> Duration {
    defaults::DEFAULT_DURATION
}

fn default_sleep() -> Duration {
    defaults::DEFAULT_SLEEP
}

fn default_threshold_ms() -> f64 {
    defaults::DEFAULT_THRESHOLD_MS
}

fn default_timeout() -> Duration {
    defaults::DEFAULT_TIMEOUT
}

fn default_enable_color() -> bool {
    defaults::DEFAULT_ENABLE_COLOR
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            target_url: default_target_url(),
            vus: default_vus(),
            duration: default_duration(),
            sleep: default_sleep(),
            threshold_ms: default_threshold_ms(),
            timeout: default_timeout(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl ProbeConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.target_url.is_empty() {
            return Err(ProbeError::config("Target URL cannot be empty"));
        }

        match url::Url::parse(&self.target_url) {
            Ok(parsed) => {
                if parsed.scheme() != "http" && parsed.scheme() != "https" {
                    return Err(ProbeError::config(format!(
                        "Target URL must use http or https: {}",
                        self.target_url
                    )));
                }
            }
            Err(e) => {
                return Err(ProbeError::config(format!(
                    "Invalid target URL '{}': {}",
                    self.target_url, e
                )));
            }
        }

        if self.vus == 0 {
            return Err(ProbeError::config("Virtual user count must be at least 1"));
        }

        if self.vus > 1000 {
            return Err(ProbeError::config("Virtual user count cannot exceed 1000"));
        }

        if self.duration.is_zero() {
            return Err(ProbeError::config("Run duration must be greater than 0"));
        }

        if self.threshold_ms <= 0.0 {
            return Err(ProbeError::config(
                "Check threshold must be greater than 0ms",
            ));
        }

        if self.timeout.is_zero() {
            return Err(ProbeError::config("Request timeout must be greater than 0"));
        }

        Ok(())
    }

    /// Merge environment variables into this configuration
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(url) = std::env::var("PROBE_TARGET_URL") {
            if !url.trim().is_empty() {
                self.target_url = url.trim().to_string();
            }
        }

        if let Ok(vus) = std::env::var("PROBE_VUS") {
            self.vus = vus.trim().parse()?;
        }

        if let Ok(duration) = std::env::var("PROBE_DURATION") {
            self.duration = parse_duration(&duration)?;
        }

        if let Ok(sleep) = std::env::var("PROBE_SLEEP") {
            self.sleep = parse_duration(&sleep)?;
        }

        if let Ok(threshold) = std::env::var("PROBE_THRESHOLD_MS") {
            self.threshold_ms = threshold.trim().parse()?;
        }

        if let Ok(timeout) = std::env::var("PROBE_TIMEOUT") {
            self.timeout = parse_duration(&timeout)?;
        }

        Ok(())
    }
}

/// Parse a human-friendly duration string: `500ms`, `90s`, `2m`, `1h`,
/// or a bare number of seconds.
pub fn parse_duration(input: &str) -> Result<Duration> {
    let s = input.trim();

    if s.is_empty() {
        return Err(ProbeError::parse("Duration cannot be empty"));
    }

    if let Some(value) = s.strip_suffix("ms") {
        let ms: u64 = value
            .trim()
            .parse()
            .map_err(|_| ProbeError::parse(format!("Invalid duration '{}'", input)))?;
        return Ok(Duration::from_millis(ms));
    }

    let (value, multiplier) = match s.chars().last() {
        Some('s') => (&s[..s.len() - 1], 1),
        Some('m') => (&s[..s.len() - 1], 60),
        Some('h') => (&s[..s.len() - 1], 3600),
        Some(c) if c.is_ascii_digit() => (s, 1),
        _ => return Err(ProbeError::parse(format!("Invalid duration '{}'", input))),
    };

    let seconds: u64 = value
        .trim()
        .parse()
        .map_err(|_| ProbeError::parse(format!("Invalid duration '{}'", input)))?;

    Ok(Duration::from_secs(seconds * multiplier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_config_matches_source_script() {
        let config = ProbeConfig::default();
        assert_eq!(config.target_url, "http://spicy.kebab.solutions:31000");
        assert_eq!(config.vus, 1);
        assert_eq!(config.duration, Duration::from_secs(120));
        assert_eq!(config.sleep, Duration::from_secs(10));
        assert_eq!(config.threshold_ms, 500.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_duration_forms() {
        assert_eq!(parse_duration("500ms").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_duration("90s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_duration("2m").unwrap(), Duration::from_secs(120));
        assert_eq!(parse_duration("1h").unwrap(), Duration::from_secs(3600));
        assert_eq!(parse_duration("45").unwrap(), Duration::from_secs(45));
        assert_eq!(parse_duration(" 10s ").unwrap(), Duration::from_secs(10));
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("abc").is_err());
        assert!(parse_duration("10x").is_err());
        assert!(parse_duration("ms").is_err());
        assert!(parse_duration("-5s").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ProbeConfig::default();
        config.target_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        let mut config = ProbeConfig::default();
        config.target_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = ProbeConfig::default();
        config.vus = 0;
        assert!(config.validate().is_err());

        let mut config = ProbeConfig::default();
        config.duration = Duration::ZERO;
        assert!(config.validate().is_err());

        let mut config = ProbeConfig::default();
        config.threshold_ms = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_sleep_is_allowed() {
        let mut config = ProbeConfig::default();
        config.sleep = Duration::ZERO;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_from_env() {
        // Single test mutating PROBE_* variables to avoid races with
        // parallel tests reading the same process environment.
        std::env::set_var("PROBE_TARGET_URL", "http://localhost:8080");
        std::env::set_var("PROBE_VUS", "3");
        std::env::set_var("PROBE_DURATION", "30s");
        std::env::set_var("PROBE_THRESHOLD_MS", "250");

        let mut config = ProbeConfig::default();
        let result = config.merge_from_env();

        std::env::remove_var("PROBE_TARGET_URL");
        std::env::remove_var("PROBE_VUS");
        std::env::remove_var("PROBE_DURATION");
        std::env::remove_var("PROBE_THRESHOLD_MS");

        result.unwrap();
        assert_eq!(config.target_url, "http://localhost:8080");
        assert_eq!(config.vus, 3);
        assert_eq!(config.duration, Duration::from_secs(30));
        assert_eq!(config.threshold_ms, 250.0);
        // Untouched values keep their defaults
        assert_eq!(config.sleep, Duration::from_secs(10));

        // A .env file feeds the same variables through dotenv
        let temp_dir = tempfile::TempDir::new().unwrap();
        let env_path = temp_dir.path().join(".env");
        std::fs::write(&env_path, "PROBE_SLEEP=3s\n").unwrap();
        dotenv::from_path(&env_path).unwrap();

        let mut config = ProbeConfig::default();
        let result = config.merge_from_env();
        std::env::remove_var("PROBE_SLEEP");

        result.unwrap();
        assert_eq!(config.sleep, Duration::from_secs(3));
    }

    proptest! {
        #[test]
        fn prop_parse_duration_seconds(n in 1u64..100_000) {
            let parsed = parse_duration(&format!("{}s", n)).unwrap();
            prop_assert_eq!(parsed, Duration::from_secs(n));
        }

        #[test]
        fn prop_parse_duration_minutes(n in 1u64..10_000) {
            let parsed = parse_duration(&format!("{}m", n)).unwrap();
            prop_assert_eq!(parsed, Duration::from_secs(n * 60));
        }

        #[test]
        fn prop_parse_duration_millis(n in 1u64..10_000_000) {
            let parsed = parse_duration(&format!("{}ms", n)).unwrap();
            prop_assert_eq!(parsed, Duration::from_millis(n));
        }
    }
}

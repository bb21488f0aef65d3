//! Structured logging for probe runs
//!
//! Console and JSON log formats with a per-run correlation id, so probe
//! output can be read by a human or shipped to a log aggregator.

use crate::error::{ProbeError, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    /// Debug level - detailed per-iteration information
    Debug = 0,
    /// Info level - general run information
    Info = 1,
    /// Warning level - potentially harmful situations
    Warn = 2,
    /// Error level - error events, the run can continue
    Error = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// ANSI color code for console output
    fn color_code(&self) -> &'static str {
        match self {
            LogLevel::Debug => "\x1b[36m", // Cyan
            LogLevel::Info => "\x1b[32m",  // Green
            LogLevel::Warn => "\x1b[33m",  // Yellow
            LogLevel::Error => "\x1b[31m", // Red
        }
    }

    fn reset_code() -> &'static str {
        "\x1b[0m"
    }
}

impl std::str::FromStr for LogLevel {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(ProbeError::parse(format!("Invalid log level: {}", s))),
        }
    }
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable console format
    Console,
    /// JSON format for structured logging
    Json,
}

/// Logger with level filtering and a per-run correlation id
pub struct Logger {
    min_level: LogLevel,
    format: LogFormat,
    use_color: bool,
    run_id: Uuid,
}

impl Logger {
    pub fn new(min_level: LogLevel, format: LogFormat, use_color: bool) -> Self {
        Self {
            min_level,
            format,
            use_color,
            run_id: Uuid::new_v4(),
        }
    }

    /// Correlation id identifying this run in log output
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Emit a log entry if it clears the configured level. Logs go to
    /// stderr so stdout stays clean for the run report.
    pub fn log(&self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }

        match self.format {
            LogFormat::Console => {
                let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");
                if self.use_color {
                    eprintln!(
                        "{} {}{}{} {}",
                        timestamp,
                        level.color_code(),
                        level.as_str(),
                        LogLevel::reset_code(),
                        message
                    );
                } else {
                    eprintln!("{} {} {}", timestamp, level.as_str(), message);
                }
            }
            LogFormat::Json => {
                let entry = serde_json::json!({
                    "timestamp": Utc::now().to_rfc3339(),
                    "level": level.as_str(),
                    "message": message,
                    "run_id": self.run_id.to_string(),
                });
                eprintln!("{}", entry);
            }
        }
    }
}

//! Run report rendering
//!
//! Formats the aggregate results of a probe run for the terminal, in
//! plain text or with color.

use crate::config::ProbeConfig;
use crate::error::Result;
use crate::models::RunSummary;
use colored::Colorize;
use std::fmt::Write as _;

/// Renders a completed run summary for display
pub trait ReportFormatter {
    fn format_report(&self, summary: &RunSummary, config: &ProbeConfig) -> Result<String>;
}

/// Plain-text report without ANSI escapes
pub struct PlainFormatter;

/// Colored report for interactive terminals
pub struct ColoredFormatter;

/// Pick a formatter based on the color setting
pub fn formatter_for(enable_color: bool) -> Box<dyn ReportFormatter> {
    if enable_color {
        Box::new(ColoredFormatter)
    } else {
        Box::new(PlainFormatter)
    }
}

fn header(out: &mut String, config: &ProbeConfig, summary: &RunSummary) -> Result<()> {
    writeln!(out, "{}", "=".repeat(64))?;
    writeln!(out, "Response Time Probe Results")?;
    writeln!(out, "{}", "=".repeat(64))?;
    writeln!(out, "Target:        {}", config.target_url)?;
    writeln!(out, "Virtual users: {}", config.vus)?;
    writeln!(out, "Elapsed:       {:.1}s", summary.elapsed.as_secs_f64())?;
    writeln!(out, "Iterations:    {}", summary.iterations)?;
    Ok(())
}

fn latency_line(summary: &RunSummary) -> String {
    let stats = &summary.latency;
    format!(
        "  avg {:.1}ms  min {:.1}ms  max {:.1}ms  std dev {:.1}ms",
        stats.avg_ms, stats.min_ms, stats.max_ms, stats.std_dev_ms
    )
}

impl ReportFormatter for PlainFormatter {
    fn format_report(&self, summary: &RunSummary, config: &ProbeConfig) -> Result<String> {
        let mut out = String::new();
        header(&mut out, config, summary)?;

        writeln!(out)?;
        writeln!(out, "Check: {}", summary.check_name)?;
        writeln!(out, "  Passed:    {}", summary.checks_passed)?;
        writeln!(out, "  Failed:    {}", summary.checks_failed)?;
        writeln!(out, "  Pass rate: {:.1}%", summary.pass_rate())?;

        writeln!(out)?;
        writeln!(
            out,
            "Latency ({} valid samples):",
            summary.latency.sample_count
        )?;
        writeln!(out, "{}", latency_line(summary))?;

        writeln!(out)?;
        writeln!(out, "Errors: {}", summary.error_count)?;

        Ok(out)
    }
}

impl ReportFormatter for ColoredFormatter {
    fn format_report(&self, summary: &RunSummary, config: &ProbeConfig) -> Result<String> {
        let mut out = String::new();
        header(&mut out, config, summary)?;

        let pass_rate = format!("{:.1}%", summary.pass_rate());
        let pass_rate = if summary.pass_rate() >= 100.0 {
            pass_rate.green().bold()
        } else if summary.pass_rate() >= 90.0 {
            pass_rate.yellow().bold()
        } else {
            pass_rate.red().bold()
        };

        writeln!(out)?;
        writeln!(out, "Check: {}", summary.check_name.bold())?;
        writeln!(
            out,
            "  Passed:    {}",
            summary.checks_passed.to_string().green()
        )?;
        writeln!(
            out,
            "  Failed:    {}",
            summary.checks_failed.to_string().red()
        )?;
        writeln!(out, "  Pass rate: {}", pass_rate)?;

        writeln!(out)?;
        writeln!(
            out,
            "Latency ({} valid samples):",
            summary.latency.sample_count
        )?;
        writeln!(out, "{}", latency_line(summary))?;

        writeln!(out)?;
        let errors = summary.error_count.to_string();
        writeln!(
            out,
            "Errors: {}",
            if summary.has_errors() {
                errors.red().bold()
            } else {
                errors.normal()
            }
        )?;

        Ok(out)
    }
}

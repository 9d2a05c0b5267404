// ABOUTME: Tracing subscriber setup for applications embedding the analytics engine
// ABOUTME: Reads level, format and detail flags from the environment and installs a registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

//! Structured logging configuration
//!
//! The engine itself only emits `tracing` events. Embedding applications call
//! [`LoggingConfig::init`] (or [`init_from_env`]) once at startup to see them.

use std::env;
use std::fmt;
use std::io;

use anyhow::{Context, Result};
use pulsefolio_intelligence::AnalysisReport;
use serde_json::json;
use tracing::info;
use tracing_subscriber::{
    fmt::{self as subscriber_fmt, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Service name reported in startup logs
pub const SERVICE_NAME: &str = "pulsefolio";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)] // Independent output toggles
pub struct LoggingConfig {
    /// Filter directive (trace, debug, info, warn, error, or a full `EnvFilter` string)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread ids and names
    pub include_thread: bool,
    /// Emit span open/close events
    pub include_spans: bool,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Multi-line human readable output
    #[default]
    Pretty,
    /// Single-line output without targets
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, falling back to `Pretty`
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
            Self::Compact => "compact",
        })
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Build configuration from `RUST_LOG`, `LOG_FORMAT`, `ENVIRONMENT` and the
    /// `LOG_INCLUDE_*` flags
    ///
    /// Production turns on location, thread and span details.
    #[must_use]
    pub fn from_env() -> Self {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            format: env::var("LOG_FORMAT").map_or(LogFormat::Pretty, |v| LogFormat::parse(&v)),
            include_location: is_production || flag_enabled("LOG_INCLUDE_LOCATION"),
            include_thread: is_production || flag_enabled("LOG_INCLUDE_THREAD"),
            include_spans: is_production || flag_enabled("LOG_INCLUDE_SPANS"),
            environment,
        }
    }

    /// Filter for the configured level with the engine crates at the same level
    ///
    /// # Errors
    ///
    /// Returns an error if `level` is not a valid filter directive
    pub fn env_filter(&self) -> Result<EnvFilter> {
        let mut filter = EnvFilter::try_new(&self.level)
            .with_context(|| format!("invalid log filter '{}'", self.level))?;
        if !self.level.contains('=') {
            for target in ["pulsefolio", "pulsefolio_core", "pulsefolio_intelligence"] {
                filter = filter.add_directive(
                    format!("{target}={}", self.level)
                        .parse()
                        .with_context(|| format!("invalid log level '{}'", self.level))?,
                );
            }
        }
        Ok(filter)
    }

    /// Install the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if the filter is invalid or a global subscriber is
    /// already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter()?);
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let installed = match self.format {
            LogFormat::Json => registry
                .with(
                    subscriber_fmt::layer()
                        .json()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_writer(io::stdout)
                        .with_span_events(span_events),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    subscriber_fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_writer(io::stdout)
                        .with_span_events(span_events),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    subscriber_fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stdout)
                        .with_span_events(FmtSpan::NONE),
                )
                .try_init(),
        };
        installed.context("failed to install tracing subscriber")?;

        self.log_startup_info();
        Ok(())
    }

    /// Configuration summary as structured JSON
    #[must_use]
    pub fn summary(&self) -> serde_json::Value {
        json!({
            "service": {
                "name": SERVICE_NAME,
                "version": env!("CARGO_PKG_VERSION"),
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": self.format.to_string(),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread,
                    "spans": self.include_spans
                }
            }
        })
    }

    fn log_startup_info(&self) {
        info!(
            service.name = SERVICE_NAME,
            service.version = env!("CARGO_PKG_VERSION"),
            environment = %self.environment,
            log.level = %self.level,
            log.format = %self.format,
            "Pulsefolio analytics logging initialized"
        );
        info!("Logging configuration: {}", self.summary());
    }
}

fn flag_enabled(name: &str) -> bool {
    env::var(name).is_ok_and(|v| v != "false" && v != "0")
}

/// Initialize logging with default configuration
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_default() -> Result<()> {
    LoggingConfig::default().init()
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Structured one-line summaries of engine output
pub struct AnalysisLogger;

impl AnalysisLogger {
    /// Log the headline numbers of a report at info level
    pub fn log_report(report: &AnalysisReport) {
        let summary = report.fitness_summary.as_ref();
        info!(
            analysis.activities = report.activity_count,
            analysis.lthr = ?report.lthr,
            fitness.ctl = ?summary.map(|s| s.ctl),
            fitness.atl = ?summary.map(|s| s.atl),
            fitness.tsb = ?summary.map(|s| s.tsb),
            race.predictions = report.race_predictions.len(),
            recovery.status = ?report.recovery.status,
            recovery.risk_score = report.recovery.risk_score,
            "Analysis report"
        );
    }
}

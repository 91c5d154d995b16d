// ABOUTME: Logging configuration and structured logging setup for observability
// ABOUTME: Configures log level and output format from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

//! Structured logging configuration.
//!
//! The library crates emit `tracing` events; this module is where a binary
//! decides what to do with them. Level and format come from `REMY_LOG_LEVEL`
//! and `REMY_LOG_FORMAT`, with pretty/compact/json formats.

use std::str::FromStr;

use anyhow::{Context, Result};
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Output format for log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Multi-line human-readable output
    Pretty,
    /// Single-line human-readable output
    #[default]
    Compact,
    /// Newline-delimited JSON for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter directive (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Configuration from `REMY_LOG_LEVEL` / `REMY_LOG_FORMAT`, with
    /// defaults for unset variables. An unparseable format falls back to
    /// compact rather than failing startup.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(level) = std::env::var("REMY_LOG_LEVEL") {
            config.level = level;
        }
        if let Ok(format) = std::env::var("REMY_LOG_FORMAT") {
            config.format = format.parse().unwrap_or_default();
        }
        config
    }

    /// Install the global subscriber for this configuration.
    ///
    /// # Errors
    ///
    /// Fails when the level directive is invalid or a subscriber is already
    /// installed.
    pub fn init(&self) -> Result<()> {
        let filter = EnvFilter::try_new(&self.level)
            .with_context(|| format!("invalid log level directive: {}", self.level))?;
        let format_layer = match self.format {
            LogFormat::Pretty => fmt::layer().pretty().boxed(),
            LogFormat::Compact => fmt::layer().compact().boxed(),
            LogFormat::Json => fmt::layer().json().boxed(),
        };
        tracing_subscriber::registry()
            .with(filter)
            .with(format_layer)
            .try_init()
            .context("failed to install tracing subscriber")?;
        Ok(())
    }
}

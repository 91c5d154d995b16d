// ABOUTME: Engine configuration with scoring, batching, and ranking sub-structs
// ABOUTME: Supports environment-variable overrides with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

//! Engine Configuration
//!
//! Tunable parameters for the recommendation pipeline. The ingredient/model
//! blend weights are deliberately *not* configurable (see
//! [`crate::constants::scoring`]); the knobs here are the pantry bonus
//! factor, oracle batch sizes, and the alternates cap.
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export REMY_PANTRY_BONUS_BETA=0.3
//!    export REMY_CLASSIFIER_BATCH_SIZE=200
//!    ```
//! 2. Default values (if env vars are not set)

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::scoring::{
    DEFAULT_ORACLE_BATCH_SIZE, DEFAULT_PANTRY_BONUS_BETA, MAX_ALTERNATES, MAX_ORACLE_BATCH_SIZE,
    MIN_ORACLE_BATCH_SIZE,
};

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An override value could not be parsed
    #[error("parse error: {0}")]
    Parse(String),

    /// A value was outside its permitted range
    #[error("value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Match scoring parameters
    #[serde(default)]
    pub scoring: ScoringConfig,
    /// Oracle batching parameters
    #[serde(default)]
    pub batching: BatchingConfig,
    /// Ranking output limits
    #[serde(default)]
    pub limits: RankingLimits,
}

/// Match scoring parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Pantry-utilization bonus factor applied in flexible mode
    pub pantry_bonus_beta: f64,
}

/// Oracle batching parameters.
///
/// Batch sizes are throughput tuning only — pipeline results are independent
/// of them by contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchingConfig {
    /// Chunk size for classifier prediction batches
    pub classifier_batch_size: usize,
    /// Chunk size for relevance model inference batches
    pub relevance_batch_size: usize,
}

/// Ranking output limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingLimits {
    /// Maximum number of alternates returned alongside the top pick
    pub max_alternates: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            pantry_bonus_beta: DEFAULT_PANTRY_BONUS_BETA,
        }
    }
}

impl Default for BatchingConfig {
    fn default() -> Self {
        Self {
            classifier_batch_size: DEFAULT_ORACLE_BATCH_SIZE,
            relevance_batch_size: DEFAULT_ORACLE_BATCH_SIZE,
        }
    }
}

impl Default for RankingLimits {
    fn default() -> Self {
        Self {
            max_alternates: MAX_ALTERNATES,
        }
    }
}

impl EngineConfig {
    /// Load configuration from `REMY_*` environment variables, falling back
    /// to defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a set variable fails to parse or a value
    /// is out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(beta) = read_env("REMY_PANTRY_BONUS_BETA")? {
            config.scoring.pantry_bonus_beta = beta;
        }
        if let Some(size) = read_env("REMY_CLASSIFIER_BATCH_SIZE")? {
            config.batching.classifier_batch_size = size;
        }
        if let Some(size) = read_env("REMY_RELEVANCE_BATCH_SIZE")? {
            config.batching.relevance_batch_size = size;
        }
        if let Some(cap) = read_env("REMY_MAX_ALTERNATES")? {
            config.limits.max_alternates = cap;
        }
        config.validate()?;
        Ok(config)
    }

    /// Validate all parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValueOutOfRange`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.scoring.pantry_bonus_beta.is_finite() || self.scoring.pantry_bonus_beta < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "pantry_bonus_beta must be finite and non-negative",
            ));
        }
        for size in [
            self.batching.classifier_batch_size,
            self.batching.relevance_batch_size,
        ] {
            if !(MIN_ORACLE_BATCH_SIZE..=MAX_ORACLE_BATCH_SIZE).contains(&size) {
                return Err(ConfigError::ValueOutOfRange(
                    "oracle batch size outside permitted range",
                ));
            }
        }
        if self.limits.max_alternates > MAX_ALTERNATES {
            return Err(ConfigError::ValueOutOfRange(
                "max_alternates exceeds the fixed alternates cap",
            ));
        }
        Ok(())
    }
}

fn read_env<T: std::str::FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("{name}={raw}"))),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => {
            Err(ConfigError::Parse(format!("{name} is not valid unicode")))
        }
    }
}

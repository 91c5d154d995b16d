// ABOUTME: Integration tests for engine configuration defaults and validation
// ABOUTME: Covers default values, range checks, and the fixed alternates ceiling
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

//! Tests for engine configuration including:
//! - Default values matching the scoring constants
//! - Validation of the bonus factor and batch sizes
//! - The alternates cap never exceeding the fixed maximum

use remy_recommender::config::{
    BatchingConfig, ConfigError, EngineConfig, RankingLimits, ScoringConfig,
};

const EPSILON: f64 = 1e-9;

// ============================================================================
// Default Value Tests
// ============================================================================

#[test]
fn test_defaults_match_scoring_constants() {
    let config = EngineConfig::default();
    assert!((config.scoring.pantry_bonus_beta - 0.2).abs() < EPSILON);
    assert_eq!(config.batching.classifier_batch_size, 500);
    assert_eq!(config.batching.relevance_batch_size, 500);
    assert_eq!(config.limits.max_alternates, 10);
    config.validate().unwrap();
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_negative_beta_is_rejected() {
    let config = EngineConfig {
        scoring: ScoringConfig {
            pantry_bonus_beta: -0.1,
        },
        ..EngineConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_non_finite_beta_is_rejected() {
    let config = EngineConfig {
        scoring: ScoringConfig {
            pantry_bonus_beta: f64::NAN,
        },
        ..EngineConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_zero_batch_size_is_rejected() {
    let config = EngineConfig {
        batching: BatchingConfig {
            classifier_batch_size: 0,
            ..BatchingConfig::default()
        },
        ..EngineConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_oversized_batch_is_rejected() {
    let config = EngineConfig {
        batching: BatchingConfig {
            relevance_batch_size: 1_000_000,
            ..BatchingConfig::default()
        },
        ..EngineConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_alternates_cannot_exceed_fixed_cap() {
    let config = EngineConfig {
        limits: RankingLimits { max_alternates: 11 },
        ..EngineConfig::default()
    };
    assert!(config.validate().is_err());

    let config = EngineConfig {
        limits: RankingLimits { max_alternates: 3 },
        ..EngineConfig::default()
    };
    config.validate().unwrap();
}

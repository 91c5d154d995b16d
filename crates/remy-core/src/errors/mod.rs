// ABOUTME: Unified error handling for the Remy recommendation pipeline
// ABOUTME: Defines RecommendationError, OracleError, and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

//! # Unified Error Handling
//!
//! Error types for the recommendation pipeline. The taxonomy follows three
//! tiers:
//!
//! - **Input malformation** is recovered locally (defaulting, normalization)
//!   and never surfaces as an error.
//! - **Empty-result conditions** are not errors; they are represented as a
//!   [`RecommendationResult`](crate::models::RecommendationResult) with no
//!   top pick and a typed empty reason.
//! - **Oracle failures** are fatal for the orchestration call: the engine
//!   does not guess fallback scores, and no partial ranking is produced.

use thiserror::Error;

use crate::config::ConfigError;

/// Standard result type used across the engine crates
pub type AppResult<T> = Result<T, RecommendationError>;

/// Result type for oracle invocations
pub type OracleResult<T> = Result<T, OracleError>;

/// Top-level error for a recommendation request
#[derive(Debug, Error)]
pub enum RecommendationError {
    /// An external oracle (classifier or relevance model) failed or returned
    /// a malformed shape. The caller decides whether to retry or abort.
    #[error("oracle failure during {stage}: {source}")]
    Oracle {
        /// Pipeline stage that invoked the oracle
        stage: &'static str,
        /// Underlying oracle error
        #[source]
        source: OracleError,
    },

    /// A request value could not be interpreted at all (distinct from the
    /// recoverable malformations handled by defaulting)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Recipe corpus could not be read or deserialized
    #[error("corpus error: {0}")]
    Corpus(String),

    /// Engine configuration was invalid
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RecommendationError {
    /// Wrap an oracle error with the pipeline stage that triggered it
    #[must_use]
    pub const fn oracle(stage: &'static str, source: OracleError) -> Self {
        Self::Oracle { stage, source }
    }
}

/// Errors produced by the oracle seam (classifiers, relevance model)
#[derive(Debug, Error)]
pub enum OracleError {
    /// A batch prediction returned a different number of outputs than inputs.
    /// Classifier contracts are length-equal and order-preserving.
    #[error("batch returned {actual} outputs for {expected} inputs")]
    ShapeMismatch {
        /// Number of inputs submitted in the batch
        expected: usize,
        /// Number of outputs the oracle returned
        actual: usize,
    },

    /// The oracle invocation itself failed
    #[error("invocation failed: {0}")]
    Invocation(String),
}

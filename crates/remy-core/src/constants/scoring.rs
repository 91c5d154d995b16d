// ABOUTME: Scoring weights, match credits, and pipeline limits
// ABOUTME: Fixed numeric constants for the match scorer and candidate ranker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

//! Scoring constants
//!
//! The ingredient/relevance blend is fixed: ingredient feasibility dominates
//! and the learned relevance signal is a tie-breaking nudge. These are
//! deliberately constants rather than configuration — changing them changes
//! every historical score.

/// Weight of the ingredient match score in the final blend
pub const INGREDIENT_SCORE_WEIGHT: f64 = 0.95;

/// Weight of the learned relevance score in the final blend
pub const MODEL_SCORE_WEIGHT: f64 = 0.05;

/// Credit for a recipe ingredient found directly in the augmented pantry
pub const DIRECT_MATCH_CREDIT: f64 = 1.0;

/// Credit for a recipe ingredient covered only through a substitution
pub const SUBSTITUTE_MATCH_CREDIT: f64 = 0.5;

/// Default pantry-utilization bonus factor (`beta`)
pub const DEFAULT_PANTRY_BONUS_BETA: f64 = 0.2;

/// Maximum number of alternate recipes returned alongside the top pick
pub const MAX_ALTERNATES: usize = 10;

/// Servings assumed when the preference source omits or mangles the value
pub const DEFAULT_SERVINGS: f64 = 4.0;

/// Default chunk size for batched oracle invocations
pub const DEFAULT_ORACLE_BATCH_SIZE: usize = 500;

/// Smallest permitted oracle batch size
pub const MIN_ORACLE_BATCH_SIZE: usize = 1;

/// Largest permitted oracle batch size
pub const MAX_ORACLE_BATCH_SIZE: usize = 5000;

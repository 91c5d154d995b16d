// ABOUTME: Core oracle traits for classification and relevance scoring
// ABOUTME: Contracts are length-equal, order-preserving, and deterministic per input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

//! Oracle trait contracts.
//!
//! Oracles are synchronous: the engine core is single-threaded per request
//! and the only blocking points are these in-process inference calls. A
//! caller-supplied timeout around an oracle invocation is the surrounding
//! orchestrator's responsibility, not part of these contracts.

use std::collections::HashMap;

use remy_core::errors::OracleResult;
use remy_core::models::RecipeId;

/// A label classifier (cuisine or meal type).
///
/// # Contract
///
/// `predict` returns exactly one label per input text, in input order. A
/// length mismatch is a malformed shape and is treated as a fatal oracle
/// failure by the caller. For fixed inputs the output must be deterministic.
pub trait LabelClassifier {
    /// Predict one label per feature text
    ///
    /// # Errors
    ///
    /// Returns [`OracleError`](remy_core::errors::OracleError) when the
    /// underlying model invocation fails.
    fn predict(&self, texts: &[String]) -> OracleResult<Vec<String>>;
}

/// A learned recipe relevance model.
///
/// # Contract
///
/// `infer` scores a batch of `(recipe id, feature text)` pairs for the
/// requested servings and returns scores indexed by recipe id. The model's
/// identifier space may not cover every requested recipe; absent ids are
/// simply absent from the returned map, and the caller defaults their score.
/// Score range is unspecified but must be mutually comparable.
pub trait RelevanceModel {
    /// Score a batch of recipes
    ///
    /// # Errors
    ///
    /// Returns [`OracleError`](remy_core::errors::OracleError) when the
    /// underlying model invocation fails.
    fn infer(
        &self,
        inputs: &[(RecipeId, String)],
        servings: f64,
    ) -> OracleResult<HashMap<RecipeId, f64>>;
}

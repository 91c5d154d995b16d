// ABOUTME: Table-backed relevance model indexed by recipe id
// ABOUTME: Reference implementation for tests and the CLI demo; absent ids stay absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

//! Table relevance model.
//!
//! Serves pre-computed relevance scores from an id-indexed table, matching
//! the contract of a loaded ranking model whose identifier space may not
//! cover the whole corpus. Ids outside the table are simply omitted from the
//! result; the ranker defaults their score. The requested servings value is
//! accepted but does not alter table lookups.

use std::collections::HashMap;

use serde::Deserialize;

use remy_core::errors::{OracleError, OracleResult};
use remy_core::models::RecipeId;

use crate::core::RelevanceModel;

/// Relevance model backed by a static id → score table
#[derive(Debug, Clone, Default)]
pub struct TableRelevanceModel {
    scores: HashMap<RecipeId, f64>,
}

/// On-disk shape of a score table entry
#[derive(Debug, Deserialize)]
struct ScoreRecord {
    id: RecipeId,
    score: f64,
}

impl TableRelevanceModel {
    /// Model with an empty table; every lookup misses
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Model over the given `(id, score)` pairs
    #[must_use]
    pub fn from_scores<I>(scores: I) -> Self
    where
        I: IntoIterator<Item = (RecipeId, f64)>,
    {
        Self {
            scores: scores.into_iter().collect(),
        }
    }

    /// Parse a JSON score table (`[{"id": 7, "score": 0.42}, ...]`)
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::Invocation`] when the document does not match
    /// the schema.
    pub fn from_json(raw: &str) -> OracleResult<Self> {
        let records: Vec<ScoreRecord> = serde_json::from_str(raw)
            .map_err(|e| OracleError::Invocation(format!("score table parse failure: {e}")))?;
        Ok(Self::from_scores(
            records.into_iter().map(|record| (record.id, record.score)),
        ))
    }

    /// Number of scored recipe ids
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl RelevanceModel for TableRelevanceModel {
    fn infer(
        &self,
        inputs: &[(RecipeId, String)],
        _servings: f64,
    ) -> OracleResult<HashMap<RecipeId, f64>> {
        Ok(inputs
            .iter()
            .filter_map(|(id, _)| self.scores.get(id).map(|score| (*id, *score)))
            .collect())
    }
}

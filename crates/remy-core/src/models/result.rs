// ABOUTME: Recommendation result with top pick, alternates, and typed empty states
// ABOUTME: Both defined empty outcomes are surfaced distinctly to the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

use serde::{Deserialize, Serialize};

use super::Recipe;

/// Which pipeline stage produced an empty result.
///
/// Both states are defined, non-error outcomes; callers branch on
/// [`RecommendationResult::top`] being `None` rather than on errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyReason {
    /// No recipe in the corpus matched the requested cuisine and meal type
    NoLabelMatch,
    /// Label matches existed, but none were feasible with the user's
    /// ingredients under strict mode
    NoFeasibleMatch,
}

impl EmptyReason {
    /// Human-readable description for logs and CLI output
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::NoLabelMatch => "no recipes matched the requested cuisine and meal type",
            Self::NoFeasibleMatch => "no recipes were feasible with the available ingredients",
        }
    }
}

/// Outcome of a recommendation request.
///
/// Constructed once per request and immutable. `top` is `None` iff no recipe
/// survived filtering, in which case `empty_reason` names the stage that
/// emptied the pipeline and `alternates` is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Highest-ranked recipe, if any survived filtering
    pub top: Option<Recipe>,
    /// Up to ten further recipes in rank order
    pub alternates: Vec<Recipe>,
    /// Present iff `top` is `None`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_reason: Option<EmptyReason>,
}

impl RecommendationResult {
    /// Result with a top pick and rank-ordered alternates
    #[must_use]
    pub const fn found(top: Recipe, alternates: Vec<Recipe>) -> Self {
        Self {
            top: Some(top),
            alternates,
            empty_reason: None,
        }
    }

    /// Empty result attributed to the stage that produced it
    #[must_use]
    pub const fn empty(reason: EmptyReason) -> Self {
        Self {
            top: None,
            alternates: Vec::new(),
            empty_reason: Some(reason),
        }
    }

    /// Whether no recipe survived filtering
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.top.is_none()
    }
}

// ABOUTME: Ingredient-matching and ranking engine for the Remy recipe platform
// ABOUTME: Deterministic filter/score/rank pipeline over injected oracle collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

#![deny(unsafe_code)]

//! # Remy Intelligence
//!
//! The ingredient-matching and ranking engine: a deterministic scoring
//! pipeline that reconciles a user's pantry against a recipe corpus and
//! produces a small, ordered candidate list.
//!
//! ## Pipeline
//!
//! Data flows one direction through pure stages:
//!
//! 1. [`CorpusFilter`] narrows the corpus using classifier-predicted cuisine
//!    and meal-type labels
//! 2. [`MatchScorer`] computes a bounded `[0, 1]` compatibility score per
//!    recipe from the user's pantry and policy flags
//! 3. [`CandidateRanker`] blends the match score with a learned relevance
//!    score, sorts stably, and selects the top pick plus alternates
//! 4. [`RecommendationEngine`] sequences the stages and surfaces both empty
//!    terminal states distinctly
//!
//! No stage mutates another's state; the only shared data are the read-only
//! process-wide constants (default ingredients, substitution table). All
//! oracle collaborators are injected as trait handles, loaded and owned by
//! the caller.

/// Recommendation orchestrator sequencing filter and rank stages
pub mod engine;

/// Classifier-driven corpus narrowing
pub mod filter;

/// Pantry-vs-recipe compatibility scoring
pub mod matching;

/// Ingredient canonicalization entry points
pub mod normalizer;

/// Score blending, sorting, and candidate selection
pub mod ranking;

pub use engine::{EngineOracles, RecommendationEngine};
pub use filter::CorpusFilter;
pub use matching::MatchScorer;
pub use ranking::CandidateRanker;

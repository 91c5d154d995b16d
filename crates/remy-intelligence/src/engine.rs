// ABOUTME: Recommendation orchestrator sequencing corpus filter and candidate ranking
// ABOUTME: Surfaces both empty terminal states distinctly and never invents oracle scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

//! # Recommendation Engine
//!
//! Orchestrates the pipeline for one request: label filtering, ingredient
//! scoring, relevance blending, ranking. The two defined empty outcomes are
//! distinguishable by the caller: an empty filter result short-circuits
//! before any relevance oracle call (`NoLabelMatch`), while a strict-mode
//! wipeout after scoring is `NoFeasibleMatch`.
//!
//! Oracle failures are fatal for the request — the engine does not guess
//! fallback scores, and the caller decides whether to retry or abort.

use tracing::info;
use uuid::Uuid;

use remy_core::config::EngineConfig;
use remy_core::constants::{DefaultIngredients, SubstitutionTable};
use remy_core::errors::AppResult;
use remy_core::models::{EmptyReason, Recipe, RecommendationResult, UserProfile};
use remy_oracles::{BatchPolicy, LabelClassifier, RelevanceModel};

use crate::filter::CorpusFilter;
use crate::matching::MatchScorer;
use crate::ranking::CandidateRanker;

/// The three external scoring oracles consumed by the engine.
///
/// Loaded once by the caller (load-once, read-only lifecycle) and passed in
/// as handles; the engine never manages model files or caches.
#[derive(Clone, Copy)]
pub struct EngineOracles<'a> {
    /// Cuisine label classifier
    pub cuisine: &'a dyn LabelClassifier,
    /// Meal-type label classifier
    pub meal_type: &'a dyn LabelClassifier,
    /// Learned recipe relevance model
    pub relevance: &'a dyn RelevanceModel,
}

/// Recommendation orchestrator
pub struct RecommendationEngine<'a> {
    oracles: EngineOracles<'a>,
    config: EngineConfig,
    defaults: &'a DefaultIngredients,
    substitutions: &'a SubstitutionTable,
}

impl<'a> RecommendationEngine<'a> {
    /// Engine over the given oracles with default configuration and the
    /// process-wide constant tables
    #[must_use]
    pub fn new(oracles: EngineOracles<'a>) -> Self {
        Self {
            oracles,
            config: EngineConfig::default(),
            defaults: DefaultIngredients::global(),
            substitutions: SubstitutionTable::global(),
        }
    }

    /// Override the engine configuration
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the constant tables (primarily for tests)
    #[must_use]
    pub const fn with_tables(
        mut self,
        defaults: &'a DefaultIngredients,
        substitutions: &'a SubstitutionTable,
    ) -> Self {
        self.defaults = defaults;
        self.substitutions = substitutions;
        self
    }

    /// Produce a recommendation for this user from the corpus.
    ///
    /// Always returns a structurally valid [`RecommendationResult`]; callers
    /// branch on `top == None` (with its typed reason) rather than on errors
    /// for the two defined empty states.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendationError::Oracle`](remy_core::errors::RecommendationError::Oracle)
    /// when a classifier or the relevance model fails or returns a malformed
    /// shape.
    pub fn recommend(
        &self,
        corpus: Vec<Recipe>,
        profile: &UserProfile,
    ) -> AppResult<RecommendationResult> {
        let request_id = Uuid::new_v4();
        let target_cuisine = profile.cuisine_label();
        let target_meal_type = profile.meal_type.category_label();
        let span = tracing::info_span!(
            "recommend",
            %request_id,
            cuisine = %target_cuisine,
            meal_type = target_meal_type,
        );
        let _guard = span.enter();

        let corpus_size = corpus.len();
        let filter = CorpusFilter::new(self.oracles.cuisine, self.oracles.meal_type)
            .with_batching(BatchPolicy::new(self.config.batching.classifier_batch_size));
        let candidates = filter.filter(corpus, &target_cuisine, target_meal_type)?;
        info!(
            corpus_size,
            candidates = candidates.len(),
            "label filtering complete"
        );
        if candidates.is_empty() {
            // Short-circuit: the relevance oracle is never consulted.
            info!("no recipes matched the requested cuisine and meal type");
            return Ok(RecommendationResult::empty(EmptyReason::NoLabelMatch));
        }

        let scorer = MatchScorer::with_tables(self.defaults, self.substitutions)
            .with_beta(self.config.scoring.pantry_bonus_beta);
        let ranker = CandidateRanker::new(self.oracles.relevance)
            .with_scorer(scorer)
            .with_batching(BatchPolicy::new(self.config.batching.relevance_batch_size))
            .with_max_alternates(self.config.limits.max_alternates);
        let result = ranker.rank(candidates, profile)?;

        if let Some(top) = &result.top {
            info!(
                top_id = %top.id,
                top_name = %top.name,
                final_score = top.final_score.unwrap_or(0.0),
                alternates = result.alternates.len(),
                "recommendation complete"
            );
        }
        Ok(result)
    }
}

// ABOUTME: Candidate ranking blending ingredient match and learned relevance scores
// ABOUTME: Stable descending sort; ingredient feasibility dominates the fixed blend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

//! # Candidate Ranker
//!
//! Assigns each surviving recipe an ingredient match score and a learned
//! relevance score, blends them with the fixed 0.95/0.05 weighting, and
//! selects the top pick plus up to ten alternates.
//!
//! Per-recipe match scoring is embarrassingly parallel: each recipe's
//! computation reads only shared immutable inputs and writes only its own
//! score fields, so it runs on the rayon pool with output order preserved.
//!
//! The sort is stable: equal final scores keep their pre-sort relative
//! order.

use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::{debug, info};

use remy_core::constants::scoring::{
    INGREDIENT_SCORE_WEIGHT, MAX_ALTERNATES, MODEL_SCORE_WEIGHT,
};
use remy_core::errors::{AppResult, RecommendationError};
use remy_core::models::{EmptyReason, Ingredient, Recipe, RecipeId, RecommendationResult, UserProfile};
use remy_oracles::{BatchPolicy, RelevanceModel};

use crate::matching::MatchScorer;

/// Final-stage ranker over label-filtered recipes
pub struct CandidateRanker<'a> {
    relevance_oracle: &'a dyn RelevanceModel,
    scorer: MatchScorer<'a>,
    batching: BatchPolicy,
    max_alternates: usize,
}

impl<'a> CandidateRanker<'a> {
    /// Ranker over the relevance oracle with the process-wide scorer and
    /// default limits
    #[must_use]
    pub fn new(relevance_oracle: &'a dyn RelevanceModel) -> Self {
        Self {
            relevance_oracle,
            scorer: MatchScorer::new(),
            batching: BatchPolicy::default(),
            max_alternates: MAX_ALTERNATES,
        }
    }

    /// Override the match scorer (custom tables or bonus factor)
    #[must_use]
    pub const fn with_scorer(mut self, scorer: MatchScorer<'a>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Override the batch policy (throughput tuning only)
    #[must_use]
    pub const fn with_batching(mut self, batching: BatchPolicy) -> Self {
        self.batching = batching;
        self
    }

    /// Override the alternates cap (never above the fixed maximum)
    #[must_use]
    pub fn with_max_alternates(mut self, max_alternates: usize) -> Self {
        self.max_alternates = max_alternates.min(MAX_ALTERNATES);
        self
    }

    /// Score, blend, and rank the recipes for this user.
    ///
    /// In strict mode (`!willing_to_buy_more`) every recipe with a zero
    /// ingredient score is dropped before the relevance oracle is consulted;
    /// an empty survivor set is the defined `NoFeasibleMatch` terminal
    /// state, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendationError::Oracle`] when the relevance model
    /// fails. No partial or best-effort ranking is produced.
    pub fn rank(
        &self,
        mut recipes: Vec<Recipe>,
        profile: &UserProfile,
    ) -> AppResult<RecommendationResult> {
        // Per-recipe ingredient scoring over the effective (unioned)
        // ingredient list. Parallel, order-preserving; the scorer is copied
        // out so the closure only captures Sync data.
        let scorer = self.scorer;
        recipes.par_iter_mut().for_each(|recipe| {
            let effective: Vec<Ingredient> = recipe.effective_ingredients().into_iter().collect();
            let score = scorer.score(
                &profile.explicit_ingredients,
                &effective,
                profile.allow_substitutions,
                profile.willing_to_buy_more,
            );
            recipe.ingredient_score = Some(score);
        });

        if !profile.willing_to_buy_more {
            let before = recipes.len();
            recipes.retain(|recipe| recipe.ingredient_score.unwrap_or(0.0) > 0.0);
            debug!(
                before,
                feasible = recipes.len(),
                "strict-mode feasibility gate applied"
            );
            if recipes.is_empty() {
                info!("{}", EmptyReason::NoFeasibleMatch.description());
                return Ok(RecommendationResult::empty(EmptyReason::NoFeasibleMatch));
            }
        }

        let inputs: Vec<(RecipeId, String)> = recipes
            .iter()
            .map(|recipe| (recipe.id, recipe.full_feature_text()))
            .collect();
        let model_scores = self
            .batching
            .run_merged(&inputs, |chunk| {
                self.relevance_oracle.infer(chunk, profile.servings)
            })
            .map_err(|e| RecommendationError::oracle("relevance inference", e))?;
        let uncovered = recipes
            .iter()
            .filter(|recipe| !model_scores.contains_key(&recipe.id))
            .count();
        if uncovered > 0 {
            // Ids outside the model's identifier space default to 0.
            debug!(uncovered, "recipes missing from the relevance model");
        }

        for recipe in &mut recipes {
            let model_score = model_scores.get(&recipe.id).copied().unwrap_or(0.0);
            let ingredient_score = recipe.ingredient_score.unwrap_or(0.0);
            recipe.model_score = Some(model_score);
            recipe.final_score = Some(
                ingredient_score * INGREDIENT_SCORE_WEIGHT + model_score * MODEL_SCORE_WEIGHT,
            );
        }

        // Vec::sort_by is stable: ties keep their pre-sort order.
        recipes.sort_by(|a, b| {
            final_score_of(b)
                .partial_cmp(&final_score_of(a))
                .unwrap_or(Ordering::Equal)
        });

        if recipes.is_empty() {
            return Ok(RecommendationResult::empty(EmptyReason::NoFeasibleMatch));
        }
        let mut alternates = recipes.split_off(1);
        alternates.truncate(self.max_alternates);
        let top = recipes.swap_remove(0);
        Ok(RecommendationResult::found(top, alternates))
    }
}

fn final_score_of(recipe: &Recipe) -> f64 {
    recipe.final_score.unwrap_or(0.0)
}

// ABOUTME: Classifier-driven corpus narrowing by predicted cuisine and meal type
// ABOUTME: Annotates recipes with predictions; reapplication recomputes and overwrites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

//! # Corpus Filter
//!
//! Narrows a recipe corpus to the subset whose classifier-predicted cuisine
//! and meal-type labels match the user's targets (case-insensitively).
//!
//! Each classifier receives its own feature text: the cuisine classifier
//! sees the raw-ingredient text, the meal-type classifier sees the full
//! feature text (canonical ingredients, raw ingredients, steps). Predictions
//! run through the order-preserving batch policy; results are independent of
//! the batch size.
//!
//! An empty output is a normal, non-error outcome signaled to the caller.

use tracing::debug;

use remy_core::errors::{AppResult, RecommendationError};
use remy_core::models::Recipe;
use remy_oracles::{BatchPolicy, LabelClassifier};

/// Classifier-driven corpus filter
pub struct CorpusFilter<'a> {
    cuisine_oracle: &'a dyn LabelClassifier,
    meal_type_oracle: &'a dyn LabelClassifier,
    batching: BatchPolicy,
}

impl<'a> CorpusFilter<'a> {
    /// Filter over the two classifier oracles with default batching
    #[must_use]
    pub fn new(
        cuisine_oracle: &'a dyn LabelClassifier,
        meal_type_oracle: &'a dyn LabelClassifier,
    ) -> Self {
        Self {
            cuisine_oracle,
            meal_type_oracle,
            batching: BatchPolicy::default(),
        }
    }

    /// Override the batch policy (throughput tuning only)
    #[must_use]
    pub const fn with_batching(mut self, batching: BatchPolicy) -> Self {
        self.batching = batching;
        self
    }

    /// Annotate every recipe with predicted labels and keep those matching
    /// both targets.
    ///
    /// Reapplying the filter to already-annotated recipes recomputes and
    /// overwrites the predictions, so the operation is idempotent for a
    /// fixed corpus and targets.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendationError::Oracle`] when either classifier fails
    /// or returns a malformed batch shape.
    pub fn filter(
        &self,
        corpus: Vec<Recipe>,
        target_cuisine: &str,
        target_meal_type: &str,
    ) -> AppResult<Vec<Recipe>> {
        if corpus.is_empty() {
            return Ok(corpus);
        }

        let raw_texts: Vec<String> = corpus.iter().map(Recipe::raw_ingredient_text).collect();
        let full_texts: Vec<String> = corpus.iter().map(Recipe::full_feature_text).collect();

        let cuisines = self
            .batching
            .run_mapped(&raw_texts, |chunk| self.cuisine_oracle.predict(chunk))
            .map_err(|e| RecommendationError::oracle("cuisine classification", e))?;
        let meal_types = self
            .batching
            .run_mapped(&full_texts, |chunk| self.meal_type_oracle.predict(chunk))
            .map_err(|e| RecommendationError::oracle("meal-type classification", e))?;

        let target_cuisine = target_cuisine.to_lowercase();
        let target_meal_type = target_meal_type.to_lowercase();

        let total = corpus.len();
        let mut kept = Vec::new();
        for ((mut recipe, cuisine), meal_type) in corpus.into_iter().zip(cuisines).zip(meal_types) {
            let matches = cuisine.to_lowercase() == target_cuisine
                && meal_type.to_lowercase() == target_meal_type;
            recipe.predicted_cuisine = Some(cuisine);
            recipe.predicted_meal_type = Some(meal_type);
            if matches {
                kept.push(recipe);
            }
        }
        debug!(
            total,
            kept = kept.len(),
            %target_cuisine,
            %target_meal_type,
            "corpus filtered by predicted labels"
        );
        Ok(kept)
    }
}

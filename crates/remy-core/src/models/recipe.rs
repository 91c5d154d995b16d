// ABOUTME: Recipe model with dual ingredient listings and scoring annotations
// ABOUTME: Provides feature-text derivation and the effective-ingredient union
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Ingredient;

/// Unique recipe identifier within the corpus
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct RecipeId(pub u64);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recipe from the corpus.
///
/// Carries two independently sourced ingredient listings: `ingredients` (the
/// canonical listing, which may contain duplicates and is deliberately not
/// deduplicated) and `ingredients_raw` (a secondary, possibly overlapping
/// listing). Either list may contain entries absent from the other, so match
/// scoring operates on their set union — see [`Recipe::effective_ingredients`].
///
/// The `predicted_*` and `*_score` fields are absent until assigned by the
/// corpus filter and ranking stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier
    pub id: RecipeId,
    /// Display name
    pub name: String,
    /// Canonical ingredient listing (duplicates preserved)
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Secondary raw ingredient listing
    #[serde(default)]
    pub ingredients_raw: Vec<Ingredient>,
    /// Preparation steps
    #[serde(default)]
    pub steps: Vec<String>,
    /// Cuisine label assigned by the corpus filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_cuisine: Option<String>,
    /// Meal-type label assigned by the corpus filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_meal_type: Option<String>,
    /// Ingredient match score assigned by the ranking stage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient_score: Option<f64>,
    /// Learned relevance score assigned by the ranking stage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_score: Option<f64>,
    /// Blended final score assigned by the ranking stage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_score: Option<f64>,
}

impl Recipe {
    /// Create a recipe with empty listings
    #[must_use]
    pub fn new(id: RecipeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ingredients: Vec::new(),
            ingredients_raw: Vec::new(),
            steps: Vec::new(),
            predicted_cuisine: None,
            predicted_meal_type: None,
            ingredient_score: None,
            model_score: None,
            final_score: None,
        }
    }

    /// Set the canonical ingredient listing
    #[must_use]
    pub fn with_ingredients<'a, I>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.ingredients = ingredients.into_iter().map(Ingredient::new).collect();
        self
    }

    /// Set the raw ingredient listing
    #[must_use]
    pub fn with_ingredients_raw<'a, I>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.ingredients_raw = ingredients.into_iter().map(Ingredient::new).collect();
        self
    }

    /// Set the preparation steps
    #[must_use]
    pub fn with_steps<'a, I>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.steps = steps.into_iter().map(str::to_owned).collect();
        self
    }

    /// Set union of the canonical and raw listings, duplicates collapsed.
    ///
    /// This is the effective ingredient list used for match scoring; the two
    /// listings are sourced independently and neither is a superset of the
    /// other.
    #[must_use]
    pub fn effective_ingredients(&self) -> BTreeSet<Ingredient> {
        self.ingredients
            .iter()
            .chain(self.ingredients_raw.iter())
            .cloned()
            .collect()
    }

    /// Space-joined canonical ingredient text
    #[must_use]
    pub fn ingredient_text(&self) -> String {
        join_words(self.ingredients.iter().map(Ingredient::as_str))
    }

    /// Space-joined raw ingredient text (cuisine classifier input)
    #[must_use]
    pub fn raw_ingredient_text(&self) -> String {
        join_words(self.ingredients_raw.iter().map(Ingredient::as_str))
    }

    /// Space-joined step text
    #[must_use]
    pub fn step_text(&self) -> String {
        join_words(self.steps.iter().map(String::as_str))
    }

    /// Full feature text: canonical ingredients, then raw ingredients, then
    /// steps (meal-type classifier and relevance model input)
    #[must_use]
    pub fn full_feature_text(&self) -> String {
        format!(
            "{} {} {}",
            self.ingredient_text(),
            self.raw_ingredient_text(),
            self.step_text()
        )
    }
}

fn join_words<'a, I>(words: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    words.into_iter().collect::<Vec<_>>().join(" ")
}

// ABOUTME: End-to-end tests for the recommendation orchestrator
// ABOUTME: Covers the full pipeline and both distinct empty terminal states
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

//! End-to-end tests for the orchestrator including:
//! - Full filter → score → rank flows in strict and flexible mode
//! - `NoLabelMatch` short-circuiting before any relevance oracle call
//! - `NoFeasibleMatch` after strict-mode scoring
//! - Oracle failures surfacing as fatal request errors

use std::cell::Cell;
use std::collections::HashMap;

use remy_recommender::config::{EngineConfig, RankingLimits};
use remy_recommender::errors::OracleResult;
use remy_recommender::intelligence::{EngineOracles, RecommendationEngine};
use remy_recommender::models::{EmptyReason, MealType, Recipe, RecipeId, UserProfile};
use remy_recommender::oracles::{KeywordClassifier, RelevanceModel, TableRelevanceModel};

const EPSILON: f64 = 1e-9;

/// Relevance model that counts invocations
#[derive(Default)]
struct CountingRelevance {
    calls: Cell<usize>,
}

impl RelevanceModel for CountingRelevance {
    fn infer(
        &self,
        _inputs: &[(RecipeId, String)],
        _servings: f64,
    ) -> OracleResult<HashMap<RecipeId, f64>> {
        self.calls.set(self.calls.get() + 1);
        Ok(HashMap::new())
    }
}

/// Classifiers with no rules label everything with the fallback, so every
/// recipe matches an "italian" + "meals" request.
fn passthrough_oracles() -> (KeywordClassifier, KeywordClassifier) {
    (
        KeywordClassifier::new("italian"),
        KeywordClassifier::new("meals"),
    )
}

fn bakery_corpus() -> Vec<Recipe> {
    vec![
        Recipe::new(RecipeId(1), "Simple Bread")
            .with_ingredients(["flour", "water", "yeast"])
            .with_steps(["Mix.", "Prove.", "Bake."]),
        Recipe::new(RecipeId(2), "Sugar Cake")
            .with_ingredients(["flour", "egg", "sugar"])
            .with_steps(["Mix.", "Bake."]),
    ]
}

// ============================================================================
// Happy Path Tests
// ============================================================================

#[test]
fn test_strict_request_retains_only_feasible_recipes() {
    let (cuisine, meal_type) = passthrough_oracles();
    let relevance = TableRelevanceModel::new();
    let engine = RecommendationEngine::new(EngineOracles {
        cuisine: &cuisine,
        meal_type: &meal_type,
        relevance: &relevance,
    });

    let profile = UserProfile::new("italian", MealType::FullMeal)
        .with_ingredients(["yeast", "flour"]);
    let result = engine.recommend(bakery_corpus(), &profile).unwrap();

    let top = result.top.unwrap();
    assert_eq!(top.id, RecipeId(1), "only the bread passes the strict gate");
    assert!((top.ingredient_score.unwrap() - 1.0).abs() < EPSILON);
    assert!(result.alternates.is_empty(), "the cake was dropped before ranking");
    assert_eq!(result.empty_reason, None);
}

#[test]
fn test_flexible_request_ranks_by_blended_score() {
    let (cuisine, meal_type) = passthrough_oracles();
    let relevance = TableRelevanceModel::from_scores([(RecipeId(2), 1.0)]);
    let engine = RecommendationEngine::new(EngineOracles {
        cuisine: &cuisine,
        meal_type: &meal_type,
        relevance: &relevance,
    });

    // Both recipes gate through in flexible mode; the cake's relevance nudge
    // cannot overcome the bread's full ingredient coverage.
    let profile = UserProfile::new("italian", MealType::FullMeal)
        .with_ingredients(["yeast", "flour"])
        .with_willing_to_buy_more(true);
    let result = engine.recommend(bakery_corpus(), &profile).unwrap();

    let top = result.top.unwrap();
    assert_eq!(top.id, RecipeId(1));
    assert_eq!(result.alternates.len(), 1);
    assert_eq!(result.alternates[0].id, RecipeId(2));
    assert!(
        result.alternates[0].final_score.unwrap() < top.final_score.unwrap(),
        "alternates are ordered below the top pick"
    );
}

// ============================================================================
// Empty Terminal State Tests
// ============================================================================

#[test]
fn test_no_label_match_short_circuits_relevance_oracle() {
    let cuisine = KeywordClassifier::demo_cuisine();
    let meal_type = KeywordClassifier::demo_meal_type();
    let relevance = CountingRelevance::default();
    let engine = RecommendationEngine::new(EngineOracles {
        cuisine: &cuisine,
        meal_type: &meal_type,
        relevance: &relevance,
    });

    // Nothing in the corpus is french + snacks.
    let profile = UserProfile::new("french", MealType::Snack).with_willing_to_buy_more(true);
    let result = engine.recommend(bakery_corpus(), &profile).unwrap();

    assert!(result.is_empty());
    assert_eq!(result.empty_reason, Some(EmptyReason::NoLabelMatch));
    assert_eq!(
        relevance.calls.get(),
        0,
        "the relevance oracle must not be consulted on an empty filter result"
    );
}

#[test]
fn test_no_feasible_match_after_strict_scoring() {
    let (cuisine, meal_type) = passthrough_oracles();
    let relevance = CountingRelevance::default();
    let engine = RecommendationEngine::new(EngineOracles {
        cuisine: &cuisine,
        meal_type: &meal_type,
        relevance: &relevance,
    });

    // Label filtering passes, but the pantry covers neither recipe.
    let profile = UserProfile::new("italian", MealType::FullMeal).with_ingredients(["tofu"]);
    let result = engine.recommend(bakery_corpus(), &profile).unwrap();

    assert!(result.is_empty());
    assert_eq!(result.empty_reason, Some(EmptyReason::NoFeasibleMatch));
    assert_eq!(relevance.calls.get(), 0);
}

#[test]
fn test_unknown_meal_type_matches_nothing() {
    let (cuisine, meal_type) = passthrough_oracles();
    let relevance = TableRelevanceModel::new();
    let engine = RecommendationEngine::new(EngineOracles {
        cuisine: &cuisine,
        meal_type: &meal_type,
        relevance: &relevance,
    });

    let profile = UserProfile::new("italian", MealType::Unknown).with_willing_to_buy_more(true);
    let result = engine.recommend(bakery_corpus(), &profile).unwrap();
    assert_eq!(result.empty_reason, Some(EmptyReason::NoLabelMatch));
}

#[test]
fn test_empty_corpus_is_no_label_match() {
    let (cuisine, meal_type) = passthrough_oracles();
    let relevance = TableRelevanceModel::new();
    let engine = RecommendationEngine::new(EngineOracles {
        cuisine: &cuisine,
        meal_type: &meal_type,
        relevance: &relevance,
    });

    let profile = UserProfile::new("italian", MealType::FullMeal).with_willing_to_buy_more(true);
    let result = engine.recommend(Vec::new(), &profile).unwrap();
    assert_eq!(result.empty_reason, Some(EmptyReason::NoLabelMatch));
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_engine_honors_alternates_limit() {
    let (cuisine, meal_type) = passthrough_oracles();
    let relevance = TableRelevanceModel::new();
    let config = EngineConfig {
        limits: RankingLimits { max_alternates: 2 },
        ..EngineConfig::default()
    };
    let engine = RecommendationEngine::new(EngineOracles {
        cuisine: &cuisine,
        meal_type: &meal_type,
        relevance: &relevance,
    })
    .with_config(config);

    let corpus: Vec<Recipe> = (1..=6)
        .map(|id| {
            Recipe::new(RecipeId(id), format!("Recipe {id}")).with_ingredients(["milk"])
        })
        .collect();
    let profile = UserProfile::new("italian", MealType::FullMeal)
        .with_ingredients(["milk"])
        .with_willing_to_buy_more(true);
    let result = engine.recommend(corpus, &profile).unwrap();
    assert_eq!(result.alternates.len(), 2);
}

#[test]
fn test_vacuous_recipe_scores_one_in_flexible_mode() {
    // A corpus record whose list fields were malformed loads as an empty
    // recipe and vacuously matches.
    let (cuisine, meal_type) = passthrough_oracles();
    let relevance = TableRelevanceModel::new();
    let engine = RecommendationEngine::new(EngineOracles {
        cuisine: &cuisine,
        meal_type: &meal_type,
        relevance: &relevance,
    });

    let profile = UserProfile::new("italian", MealType::FullMeal)
        .with_ingredients(["milk"])
        .with_willing_to_buy_more(true);
    let result = engine
        .recommend(vec![Recipe::new(RecipeId(7), "Mystery")], &profile)
        .unwrap();
    let top = result.top.unwrap();
    assert!((top.ingredient_score.unwrap() - 1.0).abs() < EPSILON);
}

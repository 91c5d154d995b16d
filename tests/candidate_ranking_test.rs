// ABOUTME: Integration tests for the candidate ranker
// ABOUTME: Covers the strict drop rule, score blending, stable ordering, and alternates cap
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

//! Tests for the candidate ranker including:
//! - Strict-mode feasibility dropping and the `NoFeasibleMatch` state
//! - The fixed 0.95/0.05 ingredient/relevance blend
//! - Stable descending ordering and the alternates cap
//! - Default-zero relevance for ids outside the model's space

use std::collections::HashMap;

use remy_recommender::errors::OracleResult;
use remy_recommender::intelligence::CandidateRanker;
use remy_recommender::models::{EmptyReason, MealType, Recipe, RecipeId, UserProfile};
use remy_recommender::oracles::{BatchPolicy, RelevanceModel, TableRelevanceModel};

const EPSILON: f64 = 1e-9;

/// Relevance model that fails every invocation
struct FailingRelevance;

impl RelevanceModel for FailingRelevance {
    fn infer(
        &self,
        _inputs: &[(RecipeId, String)],
        _servings: f64,
    ) -> OracleResult<HashMap<RecipeId, f64>> {
        Err(remy_recommender::errors::OracleError::Invocation(
            "model unavailable".to_owned(),
        ))
    }
}

fn recipe_with(id: u64, name: &str, ingredients: &[&str]) -> Recipe {
    Recipe::new(RecipeId(id), name).with_ingredients(ingredients.iter().copied())
}

fn flexible_profile(ingredients: &[&str]) -> UserProfile {
    UserProfile::new("italian", MealType::FullMeal)
        .with_ingredients(ingredients.iter().copied())
        .with_willing_to_buy_more(true)
}

// ============================================================================
// Strict Mode Tests
// ============================================================================

#[test]
fn test_strict_mode_drops_infeasible_recipes() {
    let relevance = TableRelevanceModel::new();
    let ranker = CandidateRanker::new(&relevance);
    let profile = UserProfile::new("italian", MealType::FullMeal)
        .with_ingredients(["yeast", "flour"]);

    let result = ranker
        .rank(
            vec![
                recipe_with(1, "Bread", &["flour", "water", "yeast"]),
                recipe_with(2, "Cake", &["flour", "egg", "sugar"]),
            ],
            &profile,
        )
        .unwrap();

    let top = result.top.unwrap();
    assert_eq!(top.id, RecipeId(1), "only the bread is feasible");
    assert!((top.ingredient_score.unwrap() - 1.0).abs() < EPSILON);
    assert!(result.alternates.is_empty(), "the cake was dropped pre-ranking");
}

#[test]
fn test_strict_mode_wipeout_is_no_feasible_match() {
    let relevance = TableRelevanceModel::new();
    let ranker = CandidateRanker::new(&relevance);
    let profile = UserProfile::new("italian", MealType::FullMeal).with_ingredients(["yeast"]);

    let result = ranker
        .rank(vec![recipe_with(1, "Cake", &["flour", "egg"])], &profile)
        .unwrap();
    assert!(result.is_empty());
    assert_eq!(result.empty_reason, Some(EmptyReason::NoFeasibleMatch));
}

#[test]
fn test_strict_wipeout_skips_relevance_oracle() {
    // The failing model would error if consulted; the wipeout must return
    // before any relevance call.
    let relevance = FailingRelevance;
    let ranker = CandidateRanker::new(&relevance);
    let profile = UserProfile::new("italian", MealType::FullMeal).with_ingredients(["yeast"]);

    let result = ranker
        .rank(vec![recipe_with(1, "Cake", &["flour", "egg"])], &profile)
        .unwrap();
    assert_eq!(result.empty_reason, Some(EmptyReason::NoFeasibleMatch));
}

// ============================================================================
// Score Blending Tests
// ============================================================================

#[test]
fn test_final_score_blends_with_fixed_weights() {
    let relevance = TableRelevanceModel::from_scores([(RecipeId(1), 0.5)]);
    let ranker = CandidateRanker::new(&relevance);
    let profile = flexible_profile(&["milk"]);

    let result = ranker
        .rank(vec![recipe_with(1, "Milk Pudding", &["milk"])], &profile)
        .unwrap();
    let top = result.top.unwrap();
    // ingredient 1.0 * 0.95 + model 0.5 * 0.05
    assert!((top.final_score.unwrap() - 0.975).abs() < EPSILON);
    assert!((top.model_score.unwrap() - 0.5).abs() < EPSILON);
}

#[test]
fn test_missing_relevance_score_defaults_to_zero() {
    let relevance = TableRelevanceModel::from_scores([(RecipeId(99), 0.9)]);
    let ranker = CandidateRanker::new(&relevance);
    let profile = flexible_profile(&["milk"]);

    let result = ranker
        .rank(vec![recipe_with(1, "Milk Pudding", &["milk"])], &profile)
        .unwrap();
    let top = result.top.unwrap();
    assert!((top.model_score.unwrap()).abs() < EPSILON);
    assert!((top.final_score.unwrap() - 0.95).abs() < EPSILON);
}

#[test]
fn test_relevance_breaks_ingredient_ties() {
    let relevance =
        TableRelevanceModel::from_scores([(RecipeId(1), 0.1), (RecipeId(2), 0.9)]);
    let ranker = CandidateRanker::new(&relevance);
    let profile = flexible_profile(&["milk"]);

    let result = ranker
        .rank(
            vec![
                recipe_with(1, "Pudding A", &["milk"]),
                recipe_with(2, "Pudding B", &["milk"]),
            ],
            &profile,
        )
        .unwrap();
    assert_eq!(result.top.unwrap().id, RecipeId(2), "higher relevance wins the tie-break");
}

#[test]
fn test_effective_ingredients_union_both_listings() {
    // The canonical listing alone is infeasible; the raw listing supplies
    // the missing ingredient name the user actually holds. Union scoring
    // still requires both distinct ingredients, so coverage is partial.
    let relevance = TableRelevanceModel::new();
    let ranker = CandidateRanker::new(&relevance);
    let profile = flexible_profile(&["polenta"]);

    let recipe = Recipe::new(RecipeId(1), "Polenta Bake")
        .with_ingredients(["cornmeal"])
        .with_ingredients_raw(["polenta"]);
    let result = ranker.rank(vec![recipe], &profile).unwrap();
    let top = result.top.unwrap();
    // union {cornmeal, polenta}: one of two covered, bonus 1/1
    let expected = 0.5 * (1.0 + 0.2 * 1.0);
    assert!(
        (top.ingredient_score.unwrap() - expected).abs() < EPSILON,
        "expected union-based score {expected}, got {:?}",
        top.ingredient_score
    );
}

// ============================================================================
// Ordering and Selection Tests
// ============================================================================

#[test]
fn test_ranking_sort_is_stable_for_ties() {
    let relevance = TableRelevanceModel::new();
    let ranker = CandidateRanker::new(&relevance);
    let profile = flexible_profile(&["milk"]);

    let result = ranker
        .rank(
            vec![
                recipe_with(10, "First", &["milk"]),
                recipe_with(20, "Second", &["milk"]),
                recipe_with(30, "Third", &["milk"]),
            ],
            &profile,
        )
        .unwrap();
    assert_eq!(result.top.unwrap().id, RecipeId(10));
    let alternate_ids: Vec<RecipeId> = result.alternates.iter().map(|r| r.id).collect();
    assert_eq!(
        alternate_ids,
        vec![RecipeId(20), RecipeId(30)],
        "equal scores keep their pre-sort order"
    );
}

#[test]
fn test_alternates_capped_at_ten() {
    let relevance = TableRelevanceModel::new();
    let ranker = CandidateRanker::new(&relevance);
    let profile = flexible_profile(&["milk"]);

    let corpus: Vec<Recipe> = (1..=13)
        .map(|id| recipe_with(id, &format!("Recipe {id}"), &["milk"]))
        .collect();
    let result = ranker.rank(corpus, &profile).unwrap();
    assert!(result.top.is_some());
    assert_eq!(result.alternates.len(), 10, "alternates are capped at ten");
}

#[test]
fn test_ranking_results_independent_of_batch_size() {
    let relevance =
        TableRelevanceModel::from_scores((1..=9).map(|id| (RecipeId(id), id as f64 / 10.0)));
    let profile = flexible_profile(&["milk"]);
    let corpus: Vec<Recipe> = (1..=9)
        .map(|id| recipe_with(id, &format!("Recipe {id}"), &["milk"]))
        .collect();

    let baseline = CandidateRanker::new(&relevance)
        .rank(corpus.clone(), &profile)
        .unwrap();
    for chunk_size in [1, 2, 7, 500] {
        let ranked = CandidateRanker::new(&relevance)
            .with_batching(BatchPolicy::new(chunk_size))
            .rank(corpus.clone(), &profile)
            .unwrap();
        assert_eq!(baseline, ranked, "batch size {chunk_size} changed the ranking");
    }
}

#[test]
fn test_oracle_failure_aborts_ranking() {
    let relevance = FailingRelevance;
    let ranker = CandidateRanker::new(&relevance);
    let profile = flexible_profile(&["milk"]);

    let error = ranker
        .rank(vec![recipe_with(1, "Pudding", &["milk"])], &profile)
        .expect_err("a failing relevance model must abort the request");
    assert!(error.to_string().contains("relevance inference"));
}

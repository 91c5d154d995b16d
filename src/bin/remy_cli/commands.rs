// ABOUTME: Command implementations for the Remy CLI
// ABOUTME: Wires demo oracles, corpus loading, and preference parsing into the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use remy_recommender::config::EngineConfig;
use remy_recommender::corpus;
use remy_recommender::intelligence::{EngineOracles, RecommendationEngine};
use remy_recommender::models::Recipe;
use remy_recommender::oracles::{KeywordClassifier, TableRelevanceModel};
use remy_recommender::preferences::PreferenceDocument;

/// Run a recommendation with the demo classifiers and an optional relevance
/// score table
pub fn recommend(
    corpus_path: &Path,
    preferences_path: &Path,
    relevance_path: Option<&Path>,
    batch_size: Option<usize>,
) -> Result<()> {
    let recipes = corpus::load_corpus(corpus_path)
        .with_context(|| format!("loading corpus from {}", corpus_path.display()))?;
    let preferences_raw = fs::read_to_string(preferences_path)
        .with_context(|| format!("reading preferences from {}", preferences_path.display()))?;
    let profile = PreferenceDocument::from_json(&preferences_raw)?.into_profile();

    let cuisine = KeywordClassifier::demo_cuisine();
    let meal_type = KeywordClassifier::demo_meal_type();
    let relevance = match relevance_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading relevance scores from {}", path.display()))?;
            TableRelevanceModel::from_json(&raw)?
        }
        None => TableRelevanceModel::new(),
    };

    let mut config = EngineConfig::from_env()?;
    if let Some(size) = batch_size {
        config.batching.classifier_batch_size = size;
        config.batching.relevance_batch_size = size;
        config.validate()?;
    }

    let engine = RecommendationEngine::new(EngineOracles {
        cuisine: &cuisine,
        meal_type: &meal_type,
        relevance: &relevance,
    })
    .with_config(config);

    let result = engine.recommend(recipes, &profile)?;

    match result.top {
        Some(top) => {
            print_recipe(&top);
            if !result.alternates.is_empty() {
                println!("\nOther recommended recipes:");
                for alternate in &result.alternates {
                    println!(
                        "- {} (score: {:.2})",
                        alternate.name,
                        alternate.final_score.unwrap_or(0.0)
                    );
                }
            }
        }
        None => {
            let reason = result
                .empty_reason
                .map_or("no recommendation available", |reason| {
                    reason.description()
                });
            println!("No matching recipes found: {reason}.");
        }
    }
    Ok(())
}

/// Parse a corpus document and report what it contains
pub fn validate_corpus(corpus_path: &Path) -> Result<()> {
    let recipes = corpus::load_corpus(corpus_path)
        .with_context(|| format!("loading corpus from {}", corpus_path.display()))?;
    let with_ingredients = recipes
        .iter()
        .filter(|recipe| !recipe.ingredients.is_empty() || !recipe.ingredients_raw.is_empty())
        .count();
    let with_steps = recipes.iter().filter(|recipe| !recipe.steps.is_empty()).count();
    info!(
        recipes = recipes.len(),
        with_ingredients, with_steps, "corpus validated"
    );
    println!("Corpus: {} recipes", recipes.len());
    println!("  with ingredients: {with_ingredients}");
    println!("  with steps:       {with_steps}");
    Ok(())
}

fn print_recipe(recipe: &Recipe) {
    println!("Top recipe: {}", recipe.name);
    println!(
        "  ingredient match score: {:.2}",
        recipe.ingredient_score.unwrap_or(0.0)
    );
    println!("  final score:            {:.2}", recipe.final_score.unwrap_or(0.0));
    if !recipe.ingredients.is_empty() {
        println!("\nIngredients:");
        for ingredient in &recipe.ingredients {
            println!("- {ingredient}");
        }
    }
    if !recipe.steps.is_empty() {
        println!("\nSteps:");
        for (number, step) in recipe.steps.iter().enumerate() {
            println!("{}. {step}", number + 1);
        }
    }
}

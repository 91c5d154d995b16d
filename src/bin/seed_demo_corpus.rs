// ABOUTME: Seeds a small demo corpus, relevance table, and preference document
// ABOUTME: Produces inputs the demo keyword classifiers label predictably
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence
//!
//! Usage:
//! ```bash
//! seed-demo-corpus --out demo/
//! remy-cli recommend --corpus demo/corpus.json --preferences demo/preferences.json \
//!     --relevance demo/scores.json
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;

use remy_recommender::models::{Recipe, RecipeId};

#[derive(Parser)]
#[command(
    name = "seed-demo-corpus",
    about = "Seed demo corpus, relevance scores, and preferences for remy-cli"
)]
struct Cli {
    /// Output directory for the demo files
    #[arg(long, default_value = "demo")]
    out: PathBuf,
}

fn demo_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(RecipeId(1), "Basil Parmesan Pasta")
            .with_ingredients(["pasta", "basil", "parmesan", "olive oil", "salt"])
            .with_ingredients_raw(["dried pasta", "fresh basil", "parmesan"])
            .with_steps([
                "Boil the pasta until al dente.",
                "Toss with olive oil, basil, and parmesan.",
            ]),
        Recipe::new(RecipeId(2), "Mushroom Risotto")
            .with_ingredients(["risotto rice", "mushroom", "parmesan", "butter", "water"])
            .with_ingredients_raw(["arborio risotto rice", "mushrooms"])
            .with_steps([
                "Soften the mushrooms in butter.",
                "Add rice and ladle in water until creamy.",
                "Finish with parmesan.",
            ]),
        Recipe::new(RecipeId(3), "Breakfast Oat Pancakes")
            .with_ingredients(["oat", "egg", "milk", "baking powder", "salt"])
            .with_ingredients_raw(["rolled oats", "eggs", "milk"])
            .with_steps([
                "Blend oats, egg, and milk into a batter.",
                "Fry pancakes until golden and serve with toast on the side.",
            ]),
        Recipe::new(RecipeId(4), "Chocolate Vanilla Cake")
            .with_ingredients(["flour", "sugar", "chocolate", "vanilla extract", "egg"])
            .with_ingredients_raw(["plain flour", "dark chocolate"])
            .with_steps([
                "Cream the sugar with the egg.",
                "Fold in flour, chocolate, and vanilla, then bake.",
            ]),
        Recipe::new(RecipeId(5), "Salsa Tortilla Chips")
            .with_ingredients(["tortilla", "salsa", "oil", "salt"])
            .with_ingredients_raw(["corn tortilla", "tomato salsa"])
            .with_steps([
                "Cut tortillas into chips and fry in oil.",
                "Serve with salsa dip.",
            ]),
    ]
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    fs::create_dir_all(&cli.out)
        .with_context(|| format!("creating output directory {}", cli.out.display()))?;

    let corpus = serde_json::to_string_pretty(&demo_recipes())?;
    fs::write(cli.out.join("corpus.json"), corpus)?;

    let scores = json!([
        { "id": 1, "score": 0.9 },
        { "id": 2, "score": 0.6 },
        { "id": 4, "score": 0.4 },
    ]);
    fs::write(
        cli.out.join("scores.json"),
        serde_json::to_string_pretty(&scores)?,
    )?;

    let preferences = json!({
        "cuisine": "Italian",
        "meal_type": "Full Meal",
        "servings": 2,
        "ingredients": ["pasta", "basil", "parmesan"],
        "allow_substitutions": true,
        "willing_to_buy_more": true,
    });
    fs::write(
        cli.out.join("preferences.json"),
        serde_json::to_string_pretty(&preferences)?,
    )?;

    println!("Seeded demo files under {}", cli.out.display());
    Ok(())
}

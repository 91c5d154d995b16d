// ABOUTME: Schema-validated recipe corpus loading from JSON documents
// ABOUTME: Malformed list fields become empty sequences; invalid records are skipped with a warning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

//! Recipe corpus loading.
//!
//! The engine only ever sees already-typed sequences; this module is the
//! data-loading collaborator that produces them. Deserialization is explicit
//! and schema-validated — string-encoded list literals are never evaluated.
//!
//! Recovery rules: a record whose `ingredients`, `ingredients_raw`, or
//! `steps` field is malformed gets an empty sequence for that field (a
//! recipe with no ingredients vacuously scores 1.0 in flexible mode); a
//! record missing its identifier or name is skipped. Both are logged at
//! `warn!` and neither aborts the corpus pass.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use remy_core::errors::RecommendationError;
use remy_core::models::{Ingredient, Recipe, RecipeId};

/// Errors while reading or parsing a corpus document
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus file could not be read
    #[error("failed to read corpus: {0}")]
    Io(#[from] std::io::Error),

    /// The document was not a JSON array of records
    #[error("failed to parse corpus: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<CorpusError> for RecommendationError {
    fn from(error: CorpusError) -> Self {
        Self::Corpus(error.to_string())
    }
}

/// On-disk shape of a corpus record
#[derive(Debug, Deserialize)]
struct RecipeRecord {
    id: u64,
    name: String,
    #[serde(default)]
    ingredients: Value,
    #[serde(default)]
    ingredients_raw: Value,
    #[serde(default)]
    steps: Value,
}

/// Load a corpus file into typed recipes.
///
/// # Errors
///
/// Returns [`CorpusError`] when the file cannot be read or is not a JSON
/// array. Per-record malformations are recovered, not propagated.
pub fn load_corpus(path: &Path) -> Result<Vec<Recipe>, CorpusError> {
    let raw = fs::read_to_string(path)?;
    let recipes = parse_corpus(&raw)?;
    debug!(path = %path.display(), recipes = recipes.len(), "corpus loaded");
    Ok(recipes)
}

/// Parse a corpus document (JSON array of recipe records).
///
/// # Errors
///
/// Returns [`CorpusError::Parse`] when the document is not a JSON array.
pub fn parse_corpus(raw: &str) -> Result<Vec<Recipe>, CorpusError> {
    let records: Vec<Value> = serde_json::from_str(raw)?;
    let mut recipes = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<RecipeRecord>(record) {
            Ok(record) => recipes.push(record.into_recipe()),
            Err(error) => {
                warn!(index, %error, "skipping corpus record without id or name");
            }
        }
    }
    Ok(recipes)
}

impl RecipeRecord {
    fn into_recipe(self) -> Recipe {
        let id = RecipeId(self.id);
        let mut recipe = Recipe::new(id, self.name);
        recipe.ingredients = ingredient_list(self.ingredients, id, "ingredients");
        recipe.ingredients_raw = ingredient_list(self.ingredients_raw, id, "ingredients_raw");
        recipe.steps = string_list(self.steps, id, "steps");
        recipe
    }
}

fn ingredient_list(value: Value, id: RecipeId, field: &'static str) -> Vec<Ingredient> {
    string_list(value, id, field)
        .iter()
        .map(|raw| Ingredient::new(raw))
        .collect()
}

/// Extract a list of strings, treating anything else as empty
fn string_list(value: Value, id: RecipeId, field: &'static str) -> Vec<String> {
    match value {
        Value::Array(items) => {
            let strings: Vec<String> = items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect();
            if strings.len() != items.len() {
                warn!(recipe_id = %id, field, "dropping non-string entries in list field");
            }
            strings
        }
        Value::Null => Vec::new(),
        _ => {
            warn!(recipe_id = %id, field, "malformed list field treated as empty");
            Vec::new()
        }
    }
}

// ABOUTME: Ingredient canonicalization and default-ingredient classification
// ABOUTME: Pure, total functions with no failure modes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

//! Ingredient normalizer.
//!
//! Canonicalization is lowercasing plus whitespace trimming — nothing else.
//! Pluralization and stemming are deliberately out of scope; "tomatoes" and
//! "tomato" are distinct ingredients.

use remy_core::constants::DefaultIngredients;
use remy_core::models::Ingredient;

/// Normalize a raw ingredient name (lowercase, trim)
#[must_use]
pub fn normalize(raw: &str) -> Ingredient {
    Ingredient::new(raw)
}

/// Whether the ingredient is a pantry staple in the process-wide default set
#[must_use]
pub fn is_default(ingredient: &Ingredient) -> bool {
    DefaultIngredients::global().contains(ingredient)
}

// ABOUTME: Default ingredient set of pantry staples assumed always available
// ABOUTME: Process-wide constant with OnceLock-backed global accessor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

//! Default ingredients
//!
//! Staples every kitchen is assumed to have (salt, water, oil, pepper, and
//! compound variants). These are excluded from strict-mode feasibility checks
//! and always count as available in flexible-mode scoring.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use crate::models::Ingredient;

/// Names of pantry staples assumed always on hand
pub const DEFAULT_INGREDIENT_NAMES: &[&str] = &[
    "salt",
    "water",
    "oil",
    "pepper",
    "warm water",
    "salt and pepper",
    "salt pepper",
];

static DEFAULT_INGREDIENTS: OnceLock<DefaultIngredients> = OnceLock::new();

/// Set of ingredients assumed always available, compared by normalized
/// equality
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultIngredients {
    set: BTreeSet<Ingredient>,
}

impl DefaultIngredients {
    /// Process-wide default set, initialized on first access and read-only
    /// thereafter
    #[must_use]
    pub fn global() -> &'static Self {
        DEFAULT_INGREDIENTS.get_or_init(Self::builtin)
    }

    /// The built-in staple set
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_names(DEFAULT_INGREDIENT_NAMES.iter().copied())
    }

    /// Build a set from arbitrary names (normalized on insertion)
    #[must_use]
    pub fn from_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            set: names.into_iter().map(Ingredient::new).collect(),
        }
    }

    /// Whether the ingredient is a pantry staple
    #[must_use]
    pub fn contains(&self, ingredient: &Ingredient) -> bool {
        self.set.contains(ingredient)
    }

    /// Iterate the staples in normalized order
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.set.iter()
    }

    /// Number of staples in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// The user's explicit pantry extended with the staples
    #[must_use]
    pub fn augment(&self, explicit: &BTreeSet<Ingredient>) -> BTreeSet<Ingredient> {
        explicit.union(&self.set).cloned().collect()
    }
}

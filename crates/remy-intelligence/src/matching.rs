// ABOUTME: Pantry-vs-recipe compatibility scoring with substitution awareness
// ABOUTME: Strict mode is a binary feasibility gate; flexible mode earns partial credit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

//! # Match Scorer
//!
//! Computes a bounded `[0, 1]` compatibility score between a user's pantry
//! and a recipe's ingredient list under two policy flags.
//!
//! **Strict mode** (user refuses to shop) is a hard gate: `1.0` when every
//! non-default recipe ingredient is already in the user's explicit pantry,
//! `0.0` otherwise — never an intermediate value.
//!
//! **Flexible mode** rewards both coverage (how much of the recipe the
//! augmented pantry covers, with half credit for substitution-table matches)
//! and pantry utilization (a bonus for recipes that use what the user
//! already owns), discouraging recipes that ignore the user's ingredients
//! even when nominally makeable.
//!
//! Scoring is deterministic: for fixed inputs the output is bit-identical
//! across calls. No randomness, no I/O.

use std::collections::BTreeSet;

use remy_core::constants::scoring::{
    DEFAULT_PANTRY_BONUS_BETA, DIRECT_MATCH_CREDIT, SUBSTITUTE_MATCH_CREDIT,
};
use remy_core::constants::{DefaultIngredients, SubstitutionTable};
use remy_core::models::Ingredient;

/// Pantry-vs-recipe compatibility scorer.
///
/// Holds read-only handles to the process-wide default-ingredient set and
/// substitution table plus the pantry bonus factor; `score` itself is pure.
#[derive(Debug, Clone, Copy)]
pub struct MatchScorer<'a> {
    defaults: &'a DefaultIngredients,
    substitutions: &'a SubstitutionTable,
    beta: f64,
}

impl Default for MatchScorer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchScorer<'static> {
    /// Scorer over the process-wide constant tables with the default bonus
    /// factor
    #[must_use]
    pub fn new() -> Self {
        Self {
            defaults: DefaultIngredients::global(),
            substitutions: SubstitutionTable::global(),
            beta: DEFAULT_PANTRY_BONUS_BETA,
        }
    }
}

impl<'a> MatchScorer<'a> {
    /// Scorer over caller-supplied tables
    #[must_use]
    pub const fn with_tables(
        defaults: &'a DefaultIngredients,
        substitutions: &'a SubstitutionTable,
    ) -> Self {
        Self {
            defaults,
            substitutions,
            beta: DEFAULT_PANTRY_BONUS_BETA,
        }
    }

    /// Override the pantry-utilization bonus factor
    #[must_use]
    pub const fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Compatibility score in `[0, 1]` between the user's explicit pantry
    /// and a recipe's ingredient list.
    ///
    /// `recipe_ingredients` is scored per occurrence: a repeated ingredient
    /// contributes to both the matched credit and the denominator once per
    /// occurrence. Callers that want set semantics deduplicate first (see
    /// [`Recipe::effective_ingredients`](remy_core::models::Recipe::effective_ingredients)).
    #[must_use]
    pub fn score(
        &self,
        user_ingredients: &BTreeSet<Ingredient>,
        recipe_ingredients: &[Ingredient],
        substitutions_allowed: bool,
        willing_to_buy_more: bool,
    ) -> f64 {
        let explicit = user_ingredients;

        // The user refuses to shop: binary feasibility over non-default
        // ingredients only. Defaults are transparent to the gate.
        if !willing_to_buy_more {
            let feasible = recipe_ingredients
                .iter()
                .filter(|ingredient| !self.defaults.contains(ingredient))
                .all(|ingredient| explicit.contains(ingredient));
            return if feasible { 1.0 } else { 0.0 };
        }

        let total = recipe_ingredients.len();
        if total == 0 {
            // Vacuous match: nothing required, nothing missing.
            return 1.0;
        }

        let augmented = self.defaults.augment(explicit);
        let mut matched = 0.0;
        for ingredient in recipe_ingredients {
            if augmented.contains(ingredient) {
                matched += DIRECT_MATCH_CREDIT;
            } else if substitutions_allowed
                && self
                    .substitutions
                    .substitutes_for(ingredient)
                    .is_some_and(|subs| subs.iter().any(|sub| augmented.contains(sub)))
            {
                matched += SUBSTITUTE_MATCH_CREDIT;
            }
        }
        let base_score = matched / total as f64;

        // Fraction of the user's own pantry the recipe uses, independent of
        // defaults and substitutions.
        let bonus = if explicit.is_empty() {
            0.0
        } else {
            let used_explicit = recipe_ingredients
                .iter()
                .filter(|ingredient| explicit.contains(*ingredient))
                .count();
            used_explicit as f64 / explicit.len() as f64
        };

        (base_score * (1.0 + self.beta * bonus)).min(1.0)
    }

    /// Convenience wrapper normalizing raw ingredient names before scoring
    #[must_use]
    pub fn score_raw(
        &self,
        user_ingredients: &[&str],
        recipe_ingredients: &[&str],
        substitutions_allowed: bool,
        willing_to_buy_more: bool,
    ) -> f64 {
        let user: BTreeSet<Ingredient> = user_ingredients
            .iter()
            .copied()
            .map(Ingredient::new)
            .collect();
        let recipe: Vec<Ingredient> = recipe_ingredients
            .iter()
            .copied()
            .map(Ingredient::new)
            .collect();
        self.score(&user, &recipe, substitutions_allowed, willing_to_buy_more)
    }
}

// ABOUTME: User preference profile and meal-type label mapping
// ABOUTME: Immutable per-request inputs to the recommendation pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::constants::scoring::DEFAULT_SERVINGS;

use super::Ingredient;

/// Meal category requested by the user.
///
/// User-facing labels map through a fixed lookup to the classifier's category
/// label space. Labels outside the lookup map to [`MealType::Unknown`], whose
/// category label is the sentinel `"unknown"` — it simply matches no
/// predicted label, producing an empty filter result rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Morning meal
    Breakfast,
    /// Lunch or dinner main course
    FullMeal,
    /// Dessert or sweet snack
    SweetTreat,
    /// Savoury snack
    Snack,
    /// Sentinel for unrecognized preference labels
    #[serde(other)]
    Unknown,
}

impl MealType {
    /// Parse a user-facing label ("Breakfast", "Full Meal", "Sweet Treat",
    /// "Snack"); anything else is the sentinel
    #[must_use]
    pub fn parse_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "full meal" => Self::FullMeal,
            "sweet treat" => Self::SweetTreat,
            "snack" => Self::Snack,
            _ => Self::Unknown,
        }
    }

    /// Category label in the meal-type classifier's label space
    #[must_use]
    pub const fn category_label(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::FullMeal => "meals",
            Self::SweetTreat => "sweet treat",
            Self::Snack => "snacks",
            Self::Unknown => "unknown",
        }
    }
}

/// A user's preferences for a single recommendation request.
///
/// Immutable once constructed; the pipeline never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Ingredients the user explicitly has on hand (normalized set)
    pub explicit_ingredients: BTreeSet<Ingredient>,
    /// Requested cuisine (compared case-insensitively to predictions)
    pub cuisine: String,
    /// Requested meal category
    pub meal_type: MealType,
    /// Requested servings (positive; defaults to 4 upstream)
    pub servings: f64,
    /// Whether substitution-table matches earn partial credit
    pub allow_substitutions: bool,
    /// Whether the user will shop for missing ingredients (flexible mode)
    pub willing_to_buy_more: bool,
}

impl UserProfile {
    /// Profile with the given cuisine and meal type, no explicit
    /// ingredients, default servings, and both policy flags off
    #[must_use]
    pub fn new(cuisine: impl Into<String>, meal_type: MealType) -> Self {
        Self {
            explicit_ingredients: BTreeSet::new(),
            cuisine: cuisine.into(),
            meal_type,
            servings: DEFAULT_SERVINGS,
            allow_substitutions: false,
            willing_to_buy_more: false,
        }
    }

    /// Set the explicit ingredient list (normalized on insertion)
    #[must_use]
    pub fn with_ingredients<'a, I>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.explicit_ingredients = ingredients.into_iter().map(Ingredient::new).collect();
        self
    }

    /// Set the requested servings
    #[must_use]
    pub const fn with_servings(mut self, servings: f64) -> Self {
        self.servings = servings;
        self
    }

    /// Set whether substitutions earn partial credit
    #[must_use]
    pub const fn with_substitutions(mut self, allow: bool) -> Self {
        self.allow_substitutions = allow;
        self
    }

    /// Set whether the user will shop for missing ingredients
    #[must_use]
    pub const fn with_willing_to_buy_more(mut self, willing: bool) -> Self {
        self.willing_to_buy_more = willing;
        self
    }

    /// Requested cuisine in the classifier's lowercase label space
    #[must_use]
    pub fn cuisine_label(&self) -> String {
        self.cuisine.trim().to_lowercase()
    }
}

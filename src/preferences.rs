// ABOUTME: Preference-document adaptation into immutable user profiles
// ABOUTME: Malformed preference values recover by defaulting, never by failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

//! Preference source adapter.
//!
//! The engine does not validate the upstream preference-collection UI; it
//! validates what it receives. Servings coerce to a positive float,
//! defaulting to 4 when absent or non-numeric. Meal-type labels map through
//! a fixed lookup; unrecognized labels become the `unknown` sentinel, which
//! matches no predicted label. Ingredient strings are normalized into the
//! profile's explicit set. None of these malformations are fatal.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use remy_core::constants::scoring::DEFAULT_SERVINGS;
use remy_core::models::{Ingredient, MealType, UserProfile};

/// Error for a preference document that is not JSON at all
#[derive(Debug, Error)]
#[error("failed to parse preference document: {0}")]
pub struct PreferenceError(#[from] serde_json::Error);

/// On-disk shape of a preference document.
///
/// `willing_to_buy_more` also accepts the legacy field name `use_grocery`.
#[derive(Debug, Default, Deserialize)]
pub struct PreferenceDocument {
    /// Requested cuisine
    #[serde(default)]
    pub cuisine: String,
    /// User-facing meal-type label ("Breakfast", "Full Meal", ...)
    #[serde(default)]
    pub meal_type: String,
    /// Requested servings; any non-numeric value defaults
    #[serde(default)]
    pub servings: Value,
    /// Ingredients on hand
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Whether substitution matches earn partial credit
    #[serde(default)]
    pub allow_substitutions: bool,
    /// Whether the user will shop for missing ingredients
    #[serde(default, alias = "use_grocery")]
    pub willing_to_buy_more: bool,
}

impl PreferenceDocument {
    /// Parse a preference document.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError`] only when the document is not valid JSON;
    /// individual malformed fields recover by defaulting.
    pub fn from_json(raw: &str) -> Result<Self, PreferenceError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Adapt the document into an immutable request profile
    #[must_use]
    pub fn into_profile(self) -> UserProfile {
        let meal_type = MealType::parse_label(&self.meal_type);
        if meal_type == MealType::Unknown && !self.meal_type.trim().is_empty() {
            warn!(label = %self.meal_type, "unrecognized meal type; it will match no recipes");
        }
        UserProfile {
            explicit_ingredients: self
                .ingredients
                .iter()
                .map(|raw| Ingredient::new(raw))
                .collect(),
            cuisine: self.cuisine,
            meal_type,
            servings: coerce_servings(&self.servings),
            allow_substitutions: self.allow_substitutions,
            willing_to_buy_more: self.willing_to_buy_more,
        }
    }
}

/// Coerce a servings value to a positive float, defaulting to 4
fn coerce_servings(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => raw.trim().parse().ok(),
        Value::Null => None,
        _ => None,
    };
    match parsed {
        Some(servings) if servings > 0.0 && servings.is_finite() => servings,
        Some(_) | None => {
            if !value.is_null() {
                warn!(%value, default = DEFAULT_SERVINGS, "servings not a positive number; using default");
            }
            DEFAULT_SERVINGS
        }
    }
}

// ABOUTME: Integration tests for the preference-document adapter
// ABOUTME: Covers servings coercion, meal-type mapping, and field aliases
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

//! Tests for preference adaptation including:
//! - Servings coercion with defaulting on absence and non-numeric input
//! - The fixed meal-type label mapping and the unknown sentinel
//! - Ingredient normalization into the explicit set
//! - The legacy `use_grocery` field alias

use remy_recommender::models::{Ingredient, MealType};
use remy_recommender::preferences::PreferenceDocument;

const EPSILON: f64 = 1e-9;

fn profile_from(raw: &str) -> remy_recommender::models::UserProfile {
    PreferenceDocument::from_json(raw).unwrap().into_profile()
}

// ============================================================================
// Servings Coercion Tests
// ============================================================================

#[test]
fn test_servings_accepts_numbers_and_numeric_strings() {
    let profile = profile_from(r#"{"cuisine": "italian", "meal_type": "Full Meal", "servings": 2}"#);
    assert!((profile.servings - 2.0).abs() < EPSILON);

    let profile =
        profile_from(r#"{"cuisine": "italian", "meal_type": "Full Meal", "servings": "2.5"}"#);
    assert!((profile.servings - 2.5).abs() < EPSILON);
}

#[test]
fn test_servings_default_when_absent() {
    let profile = profile_from(r#"{"cuisine": "italian", "meal_type": "Full Meal"}"#);
    assert!((profile.servings - 4.0).abs() < EPSILON);
}

#[test]
fn test_servings_default_on_malformed_values() {
    for raw in [
        r#"{"servings": "a few"}"#,
        r#"{"servings": -2}"#,
        r#"{"servings": 0}"#,
        r#"{"servings": [4]}"#,
        r#"{"servings": null}"#,
    ] {
        let profile = profile_from(raw);
        assert!(
            (profile.servings - 4.0).abs() < EPSILON,
            "expected default servings for {raw}"
        );
    }
}

// ============================================================================
// Meal-Type Mapping Tests
// ============================================================================

#[test]
fn test_meal_type_label_mapping() {
    let cases = [
        ("Breakfast", MealType::Breakfast, "breakfast"),
        ("Full Meal", MealType::FullMeal, "meals"),
        ("Sweet Treat", MealType::SweetTreat, "sweet treat"),
        ("Snack", MealType::Snack, "snacks"),
    ];
    for (label, expected, category) in cases {
        let parsed = MealType::parse_label(label);
        assert_eq!(parsed, expected, "label {label} mapped wrongly");
        assert_eq!(parsed.category_label(), category);
    }
}

#[test]
fn test_unknown_meal_type_maps_to_sentinel() {
    let profile = profile_from(r#"{"cuisine": "italian", "meal_type": "Brunch"}"#);
    assert_eq!(profile.meal_type, MealType::Unknown);
    assert_eq!(profile.meal_type.category_label(), "unknown");
}

// ============================================================================
// Ingredient and Flag Tests
// ============================================================================

#[test]
fn test_ingredients_are_normalized_into_the_explicit_set() {
    let profile = profile_from(
        r#"{"cuisine": "italian", "meal_type": "Snack", "ingredients": ["  Flour ", "MILK", "flour"]}"#,
    );
    assert_eq!(profile.explicit_ingredients.len(), 2, "duplicates collapse after normalization");
    assert!(profile.explicit_ingredients.contains(&Ingredient::new("flour")));
    assert!(profile.explicit_ingredients.contains(&Ingredient::new("milk")));
}

#[test]
fn test_policy_flags_default_off() {
    let profile = profile_from(r#"{"cuisine": "italian", "meal_type": "Snack"}"#);
    assert!(!profile.allow_substitutions);
    assert!(!profile.willing_to_buy_more);
}

#[test]
fn test_use_grocery_alias_sets_willing_to_buy_more() {
    let profile =
        profile_from(r#"{"cuisine": "italian", "meal_type": "Snack", "use_grocery": true}"#);
    assert!(profile.willing_to_buy_more);
}

#[test]
fn test_invalid_json_is_an_error() {
    assert!(PreferenceDocument::from_json("not json").is_err());
}

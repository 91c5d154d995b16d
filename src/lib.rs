// ABOUTME: Main library entry point for the Remy recipe recommendation platform
// ABOUTME: Wires corpus loading and preference adaptation around the intelligence engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

#![deny(unsafe_code)]

//! # Remy Recommender
//!
//! An ingredient-aware recipe recommendation engine. Given a user's pantry,
//! dietary constraints, and preferences (cuisine, meal type, willingness to
//! shop), Remy narrows a recipe corpus with classifier-predicted labels,
//! scores each candidate against the pantry with substitution awareness, and
//! returns one top pick plus an ordered list of alternates.
//!
//! ## Architecture
//!
//! The engine is a pure computation library over in-memory structures:
//!
//! - **`remy-core`**: domain models, errors, constants, configuration
//! - **`remy-oracles`**: classifier/relevance trait seam, batching policy,
//!   deterministic reference implementations
//! - **`remy-intelligence`**: the filter → score → rank pipeline
//! - **this crate**: data-loading plumbing (corpus, preferences), logging
//!   setup, and the `remy-cli` binary
//!
//! Model artifacts, image-based ingredient recognition, and favourites
//! persistence live entirely outside the engine; it only ever receives plain
//! ingredient strings and typed recipe data.
//!
//! ## Example
//!
//! ```rust,no_run
//! use remy_recommender::intelligence::{EngineOracles, RecommendationEngine};
//! use remy_recommender::models::{MealType, UserProfile};
//! use remy_recommender::oracles::{KeywordClassifier, TableRelevanceModel};
//!
//! let cuisine = KeywordClassifier::demo_cuisine();
//! let meal_type = KeywordClassifier::demo_meal_type();
//! let relevance = TableRelevanceModel::new();
//!
//! let engine = RecommendationEngine::new(EngineOracles {
//!     cuisine: &cuisine,
//!     meal_type: &meal_type,
//!     relevance: &relevance,
//! });
//!
//! let profile = UserProfile::new("italian", MealType::FullMeal)
//!     .with_ingredients(["pasta", "basil"])
//!     .with_willing_to_buy_more(true);
//! let result = engine.recommend(Vec::new(), &profile).unwrap();
//! assert!(result.is_empty());
//! ```

/// Schema-validated recipe corpus loading
pub mod corpus;

/// Structured logging configuration
pub mod logging;

/// Preference-document adaptation into user profiles
pub mod preferences;

// Re-export the workspace crates under stable paths so binaries and
// integration tests import through one front door.
pub use remy_core::{config, constants, errors, models};
pub use remy_intelligence as intelligence;
pub use remy_oracles as oracles;

// ABOUTME: Core data models for the Remy recipe intelligence engine
// ABOUTME: Re-exports Ingredient, Recipe, UserProfile, and recommendation result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

//! # Data Models
//!
//! Request-scoped value objects used throughout the recommendation pipeline.
//!
//! ## Design Principles
//!
//! - **Normalized by construction**: an [`Ingredient`] can only exist in its
//!   normalized (lowercased, trimmed) form, so equality is always normalized
//!   equality
//! - **Immutable per request**: profiles and results are constructed once per
//!   recommendation request and never mutated afterwards
//! - **Serializable**: all models support JSON serialization for corpus
//!   loading and CLI output

mod ingredient;
mod profile;
mod recipe;
mod result;

pub use ingredient::Ingredient;
pub use profile::{MealType, UserProfile};
pub use recipe::{Recipe, RecipeId};
pub use result::{EmptyReason, RecommendationResult};

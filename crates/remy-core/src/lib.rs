// ABOUTME: Core types and constants for the Remy recipe intelligence engine
// ABOUTME: Foundation crate with error handling, domain models, constants, and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

#![deny(unsafe_code)]

//! # Remy Core
//!
//! Foundation crate providing shared types and constants for the Remy recipe
//! intelligence engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `RecommendationError`, `OracleError`, and `AppResult`
//! - **constants**: Process-wide constants (default ingredients, substitution table, scoring)
//! - **models**: Core data models (`Ingredient`, `Recipe`, `UserProfile`, `RecommendationResult`)
//! - **config**: Engine configuration with environment overrides

/// Unified error handling for the recommendation pipeline
pub mod errors;

/// Process-wide constants organized by domain
pub mod constants;

/// Core data models (`Ingredient`, `Recipe`, `UserProfile`, etc.)
pub mod models;

/// Engine configuration (scoring, batching, ranking limits)
pub mod config;

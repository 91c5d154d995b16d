// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Process-wide read-only data for the Remy recipe intelligence engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

//! Constants module
//!
//! Process-wide constant data, grouped by domain. The ingredient and
//! substitution tables are loaded once and treated as read-only for the
//! process lifetime; no locking is required because they are never written
//! after initialization.

/// Default pantry staples assumed always available
pub mod ingredients;

/// Scoring weights, credits, and pipeline limits
pub mod scoring;

/// Canonical ingredient substitution table
pub mod substitutions;

pub use ingredients::DefaultIngredients;
pub use substitutions::SubstitutionTable;

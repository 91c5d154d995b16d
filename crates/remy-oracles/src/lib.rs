// ABOUTME: Oracle abstractions consumed by the Remy recommendation engine
// ABOUTME: Classifier and relevance-model traits, batching policy, reference implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

#![deny(unsafe_code)]

//! Oracle abstractions and reference implementations.
//!
//! The engine consumes three externally supplied scoring functions as opaque
//! collaborators: a cuisine classifier, a meal-type classifier, and a learned
//! relevance model. This crate defines their trait contracts, the
//! order-preserving batching policy applied in front of them, and
//! deterministic reference implementations used by tests and the CLI demo.
//!
//! Real deployments back these traits with loaded model artifacts; the
//! engine never knows the difference.

// Re-export remy-core error types so oracle implementations can use
// `crate::errors::*` style paths.
pub use remy_core::errors;

/// Core oracle traits and contracts
pub mod core;

/// Order-preserving fixed-chunk batching policy
pub mod batching;

/// Deterministic keyword-based reference classifier
pub mod keyword;

/// Table-backed reference relevance model
pub mod lookup;

pub use batching::BatchPolicy;
pub use keyword::KeywordClassifier;
pub use lookup::TableRelevanceModel;
pub use self::core::{LabelClassifier, RelevanceModel};

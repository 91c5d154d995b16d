// ABOUTME: Normalized ingredient newtype with construction-time canonicalization
// ABOUTME: Equality between ingredients is equality of normalized forms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

/// A normalized ingredient name.
///
/// Construction lowercases and trims surrounding whitespace; no other
/// transformation is applied (no stemming or pluralization handling). Two
/// ingredients are equal iff their normalized forms are equal, which the
/// newtype guarantees by never holding an unnormalized string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Ingredient(String);

impl Ingredient {
    /// Normalize a raw ingredient name
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// The normalized name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Ingredient {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&str> for Ingredient {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<Ingredient> for String {
    fn from(ingredient: Ingredient) -> Self {
        ingredient.0
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

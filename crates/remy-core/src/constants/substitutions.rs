// ABOUTME: Canonical ingredient substitution table with ordered substitute lists
// ABOUTME: Process-wide constant mapping, lookup-only after initialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

//! Substitution table
//!
//! Maps a canonical ingredient name to an ordered list of acceptable
//! substitutes. Lookup-only at runtime; the table is never mutated after
//! process start.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::models::Ingredient;

static SUBSTITUTION_TABLE: OnceLock<SubstitutionTable> = OnceLock::new();

/// Built-in substitution entries as `(canonical, substitutes)` name pairs
const BUILTIN_ENTRIES: &[(&str, &[&str])] = &[
    ("milk", &["almond milk", "soy milk", "oat milk", "coconut milk"]),
    ("butter", &["margarine", "coconut oil", "olive oil"]),
    ("sugar", &["honey", "maple syrup", "agave nectar", "brown sugar"]),
    ("egg", &["egg substitute", "flax egg"]),
    ("flour", &["almond flour", "coconut flour", "whole wheat flour"]),
    ("salt", &["sea salt", "kosher salt"]),
    ("baking powder", &["baking soda"]),
    ("cheese", &["colby jack", "monterey jack", "cheddar", "mozzerella"]),
    ("cream", &["coconut cream", "cashew cream", "sour cream"]),
    ("vanilla extract", &["vanilla bean", "vanilla paste"]),
    ("oil", &["canola oil", "vegetable oil"]),
];

/// Mapping from a canonical ingredient to its ordered substitutes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionTable {
    entries: BTreeMap<Ingredient, Vec<Ingredient>>,
}

impl SubstitutionTable {
    /// Process-wide table, initialized on first access and read-only
    /// thereafter
    #[must_use]
    pub fn global() -> &'static Self {
        SUBSTITUTION_TABLE.get_or_init(Self::builtin)
    }

    /// The built-in table
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN_ENTRIES
                .iter()
                .map(|(canonical, subs)| (*canonical, subs.iter().copied())),
        )
    }

    /// Build a table from `(canonical, substitutes)` pairs. Names are
    /// normalized on insertion; substitute order is preserved.
    #[must_use]
    pub fn from_entries<'a, I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, S)>,
        S: IntoIterator<Item = &'a str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(canonical, subs)| {
                    (
                        Ingredient::new(canonical),
                        subs.into_iter().map(Ingredient::new).collect(),
                    )
                })
                .collect(),
        }
    }

    /// Ordered substitutes for a canonical ingredient, if any are known
    #[must_use]
    pub fn substitutes_for(&self, ingredient: &Ingredient) -> Option<&[Ingredient]> {
        self.entries.get(ingredient).map(Vec::as_slice)
    }

    /// Number of canonical entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

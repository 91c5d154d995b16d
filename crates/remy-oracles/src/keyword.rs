// ABOUTME: Deterministic keyword-hit classifier standing in for trained label models
// ABOUTME: Most keyword hits wins, earlier rule wins ties, fixed fallback label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

//! Keyword reference classifier.
//!
//! A deterministic local stand-in for a trained text classifier, used by
//! tests and the CLI demo. Scoring is substring-hit counting over the
//! lowercased feature text: the label whose keyword list hits most wins,
//! ties resolve to the earlier-registered label, and zero hits yield the
//! fallback label. No randomness, no I/O.

use remy_core::errors::OracleResult;

use crate::core::LabelClassifier;

/// One label with its triggering keywords
#[derive(Debug, Clone)]
struct LabelRule {
    label: String,
    keywords: Vec<String>,
}

/// Deterministic keyword-hit classifier
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    rules: Vec<LabelRule>,
    fallback: String,
}

impl KeywordClassifier {
    /// Classifier with no rules; every text maps to `fallback`
    #[must_use]
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            rules: Vec::new(),
            fallback: fallback.into(),
        }
    }

    /// Register a label and its keywords (matched lowercased)
    #[must_use]
    pub fn with_label<'a, I>(mut self, label: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.rules.push(LabelRule {
            label: label.into(),
            keywords: keywords
                .into_iter()
                .map(|keyword| keyword.trim().to_lowercase())
                .collect(),
        });
        self
    }

    /// Demo cuisine classifier used by the CLI
    #[must_use]
    pub fn demo_cuisine() -> Self {
        Self::new("american")
            .with_label("italian", ["pasta", "basil", "parmesan", "mozzarella", "risotto"])
            .with_label("mexican", ["tortilla", "salsa", "jalapeno", "cilantro", "taco"])
            .with_label("french", ["baguette", "brie", "herbes", "crepe", "dijon"])
            .with_label("indian", ["curry", "garam masala", "turmeric", "paneer", "dal"])
            .with_label("chinese", ["soy sauce", "ginger", "wok", "hoisin", "bok choy"])
    }

    /// Demo meal-type classifier used by the CLI
    #[must_use]
    pub fn demo_meal_type() -> Self {
        Self::new("meals")
            .with_label("breakfast", ["egg", "oat", "pancake", "bacon", "toast"])
            .with_label("sweet treat", ["sugar", "chocolate", "vanilla", "frosting", "caramel"])
            .with_label("snacks", ["chips", "dip", "cracker", "popcorn", "bite"])
    }

    fn classify(&self, text: &str) -> String {
        let haystack = text.to_lowercase();
        let mut best: Option<(&str, usize)> = None;
        for rule in &self.rules {
            let hits = rule
                .keywords
                .iter()
                .filter(|keyword| !keyword.is_empty() && haystack.contains(keyword.as_str()))
                .count();
            // Strictly-greater keeps the earlier rule on ties.
            if hits > 0 && best.is_none_or(|(_, best_hits)| hits > best_hits) {
                best = Some((&rule.label, hits));
            }
        }
        best.map_or_else(|| self.fallback.clone(), |(label, _)| label.to_owned())
    }
}

impl LabelClassifier for KeywordClassifier {
    fn predict(&self, texts: &[String]) -> OracleResult<Vec<String>> {
        Ok(texts.iter().map(|text| self.classify(text)).collect())
    }
}

// ABOUTME: Order-preserving fixed-chunk batching policy for oracle invocations
// ABOUTME: Verifies per-chunk output shape; results are independent of chunk size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Recipe Intelligence

//! # Batching Policy
//!
//! Oracle invocations are the only externally-blocking operations in the
//! pipeline, so they are chunked to bound memory and latency. Batching is a
//! throughput concern only: chunks are submitted in input order, outputs are
//! concatenated in input order, and pipeline results are independent of the
//! chunk size by construction.
//!
//! The policy lives in front of the oracle traits rather than inside the
//! engine, so no chunk size is hardcoded in the core.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::trace;

use remy_core::constants::scoring::{
    DEFAULT_ORACLE_BATCH_SIZE, MAX_ORACLE_BATCH_SIZE, MIN_ORACLE_BATCH_SIZE,
};
use remy_core::errors::{OracleError, OracleResult};

/// Fixed-size, order-preserving chunking for oracle calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPolicy {
    chunk_size: usize,
}

impl Default for BatchPolicy {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_ORACLE_BATCH_SIZE,
        }
    }
}

impl BatchPolicy {
    /// Policy with the given chunk size, clamped to the permitted range
    #[must_use]
    pub const fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: clamp_chunk(chunk_size),
        }
    }

    /// Effective chunk size
    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Run a length-preserving oracle call over `items` in chunks.
    ///
    /// Each chunk's output length is verified against its input length, so a
    /// misbehaving oracle is caught at the chunk where it drifts rather than
    /// skewing all downstream indexing.
    ///
    /// # Errors
    ///
    /// Propagates the oracle's error, or returns
    /// [`OracleError::ShapeMismatch`] when a chunk's output length differs
    /// from its input length.
    pub fn run_mapped<T, R, F>(&self, items: &[T], mut call: F) -> OracleResult<Vec<R>>
    where
        F: FnMut(&[T]) -> OracleResult<Vec<R>>,
    {
        let mut outputs = Vec::with_capacity(items.len());
        for chunk in items.chunks(self.chunk_size) {
            trace!(chunk_len = chunk.len(), "submitting oracle batch");
            let predicted = call(chunk)?;
            if predicted.len() != chunk.len() {
                return Err(OracleError::ShapeMismatch {
                    expected: chunk.len(),
                    actual: predicted.len(),
                });
            }
            outputs.extend(predicted);
        }
        Ok(outputs)
    }

    /// Run a map-valued oracle call over `items` in chunks, merging the
    /// per-chunk maps.
    ///
    /// Used for the relevance model, whose output is indexed by recipe id
    /// rather than input position; absence of an id is tolerated by the
    /// caller and is not a shape violation.
    ///
    /// # Errors
    ///
    /// Propagates the oracle's error.
    pub fn run_merged<T, K, V, F>(&self, items: &[T], mut call: F) -> OracleResult<HashMap<K, V>>
    where
        K: Hash + Eq,
        F: FnMut(&[T]) -> OracleResult<HashMap<K, V>>,
    {
        let mut merged = HashMap::with_capacity(items.len());
        for chunk in items.chunks(self.chunk_size) {
            merged.extend(call(chunk)?);
        }
        Ok(merged)
    }
}

const fn clamp_chunk(size: usize) -> usize {
    if size < MIN_ORACLE_BATCH_SIZE {
        MIN_ORACLE_BATCH_SIZE
    } else if size > MAX_ORACLE_BATCH_SIZE {
        MAX_ORACLE_BATCH_SIZE
    } else {
        size
    }
}

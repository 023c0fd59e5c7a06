//! Word-level n-gram sentence generation library.
//!
//! This crate provides a complete n-gram language-model pipeline:
//! - Tokenization of raw text into words, numbers and punctuation
//! - Sentence segmentation and n-gram extraction with start-marker padding
//! - A relative-frequency model built over the whole corpus
//! - Stochastic sentence generation with a context-miss fallback policy
//! - Display normalization (capitalization, spacing, pronoun case)
//!
//! The library is pure computation over in-memory data: file handling,
//! argument parsing and console output belong to the callers.

/// Core n-gram model and generation pipeline.
///
/// This module exposes the pipeline stages in dependency order:
/// tokenizer, extractor, frequency model, generator, normalizer.
pub mod model;

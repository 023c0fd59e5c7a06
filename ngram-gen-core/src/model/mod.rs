//! Top-level module for the n-gram sentence generation system.
//!
//! The pipeline is strictly forward:
//! tokenizer → extractor → frequency model → generator → normalizer.
//! Each stage is a pure computation; the model is immutable once built.

/// Raw text to token-stream conversion.
///
/// Lowercases input and emits word/number runs plus the four recognized
/// punctuation marks as individual tokens. Everything else is dropped.
pub mod tokenizer;

/// Sentence segmentation and n-gram extraction.
///
/// Groups tokens into start-marker-padded sentences bounded by terminating
/// punctuation and slides a width-`n` window over each kept sentence.
pub mod extractor;

/// Corpus-global relative-frequency model over extracted n-grams.
///
/// Mapping from n-gram key to occurrence count; frequencies are counts
/// divided by the total number of extracted n-grams.
pub mod frequency_model;

/// High-level interface for generating normalized sentences from a model.
///
/// Performs conditioned random walks with uniform tie-breaking and a
/// whole-model fallback draw, with optional seeding for reproducibility.
pub mod generator;

/// Display normalization of generated token sequences.
///
/// Strips start markers, fixes capitalization and punctuation spacing,
/// and renders the pronoun "I".
pub mod normalizer;

/// Error taxonomy shared by the pipeline stages.
pub mod error;

/// Internal per-context candidate index used by the generator.
///
/// Precomputes, for every (n-1)-token context, the set of n-grams tied at
/// the maximum frequency. Not exposed publicly.
mod context_index;

/// Reserved sentinel token padding the left context of every sentence.
/// Never emitted as output text.
pub const START_MARKER: &str = "<s>";

/// Punctuation tokens that terminate a sentence.
pub const TERMINATORS: [&str; 3] = [".", "?", "!"];

/// Punctuation tokens recognized by the tokenizer and re-attached to the
/// preceding word by the normalizer. Includes the comma, which separates
/// but never terminates.
pub const PUNCTUATION: [char; 4] = ['.', ',', '?', '!'];

/// Returns true if `token` ends a sentence.
pub(crate) fn is_terminator(token: &str) -> bool {
	TERMINATORS.contains(&token)
}

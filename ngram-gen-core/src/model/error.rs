use thiserror::Error;

/// Errors surfaced by the n-gram pipeline.
///
/// Only structurally impossible states fail: malformed text never errors
/// (unrecognized characters are dropped by the tokenizer), and a context
/// with no matching n-gram is handled by the generator's fallback policy,
/// not reported here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
	/// Configuration error: the model order must be at least 2.
	#[error("n must be >= 2, got {0}")]
	InvalidOrder(usize),

	/// Corpus error: extraction produced no n-grams, so no frequencies
	/// can be computed (e.g. empty input, or no sentence ever terminated).
	#[error("empty corpus yields no n-grams")]
	EmptyCorpus,

	/// Normalization guard: the generated sentence is empty once start
	/// markers and surrounding whitespace are removed.
	#[error("cannot normalize an empty sentence")]
	EmptySentence,

	/// Liveness guard: a sentence failed to reach a terminator within the
	/// step bound (corpus has no reachable terminator-ending n-gram).
	#[error("generation exceeded maximum steps ({0})")]
	MaxSteps(usize),
}

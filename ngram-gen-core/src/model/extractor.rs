use super::error::ModelError;
use super::{START_MARKER, is_terminator};

/// Segments a token stream into sentences and extracts all n-gram keys.
///
/// A working buffer starts as `n-1` start markers. Non-terminating tokens
/// accumulate into the buffer; on a terminator (`.` `?` `!`), a buffer that
/// accumulated at least one real token is terminated and every contiguous
/// width-`n` window over it is emitted as a space-joined key, then the
/// buffer resets to fresh padding. A buffer with no real tokens resets
/// without emitting. A sentence left unterminated at end of input is
/// discarded; no terminator is synthesized.
///
/// A kept sentence with `k` real tokens before its terminator contributes
/// exactly `k + 1` windows.
///
/// # Errors
/// Returns `ModelError::InvalidOrder` if `n < 2`.
pub fn extract_ngrams(tokens: &[String], n: usize) -> Result<Vec<String>, ModelError> {
	if n < 2 {
		return Err(ModelError::InvalidOrder(n));
	}

	let padding = vec![START_MARKER.to_owned(); n - 1];
	let mut ngrams = Vec::new();
	let mut sentence = padding.clone();

	for token in tokens {
		if is_terminator(token) {
			// Kept only if the buffer grew past its padding
			if sentence.len() > n - 1 {
				sentence.push(token.clone());
				for window in sentence.windows(n) {
					ngrams.push(window.join(" "));
				}
			}
			sentence = padding.clone();
		} else {
			sentence.push(token.clone());
		}
	}

	Ok(ngrams)
}

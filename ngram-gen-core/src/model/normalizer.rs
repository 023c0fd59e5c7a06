use super::error::ModelError;
use super::{PUNCTUATION, START_MARKER};

/// Turns a space-joined generated token sequence into display text.
///
/// Applied in order:
/// 1. Remove every start-marker occurrence.
/// 2. Trim surrounding whitespace.
/// 3. Uppercase the first character.
/// 4. Drop the single space preceding any of `.` `,` `?` `!`.
/// 5. Uppercase a standalone `i` flanked by single spaces on both sides.
///
/// # Errors
/// Returns `ModelError::EmptySentence` if nothing remains after steps
/// 1 and 2.
pub fn normalize(sentence: &str) -> Result<String, ModelError> {
	let stripped = sentence.replace(START_MARKER, "");
	let trimmed = stripped.trim();
	if trimmed.is_empty() {
		return Err(ModelError::EmptySentence);
	}

	let chars: Vec<char> = trimmed.chars().collect();
	let mut result = String::with_capacity(trimmed.len());

	for (i, &c) in chars.iter().enumerate() {
		let next = chars.get(i + 1).copied();

		// Punctuation attaches to the preceding word
		if c == ' ' && next.is_some_and(|m| PUNCTUATION.contains(&m)) {
			continue;
		}
		if i == 0 {
			result.extend(c.to_uppercase());
		} else if c == 'i' && chars[i - 1] == ' ' && next == Some(' ') {
			// The pronoun, when it stands as its own word
			result.push('I');
		} else {
			result.push(c);
		}
	}

	Ok(result)
}

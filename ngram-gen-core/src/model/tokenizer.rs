use super::PUNCTUATION;

/// Converts raw text into an ordered sequence of normalized tokens.
///
/// The whole input is lowercased first. Maximal runs of word characters
/// (alphanumeric or `_`) become single tokens; each of `.` `,` `?` `!`
/// becomes its own single-character token. Whitespace and every other
/// symbol are dropped.
///
/// # Notes
/// - Pure function of the input text; never fails.
/// - Empty or symbol-only input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
	let mut tokens = Vec::new();
	let mut word = String::new();

	for c in text.to_lowercase().chars() {
		if is_word_char(c) {
			word.push(c);
		} else {
			if !word.is_empty() {
				tokens.push(std::mem::take(&mut word));
			}
			if PUNCTUATION.contains(&c) {
				tokens.push(c.to_string());
			}
		}
	}
	if !word.is_empty() {
		tokens.push(word);
	}

	tokens
}

fn is_word_char(c: char) -> bool {
	c.is_alphanumeric() || c == '_'
}

use super::context_index::ContextIndex;
use super::error::ModelError;
use super::frequency_model::FrequencyModel;
use super::normalizer::normalize;
use super::{START_MARKER, is_terminator};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Hard bound on appended tokens per sentence. A corpus whose reachable
/// n-grams never supply a terminator would otherwise loop forever.
pub const MAX_GENERATION_STEPS: usize = 10_000;

/// High-level interface generating normalized sentences from a model.
///
/// # Responsibilities
/// - Walk the model one token at a time, conditioned on the last `n-1`
///   tokens of the sentence under construction
/// - Break frequency ties uniformly at random
/// - Recover from unseen contexts with a uniform draw over the whole model
///
/// # Notes
/// - Each sentence is built from a fresh start-marker prefix; sentences
///   are independent of one another.
/// - The model and its index are read-only during generation; only the
///   RNG state advances.
#[derive(Debug)]
pub struct Generator {
	model: FrequencyModel,
	index: ContextIndex,
	rng: StdRng,
}

impl Generator {
	/// Creates a generator seeded from the operating system.
	pub fn new(model: FrequencyModel) -> Self {
		Self::with_rng(model, StdRng::from_os_rng())
	}

	/// Creates a generator with a fixed seed.
	///
	/// Two generators with the same model and seed produce identical
	/// output sequences.
	pub fn with_seed(model: FrequencyModel, seed: u64) -> Self {
		Self::with_rng(model, StdRng::seed_from_u64(seed))
	}

	fn with_rng(model: FrequencyModel, rng: StdRng) -> Self {
		let index = ContextIndex::build(&model);
		Self { model, index, rng }
	}

	/// The underlying frequency model.
	pub fn model(&self) -> &FrequencyModel {
		&self.model
	}

	/// Generates `m` normalized sentences, in generation order.
	///
	/// # Errors
	/// Returns `ModelError::MaxSteps` if a sentence fails to terminate
	/// within [`MAX_GENERATION_STEPS`]. `m = 0` yields an empty vector.
	pub fn generate(&mut self, m: usize) -> Result<Vec<String>, ModelError> {
		let mut sentences = Vec::with_capacity(m);
		for _ in 0..m {
			sentences.push(self.generate_sentence()?);
		}
		Ok(sentences)
	}

	/// Generates a single normalized sentence.
	fn generate_sentence(&mut self) -> Result<String, ModelError> {
		let n = self.model.order();
		let mut sentence: Vec<String> = vec![START_MARKER.to_owned(); n - 1];
		let mut steps = 0;

		// The buffer always holds at least the n-1 markers
		while !is_terminator(&sentence[sentence.len() - 1]) {
			if steps >= MAX_GENERATION_STEPS {
				return Err(ModelError::MaxSteps(MAX_GENERATION_STEPS));
			}

			let key = sentence[sentence.len() - (n - 1)..].join(" ");
			let pool: &[String] = match self.index.candidates(&key) {
				Some(candidates) => candidates,
				// Unseen context: recover with a whole-model draw
				None => self.index.all_ngrams(),
			};

			// Never empty, the model rejects empty corpora on construction
			let chosen = pool.choose(&mut self.rng).ok_or(ModelError::EmptyCorpus)?;
			sentence.push(last_token(chosen).to_owned());
			steps += 1;
		}

		normalize(&sentence.join(" "))
	}
}

/// The last token of a space-joined key.
fn last_token(ngram: &str) -> &str {
	ngram.rsplit(' ').next().unwrap_or(ngram)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::{extractor::extract_ngrams, tokenizer::tokenize};

	fn model_from(text: &str, n: usize) -> FrequencyModel {
		let tokens = tokenize(text);
		let ngrams = extract_ngrams(&tokens, n).unwrap();
		FrequencyModel::from_ngrams(ngrams, n).unwrap()
	}

	#[test]
	fn zero_sentences_is_fine() {
		let mut generator = Generator::with_seed(model_from("the cat sat.", 2), 7);
		assert!(generator.generate(0).unwrap().is_empty());
	}

	#[test]
	fn deterministic_corpus_always_reproduces_the_sentence() {
		let mut generator = Generator::new(model_from("the cat sat.", 2));
		for sentence in generator.generate(5).unwrap() {
			assert_eq!(sentence, "The cat sat.");
		}
	}

	#[test]
	fn seeded_runs_are_identical() {
		let text = "the cat sat. the cat ran. a dog barked. a dog slept?";
		let mut first = Generator::with_seed(model_from(text, 2), 42);
		let mut second = Generator::with_seed(model_from(text, 2), 42);
		assert_eq!(first.generate(20).unwrap(), second.generate(20).unwrap());
	}

	#[test]
	fn context_matching_candidates_are_preferred() {
		// Both sentences tie at the top frequency after "<s>", so the
		// output varies between them but never leaves the corpus.
		let mut generator = Generator::with_seed(model_from("the cat sat. the cat ran.", 2), 3);
		for sentence in generator.generate(30).unwrap() {
			assert!(
				sentence == "The cat sat." || sentence == "The cat ran.",
				"unexpected sentence: {sentence:?}"
			);
		}
	}

	#[test]
	fn higher_frequency_wins_a_context() {
		// "cat sat" appears twice, "cat ran" once: after "cat" only the
		// strict maximum survives as a candidate.
		let text = "the cat sat. the cat sat. the cat ran.";
		let mut generator = Generator::with_seed(model_from(text, 2), 11);
		for sentence in generator.generate(20).unwrap() {
			assert_eq!(sentence, "The cat sat.");
		}
	}

	#[test]
	fn fallback_recovers_unseen_contexts() {
		// No n-gram starts with "<s>", so the first step must fall back
		// to a whole-model draw; the only key ends in a terminator.
		let model = FrequencyModel::from_ngrams(vec!["x .".to_owned()], 2).unwrap();
		let mut generator = Generator::with_seed(model, 5);
		assert_eq!(generator.generate(1).unwrap(), ["."]);
	}

	#[test]
	fn unreachable_terminator_hits_the_step_bound() {
		// "y y" loops on itself and no key ever supplies a terminator.
		let model = FrequencyModel::from_ngrams(vec!["y y".to_owned()], 2).unwrap();
		let mut generator = Generator::with_seed(model, 5);
		assert_eq!(
			generator.generate(1).unwrap_err(),
			ModelError::MaxSteps(MAX_GENERATION_STEPS)
		);
	}

	#[test]
	fn trigram_generation_terminates_and_normalizes() {
		let text = "i think so. i think not.";
		let mut generator = Generator::with_seed(model_from(text, 3), 9);
		for sentence in generator.generate(10).unwrap() {
			assert!(
				sentence == "I think so." || sentence == "I think not.",
				"unexpected sentence: {sentence:?}"
			);
		}
	}
}

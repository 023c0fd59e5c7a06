//! End-to-end pipeline scenario over a tiny two-sentence corpus.

use ngram_gen_core::model::extractor::extract_ngrams;
use ngram_gen_core::model::frequency_model::FrequencyModel;
use ngram_gen_core::model::generator::Generator;
use ngram_gen_core::model::tokenizer::tokenize;

const CORPUS: &str = "The cat sat. The cat ran.";

#[test]
fn bigram_pipeline_over_the_cat_corpus() {
	let tokens = tokenize(CORPUS);
	assert_eq!(tokens, ["the", "cat", "sat", ".", "the", "cat", "ran", "."]);

	let ngrams = extract_ngrams(&tokens, 2).unwrap();
	assert_eq!(
		ngrams,
		["<s> the", "the cat", "cat sat", "sat .", "<s> the", "the cat", "cat ran", "ran ."]
	);

	let model = FrequencyModel::from_ngrams(ngrams, 2).unwrap();
	assert_eq!(model.total(), 8);
	assert_eq!(model.frequency("the cat"), Some(0.25));
	assert_eq!(model.frequency("<s> the"), Some(0.25));
	assert_eq!(model.frequency("cat sat"), Some(0.125));

	let sum: f64 = model.frequencies().map(|(_, f)| f).sum();
	assert!((sum - 1.0).abs() < 1e-12);

	// Both sentences tie at every choice point, so repeated generation
	// stays inside the corpus and varies only at "cat".
	let mut generator = Generator::with_seed(model, 1234);
	let sentences = generator.generate(50).unwrap();
	assert_eq!(sentences.len(), 50);
	for sentence in &sentences {
		assert!(
			sentence == "The cat sat." || sentence == "The cat ran.",
			"unexpected sentence: {sentence:?}"
		);
	}
}

#[test]
fn empty_corpus_is_rejected_before_modeling() {
	let tokens = tokenize("");
	let ngrams = extract_ngrams(&tokens, 2).unwrap();
	assert!(ngrams.is_empty());
	assert!(FrequencyModel::from_ngrams(ngrams, 2).is_err());
}

#[test]
fn corpus_without_terminators_is_an_empty_corpus() {
	// No sentence ever completes, so extraction emits nothing and the
	// model construction reports it instead of dividing by zero.
	let tokens = tokenize("the cat sat and sat and sat");
	let ngrams = extract_ngrams(&tokens, 3).unwrap();
	assert!(ngrams.is_empty());
	assert!(FrequencyModel::from_ngrams(ngrams, 3).is_err());
}

use super::error::ModelError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Corpus-global relative-frequency model over n-gram keys.
///
/// Stores one occurrence count per exact space-joined key plus the total
/// number of extracted n-grams (duplicates included). The relative
/// frequency of a key with count `c` is `c / total`, so the frequencies
/// sum to 1.0 up to floating-point rounding.
///
/// # Invariants
/// - `n` is always >= 2
/// - `total` equals the sum of all counts and is strictly positive
/// - Read-only after construction
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FrequencyModel {
	/// The order of the model (number of tokens per n-gram)
	n: usize, // must be >= 2

	/// Total number of n-grams the corpus produced, duplicates included
	total: usize,

	/// Occurrence count per n-gram key
	counts: HashMap<String, usize>,
}

impl FrequencyModel {
	/// Builds a model of order `n` from the extracted n-gram list.
	///
	/// # Errors
	/// - `ModelError::InvalidOrder` if `n < 2`.
	/// - `ModelError::EmptyCorpus` if the list is empty; no partial model
	///   is ever returned.
	pub fn from_ngrams(ngrams: Vec<String>, n: usize) -> Result<Self, ModelError> {
		if n < 2 {
			return Err(ModelError::InvalidOrder(n));
		}
		if ngrams.is_empty() {
			return Err(ModelError::EmptyCorpus);
		}

		let total = ngrams.len();
		let mut counts: HashMap<String, usize> = HashMap::new();
		for ngram in ngrams {
			*counts.entry(ngram).or_insert(0) += 1;
		}

		Ok(Self { n, total, counts })
	}

	/// The order `n` of the model.
	pub fn order(&self) -> usize {
		self.n
	}

	/// Total number of extracted n-grams, duplicates included.
	pub fn total(&self) -> usize {
		self.total
	}

	/// Number of distinct n-gram keys.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	/// True if the model holds no keys. Cannot happen for a constructed
	/// model, present for API completeness.
	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Occurrence count of an exact key, 0 if absent.
	pub fn count(&self, ngram: &str) -> usize {
		self.counts.get(ngram).copied().unwrap_or(0)
	}

	/// Relative frequency of an exact key, `None` if absent.
	pub fn frequency(&self, ngram: &str) -> Option<f64> {
		self.counts
			.get(ngram)
			.map(|&c| c as f64 / self.total as f64)
	}

	/// Iterator over `(key, relative frequency)` pairs.
	pub fn frequencies(&self) -> impl Iterator<Item = (&str, f64)> {
		self.counts
			.iter()
			.map(|(k, &c)| (k.as_str(), c as f64 / self.total as f64))
	}

	/// Iterator over `(key, count)` pairs.
	pub(crate) fn counts(&self) -> impl Iterator<Item = (&str, usize)> {
		self.counts.iter().map(|(k, &c)| (k.as_str(), c))
	}
}

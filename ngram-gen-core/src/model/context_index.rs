use super::frequency_model::FrequencyModel;
use std::collections::HashMap;

/// Candidate continuations for one (n-1)-token context.
///
/// Holds the n-grams sharing the context prefix that are tied at the
/// maximum occurrence count seen for this context. The generator draws
/// uniformly among them.
#[derive(Debug)]
struct CandidateSet {
	/// Highest occurrence count among n-grams with this prefix
	max_count: usize,
	/// Keys tied at `max_count`, lexicographically sorted
	candidates: Vec<String>,
}

/// Index from context key to its precomputed candidate set.
///
/// Built once per model so each generation step is an average O(1)
/// lookup instead of a scan over every key. Counts are compared rather
/// than derived frequencies, so ties are exact.
///
/// # Invariants
/// - Every candidate list is non-empty and sorted
/// - `all_ngrams` holds every distinct key of the model, sorted
#[derive(Debug)]
pub(crate) struct ContextIndex {
	entries: HashMap<String, CandidateSet>,
	all_ngrams: Vec<String>,
}

impl ContextIndex {
	/// Builds the index over all keys of `model`.
	///
	/// Keys are visited in sorted order so the resulting candidate lists
	/// do not depend on hash-map iteration order; seeded generation stays
	/// reproducible.
	pub(crate) fn build(model: &FrequencyModel) -> Self {
		let mut pairs: Vec<(&str, usize)> = model.counts().collect();
		pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));

		let mut entries: HashMap<String, CandidateSet> = HashMap::new();
		for &(key, count) in &pairs {
			let entry = entries
				.entry(context_of(key).to_owned())
				.or_insert_with(|| CandidateSet { max_count: 0, candidates: Vec::new() });

			if count > entry.max_count {
				entry.max_count = count;
				entry.candidates.clear();
				entry.candidates.push(key.to_owned());
			} else if count == entry.max_count {
				entry.candidates.push(key.to_owned());
			}
		}

		let all_ngrams = pairs.into_iter().map(|(k, _)| k.to_owned()).collect();

		Self { entries, all_ngrams }
	}

	/// Candidate keys for a context, `None` if the corpus never produced
	/// this context.
	pub(crate) fn candidates(&self, context: &str) -> Option<&[String]> {
		self.entries.get(context).map(|e| e.candidates.as_slice())
	}

	/// Every distinct key of the model, sorted. Used by the fallback draw.
	pub(crate) fn all_ngrams(&self) -> &[String] {
		&self.all_ngrams
	}
}

/// All but the last token of a space-joined key.
fn context_of(ngram: &str) -> &str {
	ngram.rsplit_once(' ').map(|(ctx, _)| ctx).unwrap_or("")
}

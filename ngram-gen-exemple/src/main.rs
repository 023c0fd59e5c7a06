use ngram_gen_core::model::extractor::extract_ngrams;
use ngram_gen_core::model::frequency_model::FrequencyModel;
use ngram_gen_core::model::generator::Generator;
use ngram_gen_core::model::tokenizer::tokenize;

const CORPUS: &str = "\
The cat sat on the mat. The cat ran across the yard! \
A dog sat on the porch. The dog ran after the cat, and the cat ran home. \
I think the cat won. Did the dog give up? I think so.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Tokenize the raw corpus: lowercased words, numbers and the four
    // punctuation marks. Everything else is dropped.
    let tokens = tokenize(CORPUS);
    println!("Corpus: {} tokens", tokens.len());

    // Extract bigrams. Sentences shorter than the padding plus one real
    // token are discarded; unterminated trailing text is discarded too.
    let n = 2;
    let ngrams = extract_ngrams(&tokens, n)?;
    println!("Extracted {} n-grams of size {}", ngrams.len(), n);

    // Relative-frequency model over the whole corpus. Fails on an empty
    // n-gram list instead of dividing by zero.
    let model = FrequencyModel::from_ngrams(ngrams, n)?;
    println!("Model: {} distinct n-grams\n", model.len());

    // A fixed seed makes the run reproducible; use Generator::new for
    // OS-seeded variety instead.
    let mut generator = Generator::with_seed(model, 2024);

    for (i, sentence) in generator.generate(5)?.iter().enumerate() {
        println!("Generated sentence {}: {}", i + 1, sentence);
    }

    Ok(())
}

//! Command-line front-end for the n-gram sentence generator.
//!
//! Resolves (n, m, corpus files) from arguments or interactive prompts,
//! echoes them back for confirmation, then runs the core pipeline and
//! prints one generated sentence per block.

use clap::Parser;
use ngram_gen_core::model::extractor::extract_ngrams;
use ngram_gen_core::model::frequency_model::FrequencyModel;
use ngram_gen_core::model::generator::Generator;
use ngram_gen_core::model::tokenizer::tokenize;
use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

#[derive(Parser, Debug)]
#[command(name = "ngram-gen")]
#[command(about = "Generates random sentences from an n-gram model over plain-text corpora")]
struct Args {
    /// Size of the n-grams (>= 2)
    n: Option<usize>,

    /// Number of sentences to generate
    m: Option<usize>,

    /// Corpus of .txt files
    files: Vec<String>,

    /// Fixed RNG seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

/// Fully validated run configuration.
struct Config {
    n: usize,
    m: usize,
    files: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = match resolve_config(&args)? {
        Some(config) => config,
        None => {
            println!("Exiting the program.");
            return Ok(());
        }
    };

    let mut tokens = Vec::new();
    for file in &config.files {
        let contents = fs::read_to_string(file)
            .map_err(|e| format!("Error: could not read '{}': {}", file, e))?;
        let file_tokens = tokenize(&contents);
        log::debug!("{}: {} tokens", file, file_tokens.len());
        // File boundaries are not sentence boundaries; streams concatenate
        tokens.extend(file_tokens);
    }
    log::info!("corpus holds {} tokens from {} file(s)", tokens.len(), config.files.len());

    let ngrams = extract_ngrams(&tokens, config.n)?;
    log::info!("extracted {} n-grams of size {}", ngrams.len(), config.n);

    let model = FrequencyModel::from_ngrams(ngrams, config.n)?;
    log::info!("model holds {} distinct n-grams", model.len());

    let mut generator = match args.seed {
        Some(seed) => Generator::with_seed(model, seed),
        None => Generator::new(model),
    };

    for sentence in generator.generate(config.m)? {
        println!("{sentence}\n");
    }

    Ok(())
}

/// Resolves the run configuration from arguments, prompting interactively
/// for whatever is missing. Returns `None` if the user cancels at the
/// confirmation step.
fn resolve_config(args: &Args) -> Result<Option<Config>, Box<dyn Error>> {
    let config = match (args.n, args.m, args.files.is_empty()) {
        (Some(n), Some(m), false) => Config { n, m, files: args.files.clone() },
        _ => prompt_config()?,
    };

    if config.n < 2 {
        return Err(format!("Error: the n-gram size must be at least 2, got {}.", config.n).into());
    }
    validate_files(&config.files)?;

    if !args.yes && !confirm(&config)? {
        return Ok(None);
    }

    println!("\nGenerating sentences...\n");
    Ok(Some(config))
}

/// Interactive fallback when positional arguments are missing.
fn prompt_config() -> Result<Config, Box<dyn Error>> {
    println!("\nThis program generates random sentences using an n-gram model and an input of corpus texts.");
    println!("Usage: ngram-gen-cli <n> <m> <textfile1> [textfile2 ...]\n");

    let n = prompt("Please enter an integer for the size of your n-grams: ")?.parse()?;
    let m = prompt("Please enter an integer for how many sentences you would like to generate: ")?
        .parse()?;
    let files = prompt("Please enter the text files you would like to use, separated by a space: ")?
        .split_whitespace()
        .map(str::to_owned)
        .collect();

    Ok(Config { n, m, files })
}

/// Checks that every corpus path is an existing `.txt` file.
fn validate_files(files: &[String]) -> Result<(), Box<dyn Error>> {
    if files.is_empty() {
        return Err("Error: no corpus files given.".into());
    }
    for file in files {
        if !file.ends_with(".txt") {
            return Err(format!("Error: '{}' is not a valid .txt file.", file).into());
        }
        if !Path::new(file).is_file() {
            return Err(format!("Error: '{}' not found.", file).into());
        }
    }
    Ok(())
}

/// Echoes the resolved arguments and asks for a `y` confirmation.
fn confirm(config: &Config) -> Result<bool, Box<dyn Error>> {
    println!("\nPlease confirm your entered arguments below:\n");
    println!("Size of n-grams: {}\n", config.n);
    println!("Number of sentences to generate: {}\n", config.m);
    println!("Corpus of text files: {:?}\n", config.files);

    let answer = prompt("Please enter 'y' if these arguments are correct. Else, the program will exit.\n")?;
    Ok(answer.eq_ignore_ascii_case("y"))
}

fn prompt(message: &str) -> Result<String, Box<dyn Error>> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

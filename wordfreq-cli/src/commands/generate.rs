//! Generate command implementation

use anyhow::{Context, Result};
use clap::Args;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Vocabulary for the generated corpus
const WORDS: [&str; 8] = [
    "lorem",
    "ipsum",
    "dolor",
    "sit",
    "amet",
    "consectetur",
    "adipiscing",
    "elit",
];

/// Arguments for the generate command
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Output file for the corpus
    #[arg(short, long, value_name = "FILE", default_value = "corpus.txt")]
    pub output: PathBuf,

    /// Number of words to generate
    #[arg(short, long, value_name = "N", default_value_t = 200_000)]
    pub words: usize,

    /// RNG seed for a reproducible corpus
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<u64>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> Result<()> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let file = File::create(&self.output)
            .with_context(|| format!("Failed to create {}", self.output.display()))?;
        let mut writer = BufWriter::new(file);

        for _ in 0..self.words {
            let word = WORDS[rng.gen_range(0..WORDS.len())];
            write!(writer, "{word} ")?;
        }
        writer.flush()?;

        println!(
            "{} created with {} words",
            self.output.display(),
            self.words
        );
        Ok(())
    }
}

//! Command-line interface definitions.
//!
//! Flags override values from the YAML config file, which override built-in
//! defaults. Without a subcommand the full pipeline runs.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the corpus pipeline.
///
/// # Examples
///
/// ```sh
/// # Full pipeline: scrape, clean, analyze, report
/// sante_corpus --pages 5
///
/// # Only recompute statistics over already scraped text files
/// sante_corpus stats --from-dir data/raw
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long, env = "SANTE_CORPUS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Number of listing pages to crawl
    #[arg(short, long, global = true)]
    pub pages: Option<u32>,

    /// Directory receiving one text file per article (corpus.csv is written there too)
    #[arg(short, long, global = true)]
    pub raw_dir: Option<PathBuf>,

    /// Pause between listing page requests, in milliseconds
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    /// NLP model used for lemmatization and entity extraction
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Scrape, clean, analyze and report (default)
    Run,
    /// Crawl listing pages and save articles plus the raw corpus
    Scrape,
    /// Clean and lemmatize the raw corpus into the clean corpus
    Clean,
    /// Extract named entities and report statistics
    Stats {
        /// Analyze every `*.txt` file in this directory instead of the clean corpus
        #[arg(long)]
        from_dir: Option<PathBuf>,
    },
}

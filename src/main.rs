//! # Santé Corpus
//!
//! A batch pipeline that builds a corpus of French-language health articles
//! and reports on the named entities they mention.
//!
//! ## Usage
//!
//! ```sh
//! sante_corpus --pages 50
//! sante_corpus stats --from-dir data/raw
//! ```
//!
//! ## Architecture
//!
//! The application runs four sequential stages:
//! 1. **Scraping**: page through the listing, fetch each article, save one
//!    text file per article and a `filename,text` corpus table
//! 2. **Cleaning**: strip markup and interface noise, lemmatize, drop stop
//!    words and punctuation into a `clean_text` column
//! 3. **Analysis**: extract named entities and aggregate counts
//! 4. **Reporting**: console report, JSON summary and SVG bar chart

use clap::Parser;
use std::error::Error;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod models;
mod nlp;
mod outputs;
mod preprocess;
mod scrapers;
mod stats;
mod utils;

use cli::{Cli, Command};
use config::PipelineConfig;
use nlp::TextAnalyzer;
use outputs::{chart, json, report};
use preprocess::TextPreprocessor;
use scrapers::crawler::ArticleScraper;
use stats::EntityStats;
use utils::ensure_writable_dir;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("sante_corpus starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let mut config = PipelineConfig::load(args.config.as_deref())?;
    config.apply_cli(&args);
    config.validate()?;

    let command = args.command.clone().unwrap_or(Command::Run);
    info!(?command, "Selected stage");

    match command {
        Command::Scrape => {
            scrape(&config).await?;
        }
        Command::Clean => {
            let analyzer = load_analyzer(&config)?;
            clean(&config, analyzer)?;
        }
        Command::Stats { from_dir } => {
            let analyzer = load_analyzer(&config)?;
            analyze(&config, analyzer, from_dir.as_deref()).await?;
        }
        Command::Run => {
            // Fail before any network traffic if the analyzer cannot be loaded.
            let analyzer = load_analyzer(&config)?;
            scrape(&config).await?;
            clean(&config, Arc::clone(&analyzer))?;
            analyze(&config, analyzer, None).await?;
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );
    Ok(())
}

fn load_analyzer(config: &PipelineConfig) -> Result<Arc<dyn TextAnalyzer>, Box<dyn Error>> {
    nlp::load(&config.nlp.model).map_err(|e| {
        error!(model = %config.nlp.model, error = %e, "NLP model unavailable");
        e.into()
    })
}

/// Crawl the listing and articles, then write the raw corpus.
#[instrument(level = "info", skip_all)]
async fn scrape(config: &PipelineConfig) -> Result<usize, Box<dyn Error>> {
    let scraper_config = &config.scraper;
    if let Err(e) = ensure_writable_dir(&scraper_config.raw_dir).await {
        error!(
            path = %scraper_config.raw_dir.display(),
            error = %e,
            "Raw output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    let mut scraper = ArticleScraper::new(scraper_config)?;
    info!(
        pages = scraper_config.pages,
        output_dir = %scraper.output_dir().display(),
        "Starting crawl"
    );
    scraper.collect_urls(scraper_config.pages).await;
    scraper.scrape_articles().await?;
    info!(
        collected = scraper.article_urls().len(),
        kept = scraper.records().len(),
        "Crawl finished"
    );
    scraper.save_to_csv(&scraper_config.corpus_csv)
}

/// Clean the raw corpus into the clean corpus.
#[instrument(level = "info", skip_all)]
fn clean(config: &PipelineConfig, analyzer: Arc<dyn TextAnalyzer>) -> Result<usize, Box<dyn Error>> {
    let preprocessor = TextPreprocessor::new(analyzer);
    preprocessor.process_corpus(&config.scraper.corpus_csv, &config.preprocess.clean_csv)
}

/// Extract entities, print the report, write the summary and chart.
#[instrument(level = "info", skip_all)]
async fn analyze(
    config: &PipelineConfig,
    analyzer: Arc<dyn TextAnalyzer>,
    from_dir: Option<&std::path::Path>,
) -> Result<(), Box<dyn Error>> {
    let mut entity_stats = EntityStats::new(analyzer);
    match from_dir {
        Some(dir) => entity_stats.process_dir(dir)?,
        None => entity_stats.process_csv(&config.preprocess.clean_csv)?,
    };

    let statistics = entity_stats.compute_statistics();
    let top = config.report.top_entities;
    report::display_results(&statistics, top);

    if let Err(e) = json::write_summary(&statistics, top, &config.report.summary_path).await {
        error!(error = %e, "Failed to write statistics summary");
    }
    chart::plot_entity_distribution(&statistics.label_counts, &config.report.chart_path)?;
    Ok(())
}

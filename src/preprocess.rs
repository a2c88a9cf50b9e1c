//! Text cleaning and lemmatization.
//!
//! Raw article text goes through three steps:
//! 1. HTML tags are removed
//! 2. Interface noise ("Abonnez", "Partager", "Lire aussi") is removed
//! 3. The analyzer tokenizes; lemmas of tokens that are neither stop words
//!    nor punctuation are joined with spaces

use crate::models::CleanRecord;
use crate::nlp::TextAnalyzer;
use crate::outputs::corpus::{CLEAN_HEADER, read_corpus_lenient, write_records};
use crate::utils::truncate_for_log;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument, trace};

static HTML_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid pattern"));

static UI_ELEMENTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(Abonnez|Partager|Lire aussi)").expect("valid pattern"));

/// Cleans and lemmatizes article text with an injected analyzer.
///
/// The analyzer is shared with [`crate::stats::EntityStats`], so one model
/// load serves the whole run.
pub struct TextPreprocessor {
    analyzer: Arc<dyn TextAnalyzer>,
}

impl TextPreprocessor {
    pub fn new(analyzer: Arc<dyn TextAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Clean and lemmatize one text.
    ///
    /// # Arguments
    ///
    /// * `text` - Raw article text, or `None` when the corpus cell was empty
    ///
    /// # Returns
    ///
    /// Space-joined lemmas of the tokens that are neither stop words nor
    /// punctuation. Missing text yields an empty string.
    pub fn clean_text(&self, text: Option<&str>) -> String {
        let Some(text) = text else {
            return String::new();
        };
        let text = HTML_TAGS.replace_all(text, "");
        let text = UI_ELEMENTS.replace_all(&text, "");

        self.analyzer
            .tokenize(&text)
            .into_iter()
            .filter(|t| {
                let keep = !t.is_stop && !t.is_punct;
                if !keep {
                    trace!(token = %t.text, "Dropped token");
                }
                keep
            })
            .map(|t| t.lemma)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Read the raw corpus, add `clean_text`, write the clean corpus.
    ///
    /// # Arguments
    ///
    /// * `input` - Raw `filename,text` corpus
    /// * `output` - Destination of the `filename,text,clean_text` corpus;
    ///   parent directories are created
    ///
    /// # Returns
    ///
    /// The number of rows written. An empty input still produces the header.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or the output written.
    #[instrument(level = "info", skip_all, fields(input = %input.display(), output = %output.display()))]
    pub fn process_corpus(&self, input: &Path, output: &Path) -> Result<usize, Box<dyn Error>> {
        let mut rows: Vec<CleanRecord> = read_corpus_lenient(input)?;
        for row in &mut rows {
            row.clean_text = self.clean_text(row.text.as_deref());
            debug!(
                filename = %row.filename,
                preview = %truncate_for_log(&row.clean_text, 80),
                "Cleaned document"
            );
        }

        let written = write_records(output, CLEAN_HEADER, &rows)?;
        info!(rows = written, path = %output.display(), "Clean corpus saved");
        Ok(written)
    }
}

//! Data models shared by the crawl, cleaning and statistics stages.
//!
//! - [`ArticleRecord`]: one scraped article as it lands in the raw corpus
//! - [`CleanRecord`]: a raw corpus row with its lemmatized `clean_text`
//! - [`ParsedArticle`]: what the article parser hands back to the crawler
//! - [`Token`] / [`Entity`]: the contract of the NLP capability

use serde::{Deserialize, Serialize};

/// Absolute address of an article page, unique only within one crawl run.
pub type ArticleUrl = String;

/// A captured article as written to the raw corpus (`filename,text`).
///
/// Only created when the extracted text is non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleRecord {
    /// Name of the per-article text file, e.g. `007_Le_cœur.txt`.
    pub filename: String,
    /// Paragraph texts joined by `\n`.
    pub text: String,
}

/// A raw corpus row enriched with the cleaned, lemmatized text.
///
/// `text` is optional because an empty CSV field is read back as missing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CleanRecord {
    pub filename: String,
    pub text: Option<String>,
    pub clean_text: String,
}

/// Title and body extracted from an article page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArticle {
    pub title: String,
    pub text: String,
}

/// A token produced by a [`crate::nlp::TextAnalyzer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface form as it appears in the text.
    pub text: String,
    /// Dictionary base form.
    pub lemma: String,
    pub is_stop: bool,
    pub is_punct: bool,
}

/// A named entity span tagged by a [`crate::nlp::TextAnalyzer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Category such as `PER`, `LOC`, `ORG` or `MISC`.
    pub label: String,
    /// Exact slice of the source text.
    pub text: String,
}

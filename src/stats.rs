//! Named-entity statistics over a corpus.
//!
//! [`EntityStats`] accumulates, per processed document, the entities found by
//! the analyzer; [`EntityStats::compute_statistics`] turns that into counts.

use crate::models::CleanRecord;
use crate::nlp::TextAnalyzer;
use crate::outputs::corpus::read_records;
use itertools::Itertools;
use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Aggregated entity statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EntityStatistics {
    pub num_docs: usize,
    pub total_entities: usize,
    /// Mean entities per document; 0 when there are no documents.
    pub avg_entities: f64,
    pub label_counts: BTreeMap<String, usize>,
    pub text_counts: BTreeMap<String, usize>,
}

/// Entries sorted by count (descending), then key.
pub fn ranked(counts: &BTreeMap<String, usize>) -> Vec<(&str, usize)> {
    counts
        .iter()
        .map(|(k, v)| (k.as_str(), *v))
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)))
        .collect()
}

fn frequencies(items: &[String]) -> BTreeMap<String, usize> {
    items
        .iter()
        .counts()
        .into_iter()
        .map(|(k, v)| (k.clone(), v))
        .collect()
}

/// Accumulates named entities document by document.
///
/// Feed documents with [`process_document`](Self::process_document) or one of
/// the batch readers, then call
/// [`compute_statistics`](Self::compute_statistics). Counts are kept per
/// instance, so separate corpora need separate `EntityStats`.
pub struct EntityStats {
    analyzer: Arc<dyn TextAnalyzer>,
    total_entities: usize,
    entities_per_doc: Vec<usize>,
    entity_labels: Vec<String>,
    entity_texts: Vec<String>,
}

impl EntityStats {
    pub fn new(analyzer: Arc<dyn TextAnalyzer>) -> Self {
        Self {
            analyzer,
            total_entities: 0,
            entities_per_doc: Vec::new(),
            entity_labels: Vec::new(),
            entity_texts: Vec::new(),
        }
    }

    /// Extract entities from one document and accumulate them.
    pub fn process_document(&mut self, text: &str) {
        let entities = self.analyzer.extract_entities(text);
        self.total_entities += entities.len();
        self.entities_per_doc.push(entities.len());
        for entity in entities {
            self.entity_labels.push(entity.label);
            self.entity_texts.push(entity.text);
        }
    }

    pub fn process_texts<I, S>(&mut self, texts: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for text in texts {
            self.process_document(text.as_ref());
        }
    }

    /// Process the `text` column of a corpus file.
    ///
    /// Missing text counts as an empty document.
    ///
    /// # Returns
    ///
    /// The number of documents read.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or a row does not match the
    /// clean corpus schema.
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub fn process_csv(&mut self, path: &Path) -> Result<usize, Box<dyn Error>> {
        let rows: Vec<CleanRecord> = read_records(path)?;
        self.process_texts(rows.iter().map(|row| row.text.as_deref().unwrap_or_default()));
        info!(documents = rows.len(), "Processed corpus");
        Ok(rows.len())
    }

    /// Process every `*.txt` file of `dir`, in filename order.
    ///
    /// File contents are trimmed before analysis. An empty directory logs a
    /// warning and adds nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or one of its files cannot be read.
    #[instrument(level = "info", skip_all, fields(dir = %dir.display()))]
    pub fn process_dir(&mut self, dir: &Path) -> Result<usize, Box<dyn Error>> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
                files.push(path);
            }
        }
        files.sort();

        if files.is_empty() {
            warn!("No text files found");
            return Ok(0);
        }

        for file in &files {
            let text = std::fs::read_to_string(file)?;
            debug!(file = %file.display(), "Processing document");
            self.process_document(text.trim());
        }
        info!(documents = files.len(), "Processed text files");
        Ok(files.len())
    }

    /// Aggregate everything processed so far.
    ///
    /// # Returns
    ///
    /// Document and entity totals, the mean per document (0 with no
    /// documents), and label and surface-text frequencies.
    pub fn compute_statistics(&self) -> EntityStatistics {
        let num_docs = self.entities_per_doc.len();
        let avg_entities = if num_docs > 0 {
            self.total_entities as f64 / num_docs as f64
        } else {
            0.0
        };
        EntityStatistics {
            num_docs,
            total_entities: self.total_entities,
            avg_entities,
            label_counts: frequencies(&self.entity_labels),
            text_counts: frequencies(&self.entity_texts),
        }
    }
}

//! Tabular corpus files (CSV, UTF-8, header row).
//!
//! ```text
//! filename,text
//! 001_Vaccins.txt,"Premier paragraphe.
//! Second paragraphe."
//! ```
//!
//! The clean corpus adds a `clean_text` column.

use crate::models::{ArticleRecord, CleanRecord};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::path::Path;
use tracing::{debug, instrument};

/// Columns of the raw corpus.
pub const RAW_HEADER: &[&str] = &["filename", "text"];

/// Columns of the clean corpus.
pub const CLEAN_HEADER: &[&str] = &["filename", "text", "clean_text"];

/// Write `records` with a header row, creating parent directories.
///
/// # Arguments
///
/// * `path` - Destination file, replaced if it exists
/// * `header` - Column names, written on their own when `records` is empty
/// * `records` - Rows to serialize; their field names must match `header`
///
/// # Returns
///
/// The number of data rows written.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a row fails to serialize.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn write_records<T: Serialize>(
    path: &Path,
    header: &[&str],
    records: &[T],
) -> Result<usize, Box<dyn Error>> {
    create_parent(path)?;
    let mut writer = csv::Writer::from_path(path)?;
    // Serialized rows only emit their header alongside the first record.
    if records.is_empty() {
        writer.write_record(header)?;
    }
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    debug!(rows = records.len(), "Wrote CSV");
    Ok(records.len())
}

/// Read every row of a headed CSV file.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, Box<dyn Error>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    debug!(rows = records.len(), "Read CSV");
    Ok(records)
}

/// Write the raw `filename,text` corpus.
///
/// An empty corpus still gets its header row, so the clean stage can read it.
pub fn write_corpus(path: &Path, records: &[ArticleRecord]) -> Result<usize, Box<dyn Error>> {
    write_records(path, RAW_HEADER, records)
}

fn create_parent(path: &Path) -> std::io::Result<()> {
    match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => std::fs::create_dir_all(parent),
        None => Ok(()),
    }
}

/// Read a corpus whose `text` column may hold empty (missing) values.
///
/// Rows are read as [`CleanRecord`]s with an empty `clean_text`; any
/// `clean_text` column already present is ignored.
pub fn read_corpus_lenient(path: &Path) -> Result<Vec<CleanRecord>, Box<dyn Error>> {
    #[derive(serde::Deserialize)]
    struct Row {
        filename: String,
        text: Option<String>,
    }

    let rows: Vec<Row> = read_records(path)?;
    Ok(rows
        .into_iter()
        .map(|row| CleanRecord {
            filename: row.filename,
            text: row.text,
            clean_text: String::new(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_corpus_round_trip_preserves_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("raw").join("corpus.csv");
        let records = vec![
            ArticleRecord {
                filename: "001_Le_cœur_et_le_stress.txt".to_string(),
                text: "Premier paragraphe, avec virgule.\nSecond « paragraphe ».".to_string(),
            },
            ArticleRecord {
                filename: "003_Vaccins.txt".to_string(),
                text: "Il a dit \"non\" à l'OMS.".to_string(),
            },
        ];

        assert_eq!(write_corpus(&path, &records).unwrap(), 2);
        let back: Vec<ArticleRecord> = read_records(&path).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn test_write_corpus_header() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("corpus.csv");
        write_corpus(
            &path,
            &[ArticleRecord {
                filename: "001_a.txt".to_string(),
                text: "x".to_string(),
            }],
        )
        .unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("filename,text\n"));
    }

    #[test]
    fn test_empty_corpus_has_header_only() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("corpus.csv");
        assert_eq!(write_corpus(&path, &[]).unwrap(), 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "filename,text\n");
        assert!(read_records::<ArticleRecord>(&path).unwrap().is_empty());
    }

    #[test]
    fn test_read_corpus_lenient_empty_text_is_missing() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("corpus.csv");
        std::fs::write(&path, "filename,text\n001_a.txt,\n002_b.txt,Bonjour\n").unwrap();

        let rows = read_corpus_lenient(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text, None);
        assert_eq!(rows[1].text.as_deref(), Some("Bonjour"));
    }

    #[test]
    fn test_read_corpus_missing_file() {
        assert!(read_records::<ArticleRecord>(Path::new("/nonexistent/corpus.csv")).is_err());
    }
}

//! Utility functions for file naming, log-friendly strings, and file system checks.
//!
//! - Per-article filename derivation from a run index and a page title
//! - String truncation for logging
//! - Output directory validation

use std::error::Error;
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Maximum number of title characters kept in a per-article filename.
pub const TITLE_MAX_CHARS: usize = 50;

/// Title used when an article page has no heading.
pub const FALLBACK_TITLE: &str = "article";

/// Make a title usable as a filename fragment.
///
/// Keeps the first [`TITLE_MAX_CHARS`] characters (not bytes, titles are
/// French), then replaces spaces with `_` and slashes with `-`.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .take(TITLE_MAX_CHARS)
        .collect::<String>()
        .replace(' ', "_")
        .replace('/', "-")
}

/// Derive the per-article filename: `{index:03}_{sanitized title}.txt`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(article_filename(7, "Le cœur /2024"), "007_Le_cœur_-2024.txt");
/// ```
pub fn article_filename(index: usize, title: &str) -> String {
    format!("{:03}_{}.txt", index, sanitize_title(title))
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut after `max` characters and get a `"…(+N bytes)"`
/// suffix counting the dropped bytes.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}

/// Create `path` (and parents) if needed, synchronously.
///
/// Used from constructors, which cannot await.
pub fn create_dir_all_sync(path: &Path) -> Result<(), Box<dyn Error>> {
    stdfs::create_dir_all(path)?;
    Ok(())
}

/// Create the parent directory of a file path, if it has one.
pub async fn ensure_parent_dir(path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    Ok(())
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if it doesn't exist, then creates and removes a
/// probe file in it.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not writable.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    let probe_path = path.join("..__probe_write__");
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_article_filename_sanitizes_title() {
        assert_eq!(
            article_filename(7, "Le cœur et le stress: une étude /2024"),
            "007_Le_cœur_et_le_stress:_une_étude_-2024.txt"
        );
    }

    #[test]
    fn test_article_filename_truncates_to_fifty_chars() {
        let title = "é".repeat(80);
        let filename = article_filename(12, &title);
        assert_eq!(filename, format!("012_{}.txt", "é".repeat(50)));
    }

    #[test]
    fn test_article_filename_large_index_is_not_truncated() {
        assert_eq!(article_filename(1234, FALLBACK_TITLE), "1234_article.txt");
    }

    #[test]
    fn test_sanitize_title_truncates_before_replacing() {
        let title = format!("{} /tail", "a".repeat(49));
        assert_eq!(sanitize_title(&title), format!("{}_", "a".repeat(49)));
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Bonjour", 100), "Bonjour");
    }

    #[test]
    fn test_truncate_for_log_multibyte() {
        let result = truncate_for_log("ééééé", 2);
        assert_eq!(result, "éé…(+6 bytes)");
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_nested() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a").join("b");
        ensure_writable_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
        assert!(!nested.join("..__probe_write__").exists());
    }

    #[tokio::test]
    async fn test_ensure_parent_dir_for_bare_filename() {
        ensure_parent_dir(Path::new("corpus.csv")).await.unwrap();
    }
}

//! JSON summary of a statistics run.
//!
//! ```json
//! {
//!   "generated_at": "2025-05-06T20:30:00+02:00",
//!   "num_docs": 42,
//!   "total_entities": 380,
//!   "avg_entities": 9.05,
//!   "label_counts": { "LOC": 120, "ORG": 98 },
//!   "top_entities": [["France", 31], ["OMS", 12]]
//! }
//! ```

use crate::stats::{EntityStatistics, ranked};
use crate::utils::ensure_parent_dir;
use chrono::Local;
use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

#[derive(Debug, Serialize)]
pub struct StatsSummary<'a> {
    pub generated_at: String,
    pub num_docs: usize,
    pub total_entities: usize,
    pub avg_entities: f64,
    pub label_counts: &'a BTreeMap<String, usize>,
    pub top_entities: Vec<(&'a str, usize)>,
}

impl<'a> StatsSummary<'a> {
    pub fn new(stats: &'a EntityStatistics, top: usize) -> Self {
        Self {
            generated_at: Local::now().to_rfc3339(),
            num_docs: stats.num_docs,
            total_entities: stats.total_entities,
            avg_entities: stats.avg_entities,
            label_counts: &stats.label_counts,
            top_entities: ranked(&stats.text_counts).into_iter().take(top).collect(),
        }
    }
}

/// Write the summary as pretty JSON, creating parent directories.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_summary(
    stats: &EntityStatistics,
    top: usize,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(&StatsSummary::new(stats, top))?;
    ensure_parent_dir(path).await?;
    fs::write(path, json).await?;
    info!(path = %path.display(), "Wrote statistics summary");
    Ok(())
}

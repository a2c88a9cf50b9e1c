//! Output generation: corpus tables, console report, JSON summary and chart.
//!
//! # Submodules
//!
//! - [`corpus`]: reads and writes the raw and clean corpus CSV files
//! - [`report`]: renders the statistics report printed on stdout
//! - [`json`]: writes the statistics summary for other tools
//! - [`chart`]: renders the entity label bar chart as SVG
//!
//! # Output Structure
//!
//! ```text
//! data/
//! ├── raw/
//! │   ├── 001_Le_cœur_et_le_stress.txt
//! │   ├── 002_Vaccins.txt
//! │   └── corpus.csv            # filename,text
//! ├── clean/
//! │   └── corpus.csv            # filename,text,clean_text
//! └── reports/
//!     ├── entity_stats.json
//!     └── entity_labels.svg
//! ```

pub mod chart;
pub mod corpus;
pub mod json;
pub mod report;

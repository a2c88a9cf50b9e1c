//! Pipeline configuration.
//!
//! Values come from three layers, later ones winning:
//! built-in defaults, an optional YAML file, then CLI flags
//! (see [`PipelineConfig::apply_cli`]).
//!
//! ```yaml
//! scraper:
//!   listing_url_template: "https://theconversation.com/fr/sante?page={}"
//!   pages: 50
//!   delay_ms: 1000
//! nlp:
//!   model: fr-rules
//! ```

use crate::cli::Cli;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, instrument};
use url::Url;

/// Placeholder substituted with the 1-based page number.
pub const PAGE_SLOT: &str = "{}";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub scraper: ScraperConfig,
    pub preprocess: PreprocessConfig,
    pub nlp: NlpConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Listing address with one `{}` slot for the page number.
    #[serde(default = "default_listing_url_template")]
    pub listing_url_template: String,

    /// Absolute base used to resolve relative article links.
    #[serde(default = "default_site_base")]
    pub site_base: String,

    #[serde(default = "default_pages")]
    pub pages: u32,

    /// Pause after every listing page attempt.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Directory receiving one `.txt` file per article.
    #[serde(default = "default_raw_dir")]
    pub raw_dir: PathBuf,

    /// Aggregate `filename,text` table.
    #[serde(default = "default_corpus_csv")]
    pub corpus_csv: PathBuf,

    #[serde(default)]
    pub markup: MarkupConfig,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            listing_url_template: default_listing_url_template(),
            site_base: default_site_base(),
            pages: default_pages(),
            delay_ms: default_delay_ms(),
            user_agent: default_user_agent(),
            raw_dir: default_raw_dir(),
            corpus_csv: default_corpus_csv(),
            markup: MarkupConfig::default(),
        }
    }
}

impl ScraperConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// CSS selectors describing the site's markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkupConfig {
    #[serde(default = "default_card_selector")]
    pub card: String,
    #[serde(default = "default_link_selector")]
    pub link: String,
    #[serde(default = "default_body_selector")]
    pub body: String,
    #[serde(default = "default_paragraph_selector")]
    pub paragraph: String,
    #[serde(default = "default_title_selector")]
    pub title: String,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            card: default_card_selector(),
            link: default_link_selector(),
            body: default_body_selector(),
            paragraph: default_paragraph_selector(),
            title: default_title_selector(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessConfig {
    #[serde(default = "default_clean_csv")]
    pub clean_csv: PathBuf,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            clean_csv: default_clean_csv(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NlpConfig {
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for NlpConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_chart_path")]
    pub chart_path: PathBuf,
    #[serde(default = "default_summary_path")]
    pub summary_path: PathBuf,
    #[serde(default = "default_top_entities")]
    pub top_entities: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            chart_path: default_chart_path(),
            summary_path: default_summary_path(),
            top_entities: default_top_entities(),
        }
    }
}

fn default_listing_url_template() -> String {
    String::from("https://theconversation.com/fr/sante?page={}")
}

fn default_site_base() -> String {
    String::from("https://theconversation.com")
}

fn default_pages() -> u32 {
    50
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_user_agent() -> String {
    String::from("Mozilla/5.0")
}

fn default_raw_dir() -> PathBuf {
    PathBuf::from("data/raw")
}

fn default_corpus_csv() -> PathBuf {
    PathBuf::from("data/raw/corpus.csv")
}

fn default_card_selector() -> String {
    String::from("div.relative")
}

fn default_link_selector() -> String {
    String::from("a")
}

fn default_body_selector() -> String {
    String::from(r#"div[itemprop="articleBody"]"#)
}

fn default_paragraph_selector() -> String {
    String::from("p")
}

fn default_title_selector() -> String {
    String::from("h1")
}

fn default_clean_csv() -> PathBuf {
    PathBuf::from("data/clean/corpus.csv")
}

fn default_model() -> String {
    String::from("fr-rules")
}

fn default_chart_path() -> PathBuf {
    PathBuf::from("data/reports/entity_labels.svg")
}

fn default_summary_path() -> PathBuf {
    PathBuf::from("data/reports/entity_stats.json")
}

fn default_top_entities() -> usize {
    10
}

impl PipelineConfig {
    /// Load from `path` if given, otherwise start from defaults.
    #[instrument(level = "info")]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            debug!("No config file given; using defaults");
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw)
    }

    /// Overlay CLI flags that were explicitly set.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(pages) = cli.pages {
            self.scraper.pages = pages;
        }
        if let Some(delay_ms) = cli.delay_ms {
            self.scraper.delay_ms = delay_ms;
        }
        if let Some(raw_dir) = &cli.raw_dir {
            self.scraper.corpus_csv = raw_dir.join("corpus.csv");
            self.scraper.raw_dir = raw_dir.clone();
        }
        if let Some(model) = &cli.model {
            self.nlp.model = model.clone();
        }
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let slots = self
            .scraper
            .listing_url_template
            .matches(PAGE_SLOT)
            .count();
        if slots != 1 {
            return Err(ConfigError::Invalid(format!(
                "listing_url_template must contain exactly one `{PAGE_SLOT}` slot, found {slots}"
            )));
        }
        let base = Url::parse(&self.scraper.site_base)
            .map_err(|e| ConfigError::Invalid(format!("site_base is not an absolute URL: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ConfigError::Invalid(format!(
                "site_base cannot be used as a base: {}",
                self.scraper.site_base
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_validate() {
        let config = PipelineConfig::default();
        config.validate().unwrap();
        assert_eq!(config.scraper.pages, 50);
        assert_eq!(config.scraper.delay(), Duration::from_secs(1));
        assert_eq!(config.nlp.model, "fr-rules");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
scraper:
  pages: 2
  delay_ms: 0
nlp:
  model: fr_core_news_sm
"#;
        let config = PipelineConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.scraper.pages, 2);
        assert_eq!(config.scraper.delay_ms, 0);
        assert_eq!(config.scraper.user_agent, "Mozilla/5.0");
        assert_eq!(config.scraper.markup.card, "div.relative");
        assert_eq!(config.nlp.model, "fr_core_news_sm");
        assert_eq!(config.report.top_entities, 10);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = PipelineConfig::from_yaml("  \n").unwrap();
        assert_eq!(config.scraper.pages, 50);
    }

    #[test]
    fn test_template_without_slot_is_invalid() {
        let mut config = PipelineConfig::default();
        config.scraper.listing_url_template = "https://example.com/list".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_relative_site_base_is_invalid() {
        let mut config = PipelineConfig::default();
        config.scraper.site_base = "/fr".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_cli_overrides_win() {
        let mut config = PipelineConfig::from_yaml("scraper:\n  pages: 7\n").unwrap();
        let cli = Cli::parse_from(["sante_corpus", "--pages", "3", "--raw-dir", "/tmp/raw"]);
        config.apply_cli(&cli);
        assert_eq!(config.scraper.pages, 3);
        assert_eq!(config.scraper.raw_dir, PathBuf::from("/tmp/raw"));
        assert_eq!(config.scraper.corpus_csv, PathBuf::from("/tmp/raw/corpus.csv"));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = PipelineConfig::load(Some(Path::new("/nonexistent/sante.yaml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}

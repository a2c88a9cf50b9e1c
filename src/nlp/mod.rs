//! NLP capability boundary.
//!
//! Cleaning and statistics only see the [`TextAnalyzer`] trait. The concrete
//! analyzer is chosen by name from configuration through [`load`].

mod french;
mod lexicon;

use crate::models::{Entity, Token};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Tokenization, lemmatization and named-entity extraction over raw text.
pub trait TextAnalyzer: Send + Sync {
    /// Split `text` into tokens carrying a lemma and stop-word/punctuation flags.
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Find named entities in `text`, in order of appearance.
    fn extract_entities(&self, text: &str) -> Vec<Entity>;
}

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("unknown NLP model {0:?} (available: fr-rules, fr_core_news_sm)")]
    UnknownModel(String),
}

/// Model names accepted by [`load`].
pub const MODELS: &[&str] = &["fr-rules", "fr_core_news_sm"];

/// Instantiate the analyzer registered under `model`.
///
/// `fr_core_news_sm` is accepted as an alias of `fr-rules` so existing
/// configurations keep working.
pub fn load(model: &str) -> Result<Arc<dyn TextAnalyzer>, AnalyzerError> {
    match model {
        m if MODELS.contains(&m) => {
            info!(model, "Loaded rule-based French analyzer");
            Ok(Arc::new(french::FrenchRules::new()))
        }
        other => Err(AnalyzerError::UnknownModel(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_known_models() {
        for model in MODELS {
            assert!(load(model).is_ok(), "{model} should load");
        }
    }

    #[test]
    fn test_load_unknown_model() {
        let err = load("en_core_web_lg").err().unwrap();
        assert!(err.to_string().contains("en_core_web_lg"));
        assert!(err.to_string().contains("fr-rules"));
    }
}

//! Compiled CSS selectors for the listing and article pages.

use crate::config::{ConfigError, MarkupConfig};
use scraper::Selector;

/// Selectors parsed once at startup and shared by both parsers.
#[derive(Debug, Clone)]
pub struct SiteMarkup {
    /// Article card on a listing page.
    pub card: Selector,
    /// Anchor inside a card; the first match is used.
    pub link: Selector,
    /// Article body container.
    pub body: Selector,
    /// Paragraphs inside the body.
    pub paragraph: Selector,
    /// Title heading.
    pub title: Selector,
}

impl SiteMarkup {
    pub fn from_config(config: &MarkupConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            card: parse("card", &config.card)?,
            link: parse("link", &config.link)?,
            body: parse("body", &config.body)?,
            paragraph: parse("paragraph", &config.paragraph)?,
            title: parse("title", &config.title)?,
        })
    }
}

impl Default for SiteMarkup {
    fn default() -> Self {
        Self::from_config(&MarkupConfig::default()).expect("default selectors are valid CSS")
    }
}

fn parse(name: &str, css: &str) -> Result<Selector, ConfigError> {
    Selector::parse(css)
        .map_err(|e| ConfigError::Invalid(format!("{name} selector {css:?} is invalid: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_markup_parses() {
        let _ = SiteMarkup::default();
    }

    #[test]
    fn test_invalid_selector_is_config_error() {
        let config = MarkupConfig {
            body: "div[[".to_string(),
            ..MarkupConfig::default()
        };
        let err = SiteMarkup::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("body selector"));
    }
}

//! Listing page parser.
//!
//! A listing page holds a grid of article cards. Each card carries one anchor
//! whose `href` is relative to the site root, e.g. `/la-sieste-est-elle-bonne-123`.

use super::markup::SiteMarkup;
use crate::models::ArticleUrl;
use scraper::Html;
use tracing::{debug, trace};
use url::Url;

/// Extract article addresses from a listing page, in document order.
///
/// Cards without an anchor, or whose anchor lacks a resolvable `href`, are
/// skipped. An empty result is not an error.
pub fn parse_listing(html: &str, markup: &SiteMarkup, site_base: &Url) -> Vec<ArticleUrl> {
    let document = Html::parse_document(html);

    let mut urls = Vec::new();
    for card in document.select(&markup.card) {
        let Some(anchor) = card.select(&markup.link).next() else {
            trace!("Card without anchor");
            continue;
        };
        let Some(href) = anchor.value().attr("href") else {
            trace!("Anchor without href");
            continue;
        };
        match site_base.join(href) {
            Ok(resolved) => urls.push(resolved.to_string()),
            Err(e) => debug!(%href, error = %e, "Unresolvable article link"),
        }
    }
    urls
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://theconversation.com").unwrap()
    }

    #[test]
    fn test_parse_listing_skips_cards_without_anchor() {
        let html = r#"
<html><body>
  <div class="relative"><a href="/vaccins-et-immunite-101">Vaccins</a></div>
  <div class="relative"><span>Publicité</span></div>
  <div class="relative card"><h2><a href="/sommeil-des-ados-202">Sommeil</a></h2></div>
  <div class="relative"></div>
  <div class="relative"><a href="https://theconversation.com/fr/stress-303">Stress</a></div>
</body></html>"#;

        let urls = parse_listing(html, &SiteMarkup::default(), &base());
        assert_eq!(
            urls,
            vec![
                "https://theconversation.com/vaccins-et-immunite-101",
                "https://theconversation.com/sommeil-des-ados-202",
                "https://theconversation.com/fr/stress-303",
            ]
        );
    }

    #[test]
    fn test_parse_listing_uses_first_anchor_of_card() {
        let html = r#"<div class="relative"><a href="/premier">1</a><a href="/second">2</a></div>"#;
        let urls = parse_listing(html, &SiteMarkup::default(), &base());
        assert_eq!(urls, vec!["https://theconversation.com/premier"]);
    }

    #[test]
    fn test_parse_listing_ignores_anchor_without_href() {
        let html = r#"<div class="relative"><a name="top">haut</a></div>"#;
        assert!(parse_listing(html, &SiteMarkup::default(), &base()).is_empty());
    }

    #[test]
    fn test_parse_listing_keeps_duplicates() {
        let html = r#"
<div class="relative"><a href="/meme-article">A</a></div>
<div class="relative"><a href="/meme-article">A bis</a></div>"#;
        let urls = parse_listing(html, &SiteMarkup::default(), &base());
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0], urls[1]);
    }

    #[test]
    fn test_parse_listing_no_cards() {
        let html = "<html><body><p>Aucun article</p></body></html>";
        assert!(parse_listing(html, &SiteMarkup::default(), &base()).is_empty());
    }
}

//! Article page parser.

use super::markup::SiteMarkup;
use crate::models::ParsedArticle;
use crate::utils::FALLBACK_TITLE;
use scraper::Html;

/// Extract the title and body text of an article page.
///
/// Returns `None` when the body container is missing. Paragraph texts are
/// taken in document order and joined with `\n`. The title is the trimmed
/// text of the first heading, or [`FALLBACK_TITLE`] when there is none.
pub fn parse_article(html: &str, markup: &SiteMarkup) -> Option<ParsedArticle> {
    let document = Html::parse_document(html);

    let body = document.select(&markup.body).next()?;
    let text = body
        .select(&markup.paragraph)
        .map(|p| p.text().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n");

    let title = document
        .select(&markup.title)
        .next()
        .map(|h| h.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string());

    Some(ParsedArticle { title, text })
}

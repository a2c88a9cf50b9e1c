//! Scraping of the health section of a French news site.
//!
//! The crawl follows a two-phase pattern:
//!
//! 1. **Indexing**: walk the paginated listing and collect article URLs
//! 2. **Fetching**: download each article, extract title and paragraphs,
//!    save a text file and keep a corpus record
//!
//! # Submodules
//!
//! | Module | Role |
//! |--------|------|
//! | [`fetch`] | HTTP GET with fixed headers |
//! | [`markup`] | CSS selectors for cards, body, paragraphs and title |
//! | [`listing`] | Listing page → article URLs |
//! | [`article`] | Article page → title and text |
//! | [`crawler`] | The [`crawler::ArticleScraper`] tying them together |
//!
//! Failures on individual pages or articles are logged and skipped. Requests
//! are issued one at a time.

pub mod article;
pub mod crawler;
pub mod fetch;
pub mod listing;
pub mod markup;

//! Crawl controller: page through the listing, then fetch every article.
//!
//! The crawl runs in two sequential phases over one [`ArticleScraper`]:
//!
//! 1. [`ArticleScraper::collect_urls`] walks listing pages `1..=n` and appends
//!    every article address it finds (duplicates included).
//! 2. [`ArticleScraper::scrape_articles`] visits those addresses in order,
//!    writes one text file per parsed article, and keeps a record for every
//!    article with non-empty text.
//!
//! Failed pages and articles are logged and skipped. Nothing is retried and
//! nothing survives the process.

use super::article::parse_article;
use super::fetch::{build_client, fetch_page};
use super::listing::parse_listing;
use super::markup::SiteMarkup;
use crate::config::{PAGE_SLOT, ScraperConfig};
use crate::models::{ArticleRecord, ArticleUrl};
use crate::outputs::corpus::write_corpus;
use crate::utils::{article_filename, create_dir_all_sync};
use reqwest::Client;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Two-phase crawler over one listing and its articles.
///
/// Holds the crawl state for a single run: the article addresses collected
/// from the listing and the records kept from the articles. Both only grow,
/// and both are dropped with the scraper once the corpus is saved.
pub struct ArticleScraper {
    client: Client,
    listing_url_template: String,
    site_base: Url,
    markup: SiteMarkup,
    output_dir: PathBuf,
    delay: Duration,
    article_urls: Vec<ArticleUrl>,
    records: Vec<ArticleRecord>,
}

impl std::fmt::Debug for ArticleScraper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArticleScraper")
            .field("listing_url_template", &self.listing_url_template)
            .field("site_base", &self.site_base.as_str())
            .field("output_dir", &self.output_dir)
            .field("delay", &self.delay)
            .field("article_urls", &self.article_urls.len())
            .field("records", &self.records.len())
            .finish()
    }
}

impl ArticleScraper {
    /// Build a scraper and create its output directory (idempotent).
    ///
    /// # Arguments
    ///
    /// * `config` - Listing template, site base, selectors, pacing and output
    ///   directory
    ///
    /// # Errors
    ///
    /// Returns an error if the site base is not a URL, a selector does not
    /// parse, the HTTP client cannot be built, or the directory cannot be
    /// created.
    pub fn new(config: &ScraperConfig) -> Result<Self, Box<dyn Error>> {
        let site_base = Url::parse(&config.site_base)?;
        let markup = SiteMarkup::from_config(&config.markup)?;
        let client = build_client(&config.user_agent)?;
        create_dir_all_sync(&config.raw_dir)?;

        Ok(Self {
            client,
            listing_url_template: config.listing_url_template.clone(),
            site_base,
            markup,
            output_dir: config.raw_dir.clone(),
            delay: config.delay(),
            article_urls: Vec::new(),
            records: Vec::new(),
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn article_urls(&self) -> &[ArticleUrl] {
        &self.article_urls
    }

    pub fn records(&self) -> &[ArticleRecord] {
        &self.records
    }

    /// Address of listing page `page` (1-based).
    fn listing_url(&self, page: u32) -> String {
        self.listing_url_template
            .replacen(PAGE_SLOT, &page.to_string(), 1)
    }

    /// Crawl listing pages `1..=pages` and append every article address found.
    ///
    /// A page that fails to load is logged and skipped. The configured delay
    /// is applied after every attempt, successful or not.
    ///
    /// # Arguments
    ///
    /// * `pages` - Number of listing pages to visit; `0` makes no request
    ///
    /// # Returns
    ///
    /// The total number of addresses collected so far.
    #[instrument(level = "info", skip(self))]
    pub async fn collect_urls(&mut self, pages: u32) -> usize {
        for page in 1..=pages {
            let url = self.listing_url(page);
            match fetch_page(&self.client, &url).await {
                Ok(body) => {
                    let found = parse_listing(&body, &self.markup, &self.site_base);
                    debug!(page, found = found.len(), "Parsed listing page");
                    self.article_urls.extend(found);
                }
                Err(e) => {
                    warn!(page, %url, error = %e, "Listing page failed; skipping");
                }
            }
            sleep(self.delay).await;
        }

        info!(count = self.article_urls.len(), "Article URLs collected");
        self.article_urls.len()
    }

    /// Fetch, parse and save every collected article, in collection order.
    ///
    /// Articles are numbered from 1 in that order, including those that end
    /// up skipped. An article whose body container is missing produces no
    /// file and no record. One with an empty body still gets its file but no
    /// record.
    ///
    /// # Errors
    ///
    /// Only a failure to write an article file aborts the phase.
    ///
    /// Returns the number of records kept.
    #[instrument(level = "info", skip_all, fields(urls = self.article_urls.len()))]
    pub async fn scrape_articles(&mut self) -> Result<usize, Box<dyn Error>> {
        for (i, url) in self.article_urls.iter().enumerate() {
            let index = i + 1;

            let body = match fetch_page(&self.client, url).await {
                Ok(body) => body,
                Err(e) => {
                    warn!(index, %url, error = %e, "Article request failed; skipping");
                    continue;
                }
            };

            let Some(article) = parse_article(&body, &self.markup) else {
                warn!(index, %url, "Article content not found; skipping");
                continue;
            };

            let filename = article_filename(index, &article.title);
            let filepath = self.output_dir.join(&filename);
            fs::write(&filepath, &article.text).await?;

            if article.text.trim().is_empty() {
                debug!(index, %url, path = %filepath.display(), "Article body empty; not added to corpus");
                continue;
            }

            self.records.push(ArticleRecord {
                filename,
                text: article.text,
            });
            info!(index, path = %filepath.display(), "Article saved");
        }

        info!(
            attempted = self.article_urls.len(),
            kept = self.records.len(),
            "Article scraping complete"
        );
        Ok(self.records.len())
    }

    /// Write the collected records as a `filename,text` table.
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub fn save_to_csv(&self, path: &Path) -> Result<usize, Box<dyn Error>> {
        let rows = write_corpus(path, &self.records)?;
        info!(rows, path = %path.display(), "Corpus saved");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outputs::corpus::read_records;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer, raw_dir: &Path) -> ScraperConfig {
        ScraperConfig {
            listing_url_template: format!("{}/fr/sante?page={{}}", server.uri()),
            site_base: server.uri(),
            delay_ms: 0,
            raw_dir: raw_dir.to_path_buf(),
            corpus_csv: raw_dir.join("corpus.csv"),
            ..ScraperConfig::default()
        }
    }

    fn listing_html(hrefs: &[&str]) -> String {
        let cards: String = hrefs
            .iter()
            .map(|h| format!(r#"<div class="relative"><a href="{h}">lien</a></div>"#))
            .collect();
        format!("<html><body>{cards}<div class=\"relative\"><span>pub</span></div></body></html>")
    }

    fn article_html(title: &str, paragraphs: &[&str]) -> String {
        let ps: String = paragraphs.iter().map(|p| format!("<p>{p}</p>")).collect();
        format!(r#"<html><body><h1>{title}</h1><div itemprop="articleBody">{ps}</div></body></html>"#)
    }

    #[tokio::test]
    async fn test_collect_urls_waits_after_each_failed_page() {
        let tmp = TempDir::new().unwrap();
        let config = ScraperConfig {
            listing_url_template: "http://127.0.0.1:1/fr/sante?page={}".to_string(),
            site_base: "http://127.0.0.1:1".to_string(),
            delay_ms: 60,
            raw_dir: tmp.path().to_path_buf(),
            corpus_csv: tmp.path().join("corpus.csv"),
            ..ScraperConfig::default()
        };
        let mut scraper = ArticleScraper::new(&config).unwrap();

        let started = std::time::Instant::now();
        assert_eq!(scraper.collect_urls(3).await, 0);
        assert!(started.elapsed() >= Duration::from_millis(3 * 60));
        assert!(scraper.article_urls().is_empty());
    }

    async fn mount_listing(server: &MockServer, page: &str, status: u16, body: String, times: u64) {
        Mock::given(method("GET"))
            .and(path("/fr/sante"))
            .and(query_param("page", page))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .expect(times)
            .mount(server)
            .await;
    }

    async fn mount_article(server: &MockServer, route: &str, status: u16, body: String) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .expect(1)
            .mount(server)
            .await;
    }

    #[test]
    fn test_new_creates_output_dir() {
        let tmp = TempDir::new().unwrap();
        let raw_dir = tmp.path().join("data").join("raw");
        let config = ScraperConfig {
            raw_dir: raw_dir.clone(),
            ..ScraperConfig::default()
        };

        ArticleScraper::new(&config).unwrap();
        assert!(raw_dir.is_dir());
        // Idempotent.
        ArticleScraper::new(&config).unwrap();
    }

    #[test]
    fn test_listing_url_substitutes_page() {
        let tmp = TempDir::new().unwrap();
        let scraper = ArticleScraper::new(&ScraperConfig {
            raw_dir: tmp.path().join("raw"),
            ..ScraperConfig::default()
        })
        .unwrap();
        assert_eq!(
            scraper.listing_url(3),
            "https://theconversation.com/fr/sante?page=3"
        );
    }

    #[tokio::test]
    async fn test_collect_urls_one_fetch_per_page_and_survives_failures() {
        let server = MockServer::start().await;
        let tmp = TempDir::new().unwrap();

        mount_listing(&server, "1", 200, listing_html(&["/a-1", "/b-2"]), 1).await;
        mount_listing(&server, "2", 500, String::new(), 1).await;
        mount_listing(&server, "3", 200, listing_html(&["/a-1", "/c-3"]), 1).await;

        let mut scraper = ArticleScraper::new(&config_for(&server, tmp.path())).unwrap();
        let count = scraper.collect_urls(3).await;

        assert_eq!(count, 4);
        let base = server.uri();
        assert_eq!(
            scraper.article_urls(),
            &[
                format!("{base}/a-1"),
                format!("{base}/b-2"),
                format!("{base}/a-1"),
                format!("{base}/c-3"),
            ]
        );
    }

    #[tokio::test]
    async fn test_collect_urls_zero_pages_fetches_nothing() {
        let server = MockServer::start().await;
        let tmp = TempDir::new().unwrap();
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut scraper = ArticleScraper::new(&config_for(&server, tmp.path())).unwrap();
        assert_eq!(scraper.collect_urls(0).await, 0);
    }

    #[tokio::test]
    async fn test_scrape_articles_skips_failures_and_empty_bodies() {
        let server = MockServer::start().await;
        let tmp = TempDir::new().unwrap();

        mount_listing(
            &server,
            "1",
            200,
            listing_html(&["/ok", "/gone", "/no-body", "/empty", "/second"]),
            1,
        )
        .await;
        mount_article(
            &server,
            "/ok",
            200,
            article_html("Le cœur et le stress: une étude /2024", &["Un.", "Deux."]),
        )
        .await;
        mount_article(&server, "/gone", 404, String::new()).await;
        mount_article(
            &server,
            "/no-body",
            200,
            "<html><body><h1>Sans corps</h1><p>x</p></body></html>".to_string(),
        )
        .await;
        mount_article(&server, "/empty", 200, article_html("Vide", &["  ", ""])).await;
        mount_article(&server, "/second", 200, article_html("Vaccins", &["Trois."])).await;

        let mut scraper = ArticleScraper::new(&config_for(&server, tmp.path())).unwrap();
        scraper.collect_urls(1).await;
        let kept = scraper.scrape_articles().await.unwrap();

        assert_eq!(kept, 2);
        assert_eq!(
            scraper.records(),
            &[
                ArticleRecord {
                    filename: "001_Le_cœur_et_le_stress:_une_étude_-2024.txt".to_string(),
                    text: "Un.\nDeux.".to_string(),
                },
                ArticleRecord {
                    filename: "005_Vaccins.txt".to_string(),
                    text: "Trois.".to_string(),
                },
            ]
        );

        let first = tmp.path().join("001_Le_cœur_et_le_stress:_une_étude_-2024.txt");
        assert_eq!(std::fs::read_to_string(first).unwrap(), "Un.\nDeux.");
        // Empty body: file written, no record.
        assert!(tmp.path().join("004_Vide.txt").exists());
        // Missing body: nothing written.
        assert!(!tmp.path().join("003_Sans_corps.txt").exists());
        assert!(
            std::fs::read_dir(tmp.path())
                .unwrap()
                .filter_map(Result::ok)
                .all(|e| !e.file_name().to_string_lossy().starts_with("002_"))
        );
    }

    #[tokio::test]
    async fn test_save_to_csv_round_trip() {
        let server = MockServer::start().await;
        let tmp = TempDir::new().unwrap();

        mount_listing(&server, "1", 200, listing_html(&["/ok"]), 1).await;
        mount_article(
            &server,
            "/ok",
            200,
            article_html("Sommeil", &["Dormir, c'est « vital ».", "Surtout l'été."]),
        )
        .await;

        let config = config_for(&server, tmp.path());
        let mut scraper = ArticleScraper::new(&config).unwrap();
        scraper.collect_urls(1).await;
        scraper.scrape_articles().await.unwrap();

        assert_eq!(scraper.save_to_csv(&config.corpus_csv).unwrap(), 1);
        let back: Vec<ArticleRecord> = read_records(&config.corpus_csv).unwrap();
        assert_eq!(back, scraper.records());
    }
}

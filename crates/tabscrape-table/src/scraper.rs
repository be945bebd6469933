//! Scrape pipeline
//!
//! Single-threaded and synchronous. A `Scraper` only reads its config, so
//! one instance can serve concurrent scrapes, each with its own document.

use tabscrape_dom::Document;
use tabscrape_html::HtmlParser;

use crate::{
    ScrapeError, ScraperConfig, Table, body_rows, extract_rows, locate_container, validate_header,
};

/// A validated scraper definition
#[derive(Debug, Clone)]
pub struct Scraper {
    config: ScraperConfig,
}

impl Scraper {
    /// Validate `config` and wrap it
    pub fn new(config: ScraperConfig) -> Result<Self, ScrapeError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Fetch the configured URL and extract the table
    pub fn scrape(&self) -> Result<Table, ScrapeError> {
        let url = self.config.source_url()?;
        let html = tabscrape_net::fetch(url.as_str())?;
        self.scrape_html(&html)
    }

    /// Extract the table from an HTML string
    pub fn scrape_html(&self, html: &str) -> Result<Table, ScrapeError> {
        let document = HtmlParser::new().parse_with_url(html, &self.config.url)?;
        self.scrape_document(&document)
    }

    /// Extract the table from a parsed document
    pub fn scrape_document(&self, document: &Document) -> Result<Table, ScrapeError> {
        let cfg = &self.config;
        let tree = document.tree();

        let container = locate_container(tree, document.root(), &cfg.container_selector)?;
        let rows = extract_rows(tree, container);
        tracing::debug!("Found {} rows", rows.len());

        let body = body_rows(&rows, cfg.header_row_count, cfg.footer_row_count)?;
        validate_header(&rows, &cfg.header_column_names, cfg.header_row_index)?;

        let mut table = Table::assemble(&cfg.table_name, &cfg.columns, body, cfg.continue_on_error)?;
        if let Some(order) = cfg.target_order() {
            table = table.rearrange_columns(order)?;
        }

        tracing::info!(
            "Scraped {} rows ({} dropped) into {}",
            table.len(),
            body.len() - table.len(),
            table.name
        );
        Ok(table)
    }
}

//! Search command implementation.

use crate::config::Config;
use crate::format::Reporter;
use crate::sites::{Parser, ProductRecord, SearchTerm, SiteClient, SiteFetch};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Prompt shown when no query is given on the command line.
pub const PROMPT: &str = "Enter product to search: ";

/// Prints [`PROMPT`] and reads one line of input.
pub fn prompt_search_term(input: &mut impl BufRead, out: &mut impl Write) -> Result<String> {
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read search term")?;
    Ok(line)
}

/// Searches every configured site and exports the combined results.
pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Validates `raw`, runs the search and reports to `out`.
    ///
    /// Returns the path of the CSV export, or `None` when the input was
    /// rejected or nothing was found.
    pub async fn execute(&self, raw: &str, out: &mut impl Write) -> Result<Option<PathBuf>> {
        let Some(term) = self.validate(raw, out)? else {
            return Ok(None);
        };

        let client = SiteClient::new(&self.config).await.context("Failed to create HTTP client")?;

        self.run(&client, &term, out).await
    }

    /// Executes the search with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl SiteFetch,
        raw: &str,
        out: &mut impl Write,
    ) -> Result<Option<PathBuf>> {
        let Some(term) = self.validate(raw, out)? else {
            return Ok(None);
        };

        self.run(client, &term, out).await
    }

    /// Fetches and parses every configured site in order.
    ///
    /// A site whose request fails contributes no records.
    pub async fn collect(&self, client: &impl SiteFetch, term: &SearchTerm) -> Vec<ProductRecord> {
        let mut all_records = Vec::new();

        for &site in &self.config.sites {
            let html = match client.search(site, term).await {
                Ok(html) => html,
                Err(e) => {
                    warn!("{} request failed: {:#}", site, e);
                    continue;
                }
            };

            let records = Parser::new(site).parse_search(&html, self.config.max_results);
            debug!("{} contributed {} products", site, records.len());
            all_records.extend(records);
        }

        info!("Found {} products in total", all_records.len());
        all_records
    }

    async fn run(
        &self,
        client: &impl SiteFetch,
        term: &SearchTerm,
        out: &mut impl Write,
    ) -> Result<Option<PathBuf>> {
        let records = self.collect(client, term).await;

        Reporter::new(self.config.format, &self.config.output_dir).report(out, term, &records)
    }

    fn validate(&self, raw: &str, out: &mut impl Write) -> Result<Option<SearchTerm>> {
        match SearchTerm::parse(raw) {
            Ok(term) => Ok(Some(term)),
            Err(e) => {
                writeln!(out, "Error: {}", e)?;
                Ok(None)
            }
        }
    }
}

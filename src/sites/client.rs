//! HTTP client for marketplace search pages.

use crate::config::Config;
use crate::sites::models::SearchTerm;
use crate::sites::site::Site;
use crate::sites::user_agent;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};
use wreq::Client;

/// Trait for fetching search pages - enables mocking for tests.
#[async_trait]
pub trait SiteFetch: Send + Sync {
    /// Fetches the search results page of `site` and returns the HTML.
    async fn search(&self, site: Site, term: &SearchTerm) -> Result<String>;
}

/// Marketplace HTTP client with a fixed throttle and rotating user agents.
pub struct SiteClient {
    client: Client,
    delay_ms: u64,
    base_url: Option<String>,
}

impl SiteClient {
    /// Creates a new client with the given configuration.
    pub async fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config, None).await
    }

    /// Creates a new client with an optional custom base URL (for testing).
    ///
    /// The override replaces scheme and host for every site; the search
    /// path of each site is kept.
    pub async fn with_base_url(config: &Config, base_url: Option<String>) -> Result<Self> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(config.timeout_secs));

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build()?;

        Ok(Self { client, delay_ms: config.delay_ms, base_url })
    }

    /// Returns the base URL (custom for testing, or the site's own).
    fn base_url(&self, site: Site) -> String {
        self.base_url.clone().unwrap_or_else(|| site.base_url())
    }

    /// Performs a throttled GET for `site`.
    async fn get(&self, site: Site, url: &str) -> Result<String> {
        self.delay().await;

        let user_agent = user_agent::random();
        debug!("GET {} (User-Agent: {})", url, user_agent);

        let mut request = self.client.get(url).header("User-Agent", user_agent);
        if let Some(lang) = site.profile().accept_language {
            request = request.header("Accept-Language", lang);
        }

        let response = request.send().await.context("Failed to send request")?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            anyhow::bail!("Request failed with status: {}", status);
        }

        response.text().await.context("Failed to read response body")
    }

    /// Sleeps for the configured fixed delay before every request.
    async fn delay(&self) {
        if self.delay_ms == 0 {
            return;
        }

        debug!("Delaying {}ms", self.delay_ms);
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
    }
}

#[async_trait]
impl SiteFetch for SiteClient {
    async fn search(&self, site: Site, term: &SearchTerm) -> Result<String> {
        let url = site.profile().search_url(&self.base_url(site), &term.query_param());

        info!("Searching {}: {}", site, term);
        self.get(site, &url).await
    }
}

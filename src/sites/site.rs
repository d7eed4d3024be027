//! Supported marketplaces and their per-site scraping profiles.

use crate::sites::selectors;
use scraper::Selector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Supported marketplaces, in the order they are searched by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Site {
    #[serde(rename = "eBay", alias = "ebay")]
    Ebay,
    #[serde(rename = "Walmart", alias = "walmart")]
    Walmart,
}

impl Site {
    /// Returns the scraping profile for this site.
    pub fn profile(&self) -> &'static SiteProfile {
        match self {
            Site::Ebay => &EBAY,
            Site::Walmart => &WALMART,
        }
    }

    /// Returns the human-readable label attached to every record.
    pub fn label(&self) -> &'static str {
        self.profile().label
    }

    /// Returns the site domain.
    pub fn domain(&self) -> &'static str {
        self.profile().domain
    }

    /// Returns the base URL for this site.
    pub fn base_url(&self) -> String {
        format!("https://www.{}", self.domain())
    }

    /// Returns all supported sites.
    pub fn all() -> &'static [Site] {
        &[Site::Ebay, Site::Walmart]
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Site {
    type Err = SiteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ebay" => Ok(Site::Ebay),
            "walmart" => Ok(Site::Walmart),
            _ => Err(SiteParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SiteParseError(String);

impl fmt::Display for SiteParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown site '{}'. Valid sites: ebay, walmart", self.0)
    }
}

impl std::error::Error for SiteParseError {}

/// Where the rating value lives inside the rating element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingValue {
    /// First word of the element text.
    Text,
    /// First word of the named attribute.
    Attribute(&'static str),
}

/// Everything that differs between sites: URLs, headers and selectors.
pub struct SiteProfile {
    pub label: &'static str,
    pub domain: &'static str,
    /// Path plus query prefix; the encoded search term is appended.
    pub search_path: &'static str,
    pub accept_language: Option<&'static str>,
    pub item: &'static LazyLock<Selector>,
    pub name: &'static LazyLock<Selector>,
    pub price: &'static LazyLock<Selector>,
    pub rating: &'static LazyLock<Selector>,
    pub rating_value: RatingValue,
}

impl SiteProfile {
    /// Builds the search URL against `base_url` for an already-encoded query.
    pub fn search_url(&self, base_url: &str, encoded_query: &str) -> String {
        format!("{}{}{}", base_url.trim_end_matches('/'), self.search_path, encoded_query)
    }
}

impl fmt::Debug for SiteProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteProfile")
            .field("label", &self.label)
            .field("domain", &self.domain)
            .field("search_path", &self.search_path)
            .field("accept_language", &self.accept_language)
            .field("rating_value", &self.rating_value)
            .finish_non_exhaustive()
    }
}

static EBAY: SiteProfile = SiteProfile {
    label: "eBay",
    domain: "ebay.com",
    search_path: "/sch/i.html?_nkw=",
    accept_language: None,
    item: &selectors::ebay::ITEM,
    name: &selectors::ebay::NAME,
    price: &selectors::ebay::PRICE,
    rating: &selectors::ebay::RATING,
    rating_value: RatingValue::Text,
};

static WALMART: SiteProfile = SiteProfile {
    label: "Walmart",
    domain: "walmart.com",
    search_path: "/search?q=",
    accept_language: Some("en-US,en;q=0.9"),
    item: &selectors::walmart::ITEM,
    name: &selectors::walmart::NAME,
    price: &selectors::walmart::PRICE,
    rating: &selectors::walmart::RATING,
    rating_value: RatingValue::Attribute(selectors::walmart::RATING_ATTR),
};

//! HTML parser for marketplace search results.

use crate::sites::models::ProductRecord;
use crate::sites::site::{RatingValue, Site, SiteProfile};
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Why a single listing could not be turned into a record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("{site} listing has no {field}")]
    MissingField { site: Site, field: &'static str },
}

/// Parser for search result pages of one site.
pub struct Parser {
    site: Site,
    profile: &'static SiteProfile,
}

impl Parser {
    /// Creates a new parser for the given site.
    pub fn new(site: Site) -> Self {
        Self { site, profile: site.profile() }
    }

    /// Parses up to `max` listings from a search results page.
    ///
    /// Listings missing a name or price are logged and skipped; the rest of
    /// the page is still parsed.
    pub fn parse_search(&self, html: &str, max: usize) -> Vec<ProductRecord> {
        let document = Html::parse_document(html);

        let mut records = Vec::new();
        for element in document.select(self.profile.item).take(max) {
            match self.parse_item(element) {
                Ok(record) => {
                    trace!("Parsed product: {} - {}", record.name, record.price);
                    records.push(record);
                }
                Err(e) => {
                    warn!("Error parsing {} product: {}", self.site, e);
                }
            }
        }

        debug!("Parsed {} products from {}", records.len(), self.site);
        records
    }

    /// Parses a single listing card.
    fn parse_item(&self, element: ElementRef) -> Result<ProductRecord, ExtractError> {
        let name = self.required_text(element, self.profile.name, "name")?;
        let price = self.required_text(element, self.profile.price, "price")?;
        let rating = self.parse_rating(element);

        Ok(ProductRecord::new(name, price, rating, self.site))
    }

    /// Returns the stripped text of the first match, failing if absent or blank.
    fn required_text(
        &self,
        element: ElementRef,
        selector: &Selector,
        field: &'static str,
    ) -> Result<String, ExtractError> {
        element
            .select(selector)
            .next()
            .map(stripped_text)
            .filter(|text| !text.is_empty())
            .ok_or(ExtractError::MissingField { site: self.site, field })
    }

    /// Extracts the rating token, if the listing carries one.
    fn parse_rating(&self, element: ElementRef) -> Option<String> {
        let rating = element.select(self.profile.rating).next()?;

        let raw = match self.profile.rating_value {
            RatingValue::Text => stripped_text(rating),
            RatingValue::Attribute(attr) => rating.value().attr(attr)?.to_string(),
        };

        raw.split_whitespace().next().map(String::from)
    }
}

/// Concatenates the element's text nodes, each trimmed, blanks dropped.
fn stripped_text(element: ElementRef) -> String {
    element.text().map(str::trim).filter(|s| !s.is_empty()).collect()
}

//! Data models for scraped products and validated search terms.

use crate::sites::site::Site;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder stored when a listing has no readable rating.
pub const RATING_UNAVAILABLE: &str = "N/A";

/// One product listing extracted from a search results page.
///
/// Field names double as the CSV header: `Name,Price,Rating,Source`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductRecord {
    /// Listing title, never empty
    pub name: String,
    /// Price exactly as displayed, never empty
    pub price: String,
    /// First word of the rating text, or [`RATING_UNAVAILABLE`]
    pub rating: String,
    /// Site the listing came from
    pub source: Site,
}

impl ProductRecord {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        rating: Option<String>,
        source: Site,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            rating: rating.unwrap_or_else(|| RATING_UNAVAILABLE.to_string()),
            source,
        }
    }

    /// Returns true if the site exposed a rating for this listing.
    pub fn has_rating(&self) -> bool {
        self.rating != RATING_UNAVAILABLE
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a valid search term.")]
    Empty,
}

/// A trimmed, non-empty search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Validates raw user input. Whitespace-only input is rejected.
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InputError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Encodes the term for a query string: spaces become `+`, anything
    /// else outside the unreserved set is percent-encoded.
    pub fn query_param(&self) -> String {
        self.0.split(' ').map(urlencoding::encode).collect::<Vec<_>>().join("+")
    }

    /// File name for the CSV export, e.g. `usb_cable_products.csv`.
    pub fn csv_file_name(&self) -> String {
        let stem: String = self
            .0
            .chars()
            .map(|c| if c.is_whitespace() || c == '/' || c == '\\' { '_' } else { c })
            .collect();
        format!("{}_products.csv", stem)
    }
}

impl std::fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! price-scout - Search eBay and Walmart for a product and export the results to CSV
//!
//! Fetches one search results page per site, extracts name, price and rating
//! of the first listings, prints a combined summary and saves it as CSV.

pub mod commands;
pub mod config;
pub mod format;
pub mod sites;

pub use config::Config;
pub use sites::{ProductRecord, SearchTerm, Site};

//! Marketplace-specific modules for HTTP client, parsing, and data models.

pub mod client;
pub mod models;
pub mod parser;
pub mod selectors;
pub mod site;
pub mod user_agent;

pub use client::{SiteClient, SiteFetch};
pub use models::{InputError, ProductRecord, SearchTerm, RATING_UNAVAILABLE};
pub use parser::{ExtractError, Parser};
pub use site::{Site, SiteProfile};

//! CLI command implementations.

pub mod search;

pub use search::{prompt_search_term, SearchCommand};

//! CSS selectors for search result pages.
//!
//! Every selector used for parsing lives here, grouped per site.
//! Update this file when a site changes its HTML structure.
//!
//! **Update process**: When parsing fails, capture HTML sample,
//! update selectors, and add test fixture.

use scraper::Selector;
use std::sync::LazyLock;

/// Selectors for eBay search results (`/sch/i.html`).
pub mod ebay {
    use super::*;

    /// Listing card container.
    pub static ITEM: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".s-item__wrapper").unwrap());

    /// Listing title.
    pub static NAME: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".s-item__title").unwrap());

    /// Displayed price, e.g. "$12.99" or "$5.00 to $9.00".
    pub static PRICE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".s-item__price").unwrap());

    /// Review count badge; the first word is reported as the rating.
    pub static RATING: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".s-item__reviews-count").unwrap());
}

/// Selectors for Walmart search results (`/search`).
pub mod walmart {
    use super::*;

    /// Product tile container.
    pub static ITEM: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("[data-item-id]").unwrap());

    /// Product title.
    pub static NAME: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("[data-automation-id='product-title']").unwrap());

    /// Current price block.
    pub static PRICE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("[data-automation-id='product-price']").unwrap());

    /// Star widget, rating carried in its `aria-label`.
    pub static RATING: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".stars-container").unwrap());

    /// Attribute holding "4.5 out of 5 Stars. 1234 reviews".
    pub const RATING_ATTR: &str = "aria-label";
}

//! Page extraction for store search results and game pages.
//!
//! Everything in here is a pure function of a parsed document (plus the tag
//! catalog for listings), so it can be exercised from inline HTML without
//! touching the network.

mod config;
mod detail;
mod listing;
mod text;

pub use config::{DetailSelectorConfig, ListingSelectorConfig, SelectorConfig};
pub use detail::DetailExtractor;
pub use listing::ListingExtractor;
pub use text::{first_segment, normalize_whitespace, parse_id_list};

use scraper::Selector;

use crate::config::ConfigError;

/// Both extractors, compiled from one [`SelectorConfig`].
pub struct Extractors {
    pub listings: ListingExtractor,
    pub details: DetailExtractor,
}

impl Extractors {
    pub fn new(config: &SelectorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            listings: ListingExtractor::new(&config.listing)?,
            details: DetailExtractor::new(&config.detail)?,
        })
    }
}

fn compile(name: &str, selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|e| ConfigError::Selector {
        name: name.to_string(),
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

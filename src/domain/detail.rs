use serde::{Deserialize, Serialize};

/// Extra information scraped from a game's own page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailInfo {
    pub developer: String,
    pub publisher: String,
    pub description: String,
    /// `None` when the page has no system requirements section
    pub system_requirements: Option<String>,
}

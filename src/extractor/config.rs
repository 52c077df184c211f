use serde::{Deserialize, Serialize};

/// CSS selectors and attribute names used to pull fields out of store pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub listing: ListingSelectorConfig,
    pub detail: DetailSelectorConfig,
}

/// Selectors for the search results page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingSelectorConfig {
    /// One element per search result, in document order
    pub row: String,
    pub title: String,
    pub price: String,
    pub release_date: String,
    /// Element carrying the review tooltip attribute
    pub review_summary: String,
    pub review_attr: String,
    /// Marker separating the tooltip segments
    pub review_separator: String,
    /// Attribute on the row itself
    pub link_attr: String,
    /// Attribute on the row itself, formatted like `[19,3953,492]`
    pub tag_ids_attr: String,
}

impl Default for ListingSelectorConfig {
    fn default() -> Self {
        Self {
            row: "#search_resultsRows > a".to_string(),
            title: ".title".to_string(),
            price: ".col.search_price_discount_combined .discount_final_price".to_string(),
            release_date: ".search_released".to_string(),
            review_summary: ".search_review_summary".to_string(),
            review_attr: "data-tooltip-html".to_string(),
            review_separator: "<br>".to_string(),
            link_attr: "href".to_string(),
            tag_ids_attr: "data-ds-tagids".to_string(),
        }
    }
}

/// Selectors for an individual game page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailSelectorConfig {
    pub developer: String,
    /// Publisher queries tried in priority order; first non-empty match wins
    pub publisher: Vec<String>,
    /// Rows scanned by label when none of the publisher queries match
    pub info_row: String,
    pub info_row_label: String,
    pub info_row_value: String,
    pub publisher_label: String,
    pub description: String,
    pub sysreq_section: String,
    pub sysreq_contents: String,
}

impl Default for DetailSelectorConfig {
    fn default() -> Self {
        Self {
            developer: "#developers_list > a".to_string(),
            publisher: vec![
                "#game_highlights > div.rightcol > div > div.glance_ctn_responsive_left > \
                 div:nth-child(4) > div.summary.column > a"
                    .to_string(),
            ],
            info_row: ".dev_row".to_string(),
            info_row_label: ".subtitle".to_string(),
            info_row_value: ".summary a".to_string(),
            publisher_label: "Publisher".to_string(),
            description: ".game_description_snippet".to_string(),
            sysreq_section: ".game_page_autocollapse.sys_req".to_string(),
            sysreq_contents: ".sysreq_contents".to_string(),
        }
    }
}

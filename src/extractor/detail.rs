use scraper::{Html, Selector};

use crate::config::ConfigError;
use crate::domain::DetailInfo;
use crate::extractor::config::DetailSelectorConfig;
use crate::extractor::text::{element_text, normalize_whitespace};
use crate::extractor::compile;

/// Pulls developer, publisher, description and system requirements out of
/// a game page.
pub struct DetailExtractor {
    developer: Selector,
    publisher: Vec<Selector>,
    info_row: Selector,
    info_row_label: Selector,
    info_row_value: Selector,
    publisher_label: String,
    description: Selector,
    sysreq_section: Selector,
    sysreq_contents: Selector,
}

impl DetailExtractor {
    pub fn new(config: &DetailSelectorConfig) -> Result<Self, ConfigError> {
        let publisher = config
            .publisher
            .iter()
            .map(|query| compile("detail.publisher", query))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            developer: compile("detail.developer", &config.developer)?,
            publisher,
            info_row: compile("detail.info_row", &config.info_row)?,
            info_row_label: compile("detail.info_row_label", &config.info_row_label)?,
            info_row_value: compile("detail.info_row_value", &config.info_row_value)?,
            publisher_label: config.publisher_label.clone(),
            description: compile("detail.description", &config.description)?,
            sysreq_section: compile("detail.sysreq_section", &config.sysreq_section)?,
            sysreq_contents: compile("detail.sysreq_contents", &config.sysreq_contents)?,
        })
    }

    pub fn extract_html(&self, html: &str) -> DetailInfo {
        let document = Html::parse_document(html);
        self.extract(&document)
    }

    pub fn extract(&self, document: &Html) -> DetailInfo {
        let description = document
            .select(&self.description)
            .next()
            .map(|el| element_text(el).trim().replace('\n', " "))
            .unwrap_or_default();

        DetailInfo {
            developer: joined_text(document, &self.developer),
            publisher: self.publisher(document),
            description,
            system_requirements: self.system_requirements(document),
        }
    }

    /// Tries each configured query in order, then falls back to scanning the
    /// info rows for one labelled as the publisher.
    fn publisher(&self, document: &Html) -> String {
        for query in &self.publisher {
            let found = joined_text(document, query);
            if !found.is_empty() {
                return found;
            }
        }

        document
            .select(&self.info_row)
            .find(|row| {
                row.select(&self.info_row_label)
                    .next()
                    .is_some_and(|label| {
                        element_text(label).trim().starts_with(&self.publisher_label)
                    })
            })
            .map(|row| {
                row.select(&self.info_row_value)
                    .map(|el| element_text(el).trim().to_string())
                    .filter(|name| !name.is_empty())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default()
    }

    fn system_requirements(&self, document: &Html) -> Option<String> {
        let section = document.select(&self.sysreq_section).next()?;

        // Text nodes are joined with a space so that list items separated
        // only by markup do not run together.
        let contents = section
            .select(&self.sysreq_contents)
            .next()
            .map(|el| el.text().collect::<Vec<_>>().join(" "))
            .unwrap_or_default();

        Some(normalize_whitespace(&contents))
    }
}

/// Text of every match, trimmed, joined with ", ".
fn joined_text(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .map(|el| element_text(el).trim().to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

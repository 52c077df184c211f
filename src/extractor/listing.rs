use scraper::{ElementRef, Html, Selector};

use crate::catalog::TagCatalog;
use crate::config::ConfigError;
use crate::domain::Listing;
use crate::extractor::config::ListingSelectorConfig;
use crate::extractor::text::{first_segment, first_text, parse_id_list};
use crate::extractor::compile;

/// Turns a search results page into [`Listing`] records.
pub struct ListingExtractor {
    row: Selector,
    title: Selector,
    price: Selector,
    release_date: Selector,
    review_summary: Selector,
    review_attr: String,
    review_separator: String,
    link_attr: String,
    tag_ids_attr: String,
}

impl ListingExtractor {
    pub fn new(config: &ListingSelectorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            row: compile("listing.row", &config.row)?,
            title: compile("listing.title", &config.title)?,
            price: compile("listing.price", &config.price)?,
            release_date: compile("listing.release_date", &config.release_date)?,
            review_summary: compile("listing.review_summary", &config.review_summary)?,
            review_attr: config.review_attr.clone(),
            review_separator: config.review_separator.clone(),
            link_attr: config.link_attr.clone(),
            tag_ids_attr: config.tag_ids_attr.clone(),
        })
    }

    pub fn extract_html(&self, html: &str, catalog: &TagCatalog) -> Vec<Listing> {
        let document = Html::parse_document(html);
        self.extract(&document, catalog)
    }

    /// One listing per result row, in document order. A field missing from
    /// a row comes back empty; it never drops the row.
    pub fn extract(&self, document: &Html, catalog: &TagCatalog) -> Vec<Listing> {
        document
            .select(&self.row)
            .map(|row| self.extract_row(row, catalog))
            .collect()
    }

    fn extract_row(&self, row: ElementRef<'_>, catalog: &TagCatalog) -> Listing {
        let link = row
            .value()
            .attr(&self.link_attr)
            .unwrap_or_default()
            .to_string();

        let reviews = row
            .select(&self.review_summary)
            .next()
            .and_then(|el| el.value().attr(&self.review_attr))
            .map(|tooltip| first_segment(tooltip, &self.review_separator))
            .unwrap_or_default();

        let tag_ids = row
            .value()
            .attr(&self.tag_ids_attr)
            .map(parse_id_list)
            .unwrap_or_default();

        Listing {
            title: first_text(row, &self.title),
            link,
            price: first_text(row, &self.price),
            release_date: first_text(row, &self.release_date),
            reviews,
            tags: catalog.resolve(&tag_ids),
        }
    }
}

use serde::{Deserialize, Serialize};

/// One row of a store search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub title: String,
    /// Store page URL, also the key used to pick a game for details
    pub link: String,
    /// Display text as shown by the store, empty for some free titles
    pub price: String,
    pub release_date: String,
    /// Review summary such as "Very Positive"
    pub reviews: String,
    pub tags: Vec<String>,
}

impl Listing {
    /// Tags as a single CSV field.
    pub fn tags_field(&self) -> String {
        self.tags.join(", ")
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.link
        } else {
            &self.title
        }
    }
}

/// First listing whose link matches exactly.
pub fn find_by_link<'a>(listings: &'a [Listing], link: &str) -> Option<&'a Listing> {
    listings.iter().find(|listing| listing.link == link)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(title: &str, link: &str) -> Listing {
        Listing {
            title: title.into(),
            link: link.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_tags_field() {
        let mut l = listing("Portal", "https://example.com/app/400");
        assert_eq!(l.tags_field(), "");
        l.tags = vec!["Puzzle".into(), "Singleplayer".into()];
        assert_eq!(l.tags_field(), "Puzzle, Singleplayer");
    }

    #[test]
    fn test_find_by_link_first_match_wins() {
        let batch = vec![
            listing("First", "https://example.com/app/1"),
            listing("Duplicate", "https://example.com/app/1"),
            listing("Other", "https://example.com/app/2"),
        ];

        assert_eq!(
            find_by_link(&batch, "https://example.com/app/1").map(|l| l.title.as_str()),
            Some("First")
        );
        assert!(find_by_link(&batch, "https://example.com/app/3").is_none());
    }

    #[test]
    fn test_display_title_falls_back_to_link() {
        assert_eq!(listing("", "https://example.com/app/9").display_title(), "https://example.com/app/9");
        assert_eq!(listing("Portal", "x").display_title(), "Portal");
    }
}

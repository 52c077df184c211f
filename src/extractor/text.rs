//! Text helpers shared by the listing and detail extractors.

use scraper::{ElementRef, Selector};

/// Collapse every whitespace run into a single space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Concatenated text content of an element.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Trimmed text of the first descendant matching `selector`, or an empty
/// string when nothing matches.
pub fn first_text(scope: ElementRef<'_>, selector: &Selector) -> String {
    scope
        .select(selector)
        .next()
        .map(|el| element_text(el).trim().to_string())
        .unwrap_or_default()
}

/// First segment of a tooltip split on `separator`, trimmed.
pub fn first_segment(value: &str, separator: &str) -> String {
    value
        .split(separator)
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Parse a bracketed ID list such as `[19,3953,492]`.
///
/// Empty tokens are dropped, so `[]` and `""` both yield no IDs.
pub fn parse_id_list(value: &str) -> Vec<String> {
    value
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(
            normalize_whitespace("Windows 10\n\n  64-bit  "),
            "Windows 10 64-bit"
        );
        assert_eq!(normalize_whitespace("\t\r\n "), "");
        assert_eq!(normalize_whitespace("single"), "single");
    }

    #[test]
    fn test_first_segment() {
        assert_eq!(
            first_segment("Very Positive<br>(1,234 reviews)", "<br>"),
            "Very Positive"
        );
        assert_eq!(first_segment("  Mixed  ", "<br>"), "Mixed");
        assert_eq!(first_segment("", "<br>"), "");
    }

    #[test]
    fn test_parse_id_list() {
        assert_eq!(parse_id_list("[19,3953,492]"), vec!["19", "3953", "492"]);
        assert_eq!(parse_id_list("[19,,492,]"), vec!["19", "492"]);
        assert_eq!(parse_id_list("[ 7 , 9 ]"), vec!["7", "9"]);
        assert!(parse_id_list("[]").is_empty());
        assert!(parse_id_list("").is_empty());
    }

    #[test]
    fn test_first_text_missing_is_empty() {
        let html = Html::parse_fragment("<div><span class=\"a\">  hi </span></div>");
        let root = html.root_element();
        let present = Selector::parse(".a").unwrap();
        let absent = Selector::parse(".b").unwrap();

        assert_eq!(first_text(root, &present), "hi");
        assert_eq!(first_text(root, &absent), "");
    }
}

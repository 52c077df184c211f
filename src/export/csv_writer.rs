use std::path::Path;

use crate::app::Result;
use crate::domain::Listing;

pub const CSV_HEADER: [&str; 6] = ["Title", "Link", "Price", "Release Date", "Reviews", "Tags"];

/// One row per listing; tags are joined with ", " into the last column.
pub fn write_csv(path: &Path, listings: &[Listing]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CSV_HEADER)?;

    for listing in listings {
        let tags = listing.tags_field();
        writer.write_record([
            listing.title.as_str(),
            listing.link.as_str(),
            listing.price.as_str(),
            listing.release_date.as_str(),
            listing.reviews.as_str(),
            tags.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_header_and_tags_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.csv");
        let listing = Listing {
            title: "Portal 2".into(),
            link: "https://store.steampowered.com/app/620/Portal_2/".into(),
            price: "$9.99".into(),
            release_date: "18 Apr, 2011".into(),
            reviews: "Overwhelmingly Positive".into(),
            tags: vec!["Puzzle".into(), "Co-op".into(), "First-Person".into()],
        };

        write_csv(&path, std::slice::from_ref(&listing)).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), CSV_HEADER.to_vec());

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 1);

        let row = &records[0];
        assert_eq!(&row[0], "Portal 2");
        assert_eq!(&row[3], "18 Apr, 2011");
        let tags: Vec<String> = row[5].split(", ").map(String::from).collect();
        assert_eq!(tags, listing.tags);
    }

    #[test]
    fn test_csv_empty_batch_has_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.csv");

        write_csv(&path, &[]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "Title,Link,Price,Release Date,Reviews,Tags\n");
    }
}

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::app::Result;
use crate::domain::Listing;

/// Pretty-printed JSON array. HTML characters are written as-is.
pub fn write_json(path: &Path, listings: &[Listing]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, listings)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub fn read_json(path: &Path) -> Result<Vec<Listing>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.json");
        let listings = vec![
            Listing {
                title: "Half-Life: Alyx".into(),
                link: "https://store.steampowered.com/app/546560/".into(),
                price: "".into(),
                release_date: "23 Mar, 2020".into(),
                reviews: "Overwhelmingly Positive".into(),
                tags: vec!["VR".into(), "Action".into()],
            },
            Listing::default(),
        ];

        write_json(&path, &listings).unwrap();
        assert_eq!(read_json(&path).unwrap(), listings);
    }

    #[test]
    fn test_json_field_names_and_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.json");
        let listing = Listing {
            title: "Tom & Jerry <Deluxe>".into(),
            release_date: "2024".into(),
            ..Default::default()
        };

        write_json(&path, &[listing]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();

        assert!(text.starts_with("[\n  {\n    \"title\""));
        assert!(text.contains("\"release_date\": \"2024\""));
        assert!(text.contains("\"tags\": []"));
        assert!(text.contains("Tom & Jerry <Deluxe>"));
    }
}

//! Writing a search batch to disk as JSON and CSV.

mod csv_writer;
mod json_writer;

pub use csv_writer::{write_csv, CSV_HEADER};
pub use json_writer::{read_json, write_json};

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::Result;
use crate::domain::Listing;

pub const JSON_FILE_NAME: &str = "games.json";
pub const CSV_FILE_NAME: &str = "games.csv";

/// Which exported file the user wants to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Json,
    Csv,
}

/// Locations of the files produced by one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub json: PathBuf,
    pub csv: PathBuf,
}

impl ExportPaths {
    pub fn get(&self, kind: ArtifactKind) -> &Path {
        match kind {
            ArtifactKind::Json => &self.json,
            ArtifactKind::Csv => &self.csv,
        }
    }
}

pub trait Exporter {
    /// Persist the batch, replacing any previous export.
    fn export(&self, listings: &[Listing]) -> Result<ExportPaths>;
}

/// Writes `games.json` and `games.csv` into one directory.
pub struct FileExporter {
    dir: PathBuf,
}

impl FileExporter {
    /// Creates the output directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn paths(&self) -> ExportPaths {
        ExportPaths {
            json: self.dir.join(JSON_FILE_NAME),
            csv: self.dir.join(CSV_FILE_NAME),
        }
    }
}

impl Exporter for FileExporter {
    fn export(&self, listings: &[Listing]) -> Result<ExportPaths> {
        let paths = self.paths();
        write_json(&paths.json, listings)?;
        write_csv(&paths.csv, listings)?;

        tracing::info!(
            count = listings.len(),
            dir = %self.dir.display(),
            "Exported listings"
        );
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Listing> {
        vec![
            Listing {
                title: "Portal 2".into(),
                link: "https://store.steampowered.com/app/620/Portal_2/".into(),
                price: "$9.99".into(),
                release_date: "18 Apr, 2011".into(),
                reviews: "Overwhelmingly Positive".into(),
                tags: vec!["Puzzle".into(), "Co-op".into()],
            },
            Listing {
                title: "Free Thing".into(),
                link: "https://store.steampowered.com/app/1/".into(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_new_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("resultfiles");
        let exporter = FileExporter::new(&out).unwrap();
        assert!(out.is_dir());
        assert_eq!(exporter.dir(), out.as_path());
    }

    #[test]
    fn test_new_fails_when_path_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("taken");
        fs::write(&file, "x").unwrap();

        let err = FileExporter::new(&file).err().expect("should fail");
        assert!(err.is_fatal());
    }

    #[test]
    fn test_export_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FileExporter::new(dir.path()).unwrap();

        let paths = exporter.export(&sample()).unwrap();
        assert_eq!(paths.get(ArtifactKind::Json), dir.path().join("games.json"));
        assert_eq!(paths.get(ArtifactKind::Csv), dir.path().join("games.csv"));
        assert!(paths.json.is_file());
        assert!(paths.csv.is_file());
    }

    #[test]
    fn test_export_overwrites_previous_batch() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FileExporter::new(dir.path()).unwrap();

        exporter.export(&sample()).unwrap();
        let paths = exporter.export(&sample()[..1]).unwrap();

        assert_eq!(read_json(&paths.json).unwrap().len(), 1);
    }
}

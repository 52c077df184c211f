//! Handing an exported file to the operating system.

use std::path::Path;

use crate::app::{Result, ScoutError};

pub trait Opener {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Opens files with the platform's default application.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl Opener for SystemOpener {
    fn open(&self, path: &Path) -> Result<()> {
        tracing::debug!(path = %path.display(), "Opening file");
        open::that(path).map_err(|e| ScoutError::Open {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

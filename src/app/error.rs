use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP request to {url} failed with status code: {status}")]
    Status { url: String, status: u16 },

    #[error("Request to {0} was cancelled")]
    Cancelled(String),

    #[error("Failed to parse document: {0}")]
    Parse(String),

    #[error("Game not found in current results: {0}")]
    Lookup(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Coarse classification used by the session loop to decide between
/// reporting and aborting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Network,
    Parse,
    Lookup,
    Io,
    Open,
}

impl ScoutError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScoutError::Config(_) | ScoutError::InvalidUrl(_) => ErrorKind::Config,
            ScoutError::Http(_) | ScoutError::Status { .. } | ScoutError::Cancelled(_) => {
                ErrorKind::Network
            }
            ScoutError::Parse(_) => ErrorKind::Parse,
            ScoutError::Lookup(_) => ErrorKind::Lookup,
            ScoutError::Io(_) | ScoutError::Json(_) | ScoutError::Csv(_) => ErrorKind::Io,
            ScoutError::Open { .. } => ErrorKind::Open,
        }
    }

    /// Fatal errors end the process; everything else is reported and the
    /// session keeps going.
    pub fn is_fatal(&self) -> bool {
        matches!(self.kind(), ErrorKind::Config | ErrorKind::Io)
    }
}

pub type Result<T> = std::result::Result<T, ScoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_errors_are_recoverable() {
        let err = ScoutError::Status {
            url: "https://store.steampowered.com/search/?term=x".into(),
            status: 503,
        };
        assert_eq!(err.kind(), ErrorKind::Network);
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_lookup_and_parse_are_recoverable() {
        assert!(!ScoutError::Lookup("https://example.com".into()).is_fatal());
        assert!(!ScoutError::Parse("bad bytes".into()).is_fatal());
        assert!(!ScoutError::Cancelled("https://example.com".into()).is_fatal());
    }

    #[test]
    fn test_io_and_config_are_fatal() {
        let io = ScoutError::Io(std::io::Error::other("disk full"));
        assert!(io.is_fatal());

        let config = ScoutError::Config(ConfigError::NoConfigDir);
        assert_eq!(config.kind(), ErrorKind::Config);
        assert!(config.is_fatal());
    }

    #[test]
    fn test_open_failure_is_not_fatal() {
        let err = ScoutError::Open {
            path: PathBuf::from("resultfiles/games.json"),
            source: std::io::Error::other("no handler"),
        };
        assert_eq!(err.kind(), ErrorKind::Open);
        assert!(!err.is_fatal());
    }
}

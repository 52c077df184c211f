use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Parser)]
#[command(name = "steam-scout")]
#[command(about = "Search the Steam store, export the results and look up game details", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/steam-scout/config.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON file mapping tag IDs to tag names
    #[arg(short, long)]
    pub tags: Option<PathBuf>,

    /// Directory games.json and games.csv are written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        Ok(self.apply(config))
    }

    fn apply(&self, mut config: Config) -> Config {
        if let Some(tags) = &self.tags {
            config.paths.tags_file = tags.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.paths.output_dir = dir.clone();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_paths() {
        let cli = Cli::parse_from(["steam-scout", "--tags", "my/tags.json", "-o", "out"]);
        let config = cli.apply(Config::default());

        assert_eq!(config.paths.tags_file, PathBuf::from("my/tags.json"));
        assert_eq!(config.paths.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_no_flags_keeps_config() {
        let cli = Cli::parse_from(["steam-scout"]);
        let config = cli.apply(Config::default());

        assert_eq!(config.paths.tags_file, PathBuf::from("data/tags.json"));
        assert_eq!(config.paths.output_dir, PathBuf::from("resultfiles"));
    }

    #[test]
    fn test_explicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scout.toml");
        std::fs::write(&path, "[paths]\noutput_dir = \"elsewhere\"\n").unwrap();

        let cli = Cli::parse_from(["steam-scout", "--config", path.to_str().unwrap()]);
        let config = cli.load_config().unwrap();
        assert_eq!(config.paths.output_dir, PathBuf::from("elsewhere"));
    }
}

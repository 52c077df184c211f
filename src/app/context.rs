use std::sync::Arc;

use crate::app::error::Result;
use crate::catalog::TagCatalog;
use crate::config::Config;
use crate::export::{Exporter, FileExporter};
use crate::extractor::Extractors;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::{search_url, Fetcher};

pub struct AppContext {
    pub config: Config,
    pub catalog: TagCatalog,
    pub extractors: Extractors,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub exporter: Box<dyn Exporter + Send + Sync>,
}

impl AppContext {
    /// Load the tag catalog, prepare the output directory and build the
    /// HTTP client. Any failure here is fatal.
    pub fn new(config: Config) -> Result<Self> {
        let catalog = TagCatalog::load(&config.paths.tags_file)?;
        let exporter = FileExporter::new(&config.paths.output_dir)?;
        let fetcher = HttpFetcher::new(&config.store)?;

        Self::with_parts(config, catalog, Arc::new(fetcher), Box::new(exporter))
    }

    /// Assemble a context from ready-made collaborators.
    pub fn with_parts(
        config: Config,
        catalog: TagCatalog,
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        exporter: Box<dyn Exporter + Send + Sync>,
    ) -> Result<Self> {
        search_url(&config.store.host, "")?;
        config.store.validate()?;
        let extractors = Extractors::new(&config.selectors)?;

        Ok(Self {
            config,
            catalog,
            extractors,
            fetcher,
            exporter,
        })
    }
}

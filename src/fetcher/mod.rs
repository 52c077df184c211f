pub mod http_fetcher;

use async_trait::async_trait;
use url::Url;

use crate::app::Result;

/// Retrieves a page body as text. Anything other than HTTP 200 is an error.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str, cookie: Option<&str>) -> Result<String>;
}

/// Search URL for a keyword, e.g. `https://store.steampowered.com/search/?term=half+life`.
pub fn search_url(host: &str, keyword: &str) -> Result<String> {
    let mut url = Url::parse(host)?.join("search/")?;
    url.query_pairs_mut().append_pair("term", keyword);
    Ok(url.into())
}

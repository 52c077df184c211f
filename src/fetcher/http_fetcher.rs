use async_trait::async_trait;
use reqwest::header::{HeaderValue, COOKIE};
use reqwest::{Client, StatusCode};

use crate::app::{Result, ScoutError};
use crate::config::StoreConfig;
use crate::fetcher::Fetcher;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &StoreConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .gzip(true)
            .brotli(true)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, cookie: Option<&str>) -> Result<String> {
        let mut request = self.client.get(url);

        if let Some(cookie) = cookie {
            let value = HeaderValue::from_str(cookie)
                .map_err(|e| ScoutError::Parse(format!("Invalid cookie for {}: {}", url, e)))?;
            request = request.header(COOKIE, value);
        }

        tracing::debug!(url, "GET");
        let response = request.send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ScoutError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?.to_vec();
        tracing::debug!(url, bytes = body.len(), "Fetched page");

        String::from_utf8(body)
            .map_err(|e| ScoutError::Parse(format!("{} is not valid UTF-8: {}", url, e)))
    }
}

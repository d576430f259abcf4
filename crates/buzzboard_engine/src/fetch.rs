use std::time::Duration;

use board_logging::board_warn;
use buzzboard_core::Item;

use crate::FetchError;

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait ItemFetcher: Send + Sync {
    async fn fetch_items(&self, query: &str) -> Result<Vec<Item>, FetchError>;
}

/// Production fetcher for `GET {base}/items?<query>`.
///
/// The client and base URL are built once at startup and reused for every
/// call. Network and HTTP failures are fail-soft: they are logged and
/// reported as an empty item list, so the board degrades to "no items"
/// instead of erroring. Only a malformed response body propagates.
#[derive(Debug, Clone)]
pub struct ApiItemFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl ApiItemFetcher {
    pub fn new(base_url: impl Into<String>, settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::Client {
                message: err.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait::async_trait]
impl ItemFetcher for ApiItemFetcher {
    async fn fetch_items(&self, query: &str) -> Result<Vec<Item>, FetchError> {
        let url = format!("{}/items?{}", self.base_url, query);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                board_warn!("item fetch transport error for {url}: {err}");
                return Ok(Vec::new());
            }
        };

        let status = response.status();
        if !status.is_success() {
            board_warn!("item fetch returned {status} for {url}");
            return Ok(Vec::new());
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(err) => {
                board_warn!("item fetch body read error for {url}: {err}");
                return Ok(Vec::new());
            }
        };

        serde_json::from_slice(&body).map_err(|err| FetchError::Decode {
            message: err.to_string(),
        })
    }
}

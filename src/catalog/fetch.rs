//! One-shot catalog fetch over HTTP.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tokio::time::timeout;
use url::Url;

use crate::catalog::item::{shape_records, Item};
use crate::config::SourceConfig;

/// Errors that can occur while fetching the catalog.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid catalog URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Catalog endpoint returned HTTP {status}")]
    Status { status: u16 },

    #[error("Catalog response is not a JSON array: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },
}

/// Anything able to supply the raw catalog once.
pub trait CatalogSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Item>, FetchError>> + Send;
}

/// HTTP client for the remote catalog endpoint.
pub struct CatalogClient {
    client: Client,
    url: Url,
    request_timeout: Duration,
}

impl CatalogClient {
    pub fn new(source: &SourceConfig) -> Result<Self, FetchError> {
        let url = Url::parse(&source.url).map_err(|e| FetchError::InvalidUrl {
            url: source.url.clone(),
            source: e,
        })?;
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(source.connect_timeout_seconds.into()))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            url,
            request_timeout: Duration::from_secs(source.timeout_seconds.into()),
        })
    }

    async fn do_fetch(&self) -> Result<Vec<Item>, FetchError> {
        let response = self
            .client
            .get(self.url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Request {
                url: self.url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Request {
            url: self.url.to_string(),
            source: e,
        })?;
        let records: Vec<Value> = serde_json::from_slice(&body).map_err(FetchError::Decode)?;

        Ok(shape_records(records))
    }
}

impl CatalogSource for CatalogClient {
    async fn fetch(&self) -> Result<Vec<Item>, FetchError> {
        tracing::info!(url = %self.url, "Fetching catalog");
        match timeout(self.request_timeout, self.do_fetch()).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }
}

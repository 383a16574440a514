//! Document Fetchers
//!
//! Sources for the raw catalogue document. The record store only sees the
//! [`DocumentFetcher`] trait; transport, authentication and timeouts live here.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::Config;
use crate::error::FetchError;

// == Fetcher Trait ==
/// Retrieves the serialized catalogue document.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Returns the raw JSON bytes of the whole catalogue.
    async fn fetch(&self) -> Result<Vec<u8>, FetchError>;

    /// Human readable description of the source, for logs.
    fn source(&self) -> String;
}

// == HTTP Fetcher ==
/// Downloads the document with a GET request.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    url: String,
    bearer_token: Option<String>,
}

impl HttpFetcher {
    /// Creates a fetcher for `url` with the given request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
            bearer_token: None,
        })
    }

    /// Sends `Authorization: Bearer <token>` with the request.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        let mut request = self.client.get(&self.url);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        debug!("Downloaded {} bytes from {}", bytes.len(), self.url);
        Ok(bytes.to_vec())
    }

    fn source(&self) -> String {
        self.url.clone()
    }
}

// == File Fetcher ==
/// Reads the document from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentFetcher for FileFetcher {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        Ok(tokio::fs::read(&self.path).await?)
    }

    fn source(&self) -> String {
        self.path.display().to_string()
    }
}

// == Static Fetcher ==
/// Serves a fixed in-memory document.
#[derive(Debug, Clone)]
pub struct StaticFetcher {
    body: Vec<u8>,
}

impl StaticFetcher {
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self { body: body.into() }
    }
}

#[async_trait]
impl DocumentFetcher for StaticFetcher {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        Ok(self.body.clone())
    }

    fn source(&self) -> String {
        "in-memory document".to_string()
    }
}

// == Factory ==
/// Builds the fetcher selected by the configuration.
///
/// A local `document_path` takes precedence over `document_url`.
pub fn fetcher_from_config(config: &Config) -> Result<Box<dyn DocumentFetcher>, FetchError> {
    if let Some(path) = &config.document_path {
        return Ok(Box::new(FileFetcher::new(path.clone())));
    }

    let mut fetcher = HttpFetcher::new(
        config.document_url.clone(),
        Duration::from_secs(config.fetch_timeout),
    )?;
    if let Some(token) = &config.document_token {
        fetcher = fetcher.with_bearer_token(token.clone());
    }
    Ok(Box::new(fetcher))
}

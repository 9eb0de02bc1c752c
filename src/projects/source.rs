use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

use super::TransportError;

/// Raw HTTP outcome handed to the loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedDocument {
    pub status: u16,
    /// Canonical reason phrase ("Not Found"), may be empty
    pub reason: String,
    /// Response body; left empty for unsuccessful responses
    pub body: String,
}

impl FetchedDocument {
    #[cfg(test)]
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            reason: "OK".to_string(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Where the project document comes from
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Issue exactly one request for the document
    async fn fetch(&self) -> Result<FetchedDocument, TransportError>;
}

/// Plain GET against a fixed URL, no retries
pub struct HttpProjectSource {
    client: reqwest::Client,
    url: String,
}

impl HttpProjectSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ProjectSource for HttpProjectSource {
    async fn fetch(&self) -> Result<FetchedDocument, TransportError> {
        info!(url = %self.url, "Fetching project list");
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        if !status.is_success() {
            return Ok(FetchedDocument {
                status: status.as_u16(),
                reason,
                body: String::new(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(FetchedDocument {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}

#[cfg(test)]
mockall::mock! {
    pub Source {}

    #[async_trait]
    impl ProjectSource for Source {
        async fn fetch(&self) -> Result<FetchedDocument, TransportError>;
    }
}

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::payload::PagePayload;

pub const NOTION_API_URL: &str = "https://api.notion.com/v1/pages";
pub const NOTION_VERSION: &str = "2022-06-28";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("provider request failed: {0}")]
    Request(String),
    #[error("provider response could not be read: {0}")]
    Read(String),
}

/// Raw provider reply. Status interpretation happens in the forwarder so
/// doubles can script arbitrary statuses without knowing the policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderResponse {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait PageTransport: Send + Sync {
    async fn create_page(
        &self,
        credential: &SecretString,
        payload: &PagePayload,
    ) -> Result<ProviderResponse, TransportError>;
}

/// Production transport: one POST to the page-creation endpoint with the
/// configured timeout applied at the client level.
pub struct HttpPageTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPageTransport {
    /// `base_url` overrides the official API host (local mock servers,
    /// staging proxies); `None` targets api.notion.com.
    pub fn new(timeout_secs: u64, base_url: Option<&str>) -> Result<Self, reqwest::Error> {
        let client =
            reqwest::Client::builder().timeout(Duration::from_secs(timeout_secs)).build()?;
        let endpoint = match base_url {
            Some(base) => format!("{}/v1/pages", base.trim_end_matches('/')),
            None => NOTION_API_URL.to_string(),
        };

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PageTransport for HttpPageTransport {
    async fn create_page(
        &self,
        credential: &SecretString,
        payload: &PagePayload,
    ) -> Result<ProviderResponse, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(credential.expose_secret())
            .header("Notion-Version", NOTION_VERSION)
            .json(payload)
            .send()
            .await
            .map_err(|error| TransportError::Request(error.to_string()))?;

        let status = response.status().as_u16();
        let body =
            response.text().await.map_err(|error| TransportError::Read(error.to_string()))?;

        Ok(ProviderResponse { status, body })
    }
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::info;

use super::response::CfnResponse;
use crate::errors::ProvisionError;

/// Delivers a response to CloudFormation.
#[async_trait]
pub trait ResponseSender: Send + Sync {
    async fn send(&self, response_url: &str, response: &CfnResponse) -> Result<(), ProvisionError>;
}

/// Sends responses with an HTTP `PUT` to the pre-signed S3 URL.
#[derive(Debug, Clone)]
pub struct HttpResponseSender {
    client: Client,
}

impl HttpResponseSender {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, ProvisionError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResponseSender for HttpResponseSender {
    async fn send(&self, response_url: &str, response: &CfnResponse) -> Result<(), ProvisionError> {
        let body = serde_json::to_string(response)
            .map_err(|e| ProvisionError::ResponseError(format!("serialize response: {e}")))?;

        // The URL is signed without a content type, so none may be sent.
        let reply = self
            .client
            .put(response_url)
            .header(CONTENT_TYPE, "")
            .body(body)
            .send()
            .await?;

        let status = reply.status();
        if !status.is_success() {
            let text = reply.text().await.unwrap_or_default();
            return Err(ProvisionError::ResponseError(format!(
                "response URL rejected the response with status {status}: {text}"
            )));
        }

        info!(
            status = ?response.status,
            physical_resource_id = %response.physical_resource_id,
            "CloudFormation response delivered"
        );
        Ok(())
    }
}

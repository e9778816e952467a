//! reqwest-backed deployment client.

use super::DeployClient;
use crate::config::ApiConfig;
use crate::contract::DeployRequest;
use crate::error::ApiError;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// Client for the deployment API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from resolved API configuration.
    ///
    /// No request timeout is set: an attempt stays in flight until the
    /// backend answers or the connection fails.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full endpoint URL for `request`.
    pub fn url_for(&self, request: &DeployRequest) -> String {
        format!("{}{}", self.base_url, request.path())
    }

    /// POST one deployment request and classify the response.
    pub async fn submit(&self, request: &DeployRequest) -> Result<Value, ApiError> {
        let url = self.url_for(request);
        debug!(%url, "submitting deployment request");
        let response = self.http.post(&url).json(&request.payload).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        classify_response(status, &body)
    }
}

#[async_trait]
impl DeployClient for ApiClient {
    async fn submit(&self, request: &DeployRequest) -> Result<Value, ApiError> {
        ApiClient::submit(self, request).await
    }
}

/// Decide whether a raw HTTP response counts as a successful deployment.
///
/// Non-2xx statuses fail first, then unparsable bodies, then a top-level
/// `success: false`. Anything else is returned as opaque data.
pub fn classify_response(status: u16, body: &str) -> Result<Value, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status {
            code: status,
            body: body.to_string(),
        });
    }
    let value: Value = serde_json::from_str(body)?;
    if value.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(ApiError::Rejected(value));
    }
    Ok(value)
}

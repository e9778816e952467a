//! HTTP client for the token deployment backend.
//!
//! One POST per attempt, no retries. The response is classified into
//! success (opaque JSON body) or an [`ApiError`].

use crate::contract::DeployRequest;
use crate::error::ApiError;
use async_trait::async_trait;

mod client;

pub use client::{classify_response, ApiClient};

/// Minimal deployment API interface used by the controller.
///
/// This trait lets tests provide deterministic responses without network
/// calls while the production path uses [`ApiClient`].
#[async_trait]
pub trait DeployClient: Send + Sync {
    async fn submit(&self, request: &DeployRequest) -> Result<serde_json::Value, ApiError>;
}

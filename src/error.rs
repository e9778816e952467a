//! Error types for configuration, the deployment API, and the controller.

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// ApiError
// ---------------------------------------------------------------------------

/// Errors from the deployment HTTP API.
#[derive(Debug)]
pub enum ApiError {
    /// Network / reqwest-level error.
    Http(reqwest::Error),
    /// Non-2xx status from the API.
    Status { code: u16, body: String },
    /// The response body was not valid JSON.
    Decode(serde_json::Error),
    /// The API answered with an explicit `success: false`.
    Rejected(serde_json::Value),
}

impl ApiError {
    /// HTTP status code for status-class failures.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "http: {e}"),
            Self::Status { code, body } => write!(f, "status {code}: {body}"),
            Self::Decode(e) => write!(f, "decode: {e}"),
            Self::Rejected(body) => write!(f, "rejected by api: {body}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e)
    }
}

// ---------------------------------------------------------------------------
// DeployError
// ---------------------------------------------------------------------------

/// Why a deployment attempt ended in the failed state.
///
/// The controller state machine only exposes ok / not ok; this carries the
/// detail for logs and CLI output.
#[derive(Debug)]
pub enum DeployError {
    Api(ApiError),
    /// No contract variant is configured for the token.
    MissingContract,
}

impl fmt::Display for DeployError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "api: {e}"),
            Self::MissingContract => write!(f, "no contract variant configured"),
        }
    }
}

impl std::error::Error for DeployError {}

impl From<ApiError> for DeployError {
    fn from(e: ApiError) -> Self {
        Self::Api(e)
    }
}

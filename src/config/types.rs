//! Configuration data model.
//!
//! `File*` structs mirror the TOML layout, including file references. The
//! public structs are the resolved form with those references already read.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::defaults::{
    DEFAULT_API_BASE_URL, DEFAULT_BACKGROUND, DEFAULT_BORDER_RADIUS, DEFAULT_FONT_FAMILY,
    DEFAULT_TEXT_COLOR,
};
use crate::contract::ContractSpec;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api: ApiConfig,
    pub deploy: DeployConfig,
    pub token: TokenConfig,
    /// Initial token text from `token.text` or `token.text_file`.
    pub text: Option<String>,
}

/// Deployment API connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.into(),
        }
    }
}

/// External switch gating the deploy action.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    pub allowed: bool,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self { allowed: true }
    }
}

/// Private key forwarded to the backend. Never printed.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct WalletKey(String);

impl WalletKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for WalletKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WalletKey(<redacted>)")
    }
}

/// Everything one card needs to render and deploy.
#[derive(Debug, Clone, Default)]
pub struct TokenConfig {
    /// Target network path segment, passed through unvalidated.
    pub network: String,
    pub metadata: Option<String>,
    pub wallet_private_key: Option<WalletKey>,
    /// Address printed on the card when `show_deployer_address` is set.
    pub wallet_address: Option<String>,
    pub contract: Option<ContractSpec>,
    pub display: DisplayConfig,
}

/// Visual card settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    pub background: String,
    pub text_color: String,
    pub font_family: String,
    pub border_radius: String,
    pub show_trademark: bool,
    pub show_deployer_address: bool,
    /// Raw SVG markup for the corner logo.
    pub logo: Option<String>,
    /// Raw SVG markup drawn faintly behind the text.
    pub watermark: Option<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND.into(),
            text_color: DEFAULT_TEXT_COLOR.into(),
            font_family: DEFAULT_FONT_FAMILY.into(),
            border_radius: DEFAULT_BORDER_RADIUS.into(),
            show_trademark: true,
            show_deployer_address: false,
            logo: None,
            watermark: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileConfig {
    pub(super) api: ApiConfig,
    pub(super) deploy: DeployConfig,
    pub(super) token: FileTokenConfig,
    pub(super) display: FileDisplayConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileTokenConfig {
    pub(super) network: String,
    pub(super) metadata: Option<String>,
    pub(super) wallet_private_key: Option<WalletKey>,
    /// Name of an env var holding the private key.
    pub(super) wallet_private_key_env: Option<String>,
    pub(super) wallet_address: Option<String>,
    pub(super) text: Option<String>,
    pub(super) text_file: Option<String>,
    pub(super) contract: Option<ContractSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub(super) struct FileDisplayConfig {
    pub(super) background: String,
    pub(super) text_color: String,
    pub(super) font_family: String,
    pub(super) border_radius: String,
    pub(super) show_trademark: bool,
    pub(super) show_deployer_address: bool,
    pub(super) logo: Option<String>,
    pub(super) logo_file: Option<String>,
    pub(super) watermark: Option<String>,
    pub(super) watermark_file: Option<String>,
}

impl Default for FileDisplayConfig {
    fn default() -> Self {
        let display = DisplayConfig::default();
        Self {
            background: display.background,
            text_color: display.text_color,
            font_family: display.font_family,
            border_radius: display.border_radius,
            show_trademark: display.show_trademark,
            show_deployer_address: display.show_deployer_address,
            logo: None,
            logo_file: None,
            watermark: None,
            watermark_file: None,
        }
    }
}

/// Result of explicit global config initialization (`xyxyx init`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalConfigInitResult {
    Created {
        path: std::path::PathBuf,
    },
    AlreadyInitialized {
        path: std::path::PathBuf,
    },
    Overwritten {
        path: std::path::PathBuf,
        backup_path: std::path::PathBuf,
    },
}

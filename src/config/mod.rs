//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`XYXYX_BASE_URL`, `XYXYX_NETWORK`,
//!    `XYXYX_WALLET_PRIVATE_KEY`, `XYXYX_DEPLOY_ALLOWED`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./xyxyx.toml in the current directory
//! 4. $XDG_CONFIG_HOME/xyxyx/xyxyx.toml (or ~/.config/xyxyx/xyxyx.toml)
//! 5. Built-in defaults

mod defaults;
mod env;
mod init;
mod loader;
mod resolve;
mod sources;
mod types;

pub use init::{
    config_root_dir, default_global_config_path, initialize_default_global_config,
    initialize_default_global_config_at_path,
};
pub use loader::load_config;
pub use types::{
    ApiConfig, Config, DeployConfig, DisplayConfig, GlobalConfigInitResult, TokenConfig, WalletKey,
};

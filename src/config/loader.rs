//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::env::apply_runtime_env_overrides;
use super::init::config_root_dir;
use super::resolve::resolve_config_from_file_config;
use super::sources::read_config_text_with_sources;
use super::types::FileConfig;
use super::Config;

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

pub(super) fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, &read_file, &config_root)?;
    tracing::debug!(?source, "config source selected");
    let parsed: FileConfig = toml::from_str(&config_text)?;
    let base_dir = source.base_dir().map(Path::to_path_buf);
    let mut config = resolve_config_from_file_config(parsed, &env_lookup, |path| {
        let full = match &base_dir {
            Some(dir) => dir.join(path),
            None => PathBuf::from(path),
        };
        read_file(&full).map_err(|e| {
            ConfigError::Invalid(format!("failed to read `{}`: {e}", full.display()))
        })
    })?;
    apply_runtime_env_overrides(&mut config, &env_lookup)?;
    Ok(config)
}

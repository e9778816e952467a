//! Global config location and `xyxyx init`.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ConfigError;

use super::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CONFIG_TEMPLATE};
use super::GlobalConfigInitResult;

/// Per-user config path, `$XDG_CONFIG_HOME/xyxyx/xyxyx.toml` when set.
pub fn default_global_config_path() -> Option<PathBuf> {
    config_root_dir().map(|root| root.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Write the bundled template to [`default_global_config_path`].
pub fn initialize_default_global_config(
    force: bool,
) -> Result<GlobalConfigInitResult, ConfigError> {
    let path = default_global_config_path().ok_or_else(|| {
        ConfigError::Invalid("no home or XDG_CONFIG_HOME to place xyxyx.toml in".to_string())
    })?;
    initialize_default_global_config_at_path(&path, force)
}

/// Write the bundled template to `path`.
///
/// An existing file is left alone unless `force` is set, in which case it is
/// copied to a timestamped `.bak` sibling first.
pub fn initialize_default_global_config_at_path(
    path: &Path,
    force: bool,
) -> Result<GlobalConfigInitResult, ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let owned = path.to_path_buf();
    if path.exists() {
        if !force {
            return Ok(GlobalConfigInitResult::AlreadyInitialized { path: owned });
        }
        let backup_path = timestamped_backup_path(path);
        std::fs::copy(path, &backup_path)?;
        std::fs::write(path, DEFAULT_CONFIG_TEMPLATE)?;
        tracing::info!(path = %path.display(), backup = %backup_path.display(), "config overwritten");
        return Ok(GlobalConfigInitResult::Overwritten {
            path: owned,
            backup_path,
        });
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        // Lost a creation race; the other writer's file stands.
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Ok(GlobalConfigInitResult::AlreadyInitialized { path: owned });
        }
        Err(e) => return Err(e.into()),
    };
    file.write_all(DEFAULT_CONFIG_TEMPLATE.as_bytes())?;
    tracing::info!(path = %path.display(), "config created");
    Ok(GlobalConfigInitResult::Created { path: owned })
}

/// First unused `<name>.<unix-secs>[.<n>].bak` next to `path`.
fn timestamped_backup_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| CONFIG_FILE_NAME.to_string());
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let first = path.with_file_name(format!("{name}.{secs}.bak"));
    if !first.exists() {
        return first;
    }
    (1..)
        .map(|n| path.with_file_name(format!("{name}.{secs}.{n}.bak")))
        .find(|candidate| !candidate.exists())
        .unwrap_or(first)
}

/// Base config directory: `$XDG_CONFIG_HOME`, else `~/.config`, else the
/// platform config dir.
pub fn config_root_dir() -> Option<PathBuf> {
    let xdg = std::env::var("XDG_CONFIG_HOME").ok();
    if let Some(root) = xdg.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(root));
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

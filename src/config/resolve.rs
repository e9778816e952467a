//! Turn parsed TOML into resolved runtime config.
//!
//! Inline values and `*_file` references are mutually exclusive; file
//! contents are read here and never parsed.

use crate::error::ConfigError;

use super::env::non_empty;
use super::types::{FileConfig, FileDisplayConfig, FileTokenConfig};
use super::{Config, DisplayConfig, TokenConfig, WalletKey};

pub(super) fn resolve_config_from_file_config<FEnv, FRead>(
    parsed: FileConfig,
    env_lookup: &FEnv,
    read_file: FRead,
) -> Result<Config, ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
    FRead: Fn(&str) -> Result<String, ConfigError>,
{
    let FileConfig {
        api,
        deploy,
        token,
        display,
    } = parsed;

    let text = inline_or_file(
        token.text.clone(),
        token.text_file.as_deref(),
        "token.text",
        &read_file,
    )?;
    let display = resolve_display(display, &read_file)?;
    let token = resolve_token(token, display, env_lookup)?;

    Ok(Config {
        api,
        deploy,
        token,
        text,
    })
}

fn resolve_token<FEnv>(
    token: FileTokenConfig,
    display: DisplayConfig,
    env_lookup: &FEnv,
) -> Result<TokenConfig, ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    let wallet_private_key = match (token.wallet_private_key, token.wallet_private_key_env) {
        (Some(_), Some(env_name)) => {
            return Err(ConfigError::Invalid(format!(
                "token sets both wallet_private_key and wallet_private_key_env (`{env_name}`); keep one"
            )));
        }
        (Some(key), None) => Some(key),
        (None, Some(env_name)) => non_empty(env_lookup, env_name.trim()).map(WalletKey::new),
        (None, None) => None,
    };

    Ok(TokenConfig {
        network: token.network.trim().to_string(),
        metadata: token.metadata,
        wallet_private_key,
        wallet_address: token.wallet_address,
        contract: token.contract,
        display,
    })
}

fn resolve_display<FRead>(
    display: FileDisplayConfig,
    read_file: &FRead,
) -> Result<DisplayConfig, ConfigError>
where
    FRead: Fn(&str) -> Result<String, ConfigError>,
{
    let logo = inline_or_file(
        display.logo,
        display.logo_file.as_deref(),
        "display.logo",
        read_file,
    )?;
    let watermark = inline_or_file(
        display.watermark,
        display.watermark_file.as_deref(),
        "display.watermark",
        read_file,
    )?;

    Ok(DisplayConfig {
        background: display.background,
        text_color: display.text_color,
        font_family: display.font_family,
        border_radius: display.border_radius,
        show_trademark: display.show_trademark,
        show_deployer_address: display.show_deployer_address,
        logo,
        watermark,
    })
}

fn inline_or_file<FRead>(
    inline: Option<String>,
    file: Option<&str>,
    field: &str,
    read_file: &FRead,
) -> Result<Option<String>, ConfigError>
where
    FRead: Fn(&str) -> Result<String, ConfigError>,
{
    match (inline, file.map(str::trim).filter(|path| !path.is_empty())) {
        (Some(_), Some(path)) => Err(ConfigError::Invalid(format!(
            "{field} and {field}_file (`{path}`) are both set; keep one"
        ))),
        (Some(value), None) => Ok(Some(value)),
        (None, Some(path)) => read_file(path).map(Some),
        (None, None) => Ok(None),
    }
}

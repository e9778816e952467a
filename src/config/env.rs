//! Environment overrides applied after file resolution.

use crate::error::ConfigError;

use super::{Config, WalletKey};

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(url) = non_empty(env_lookup, "XYXYX_BASE_URL") {
        config.api.base_url = url;
    }
    if let Some(network) = non_empty(env_lookup, "XYXYX_NETWORK") {
        config.token.network = network;
    }
    if let Some(key) = non_empty(env_lookup, "XYXYX_WALLET_PRIVATE_KEY") {
        config.token.wallet_private_key = Some(WalletKey::new(key));
    }
    if let Some(value) = non_empty(env_lookup, "XYXYX_DEPLOY_ALLOWED") {
        config.deploy.allowed = parse_bool(&value).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "invalid XYXYX_DEPLOY_ALLOWED value `{value}`: expected true/false"
            ))
        })?;
    }
    Ok(())
}

/// Env value with surrounding whitespace removed; blank counts as unset.
pub(super) fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

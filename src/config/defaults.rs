//! Default configuration constants and the bundled config template.
//!
//! Card defaults mirror what the preview shows when a field is left unset.

/// Embedded default `xyxyx.toml` template written by `xyxyx init`.
pub(super) const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("../templates/xyxyx.toml");
/// Config file name looked up locally and under the global config root.
pub(super) const CONFIG_FILE_NAME: &str = "xyxyx.toml";
/// Directory under the config root holding the global config.
pub(super) const CONFIG_DIR_NAME: &str = "xyxyx";
/// Default deployment API base URL.
pub(super) const DEFAULT_API_BASE_URL: &str = "https://api.xyxyx.pro";
/// Default card background color.
pub(super) const DEFAULT_BACKGROUND: &str = "#000000";
/// Default card text color.
pub(super) const DEFAULT_TEXT_COLOR: &str = "#FFFFFF";
/// Default card font stack.
pub(super) const DEFAULT_FONT_FAMILY: &str = "'Courier New', Courier, monospace";
/// Default card corner radius.
pub(super) const DEFAULT_BORDER_RADIUS: &str = "6px";

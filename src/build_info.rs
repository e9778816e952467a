//! Compile-time build metadata exposed to CLI surfaces.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("XYXYX_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("XYXYX_BUILD_TIMESTAMP");

/// Version block shown by `xyxyx --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("XYXYX_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("XYXYX_BUILD_TIMESTAMP")
);

/// Help trailer that surfaces build metadata in `xyxyx --help`.
pub const HELP_BUILD_METADATA: &str = concat!(
    "Build metadata:\n  commit: ",
    env!("XYXYX_BUILD_GIT_HASH"),
    "\n  built: ",
    env!("XYXYX_BUILD_TIMESTAMP")
);

/// One-line form used in debug logs.
pub fn version_line() -> String {
    format!("xyxyx v{VERSION} ({GIT_COMMIT}, built {BUILD_TIMESTAMP})")
}

//! Injects the commit hash and build time shown by `xyxyx --version`.
//!
//! Either value can be pinned through the matching `XYXYX_BUILD_*` env var.
//! Missing git or date tooling yields "unknown" / a unix timestamp.

use std::env;
use std::fs;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const HASH_VAR: &str = "XYXYX_BUILD_GIT_HASH";
const TIMESTAMP_VAR: &str = "XYXYX_BUILD_TIMESTAMP";

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    if let Some(reference) = head_ref() {
        println!("cargo:rerun-if-changed=.git/{reference}");
    }
    println!("cargo:rerun-if-env-changed={HASH_VAR}");
    println!("cargo:rerun-if-env-changed={TIMESTAMP_VAR}");

    let git_hash = env::var(HASH_VAR).unwrap_or_else(|_| {
        capture("git", &["rev-parse", "--short=12", "HEAD"]).unwrap_or_else(|| "unknown".into())
    });
    let built = env::var(TIMESTAMP_VAR).unwrap_or_else(|_| utc_now());

    println!("cargo:rustc-env={HASH_VAR}={git_hash}");
    println!("cargo:rustc-env={TIMESTAMP_VAR}={built}");
}

/// Branch ref named by `.git/HEAD`, so new commits trigger a rebuild.
fn head_ref() -> Option<String> {
    let head = fs::read_to_string(".git/HEAD").ok()?;
    head.trim().strip_prefix("ref: ").map(str::to_string)
}

fn utc_now() -> String {
    capture("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]).unwrap_or_else(|| {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        format!("unix:{secs}")
    })
}

fn capture(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

//! Handlers behind each CLI subcommand.

use crate::cli::TextSource;
use std::path::Path;
use xyxyx_tokenizer::api::DeployClient;
use xyxyx_tokenizer::config::{
    initialize_default_global_config, Config, GlobalConfigInitResult, TokenConfig,
};
use xyxyx_tokenizer::deploy::{DeploymentController, DeploymentState};
use xyxyx_tokenizer::preview::{line_count, Preview, MAX_LINES};
use xyxyx_tokenizer::render::render_card;
use xyxyx_tokenizer::ui::RenderSink;

/// Pick the token text: positional arg, then `--file`, then config.
pub(crate) fn resolve_text(
    source: &TextSource,
    configured: Option<&str>,
) -> Result<String, String> {
    if let Some(text) = &source.text {
        return Ok(text.clone());
    }
    if let Some(path) = &source.file {
        return std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()));
    }
    configured.map(str::to_string).ok_or_else(|| {
        "no token text: pass TEXT, use --file, or set token.text in xyxyx.toml".to_string()
    })
}

fn checked_preview(text: &str) -> Result<Preview, String> {
    Preview::from_text(text).ok_or_else(|| {
        format!(
            "text wraps to {} lines; the preview holds at most {MAX_LINES}",
            line_count(text)
        )
    })
}

pub(crate) fn run_preview(sink: &dyn RenderSink, text: &str) -> Result<(), String> {
    let preview = checked_preview(text)?;
    for (index, line) in preview.lines().iter().enumerate() {
        sink.preview_line(index, line);
    }
    sink.field("lines", &format!("{}/{MAX_LINES}", preview.len()));
    Ok(())
}

pub(crate) fn run_render(
    sink: &dyn RenderSink,
    token: &TokenConfig,
    text: &str,
    out: Option<&Path>,
) -> Result<(), String> {
    let preview = checked_preview(text)?;
    let svg = render_card(token, &preview);
    match out {
        Some(path) => {
            std::fs::write(path, svg)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            sink.field("wrote", &path.display().to_string());
        }
        None => sink.output(&svg),
    }
    Ok(())
}

pub(crate) async fn run_deploy(
    sink: &dyn RenderSink,
    config: &Config,
    text: &str,
    client: &dyn DeployClient,
) -> Result<(), String> {
    checked_preview(text)?;
    let mut controller =
        DeploymentController::new(config.token.clone(), text, config.deploy.allowed);

    if !controller.can_trigger() {
        sink.warn("deployment is disabled (deploy.allowed = false)");
        sink.deploy_state(controller.state());
        return Ok(());
    }

    sink.section("deploy");
    if let Some(contract) = &config.token.contract {
        sink.field("contract", contract.kind().name());
    }
    sink.field("network", &config.token.network);
    sink.field("lines", &controller.preview().len().to_string());

    let state = controller.deploy(client).await;
    sink.deploy_state(state);

    match state {
        DeploymentState::Succeeded => {
            if let Some(body) = controller.last_response() {
                let pretty =
                    serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
                sink.output(&pretty);
            }
            Ok(())
        }
        _ => Err(match controller.last_error() {
            Some(err) => format!("tokenization failed: {err}"),
            None => "tokenization failed".to_string(),
        }),
    }
}

pub(crate) fn run_init(sink: &dyn RenderSink, force: bool) -> Result<(), String> {
    let result = initialize_default_global_config(force).map_err(|e| e.to_string())?;
    report_init(sink, &result);
    Ok(())
}

fn report_init(sink: &dyn RenderSink, result: &GlobalConfigInitResult) {
    match result {
        GlobalConfigInitResult::Created { path } => {
            sink.field("created", &path.display().to_string());
        }
        GlobalConfigInitResult::AlreadyInitialized { path } => {
            sink.warn(&format!(
                "{} already exists; use `xyxyx init --force` to overwrite",
                path.display()
            ));
        }
        GlobalConfigInitResult::Overwritten { path, backup_path } => {
            sink.field("overwritten", &path.display().to_string());
            sink.field("backup", &backup_path.display().to_string());
        }
    }
}

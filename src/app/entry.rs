//! Application entry orchestration for the xyxyx CLI.

use crate::app::commands::{resolve_text, run_deploy, run_init, run_preview, run_render};
use crate::cli::{Args, Command};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use xyxyx_tokenizer::api::ApiClient;
use xyxyx_tokenizer::build_info;
use xyxyx_tokenizer::config::load_config;
use xyxyx_tokenizer::ui::{RenderSink, Renderer};

/// Env var holding the tracing filter directive.
pub(crate) const LOG_ENV_VAR: &str = "XYXYX_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Install stderr logging filtered by `XYXYX_LOG`.
pub(crate) fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // A second init (tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Run one CLI invocation and return the process exit code.
pub(crate) async fn run(args: Args) -> i32 {
    let renderer = Renderer::new(!args.no_color);
    match execute(args, &renderer).await {
        Ok(()) => 0,
        Err(msg) => {
            renderer.error(&msg);
            1
        }
    }
}

async fn execute(args: Args, sink: &dyn RenderSink) -> Result<(), String> {
    debug!(version = %build_info::version_line(), "starting");

    let command = match args.command {
        Command::Init { force } => return run_init(sink, force),
        other => other,
    };

    let config = load_config(args.config.as_deref()).map_err(|e| e.to_string())?;

    match command {
        Command::Preview(source) => {
            let text = resolve_text(&source, config.text.as_deref())?;
            run_preview(sink, &text)
        }
        Command::Render { source, out } => {
            let text = resolve_text(&source, config.text.as_deref())?;
            run_render(sink, &config.token, &text, out.as_deref())
        }
        Command::Deploy(source) => {
            let text = resolve_text(&source, config.text.as_deref())?;
            let client = ApiClient::new(&config.api);
            run_deploy(sink, &config, &text, &client).await
        }
        Command::Init { force } => run_init(sink, force),
    }
}

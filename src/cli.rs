//! CLI argument parsing via clap.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;
use xyxyx_tokenizer::build_info;

/// Preview, render and deploy xyxyx text tokens.
#[derive(Debug, Parser)]
#[command(
    name = "xyxyx",
    version = build_info::VERSION,
    long_version = build_info::LONG_VERSION,
    after_help = build_info::HELP_BUILD_METADATA
)]
pub struct Args {
    /// Path to config file (default: ./xyxyx.toml or ~/.config/xyxyx/xyxyx.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the segmented preview lines.
    Preview(TextSource),
    /// Write the SVG card.
    Render {
        #[command(flatten)]
        source: TextSource,
        /// Output path. Prints to stdout when omitted.
        #[arg(short = 'o', long = "out")]
        out: Option<PathBuf>,
    },
    /// Run one deployment attempt against the configured API.
    Deploy(TextSource),
    /// Write the default config to ~/.config/xyxyx/xyxyx.toml.
    Init {
        /// Overwrite an existing config, keeping a timestamped backup.
        #[arg(long)]
        force: bool,
    },
}

/// Where the token text comes from. Falls back to the configured text.
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct TextSource {
    /// Token text. Use real newlines to break lines.
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read token text from a file.
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_takes_positional_text() {
        let args = Args::parse_from(["xyxyx", "preview", "hello"]);
        match args.command {
            Command::Preview(source) => {
                assert_eq!(source.text.as_deref(), Some("hello"));
                assert!(source.file.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn render_accepts_file_and_output() {
        let args = Args::parse_from(["xyxyx", "render", "--file", "card.txt", "-o", "card.svg"]);
        match args.command {
            Command::Render { source, out } => {
                assert_eq!(source.file, Some(PathBuf::from("card.txt")));
                assert_eq!(out, Some(PathBuf::from("card.svg")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn text_and_file_conflict() {
        let err = Args::try_parse_from(["xyxyx", "deploy", "hi", "--file", "card.txt"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let args = Args::parse_from(["xyxyx", "deploy", "--config", "card.toml", "--no-color"]);
        assert_eq!(args.config.as_deref(), Some("card.toml"));
        assert!(args.no_color);
        assert!(matches!(args.command, Command::Deploy(_)));
    }

    #[test]
    fn init_force_flag() {
        let args = Args::parse_from(["xyxyx", "init", "--force"]);
        assert!(matches!(args.command, Command::Init { force: true }));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Args::try_parse_from(["xyxyx"]).is_err());
    }
}

//! Rendering contract consumed by the command layer.
//!
//! `Renderer` is the terminal implementation; tests substitute a recording
//! sink so command output can be asserted without touching stdout.

use super::renderer::Renderer;
use crate::deploy::DeploymentState;

/// Injectable output interface used by command orchestration.
pub trait RenderSink: Send + Sync {
    /// Print one numbered preview row to stdout.
    fn preview_line(&self, index: usize, line: &str);
    /// Print raw output (SVG markup, response JSON) to stdout.
    fn output(&self, text: &str);
    /// Render the deployment state label.
    fn deploy_state(&self, state: DeploymentState);
    fn section(&self, title: &str);
    fn field(&self, key: &str, value: &str);
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);
}

impl RenderSink for Renderer {
    fn preview_line(&self, index: usize, line: &str) {
        self.preview_line(index, line);
    }

    fn output(&self, text: &str) {
        self.output(text);
    }

    fn deploy_state(&self, state: DeploymentState) {
        self.deploy_state(state);
    }

    fn section(&self, title: &str) {
        self.section(title);
    }

    fn field(&self, key: &str, value: &str) {
        self.field(key, value);
    }

    fn warn(&self, msg: &str) {
        self.warn(msg);
    }

    fn error(&self, msg: &str) {
        self.error(msg);
    }
}

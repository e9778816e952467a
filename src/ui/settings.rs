//! Terminal glyphs, labels and colors for CLI output.

use crate::deploy::DeploymentState;
use crossterm::style::Color;

pub const INDENT_1: &str = "  ";

pub const LABEL_WARNING: &str = "warning:";
pub const LABEL_ERROR: &str = "error:";

pub const GLYPH_SECTION_BULLET: &str = "•";
pub const GLYPH_GUTTER: &str = "│";
pub const GLYPH_GUTTER_PLAIN: &str = "|";

pub fn color_warning() -> Color {
    Color::Yellow
}

pub fn color_error() -> Color {
    Color::Red
}

pub fn color_section_bullet() -> Color {
    Color::DarkGrey
}

pub fn color_section_title() -> Color {
    Color::White
}

pub fn color_field_key() -> Color {
    Color::DarkGrey
}

pub fn color_field_value() -> Color {
    Color::Grey
}

pub fn color_gutter() -> Color {
    Color::DarkGrey
}

pub fn color_state(state: DeploymentState) -> Color {
    match state {
        DeploymentState::Idle => Color::Grey,
        DeploymentState::InFlight => Color::Yellow,
        DeploymentState::Succeeded => Color::Green,
        DeploymentState::Failed => Color::Red,
    }
}

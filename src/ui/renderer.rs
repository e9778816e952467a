//! Terminal renderer: preview rows and payloads on stdout, status on stderr.

use super::settings;
use crate::deploy::DeploymentState;
use crossterm::style::Stylize;

/// Prints CLI output, colored unless disabled.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Print one preview row with a 1-based line-number gutter.
    pub fn preview_line(&self, index: usize, line: &str) {
        println!("{}", self.format_preview_line(index, line));
    }

    fn format_preview_line(&self, index: usize, line: &str) -> String {
        let number = format!("{:>3}", index + 1);
        if self.color {
            format!(
                "{} {} {line}",
                number.with(settings::color_gutter()),
                settings::GLYPH_GUTTER.with(settings::color_gutter())
            )
        } else {
            format!("{number} {} {line}", settings::GLYPH_GUTTER_PLAIN)
        }
    }

    pub fn output(&self, text: &str) {
        if text.ends_with('\n') {
            print!("{text}");
        } else {
            println!("{text}");
        }
    }

    pub fn deploy_state(&self, state: DeploymentState) {
        if self.color {
            eprintln!(
                "{}{}",
                settings::INDENT_1,
                state.label().with(settings::color_state(state)).bold()
            );
        } else {
            eprintln!("{}{}", settings::INDENT_1, state.label());
        }
    }

    /// Print a small section header in status-style output.
    pub fn section(&self, title: &str) {
        if self.color {
            eprintln!(
                "{} {}",
                settings::GLYPH_SECTION_BULLET.with(settings::color_section_bullet()),
                title.with(settings::color_section_title()).bold()
            );
        } else {
            eprintln!("{title}:");
        }
    }

    pub fn field(&self, key: &str, value: &str) {
        if self.color {
            eprintln!(
                "{}{} {}",
                settings::INDENT_1,
                format!("{key}:").with(settings::color_field_key()),
                value.with(settings::color_field_value()),
            );
        } else {
            eprintln!("{}{key}: {value}", settings::INDENT_1);
        }
    }

    pub fn warn(&self, msg: &str) {
        if self.color {
            eprintln!(
                "{} {msg}",
                settings::LABEL_WARNING
                    .with(settings::color_warning())
                    .bold()
            );
        } else {
            eprintln!("{} {msg}", settings::LABEL_WARNING);
        }
    }

    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!(
                "{} {msg}",
                settings::LABEL_ERROR.with(settings::color_error()).bold()
            );
        } else {
            eprintln!("{} {msg}", settings::LABEL_ERROR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_preview_line_is_numbered_from_one() {
        let renderer = Renderer::new(false);
        assert_eq!(renderer.format_preview_line(0, "hello"), "  1 | hello");
        assert_eq!(renderer.format_preview_line(29, "x"), " 30 | x");
    }

    #[test]
    fn colored_preview_line_keeps_text() {
        let renderer = Renderer::new(true);
        let line = renderer.format_preview_line(4, "token");
        assert!(line.contains("5"));
        assert!(line.ends_with(" token"));
    }
}

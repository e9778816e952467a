//! SVG card markup for a preview.
//!
//! Logo and watermark markup is embedded verbatim and never parsed. Everything
//! else that comes from configuration or user text is XML-escaped.

use crate::config::TokenConfig;
use crate::preview::Preview;
use std::fmt::Write as _;

pub const CARD_SIZE: u32 = 300;
pub const FONT_SIZE: &str = "10px";
pub const ADDRESS_FONT_SIZE: &str = "5px";
pub const LINE_ADVANCE: &str = "1.2em";

const TEXT_X: u32 = 10;
const TEXT_Y_WITH_LOGO: u32 = 60;
const TEXT_Y: u32 = 20;
const ADDRESS_Y: u32 = 290;
const TRADEMARK_TRANSFORM: &str = "translate(242.000000,290.000000) scale(0.0027,-0.0027)";
const TRADEMARK_PATHS: &str = include_str!("templates/trademark.svg");

/// Render the full card for `preview` using `config`'s display settings.
pub fn render_card(config: &TokenConfig, preview: &Preview) -> String {
    let display = &config.display;
    let mut svg = String::with_capacity(8 * 1024);

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CARD_SIZE}" height="{CARD_SIZE}">"#
    );
    let radius = escape_xml(&display.border_radius);
    let _ = writeln!(
        svg,
        r#"  <rect width="100%" height="{CARD_SIZE}px" fill="{}" rx="{radius}" ry="{radius}"/>"#,
        escape_xml(&display.background),
    );

    if let Some(watermark) = &display.watermark {
        let _ = writeln!(
            svg,
            r#"  <svg opacity="0.1" x="0" y="0" width="{CARD_SIZE}" height="{CARD_SIZE}">{watermark}</svg>"#
        );
    }
    if let Some(logo) = &display.logo {
        let _ = writeln!(
            svg,
            r#"  <svg x="10" y="10" width="30" height="30">{logo}</svg>"#
        );
    }

    let text_y = if display.logo.is_some() {
        TEXT_Y_WITH_LOGO
    } else {
        TEXT_Y
    };
    let fill = escape_xml(&display.text_color);
    let font_family = escape_xml(&display.font_family);
    let _ = writeln!(
        svg,
        r#"  <text x="{TEXT_X}" y="{text_y}" font-size="{FONT_SIZE}" fill="{fill}">"#
    );
    for (index, line) in preview.lines().iter().enumerate() {
        let dy = if index == 0 { "0" } else { LINE_ADVANCE };
        let _ = writeln!(
            svg,
            r#"    <tspan x="{TEXT_X}" dy="{dy}" font-family="{font_family}" font-size="{FONT_SIZE}">{}</tspan>"#,
            escape_xml(line)
        );
    }
    svg.push_str("  </text>\n");

    if display.show_deployer_address {
        let address = config.wallet_address.as_deref().unwrap_or_default();
        let _ = writeln!(
            svg,
            r#"  <text x="{TEXT_X}" y="{ADDRESS_Y}" font-size="{ADDRESS_FONT_SIZE}" font-family="{font_family}" fill="{fill}">{}</text>"#,
            escape_xml(address)
        );
    }

    if display.show_trademark {
        let _ = writeln!(
            svg,
            r#"  <g transform="{TRADEMARK_TRANSFORM}" fill="{fill}" stroke="none">"#
        );
        for path in TRADEMARK_PATHS.lines().filter(|line| !line.trim().is_empty()) {
            let _ = writeln!(svg, "    {}", path.trim());
        }
        svg.push_str("  </g>\n");
    }

    svg.push_str("</svg>\n");
    svg
}

/// Escape the five XML special characters.
///
/// Characters XML 1.0 cannot carry at all (C0 controls other than tab, line
/// feed and carriage return, plus U+FFFE/U+FFFF) are dropped.
pub fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(ch),
            '\u{0}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}' => {}
            other => out.push(other),
        }
    }
    out
}

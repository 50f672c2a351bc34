//! Panel rendering
//!
//! Turn the headless panel surface into terminal text, tinted with the
//! active theme's palette via 24-bit ANSI colors.

use cxplay_runner::{Palette, Panels, Theme};

const RESET: &str = "\x1b[0m";

/// Render the full panel surface with the active palette
pub fn render(panels: &Panels, theme: Theme) -> String {
    let tint = ansi_tint(theme.palette());
    let mut out = String::new();

    out.push_str(&tint);
    out.push_str("[Output]\n");
    out.push_str(&panels.output);
    if !panels.output.ends_with('\n') {
        out.push('\n');
    }

    if !panels.codegen.is_empty() {
        out.push_str("[Codegen]\n");
        out.push_str(&panels.codegen);
        if !panels.codegen.ends_with('\n') {
            out.push('\n');
        }
    }

    out.push_str(&format!(
        "Status: {} | Time: {} | Success Rate: {}\n",
        panels.status, panels.time, panels.success_rate
    ));
    out.push_str(&format!(
        "Time Complexity: {} | Space Complexity: {}",
        panels.time_complexity, panels.space_complexity
    ));
    out.push_str(RESET);
    out
}

/// Foreground + background escape sequence for a palette
fn ansi_tint(palette: Palette) -> String {
    let (fr, fg, fb) = rgb(palette.foreground);
    let (br, bg, bb) = rgb(palette.background);
    format!("\x1b[38;2;{fr};{fg};{fb}m\x1b[48;2;{br};{bg};{bb}m")
}

/// Parse a "#rrggbb" hex color; unknown text maps to black
fn rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return (0, 0, 0);
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).unwrap_or(0)
    };
    (channel(0..2), channel(2..4), channel(4..6))
}

//! TUI color theme
//!
//! GitHub-dark inspired color scheme for the terminal interface

use ratatui::style::Color;

pub const ACCENT_BLUE: Color = Color::Rgb(88, 166, 255);
pub const OK_GREEN: Color = Color::Rgb(63, 185, 80);
pub const CAUTION_AMBER: Color = Color::Rgb(210, 153, 34);
pub const ALERT_RED: Color = Color::Rgb(248, 81, 73);
pub const TEXT_DIM: Color = Color::Rgb(139, 148, 158);
pub const BACKGROUND: Color = Color::Rgb(13, 17, 23);

/// Cursor markers for the focused list row
pub const CUR_LEFT: &str = "▸";
pub const CUR_RIGHT: &str = "◂";

/// Color for the countdown as it runs out
/// - More than half remaining: Green
/// - More than a quarter: Amber
/// - Otherwise: Red
#[must_use]
pub fn countdown_color(fraction: f64) -> Color {
    if fraction > 0.5 {
        OK_GREEN
    } else if fraction > 0.25 {
        CAUTION_AMBER
    } else {
        ALERT_RED
    }
}

/// Render a horizontal gauge bar of the given width for a 0-100 percentage
#[must_use]
pub fn gauge_bar(percentage: f64, width: usize) -> String {
    let clamped = percentage.clamp(0.0, 100.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "▓".repeat(filled), "░".repeat(width - filled))
}

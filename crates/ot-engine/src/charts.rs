//! Bar chart and divider rendering.

use colored::{Color, Colorize};

/// Character width of every rendered bar.
pub const CHART_WIDTH: usize = 40;

const FILLED_BLOCK: &str = "\u{2588}";
const EMPTY_BLOCK: &str = "\u{2591}";
const DIVIDER_CHAR: &str = "\u{2500}";

/// Render a two-tone horizontal bar for `value` out of `max`.
///
/// `value` is clamped into `[0, max]`. The filled segment is drawn bold in
/// `fill`; the remainder is dimmed.
pub fn render_bar(value: f64, max: f64, width: usize, fill: Color) -> String {
    let clamped = value.clamp(0.0, max);
    let filled = (((clamped * width as f64) / max).floor() as usize).min(width);
    let empty = width - filled;
    format!(
        "{}{}",
        FILLED_BLOCK.repeat(filled).color(fill).bold(),
        EMPTY_BLOCK.repeat(empty).dimmed()
    )
}

/// Render a horizontal divider of the given character width.
pub fn render_divider(width: usize) -> String {
    DIVIDER_CHAR.repeat(width)
}

/// Color band for a risk score: alarming, caution, or calm.
pub fn risk_color(score: u32) -> Color {
    match score {
        70.. => Color::BrightRed,
        40..=69 => Color::BrightYellow,
        _ => Color::BrightGreen,
    }
}

/// Render the Emotional Risk Index label line and its bar line.
pub fn render_risk_bar(score: u32) -> String {
    let score = score.min(100);
    let color = risk_color(score);
    format!(
        "{} {}\n{}",
        "Emotional Risk Index:".bold(),
        format!("{score}/100").color(color).bold(),
        render_bar(f64::from(score), 100.0, CHART_WIDTH, color)
    )
}

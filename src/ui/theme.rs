use ratatui::style::{Color, Modifier, Style};

use crate::analytics::ScoreTier;

pub(crate) const HEADER_BG: Color = Color::Rgb(36, 39, 58);
pub(crate) const HEADER_FG: Color = Color::Rgb(202, 211, 245);
pub(crate) const ACCENT: Color = Color::Rgb(138, 173, 244);
pub(crate) const GREEN: Color = Color::Rgb(166, 218, 149);
pub(crate) const RED: Color = Color::Rgb(237, 135, 150);
pub(crate) const YELLOW: Color = Color::Rgb(238, 212, 159);
pub(crate) const PURPLE: Color = Color::Rgb(198, 160, 246);
pub(crate) const SURFACE: Color = Color::Rgb(54, 58, 79);
pub(crate) const TEXT: Color = Color::Rgb(202, 211, 245);
pub(crate) const TEXT_DIM: Color = Color::Rgb(128, 135, 162);
pub(crate) const OVERLAY: Color = Color::Rgb(73, 77, 100);
pub(crate) const COMMAND_BG: Color = Color::Rgb(30, 32, 48);

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(HEADER_FG)
        .bg(HEADER_BG)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_style() -> Style {
    Style::default().fg(HEADER_BG).bg(ACCENT)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn amount_style() -> Style {
    Style::default().fg(RED)
}

pub(crate) fn alt_row_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub(crate) fn command_bar_style() -> Style {
    Style::default().fg(TEXT).bg(COMMAND_BG)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(SURFACE)
}

/// Color for a budget usage ratio: green under 70%, yellow under 90%,
/// red beyond that.
pub(crate) fn usage_color(ratio: f64) -> Color {
    if ratio > 0.9 {
        RED
    } else if ratio > 0.7 {
        YELLOW
    } else {
        GREEN
    }
}

pub(crate) fn tier_color(tier: ScoreTier) -> Color {
    match tier {
        ScoreTier::Excellent => GREEN,
        ScoreTier::Good => YELLOW,
        ScoreTier::NeedsFocus => RED,
    }
}

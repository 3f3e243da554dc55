use ratatui::style::{Color, Modifier, Style};

pub(crate) const HEADER_BG: Color = Color::Rgb(26, 31, 44);
pub(crate) const HEADER_FG: Color = Color::Rgb(226, 232, 240);
pub(crate) const ACCENT: Color = Color::Rgb(155, 135, 245);
pub(crate) const GREEN: Color = Color::Rgb(74, 222, 128);
pub(crate) const RED: Color = Color::Rgb(248, 113, 113);
pub(crate) const YELLOW: Color = Color::Rgb(250, 204, 21);
pub(crate) const BLUE: Color = Color::Rgb(96, 165, 250);
pub(crate) const SURFACE: Color = Color::Rgb(40, 46, 62);
pub(crate) const TEXT: Color = Color::Rgb(226, 232, 240);
pub(crate) const TEXT_DIM: Color = Color::Rgb(142, 145, 150);
pub(crate) const OVERLAY: Color = Color::Rgb(64, 72, 92);
pub(crate) const COMMAND_BG: Color = Color::Rgb(18, 21, 31);

/// Parse a `#rrggbb` category color; anything else falls back to `fallback`.
pub(crate) fn hex_color(hex: &str, fallback: Color) -> Color {
    let Some(digits) = hex.strip_prefix('#') else {
        return fallback;
    };
    if digits.len() != 6 || !digits.is_ascii() {
        return fallback;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => fallback,
    }
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(HEADER_FG)
        .bg(HEADER_BG)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn title_style() -> Style {
    Style::default()
        .fg(TEXT_DIM)
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

pub(crate) fn income_style() -> Style {
    Style::default().fg(GREEN)
}

pub(crate) fn expense_style() -> Style {
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

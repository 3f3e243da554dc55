use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_percent, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let page = area.height.saturating_sub(2) as usize;
    let scroll = app.budget_index.saturating_sub(page.saturating_sub(1));

    let items: Vec<ListItem> = app
        .budget_rows
        .iter()
        .enumerate()
        .skip(scroll)
        .take(page)
        .map(|(i, row)| {
            let summary = &row.summary;
            let ratio = if summary.has_budget() {
                (summary.percentage_used / Decimal::ONE_HUNDRED)
                    .to_f64()
                    .unwrap_or(0.0)
                    .min(1.0)
            } else {
                0.0
            };

            let color = if summary.is_over_budget() {
                theme::RED
            } else if ratio > 0.7 {
                theme::YELLOW
            } else {
                theme::GREEN
            };

            let style = if i == app.budget_index {
                theme::selected_style()
            } else if i % 2 == 0 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let swatch = theme::hex_color(&summary.color, theme::TEXT_DIM);
            let percent = if summary.has_budget() {
                format_percent(summary.percentage_used)
            } else {
                "—".to_string()
            };

            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(swatch)),
                Span::styled(format!("{:<16}", truncate(&summary.category, 15)), style),
                Span::styled(
                    format!("{:>11} ", format_amount(summary.budget)),
                    theme::normal_style(),
                ),
                Span::styled(
                    format!("{:>11} spent ", format_amount(summary.spent)),
                    Style::default().fg(color),
                ),
                Span::styled(create_progress_bar(ratio, 20), Style::default().fg(color)),
                Span::styled(
                    format!(" {percent}"),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(" Budgets for {} (Enter to edit) ", app.month),
                theme::title_style(),
            )),
    );
    f.render_widget(list, area);
}

pub(crate) fn create_progress_bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0)) * width as f64) as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

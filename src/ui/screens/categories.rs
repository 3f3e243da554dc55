use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(
        ["", "Name", "Icon", "Color"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    );

    let rows: Vec<Row> = app
        .categories
        .iter()
        .enumerate()
        .map(|(i, cat)| {
            let swatch = theme::hex_color(&cat.color, theme::TEXT_DIM);
            let style = if i == app.category_index {
                theme::selected_style()
            } else {
                theme::normal_style()
            };
            Row::new(vec![
                Cell::from(Span::styled(" ██", Style::default().fg(swatch))),
                Cell::from(cat.name.clone()),
                Cell::from(Span::styled(cat.icon.clone(), theme::dim_style())),
                Cell::from(Span::styled(cat.color.clone(), Style::default().fg(swatch))),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Min(16),
        Constraint::Length(18),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(" Categories ({}) ", app.categories.len()),
                theme::title_style(),
            )),
    );
    f.render_widget(table, area);
}

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use super::app::{App, InputMode, Screen};
use super::commands;
use super::theme;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    render_tab_bar(f, chunks[0], app);
    render_screen(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
    render_command_bar(f, chunks[3], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Screen::all()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let num = format!("{}", i + 1);
            if *s == app.screen {
                Line::from(vec![
                    Span::styled(format!("{num}:"), Style::default().fg(theme::TEXT_DIM)),
                    Span::styled(
                        format!("{s}"),
                        Style::default()
                            .fg(theme::ACCENT)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(Span::styled(
                    format!("{num}:{s}"),
                    Style::default().fg(theme::TEXT_DIM),
                ))
            }
        })
        .collect();

    let tabs = Tabs::new(titles)
        .divider(Span::styled(" | ", Style::default().fg(theme::OVERLAY)))
        .style(Style::default().bg(theme::HEADER_BG));

    f.render_widget(tabs, area);
}

fn render_screen(f: &mut Frame, area: Rect, app: &App) {
    match app.screen {
        Screen::Dashboard => super::screens::dashboard::render(f, area, app),
        Screen::Transactions => super::screens::transactions::render(f, area, app),
        Screen::Budgets => super::screens::budgets::render(f, area, app),
        Screen::Categories => super::screens::categories::render(f, area, app),
    }
}

fn mode_color(mode: InputMode) -> Color {
    match mode {
        InputMode::Normal => theme::ACCENT,
        InputMode::Command | InputMode::Editing => theme::GREEN,
        InputMode::Search => theme::YELLOW,
        InputMode::Confirm => theme::RED,
    }
}

fn screen_hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Dashboard => " H/L month | Tab next tab | ? help ",
        Screen::Transactions => " e rename | D delete | /search | :recat | ? help ",
        Screen::Budgets => " Enter edit | D delete | H/L month | ? help ",
        Screen::Categories => " j/k move | g/G top/bottom | ? help ",
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode = format!(" {} ", app.input_mode);
    let info = format!(
        " {} | {} | {} txns",
        app.screen, app.month, app.transaction_count
    );
    let hints = screen_hints(app.screen);
    let pad = (area.width as usize).saturating_sub(mode.len() + info.len() + hints.len());

    let mode_style = Style::default()
        .fg(theme::HEADER_BG)
        .bg(mode_color(app.input_mode))
        .add_modifier(Modifier::BOLD);
    let bar = Paragraph::new(Line::from(vec![
        Span::styled(mode, mode_style),
        Span::styled(info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(hints, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::ACCENT)),
                Span::styled(&app.command_input, theme::command_bar_style()),
            ]),
            Some(1 + app.command_input.len() as u16),
        ),
        InputMode::Search => {
            let match_info = if !app.search_input.is_empty() {
                format!("  ({} matches)", app.transactions.len())
            } else {
                String::new()
            };
            (
                Line::from(vec![
                    Span::styled("/", Style::default().fg(theme::YELLOW)),
                    Span::styled(&app.search_input, theme::command_bar_style()),
                    Span::styled(match_info, theme::dim_style()),
                ]),
                Some(1 + app.search_input.len() as u16),
            )
        }
        InputMode::Editing => (
            Line::from(vec![
                Span::styled("edit> ", Style::default().fg(theme::GREEN)),
                Span::styled(&app.command_input, theme::command_bar_style()),
            ]),
            Some(6 + app.command_input.len() as u16),
        ),
        InputMode::Confirm => (
            Line::from(vec![
                Span::styled(&app.confirm_message, Style::default().fg(theme::YELLOW)),
                Span::styled(" [y/N] ", Style::default().fg(theme::RED)),
            ]),
            None,
        ),
        InputMode::Normal => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press : for commands, / to search, ? for help",
                    theme::dim_style(),
                ))
            } else {
                Line::from(Span::styled(
                    &app.status_message,
                    theme::command_bar_style(),
                ))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

const NAVIGATION_KEYS: &[(&str, &str)] = &[
    ("j/k, Up/Down", "Move cursor"),
    ("g/G", "Top/Bottom"),
    ("Ctrl-d/u", "Half page down/up"),
    ("1-4", "Switch tabs"),
    ("Tab/Shift-Tab", "Cycle tabs"),
    ("H/L", "Previous/next month"),
    ("Ctrl-q", "Quit"),
];

const ACTION_KEYS: &[(&str, &str)] = &[
    (":", "Command mode"),
    ("/", "Search (live)"),
    ("e", "Rename transaction (Transactions)"),
    ("Enter", "Edit budget amount (Budgets)"),
    ("D", "Delete selected row"),
    ("Esc", "Cancel/back"),
];

fn help_heading(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {title}"),
        Style::default()
            .fg(theme::YELLOW)
            .add_modifier(Modifier::BOLD),
    ))
}

fn help_entry(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<16}"), Style::default().fg(theme::ACCENT)),
        Span::styled(desc.to_string(), theme::normal_style()),
    ])
}

/// Registry commands, one line per description, skipping the short aliases.
fn command_entries() -> Vec<(&'static str, &'static str)> {
    let mut entries: Vec<(&'static str, &'static str)> = commands::COMMANDS
        .iter()
        .filter(|(name, _)| name.len() > 2)
        .map(|(name, cmd)| (*name, cmd.description))
        .collect();
    entries.sort_by_key(|(name, _)| *name);
    let mut seen = std::collections::HashSet::new();
    entries.retain(|(_, desc)| seen.insert(*desc));
    entries
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(" findash Help ", theme::title_style())),
        Line::from(""),
        help_heading("Navigation"),
    ];
    lines.extend(NAVIGATION_KEYS.iter().map(|(k, d)| help_entry(k, d)));
    lines.push(Line::from(""));
    lines.push(help_heading("Actions"));
    lines.extend(ACTION_KEYS.iter().map(|(k, d)| help_entry(k, d)));
    lines.push(Line::from(""));
    lines.push(help_heading("Commands"));
    lines.extend(
        command_entries()
            .into_iter()
            .map(|(name, desc)| help_entry(&format!(":{name}"), desc)),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Press any key to close ",
        theme::dim_style(),
    )));

    let height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let width = 72.min(area.width.saturating_sub(4));
    let popup = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    f.render_widget(Clear, popup);
    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup);
}

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::engine::{highest_month, Alerts};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_percent, format_signed, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),      // Stat cards
            Constraint::Percentage(50), // Monthly expenses + spending by category
            Constraint::Min(8),         // Budget vs actual + insights
            Constraint::Length(7),      // Recent activity
        ])
        .split(area);

    render_stat_cards(f, rows[0], app);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);
    render_monthly_expenses(f, charts[0], app);
    render_spending_by_category(f, charts[1], app);

    let budget = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[2]);
    render_budget_comparison(f, budget[0], app);
    render_insights(f, budget[1], app);

    render_recent_activity(f, rows[3], app);
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()))
}

fn bar_value(amount: Decimal) -> u64 {
    amount.round().to_u64().unwrap_or(0)
}

fn render_stat_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let totals = &app.totals;
    let income_count = app.income_count;
    let expense_count = app.expense_count;
    let balance_color = if totals.balance >= Decimal::ZERO {
        theme::GREEN
    } else {
        theme::RED
    };

    render_card(f, cards[0], "Balance", totals.balance, balance_color, None);
    render_card(
        f,
        cards[1],
        "Income",
        totals.income,
        theme::GREEN,
        Some(format!("{income_count} txns")),
    );
    render_card(
        f,
        cards[2],
        "Expenses",
        totals.expenses,
        theme::RED,
        Some(format!("{expense_count} txns")),
    );
    render_card(
        f,
        cards[3],
        "Available Budget",
        totals.available,
        theme::ACCENT,
        Some("60% of balance".into()),
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    amount: Decimal,
    color: Color,
    subtitle: Option<String>,
) {
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            format_amount(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle.unwrap_or_default(), theme::dim_style())),
    ])
    .centered()
    .block(panel(title));

    f.render_widget(text, area);
}

fn render_monthly_expenses(f: &mut Frame, area: Rect, app: &App) {
    let peak = highest_month(&app.monthly).map(|m| m.month);

    let bars: Vec<Bar> = app
        .monthly
        .iter()
        .map(|entry| {
            let color = if Some(entry.month) == peak && entry.amount > Decimal::ZERO {
                theme::ACCENT
            } else {
                theme::OVERLAY
            };
            Bar::default()
                .value(bar_value(entry.amount))
                .text_value(String::new())
                .label(Line::from(entry.month.short_name()))
                .style(Style::default().fg(color))
        })
        .collect();

    let title = match highest_month(&app.monthly) {
        Some(top) if top.amount > Decimal::ZERO => format!(
            "Monthly Expenses (peak {} {})",
            top.month.short_name(),
            format_amount(top.amount)
        ),
        _ => "Monthly Expenses".to_string(),
    };

    let width = (area.width.saturating_sub(2) / app.monthly.len().max(1) as u16)
        .saturating_sub(1)
        .clamp(1, 6);
    let chart = BarChart::default()
        .block(panel(&title))
        .data(BarGroup::default().bars(&bars))
        .bar_width(width)
        .bar_gap(1);

    f.render_widget(chart, area);
}

fn render_spending_by_category(f: &mut Frame, area: Rect, app: &App) {
    if app.spending.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No categorized expenses yet",
            theme::dim_style(),
        )))
        .centered()
        .block(panel("Spending by Category"));
        f.render_widget(msg, area);
        return;
    }

    let bars: Vec<Bar> = app
        .spending
        .iter()
        .map(|spend| {
            let color = spend
                .color
                .as_deref()
                .map_or(theme::TEXT_DIM, |hex| theme::hex_color(hex, theme::TEXT_DIM));
            Bar::default()
                .value(bar_value(spend.total))
                .text_value(format_amount(spend.total))
                .label(Line::from(truncate(&spend.name, 14)))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(theme::HEADER_BG).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(panel("Spending by Category"))
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(0);

    f.render_widget(chart, area);
}

fn render_budget_comparison(f: &mut Frame, area: Rect, app: &App) {
    let title = format!("Budget vs Actual ({})", app.month);
    if app.comparison.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(Span::styled(
                "No budgets or spending this month",
                theme::dim_style(),
            )),
            Line::from(Span::styled(
                "Use :budget <category> <amount> to set one",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(panel(&title));
        f.render_widget(msg, area);
        return;
    }

    let groups: Vec<(String, [Bar; 2])> = app
        .comparison
        .iter()
        .map(|point| {
            let spent_color = if point.budget > Decimal::ZERO && point.spent > point.budget {
                theme::RED
            } else {
                theme::ACCENT
            };
            (
                truncate(&point.name, 10),
                [
                    Bar::default()
                        .value(bar_value(point.budget))
                        .style(Style::default().fg(theme::BLUE)),
                    Bar::default()
                        .value(bar_value(point.spent))
                        .style(Style::default().fg(spent_color)),
                ],
            )
        })
        .collect();

    let mut chart = BarChart::default()
        .block(panel(&title))
        .bar_width(3)
        .bar_gap(0)
        .group_gap(2)
        .value_style(Style::default().fg(theme::TEXT));
    for (label, bars) in &groups {
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(label.as_str()))
                .bars(bars),
        );
    }

    f.render_widget(chart, area);
}

/// The insight panel's text: over-budget alerts, then under-used budgets.
pub(crate) fn insight_lines(alerts: &Alerts) -> Vec<Line<'static>> {
    if alerts.is_empty() {
        return vec![
            Line::from(Span::styled(
                "No budget insights available yet.",
                theme::normal_style(),
            )),
            Line::from(Span::styled(
                "Set budgets for your categories to see spending insights.",
                theme::dim_style(),
            )),
        ];
    }

    let mut lines = Vec::new();
    if !alerts.over_budget.is_empty() {
        lines.push(Line::from(Span::styled(
            "Over Budget Alert",
            Style::default()
                .fg(theme::RED)
                .add_modifier(Modifier::BOLD),
        )));
        for s in &alerts.over_budget {
            lines.push(Line::from(vec![
                Span::styled("● ", Style::default().fg(theme::hex_color(&s.color, theme::RED))),
                Span::styled(format!("{:<14}", s.category), theme::normal_style()),
                Span::styled(
                    format!("{} of {} ", format_amount(s.spent), format_amount(s.budget)),
                    theme::normal_style(),
                ),
                Span::styled(
                    format!("({})", format_percent(s.percentage_used)),
                    Style::default().fg(theme::RED),
                ),
            ]));
        }
    }

    if !alerts.under_utilized.is_empty() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            "Under Budget Categories",
            Style::default()
                .fg(theme::GREEN)
                .add_modifier(Modifier::BOLD),
        )));
        for s in &alerts.under_utilized {
            lines.push(Line::from(vec![
                Span::styled("● ", Style::default().fg(theme::hex_color(&s.color, theme::GREEN))),
                Span::styled(format!("{:<14}", s.category), theme::normal_style()),
                Span::styled(
                    format!("{} remaining ", format_amount(s.remaining)),
                    theme::normal_style(),
                ),
                Span::styled(
                    format!("({} used)", format_percent(s.percentage_used)),
                    Style::default().fg(theme::GREEN),
                ),
            ]));
        }
    }

    lines
}

fn render_insights(f: &mut Frame, area: Rect, app: &App) {
    let text = Paragraph::new(insight_lines(&app.alerts)).block(panel("Spending Insights"));
    f.render_widget(text, area);
}

fn render_recent_activity(f: &mut Frame, area: Rect, app: &App) {
    if app.recent.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No transactions yet. Add one with :add-txn or :load a CSV",
            theme::dim_style(),
        )))
        .centered()
        .block(panel("Recent Activity"));
        f.render_widget(msg, area);
        return;
    }

    let desc_width = area.width.saturating_sub(44).max(10) as usize;
    let items: Vec<ListItem> = app
        .recent
        .iter()
        .map(|txn| {
            let amount_style = if txn.is_income() {
                theme::income_style()
            } else {
                theme::expense_style()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {}  ", txn.date.format("%b %d, %Y")), theme::dim_style()),
                Span::styled(
                    format!("{:<desc_width$}", truncate(&txn.description, desc_width)),
                    theme::normal_style(),
                ),
                Span::styled(
                    format!("{:<14}", txn.category_name().unwrap_or("—")),
                    theme::dim_style(),
                ),
                Span::styled(format!("{:>12}", format_signed(txn.amount)), amount_style),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(panel("Recent Activity")), area);
}

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::engine;
use crate::models::Month;
use crate::store::Store;
use crate::ui::util::{format_amount, format_percent};

/// Dispatch a one-shot command. `args[0]` is the command word; `month` is the
/// `--month`/`FINDASH_MONTH` setting, if any.
pub(crate) fn as_cli(args: &[String], store: &mut Store, month: Option<Month>) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_command(args, store, month, &mut out)
}

pub(crate) fn run_command(
    args: &[String],
    store: &mut Store,
    month: Option<Month>,
    out: &mut impl Write,
) -> Result<()> {
    let Some(command) = args.first() else {
        print_usage(out)?;
        return Ok(());
    };
    let rest = &args[1..];
    let reference = month.unwrap_or_else(Month::current);

    match command.as_str() {
        "summary" | "s" => cli_summary(rest, store, reference, out),
        "insights" | "i" => cli_insights(rest, store, reference, out),
        "categories" => cli_categories(store, out),
        "export" => cli_export(rest, store, month, out),
        "--help" | "-h" | "help" => print_usage(out),
        "--version" | "-V" | "version" => {
            writeln!(out, "findash {}", env!("CARGO_PKG_VERSION"))?;
            Ok(())
        }
        other => {
            print_usage(out)?;
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage(out: &mut impl Write) -> Result<()> {
    writeln!(out, "findash - personal finance dashboard")?;
    writeln!(out)?;
    writeln!(
        out,
        "Usage: findash [--month YYYY-MM] [--data file.csv] [--no-demo] [command]"
    )?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  (none)                        Launch interactive TUI")?;
    writeln!(out, "  summary [YYYY-MM]             Totals and per-category budget summary")?;
    writeln!(out, "  insights [YYYY-MM]            Over-budget and under-used categories")?;
    writeln!(out, "  categories                    List reference categories")?;
    writeln!(out, "  export <path>                 Export transactions to CSV")?;
    writeln!(out, "                                (only --month's month when given)")?;
    writeln!(out, "  --help, -h                    Show this help")?;
    writeln!(out, "  --version, -V                 Show version")?;
    writeln!(out)?;
    writeln!(out, "Environment:")?;
    writeln!(out, "  FINDASH_MONTH, FINDASH_DATA, FINDASH_NO_DEMO, FINDASH_LOG")?;
    Ok(())
}

/// An explicit `YYYY-MM` positional argument overrides the configured month.
fn month_arg(args: &[String], default: Month) -> Result<Month> {
    match args.first().filter(|a| !a.starts_with('-')) {
        Some(raw) => raw.parse(),
        None => Ok(default),
    }
}

fn cli_summary(args: &[String], store: &Store, month: Month, out: &mut impl Write) -> Result<()> {
    let month = month_arg(args, month)?;
    let totals = engine::summarize_totals(store.transactions());
    let summaries = engine::summarize_categories(
        store.transactions(),
        &store.budgets_for(month),
        store.categories(),
        month,
    );

    writeln!(out, "findash - {month}")?;
    writeln!(out, "{}", "─".repeat(40))?;
    writeln!(out, "  Balance:    {}", format_amount(totals.balance))?;
    writeln!(out, "  Income:     {}", format_amount(totals.income))?;
    writeln!(out, "  Expenses:   {}", format_amount(totals.expenses))?;
    writeln!(out, "  Available:  {}", format_amount(totals.available))?;
    writeln!(out, "  Total Txns: {}", store.transactions().len())?;

    let rows: Vec<_> = summaries
        .iter()
        .filter(|s| s.has_budget() || s.spent > rust_decimal::Decimal::ZERO)
        .collect();
    if !rows.is_empty() {
        writeln!(out)?;
        writeln!(
            out,
            "  {:<16} {:>12} {:>12} {:>12} {:>6}",
            "Category", "Spent", "Budget", "Remaining", "Used"
        )?;
        for s in rows {
            writeln!(
                out,
                "  {:<16} {:>12} {:>12} {:>12} {:>6}",
                s.category,
                format_amount(s.spent),
                format_amount(s.budget),
                format_amount(s.remaining),
                format_percent(s.percentage_used),
            )?;
        }
    }

    Ok(())
}

fn cli_insights(args: &[String], store: &Store, month: Month, out: &mut impl Write) -> Result<()> {
    let month = month_arg(args, month)?;
    let summaries = engine::summarize_categories(
        store.transactions(),
        &store.budgets_for(month),
        store.categories(),
        month,
    );
    let alerts = engine::partition_alerts(&summaries);

    writeln!(out, "Spending insights - {month}")?;
    if alerts.is_empty() {
        writeln!(out, "  No budget insights available yet.")?;
        return Ok(());
    }

    if !alerts.over_budget.is_empty() {
        writeln!(out)?;
        writeln!(out, "Over Budget Alert:")?;
        for s in &alerts.over_budget {
            writeln!(
                out,
                "  {:<16} {} of {} ({})",
                s.category,
                format_amount(s.spent),
                format_amount(s.budget),
                format_percent(s.percentage_used)
            )?;
        }
    }
    if !alerts.under_utilized.is_empty() {
        writeln!(out)?;
        writeln!(out, "Under Budget Categories:")?;
        for s in &alerts.under_utilized {
            writeln!(
                out,
                "  {:<16} {} remaining ({} used)",
                s.category,
                format_amount(s.remaining),
                format_percent(s.percentage_used)
            )?;
        }
    }
    Ok(())
}

fn cli_categories(store: &Store, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{:<4} {:<16} {:<16} Color", "ID", "Name", "Icon")?;
    writeln!(out, "{}", "─".repeat(46))?;
    for cat in store.categories() {
        writeln!(out, "{:<4} {:<16} {:<16} {}", cat.id, cat.name, cat.icon, cat.color)?;
    }
    Ok(())
}

fn cli_export(
    args: &[String],
    store: &Store,
    month: Option<Month>,
    out: &mut impl Write,
) -> Result<()> {
    let Some(path) = args.first().filter(|a| !a.starts_with('-')) else {
        anyhow::bail!("Usage: findash export <path> [--month YYYY-MM]");
    };
    let path = shellexpand(path);

    let count = crate::import::export_to_csv(Path::new(&path), store.transactions(), month)
        .with_context(|| format!("Export to {path} failed"))?;
    match month {
        _ if count > 0 => writeln!(out, "Exported {count} transactions to {path}")?,
        Some(m) => writeln!(out, "No transactions for {m}")?,
        None => writeln!(out, "No transactions to export")?,
    }
    Ok(())
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

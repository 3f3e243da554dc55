use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::app::{App, InputMode, PendingAction, Screen};
use crate::models::{Month, TransactionDraft};
use crate::store::Store;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Store) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit findash", cmd_quit, r);
    register_command!("quit", "Quit findash", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("t", "Go to Transactions", cmd_transactions, r);
    register_command!("transactions", "Go to Transactions", cmd_transactions, r);
    register_command!("b", "Go to Budgets", cmd_budgets, r);
    register_command!("budgets", "Go to Budgets", cmd_budgets, r);
    register_command!("c", "Go to Categories", cmd_categories, r);
    register_command!("categories", "Go to Categories", cmd_categories, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("month", "Set month (e.g. :month 2023-04)", cmd_month, r);
    register_command!("m", "Set month (e.g. :m 04)", cmd_month, r);
    register_command!("next-month", "Go to next month", cmd_next_month, r);
    register_command!("prev-month", "Go to previous month", cmd_prev_month, r);
    register_command!(
        "search",
        "Search transactions (e.g. :search rent)",
        cmd_search,
        r
    );
    register_command!("s", "Search transactions (e.g. :s rent)", cmd_search, r);
    register_command!(
        "add-txn",
        "Add transaction (e.g. :add-txn 2023-04-12 Coffee -4.50)",
        cmd_add_txn,
        r
    );
    register_command!(
        "edit-txn",
        "Replace selected transaction (e.g. :edit-txn 2023-04-12 Coffee -5)",
        cmd_edit_txn,
        r
    );
    register_command!("rename", "Rename selected transaction", cmd_rename, r);
    register_command!(
        "recat",
        "Re-categorize selected transaction (or :recat none)",
        cmd_recat,
        r
    );
    register_command!(
        "delete-txn",
        "Delete selected transaction",
        cmd_delete_txn,
        r
    );
    register_command!(
        "budget",
        "Set budget for this month (e.g. :budget Food 400)",
        cmd_budget,
        r
    );
    register_command!(
        "delete-budget",
        "Delete selected budget",
        cmd_delete_budget,
        r
    );
    register_command!(
        "export",
        "Export this month's transactions to CSV (e.g. :export ~/april.csv)",
        cmd_export,
        r
    );
    register_command!(
        "load",
        "Replace transactions from a CSV file (e.g. :load ~/bank.csv)",
        cmd_load,
        r
    );

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if cmd_name.is_empty() {
        return Ok(());
    }

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        tracing::debug!(command = cmd_name, "running command");
        (cmd.run)(args, app, store)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Split `<date> <description> <amount>`: first token is the date, last is the amount.
fn parse_txn_args(args: &str) -> Result<(NaiveDate, String, Decimal), String> {
    const USAGE: &str = "Usage: <date> <description> <amount>. Example: 2023-04-12 Coffee -4.50";

    let Some((date_str, rest)) = args.trim().split_once(' ') else {
        return Err(USAGE.into());
    };
    let Some((description, amount_str)) = rest.trim().rsplit_once(' ') else {
        return Err(USAGE.into());
    };

    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date: {date_str}. Use YYYY-MM-DD"))?;
    let amount = Decimal::from_str(amount_str.trim_start_matches('$'))
        .map_err(|_| format!("Invalid amount: {amount_str}"))?;
    let description = description.trim();
    if description.is_empty() {
        return Err(USAGE.into());
    }

    Ok((date, description.to_string(), amount))
}

fn refresh_after_transaction_change(app: &mut App, store: &Store) {
    app.refresh_transactions(store);
    app.refresh_dashboard(store);
    app.refresh_budgets(store);
}

fn require_transaction_screen(app: &mut App) -> bool {
    if app.screen != Screen::Transactions || app.transactions.is_empty() {
        app.set_status("Navigate to Transactions and select one first");
        return false;
    }
    true
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    app.refresh_dashboard(store);
    Ok(())
}

fn cmd_transactions(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Transactions;
    app.refresh_transactions(store);
    Ok(())
}

fn cmd_budgets(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Budgets;
    app.refresh_budgets(store);
    Ok(())
}

fn cmd_categories(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Categories;
    app.refresh_categories(store);
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_month(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if args.is_empty() {
        let current = Month::current();
        app.set_month(current, store);
        app.set_status(format!("Switched to month: {current}"));
        return Ok(());
    }

    // Accept "2023-04" or a bare month number within the selected month's year
    let candidate = if args.len() <= 2 {
        format!("{}-{args:0>2}", app.month.year())
    } else {
        args.to_string()
    };

    match candidate.parse::<Month>() {
        Ok(month) => {
            app.set_month(month, store);
            app.set_status(format!("Switched to month: {month}"));
        }
        Err(_) => app.set_status("Invalid month format. Use YYYY-MM (e.g. 2023-04)"),
    }

    Ok(())
}

fn cmd_next_month(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    advance_month(app, store, 1);
    Ok(())
}

fn cmd_prev_month(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    advance_month(app, store, -1);
    Ok(())
}

fn advance_month(app: &mut App, store: &Store, delta: i32) {
    let next = if delta > 0 {
        app.month.next()
    } else {
        app.month.prev()
    };
    if let Some(month) = next {
        app.set_month(month, store);
        app.set_status(format!("Month: {month}"));
    }
}

fn cmd_search(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.search_input = args.to_string();
    app.screen = Screen::Transactions;
    app.transaction_index = 0;
    app.transaction_scroll = 0;
    app.refresh_transactions(store);

    if args.is_empty() {
        app.set_status("Search cleared");
    } else {
        app.set_status(format!("Searching: {args}"));
    }

    Ok(())
}

fn cmd_add_txn(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let (date, description, amount) = match parse_txn_args(args) {
        Ok(parts) => parts,
        Err(msg) => {
            app.set_status(format!(":add-txn {msg}"));
            return Ok(());
        }
    };

    match store.add_transaction(TransactionDraft::new(date, description.clone(), amount)) {
        Ok(_) => {
            refresh_after_transaction_change(app, store);
            app.set_status(format!(
                "Added transaction: {description} {}",
                super::util::format_amount(amount)
            ));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_edit_txn(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if !require_transaction_screen(app) {
        return Ok(());
    }
    let (date, description, amount) = match parse_txn_args(args) {
        Ok(parts) => parts,
        Err(msg) => {
            app.set_status(format!(":edit-txn {msg}"));
            return Ok(());
        }
    };
    let Some(txn) = app.selected_transaction() else {
        return Ok(());
    };
    let id = txn.id.clone();
    let mut draft = TransactionDraft::new(date, description.clone(), amount);
    draft.category = txn.category.clone();

    match store.update_transaction(&id, draft) {
        Ok(()) => {
            refresh_after_transaction_change(app, store);
            app.set_status(format!("Updated transaction: {description}"));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_rename(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if !require_transaction_screen(app) {
        return Ok(());
    }

    if args.is_empty() {
        app.begin_rename();
        return Ok(());
    }

    let Some(id) = app.selected_transaction().map(|t| t.id.clone()) else {
        return Ok(());
    };
    match store.rename_transaction(&id, args) {
        Ok(()) => {
            refresh_after_transaction_change(app, store);
            app.set_status(format!("Renamed transaction to: {args}"));
        }
        Err(e) => app.set_status(e.to_string()),
    }

    Ok(())
}

fn cmd_recat(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if !require_transaction_screen(app) {
        return Ok(());
    }

    if args.is_empty() {
        app.set_status("Usage: :recat <category_name>, or :recat none to clear");
        return Ok(());
    }

    let Some(id) = app.selected_transaction().map(|t| t.id.clone()) else {
        return Ok(());
    };

    let category = if args.eq_ignore_ascii_case("none") {
        None
    } else {
        match store.category_by_name(args) {
            Some(cat) => Some(cat.name.clone()),
            None => {
                app.set_status(format!("Category '{args}' not found"));
                return Ok(());
            }
        }
    };

    let label = category.clone().unwrap_or_else(|| "no category".into());
    match store.set_transaction_category(&id, category) {
        Ok(()) => {
            refresh_after_transaction_change(app, store);
            app.set_status(format!("Categorized as: {label}"));
        }
        Err(e) => app.set_status(e.to_string()),
    }

    Ok(())
}

fn cmd_delete_txn(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    if !require_transaction_screen(app) {
        return Ok(());
    }

    if let Some(txn) = app.selected_transaction() {
        let id = txn.id.clone();
        let desc = txn.description.clone();
        app.confirm_message = format!("Delete '{desc}'?");
        app.pending_action = Some(PendingAction::DeleteTransaction {
            id,
            description: desc,
        });
        app.input_mode = InputMode::Confirm;
    }

    Ok(())
}

fn cmd_budget(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :budget <category_name> <amount>. Example: :budget Food 400");
        return Ok(());
    }

    // Last token is the amount, everything before is the category name
    let Some((category_name, amount_str)) = args.rsplit_once(' ') else {
        app.set_status("Usage: :budget <category_name> <amount>");
        return Ok(());
    };

    let amount = match Decimal::from_str(amount_str.trim_start_matches('$')) {
        Ok(a) => a,
        Err(_) => {
            app.set_status(format!("Invalid amount: {amount_str}"));
            return Ok(());
        }
    };

    let Some(category) = store.category_by_name(category_name).cloned() else {
        app.set_status(format!("Category '{category_name}' not found"));
        return Ok(());
    };

    let month = app.month;
    match store.upsert_budget(&category.id, month, amount) {
        Ok(_) => {
            app.refresh_budgets(store);
            app.refresh_dashboard(store);
            app.screen = Screen::Budgets;
            app.set_status(format!(
                "Budget set: {} = {} for {month}",
                category.name,
                super::util::format_amount(amount)
            ));
        }
        Err(e) => app.set_status(e.to_string()),
    }

    Ok(())
}

fn cmd_delete_budget(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    if app.screen != Screen::Budgets {
        app.set_status("Navigate to Budgets and select one first");
        return Ok(());
    }

    let Some(row) = app.selected_budget_row() else {
        app.set_status("No budgets to delete");
        return Ok(());
    };
    let Some(id) = row.budget_id.clone() else {
        let name = row.summary.category.clone();
        app.set_status(format!("{name} has no budget for {}", app.month));
        return Ok(());
    };

    let name = row.summary.category.clone();
    app.confirm_message = format!("Delete {} budget for '{name}'?", app.month);
    app.pending_action = Some(PendingAction::DeleteBudget { id, name });
    app.input_mode = InputMode::Confirm;

    Ok(())
}

fn cmd_export(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let path = if args.is_empty() {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/findash-export-{}.csv", app.month)
    } else {
        crate::run::shellexpand(args)
    };

    match crate::import::export_to_csv(Path::new(&path), store.transactions(), Some(app.month)) {
        Ok(0) => app.set_status(format!("No transactions for {}", app.month)),
        Ok(count) => app.set_status(format!("Exported {count} transactions to {path}")),
        Err(e) => app.set_status(format!("Export failed: {e:#}")),
    }
    Ok(())
}

fn cmd_load(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :load <file.csv>");
        return Ok(());
    }

    let path = crate::run::shellexpand(args);
    match crate::import::CsvImporter::load(Path::new(&path)) {
        Ok(txns) => {
            let count = txns.len();
            store.replace_transactions(txns);
            app.transaction_index = 0;
            app.transaction_scroll = 0;
            app.refresh_all(store);
            app.set_status(format!("Loaded {count} transactions from {path}"));
        }
        Err(e) => {
            tracing::warn!(%path, error = %e, "CSV load failed");
            app.set_status(format!("Error loading file: {e:#}"));
        }
    }
    Ok(())
}

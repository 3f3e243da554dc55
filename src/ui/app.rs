use rust_decimal::Decimal;

use crate::engine::{
    self, Alerts, CategorySpend, CategorySummary, ComparisonPoint, MonthlyExpense, Totals,
};
use crate::models::*;
use crate::store::Store;

/// Months shown in the dashboard's expense chart.
pub(crate) const CHART_MONTHS: usize = 12;
/// Rows in the dashboard's recent activity panel.
pub(crate) const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Transactions,
    Budgets,
    Categories,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[
            Self::Dashboard,
            Self::Transactions,
            Self::Budgets,
            Self::Categories,
        ]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Transactions => write!(f, "Transactions"),
            Self::Budgets => write!(f, "Budgets"),
            Self::Categories => write!(f, "Categories"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Search,
    Editing,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Search => write!(f, "SEARCH"),
            Self::Editing => write!(f, "EDIT"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PendingAction {
    DeleteTransaction { id: String, description: String },
    DeleteBudget { id: String, name: String },
}

/// What the inline editor writes back to on Enter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EditTarget {
    Description { id: String },
    BudgetAmount { category_id: String, name: String },
}

/// One line of the budget manager: every category, budgeted or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BudgetRow {
    pub(crate) category_id: String,
    pub(crate) budget_id: Option<String>,
    pub(crate) summary: CategorySummary,
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) search_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    /// Reference month for budgets, insights and the chart window.
    pub(crate) month: Month,

    // Dashboard
    pub(crate) totals: Totals,
    pub(crate) alerts: Alerts,
    pub(crate) comparison: Vec<ComparisonPoint>,
    pub(crate) spending: Vec<CategorySpend>,
    pub(crate) monthly: Vec<MonthlyExpense>,
    pub(crate) recent: Vec<Transaction>,

    // Transactions
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,
    pub(crate) transaction_count: usize,
    pub(crate) income_count: usize,
    pub(crate) expense_count: usize,

    // Budgets
    pub(crate) budget_rows: Vec<BudgetRow>,
    pub(crate) budget_index: usize,

    // Categories
    pub(crate) categories: Vec<Category>,
    pub(crate) category_index: usize,

    // Confirmation and inline editing
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,
    pub(crate) edit_target: Option<EditTarget>,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(month: Month) -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            search_input: String::new(),
            status_message: String::new(),
            show_help: false,
            month,

            totals: Totals::default(),
            alerts: Alerts::default(),
            comparison: Vec::new(),
            spending: Vec::new(),
            monthly: Vec::new(),
            recent: Vec::new(),

            transactions: Vec::new(),
            transaction_index: 0,
            transaction_scroll: 0,
            transaction_count: 0,
            income_count: 0,
            expense_count: 0,

            budget_rows: Vec::new(),
            budget_index: 0,

            categories: Vec::new(),
            category_index: 0,

            pending_action: None,
            confirm_message: String::new(),
            edit_target: None,

            visible_rows: 20,
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    pub(crate) fn refresh_all(&mut self, store: &Store) {
        self.refresh_dashboard(store);
        self.refresh_transactions(store);
        self.refresh_budgets(store);
        self.refresh_categories(store);
    }

    pub(crate) fn refresh_dashboard(&mut self, store: &Store) {
        let txns = store.transactions();
        let summaries = self.summaries(store);

        self.totals = engine::summarize_totals(txns);
        self.alerts = engine::partition_alerts(&summaries);
        self.comparison = engine::visible_comparison_series(&summaries);
        self.spending = engine::spending_by_category(txns, store.categories());
        self.monthly = engine::monthly_expenses(txns, self.month, CHART_MONTHS);
        self.recent = engine::recent_transactions(txns, RECENT_LIMIT)
            .into_iter()
            .cloned()
            .collect();
        self.transaction_count = txns.len();
        self.income_count = txns.iter().filter(|t| t.is_income()).count();
        self.expense_count = txns.iter().filter(|t| t.is_expense()).count();
    }

    /// Reload the transaction table, applying the live search filter. Newest first.
    pub(crate) fn refresh_transactions(&mut self, store: &Store) {
        let mut txns: Vec<Transaction> = store
            .search(&self.search_input)
            .into_iter()
            .cloned()
            .collect();
        txns.sort_by(|a, b| b.date.cmp(&a.date));
        self.transactions = txns;
        self.transaction_count = store.transactions().len();

        if self.transaction_index >= self.transactions.len() {
            self.transaction_index = self.transactions.len().saturating_sub(1);
        }
        if self.transaction_scroll > self.transaction_index {
            self.transaction_scroll = self.transaction_index;
        }
    }

    pub(crate) fn refresh_budgets(&mut self, store: &Store) {
        let summaries = self.summaries(store);
        self.budget_rows = store
            .categories()
            .iter()
            .zip(summaries)
            .map(|(category, summary)| BudgetRow {
                category_id: category.id.clone(),
                budget_id: store
                    .budget_for(&category.id, self.month)
                    .map(|b| b.id.clone()),
                summary,
            })
            .collect();

        if self.budget_index >= self.budget_rows.len() {
            self.budget_index = self.budget_rows.len().saturating_sub(1);
        }
    }

    pub(crate) fn refresh_categories(&mut self, store: &Store) {
        self.categories = store.categories().to_vec();
        if self.category_index >= self.categories.len() {
            self.category_index = self.categories.len().saturating_sub(1);
        }
    }

    fn summaries(&self, store: &Store) -> Vec<CategorySummary> {
        engine::summarize_categories(
            store.transactions(),
            &store.budgets_for(self.month),
            store.categories(),
            self.month,
        )
    }

    /// Switch the reference month and recompute everything keyed on it.
    pub(crate) fn set_month(&mut self, month: Month, store: &Store) {
        self.month = month;
        self.refresh_dashboard(store);
        self.refresh_budgets(store);
    }

    pub(crate) fn selected_transaction(&self) -> Option<&Transaction> {
        self.transactions.get(self.transaction_index)
    }

    pub(crate) fn selected_budget_row(&self) -> Option<&BudgetRow> {
        self.budget_rows.get(self.budget_index)
    }

    /// Start the inline editor on the selected budget row, pre-filled with its amount.
    pub(crate) fn begin_budget_edit(&mut self) {
        let Some(row) = self.selected_budget_row() else {
            self.set_status("No category selected");
            return;
        };
        let target = EditTarget::BudgetAmount {
            category_id: row.category_id.clone(),
            name: row.summary.category.clone(),
        };
        let current = if row.summary.budget > Decimal::ZERO {
            row.summary.budget.to_string()
        } else {
            String::new()
        };
        let name = row.summary.category.clone();
        self.command_input = current;
        self.edit_target = Some(target);
        self.input_mode = InputMode::Editing;
        self.set_status(format!(
            "Budget for {name} in {}: type an amount, Enter to save",
            self.month
        ));
    }

    pub(crate) fn begin_rename(&mut self) {
        let Some(txn) = self.selected_transaction() else {
            self.set_status("No transaction selected");
            return;
        };
        let target = EditTarget::Description { id: txn.id.clone() };
        let description = txn.description.clone();
        self.command_input = description;
        self.edit_target = Some(target);
        self.input_mode = InputMode::Editing;
        self.set_status("Type new name, press Enter to confirm");
    }

    /// Apply the inline editor's buffer to its target. Input errors become status messages.
    pub(crate) fn commit_edit(&mut self, store: &mut Store) {
        let input = std::mem::take(&mut self.command_input);
        self.input_mode = InputMode::Normal;
        let Some(target) = self.edit_target.take() else {
            return;
        };

        match target {
            EditTarget::Description { id } => match store.rename_transaction(&id, &input) {
                Ok(()) => {
                    self.refresh_transactions(store);
                    self.refresh_dashboard(store);
                    self.set_status(format!("Renamed to: {}", input.trim()));
                }
                Err(e) => self.set_status(e.to_string()),
            },
            EditTarget::BudgetAmount { category_id, name } => {
                let amount = match input.trim().trim_start_matches('$').parse::<Decimal>() {
                    Ok(a) => a,
                    Err(_) => {
                        self.set_status(format!("Invalid amount: {}", input.trim()));
                        return;
                    }
                };
                match store.upsert_budget(&category_id, self.month, amount) {
                    Ok(_) => {
                        self.refresh_budgets(store);
                        self.refresh_dashboard(store);
                        self.set_status(format!(
                            "Budget set: {name} = {} for {}",
                            crate::ui::util::format_amount(amount),
                            self.month
                        ));
                    }
                    Err(e) => self.set_status(e.to_string()),
                }
            }
        }
    }

    pub(crate) fn cancel_edit(&mut self) {
        self.command_input.clear();
        self.edit_target = None;
        self.input_mode = InputMode::Normal;
        self.set_status("Edit cancelled");
    }

    /// Run the confirmed pending action.
    pub(crate) fn confirm_pending(&mut self, store: &mut Store) {
        if let Some(action) = self.pending_action.take() {
            match action {
                PendingAction::DeleteTransaction { id, description } => {
                    match store.delete_transaction(&id) {
                        Ok(_) => {
                            self.refresh_transactions(store);
                            self.refresh_dashboard(store);
                            self.refresh_budgets(store);
                            self.set_status(format!("Deleted: {description}"));
                        }
                        Err(e) => self.set_status(e.to_string()),
                    }
                }
                PendingAction::DeleteBudget { id, name } => match store.delete_budget(&id) {
                    Ok(_) => {
                        self.refresh_budgets(store);
                        self.refresh_dashboard(store);
                        self.set_status(format!("Deleted budget: {name}"));
                    }
                    Err(e) => self.set_status(e.to_string()),
                },
            }
        }
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();
    }

    pub(crate) fn cancel_pending(&mut self) {
        self.pending_action = None;
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();
        self.set_status("Cancelled");
    }
}

//! Pure aggregation over transactions, budgets and categories.
//!
//! Nothing here owns state: every function borrows its inputs and rebuilds its
//! output from scratch, so repeated calls with the same slices are identical.

mod budget;
mod dashboard;

pub use budget::{
    build_comparison_series, partition_alerts, summarize_categories, visible_comparison_series,
    Alerts, CategorySummary, ComparisonPoint,
};
pub use dashboard::{
    highest_month, monthly_expenses, recent_transactions, spending_by_category, summarize_totals,
    CategorySpend, MonthlyExpense, Totals,
};

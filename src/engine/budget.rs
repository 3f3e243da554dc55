use rust_decimal::Decimal;

use crate::models::{Budget, Category, Month, Transaction};

/// Per-category spending against its budget for one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: String,
    pub color: String,
    pub spent: Decimal,
    /// Zero when the category has no budget.
    pub budget: Decimal,
    pub percentage_used: Decimal,
    pub remaining: Decimal,
}

impl CategorySummary {
    fn new(category: &Category, spent: Decimal, budget: Decimal) -> Self {
        let percentage_used = if budget > Decimal::ZERO {
            percentage_of(spent, budget)
        } else {
            Decimal::ZERO
        };
        Self {
            category: category.name.clone(),
            color: category.color.clone(),
            spent,
            budget,
            percentage_used,
            remaining: (budget - spent).max(Decimal::ZERO),
        }
    }

    pub fn has_budget(&self) -> bool {
        self.budget > Decimal::ZERO
    }

    pub fn is_over_budget(&self) -> bool {
        self.has_budget() && self.percentage_used > Decimal::from(90)
    }

    pub fn is_under_utilized(&self) -> bool {
        self.has_budget() && self.percentage_used < Decimal::from(20)
    }
}

/// `spent / budget * 100`, saturating at `Decimal::MAX` when the ratio
/// overflows (a tiny budget against a large spend).
fn percentage_of(spent: Decimal, budget: Decimal) -> Decimal {
    spent
        .checked_div(budget)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::MAX)
}

/// Summarize every category for `month`, in input order.
///
/// The budget is the first entry whose `category_id` matches; the caller
/// decides which budgets to hand in. Spending joins on the exact category
/// name and counts only expenses dated inside `month`.
pub fn summarize_categories(
    transactions: &[Transaction],
    budgets: &[Budget],
    categories: &[Category],
    month: Month,
) -> Vec<CategorySummary> {
    categories
        .iter()
        .map(|category| {
            let budget = Budget::find_for_category(budgets, &category.id)
                .map(|b| b.amount)
                .unwrap_or(Decimal::ZERO);
            let spent = transactions
                .iter()
                .filter(|t| {
                    t.category_name() == Some(category.name.as_str())
                        && month.contains(t.date)
                        && t.is_expense()
                })
                .map(Transaction::abs_amount)
                .fold(Decimal::ZERO, Decimal::saturating_add);
            CategorySummary::new(category, spent, budget)
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alerts {
    /// More than 90% of the budget used.
    pub over_budget: Vec<CategorySummary>,
    /// Less than 20% of the budget used.
    pub under_utilized: Vec<CategorySummary>,
}

impl Alerts {
    pub fn is_empty(&self) -> bool {
        self.over_budget.is_empty() && self.under_utilized.is_empty()
    }
}

pub fn partition_alerts(summaries: &[CategorySummary]) -> Alerts {
    Alerts {
        over_budget: summaries
            .iter()
            .filter(|s| s.is_over_budget())
            .cloned()
            .collect(),
        under_utilized: summaries
            .iter()
            .filter(|s| s.is_under_utilized())
            .cloned()
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonPoint {
    pub name: String,
    pub budget: Decimal,
    pub spent: Decimal,
}

pub fn build_comparison_series(summaries: &[CategorySummary]) -> Vec<ComparisonPoint> {
    summaries
        .iter()
        .map(|s| ComparisonPoint {
            name: s.category.clone(),
            budget: s.budget,
            spent: s.spent,
        })
        .collect()
}

/// The comparison series without categories that have neither a budget nor spending.
pub fn visible_comparison_series(summaries: &[CategorySummary]) -> Vec<ComparisonPoint> {
    build_comparison_series(summaries)
        .into_iter()
        .filter(|p| p.budget > Decimal::ZERO || p.spent > Decimal::ZERO)
        .collect()
}

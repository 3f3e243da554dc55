use rust_decimal::Decimal;

use crate::models::{Category, Month, Transaction};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub income: Decimal,
    /// Sum of expense magnitudes, always non-negative.
    pub expenses: Decimal,
    pub balance: Decimal,
    /// The share of the balance offered as spendable: 60%.
    pub available: Decimal,
}

pub fn summarize_totals(transactions: &[Transaction]) -> Totals {
    let income: Decimal = transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();
    let expenses: Decimal = transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(Transaction::abs_amount)
        .sum();
    let balance = income - expenses;
    Totals {
        income,
        expenses,
        balance,
        available: balance * Decimal::new(6, 1),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpend {
    pub name: String,
    pub total: Decimal,
    /// `None` when the label matches no known category.
    pub color: Option<String>,
}

/// All-time expense totals per category label, in first-seen order.
pub fn spending_by_category(
    transactions: &[Transaction],
    categories: &[Category],
) -> Vec<CategorySpend> {
    let mut spends: Vec<CategorySpend> = Vec::new();
    for txn in transactions.iter().filter(|t| t.is_expense()) {
        let Some(name) = txn.category_name() else {
            continue;
        };
        match spends.iter_mut().find(|s| s.name == name) {
            Some(spend) => spend.total += txn.abs_amount(),
            None => spends.push(CategorySpend {
                name: name.to_string(),
                total: txn.abs_amount(),
                color: Category::find_exact(categories, name).map(|c| c.color.clone()),
            }),
        }
    }
    spends
}

/// Newest first; transactions on the same date keep their input order.
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyExpense {
    pub month: Month,
    pub amount: Decimal,
}

/// Expense totals for the `months` consecutive months ending at `end`, oldest first.
pub fn monthly_expenses(
    transactions: &[Transaction],
    end: Month,
    months: usize,
) -> Vec<MonthlyExpense> {
    let mut window = Vec::with_capacity(months);
    let mut cursor = Some(end);
    while window.len() < months {
        let Some(month) = cursor else {
            break;
        };
        window.push(month);
        cursor = month.prev();
    }
    window.reverse();

    window
        .into_iter()
        .map(|month| MonthlyExpense {
            month,
            amount: transactions
                .iter()
                .filter(|t| t.is_expense() && month.contains(t.date))
                .map(Transaction::abs_amount)
                .sum(),
        })
        .collect()
}

/// The month with the largest expense total; the earliest wins a tie.
pub fn highest_month(series: &[MonthlyExpense]) -> Option<&MonthlyExpense> {
    series.iter().fold(None, |best, current| match best {
        Some(b) if b.amount >= current.amount => Some(b),
        _ => Some(current),
    })
}

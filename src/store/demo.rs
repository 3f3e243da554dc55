use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Budget, Month, Transaction};

fn demo_txn(id: &str, description: &str, amount: i64, day: u32, category: &str) -> Option<Transaction> {
    Some(Transaction {
        id: id.to_string(),
        amount: Decimal::from(amount),
        date: NaiveDate::from_ymd_opt(2023, 4, day)?,
        description: description.to_string(),
        category: Some(category.to_string()),
    })
}

pub(super) fn transactions() -> Vec<Transaction> {
    [
        demo_txn("1", "Salary", 3000, 1, "Other"),
        demo_txn("2", "Rent", -1200, 5, "Housing"),
        demo_txn("3", "Groceries", -150, 10, "Food"),
        demo_txn("4", "Freelance Work", 500, 15, "Other"),
        demo_txn("5", "Utilities", -200, 20, "Utilities"),
        demo_txn("6", "Dining Out", -80, 25, "Food"),
        demo_txn("7", "Side Project", 300, 28, "Other"),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub(super) fn budgets() -> Vec<Budget> {
    let Some(april) = Month::new(2023, 4) else {
        return Vec::new();
    };
    [("1", 400), ("5", 1200), ("6", 250), ("2", 150), ("4", 200)]
        .into_iter()
        .map(|(category_id, amount)| {
            Budget::new(
                format!("budget-{category_id}"),
                category_id.to_string(),
                april,
                Decimal::from(amount),
            )
        })
        .collect()
}

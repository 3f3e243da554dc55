#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;

fn april() -> Month {
    "2023-04".parse().unwrap()
}

fn draft(description: &str, amount: Decimal) -> TransactionDraft {
    TransactionDraft::new(
        NaiveDate::from_ymd_opt(2023, 4, 12).unwrap(),
        description,
        amount,
    )
}

// ── Seed data ─────────────────────────────────────────────────

#[test]
fn test_new_store_has_default_categories_only() {
    let store = Store::new();
    assert_eq!(store.categories().len(), 10);
    assert!(store.transactions().is_empty());
    assert!(store.budgets().is_empty());
}

#[test]
fn test_demo_data_seeded() {
    let store = Store::with_demo_data();
    assert_eq!(store.transactions().len(), 7);
    assert_eq!(store.budgets().len(), 5);
    assert!(store.transactions().iter().any(|t| t.description == "Salary"));
    assert!(store.budgets().iter().all(|b| b.month == april()));
}

// ── Transaction CRUD ──────────────────────────────────────────

#[test]
fn test_add_transaction_assigns_unique_ids() {
    let mut store = Store::new();
    let a = store.add_transaction(draft("Coffee", dec!(-4.50))).unwrap();
    let b = store.add_transaction(draft("Coffee", dec!(-4.50))).unwrap();
    assert_ne!(a, b);
    assert_eq!(store.transactions().len(), 2);
    assert_eq!(store.transaction(&a).unwrap().amount, dec!(-4.50));
}

#[test]
fn test_add_transaction_rejects_empty_description() {
    let mut store = Store::new();
    let err = store.add_transaction(draft("   ", dec!(-1))).unwrap_err();
    assert_eq!(err, StoreError::EmptyDescription);
    assert!(store.transactions().is_empty());
}

#[test]
fn test_update_transaction_replaces_by_id() {
    let mut store = Store::with_demo_data();
    let updated = draft("Big Groceries", dec!(-175)).with_category("Food");
    store.update_transaction("3", updated).unwrap();

    let txn = store.transaction("3").unwrap();
    assert_eq!(txn.description, "Big Groceries");
    assert_eq!(txn.amount, dec!(-175));
    assert_eq!(txn.id, "3");
    // Position is preserved
    assert_eq!(store.transactions()[2].id, "3");
}

#[test]
fn test_update_missing_transaction() {
    let mut store = Store::new();
    let err = store.update_transaction("nope", draft("x", dec!(1))).unwrap_err();
    assert_eq!(err, StoreError::TransactionNotFound("nope".into()));
}

#[test]
fn test_delete_transaction() {
    let mut store = Store::with_demo_data();
    let removed = store.delete_transaction("2").unwrap();
    assert_eq!(removed.description, "Rent");
    assert_eq!(store.transactions().len(), 6);
    assert!(store.transaction("2").is_none());
    assert!(store.delete_transaction("2").is_err());
}

#[test]
fn test_rename_and_recategorize() {
    let mut store = Store::with_demo_data();
    store.rename_transaction("6", "  Pizza  ").unwrap();
    store.set_transaction_category("6", None).unwrap();
    let txn = store.transaction("6").unwrap();
    assert_eq!(txn.description, "Pizza");
    assert!(txn.category.is_none());
    assert_eq!(
        store.rename_transaction("6", ""),
        Err(StoreError::EmptyDescription)
    );
}

#[test]
fn test_search_is_case_insensitive() {
    let store = Store::with_demo_data();
    let hits = store.search("SAL");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].description, "Salary");
    assert_eq!(store.search("").len(), 7);
    assert!(store.search("zzz").is_empty());
}

#[test]
fn test_replace_transactions() {
    let mut store = Store::with_demo_data();
    store.replace_transactions(Vec::new());
    assert!(store.transactions().is_empty());
}

// ── Budgets ───────────────────────────────────────────────────

#[test]
fn test_upsert_budget_creates_then_updates() {
    let mut store = Store::new();
    let id = store.upsert_budget("1", april(), dec!(200)).unwrap();
    let same = store.upsert_budget("1", april(), dec!(250)).unwrap();
    assert_eq!(id, same);
    assert_eq!(store.budgets().len(), 1);
    assert_eq!(store.budget_for("1", april()).unwrap().amount, dec!(250));
}

#[test]
fn test_upsert_budget_is_unique_per_category_and_month() {
    let mut store = Store::new();
    let may: Month = "2023-05".parse().unwrap();
    store.upsert_budget("1", april(), dec!(200)).unwrap();
    store.upsert_budget("1", may, dec!(300)).unwrap();
    store.upsert_budget("2", april(), dec!(50)).unwrap();
    store.upsert_budget("1", april(), dec!(210)).unwrap();

    assert_eq!(store.budgets().len(), 3);
    for budget in store.budgets() {
        let dupes = store
            .budgets()
            .iter()
            .filter(|b| b.category_id == budget.category_id && b.month == budget.month)
            .count();
        assert_eq!(dupes, 1);
    }
    assert_eq!(store.budgets_for(april()).len(), 2);
    assert_eq!(store.budgets_for(may).len(), 1);
}

#[test]
fn test_upsert_budget_rejects_negative() {
    let mut store = Store::new();
    let err = store.upsert_budget("1", april(), dec!(-5)).unwrap_err();
    assert_eq!(err, StoreError::NegativeBudget(dec!(-5)));
    assert!(store.budgets().is_empty());
}

#[test]
fn test_upsert_budget_allows_zero() {
    let mut store = Store::new();
    store.upsert_budget("1", april(), Decimal::ZERO).unwrap();
    assert_eq!(store.budget_for("1", april()).unwrap().amount, Decimal::ZERO);
}

#[test]
fn test_upsert_budget_rejects_unknown_category() {
    let mut store = Store::new();
    let err = store.upsert_budget("42", april(), dec!(5)).unwrap_err();
    assert_eq!(err, StoreError::UnknownCategory("42".into()));
}

#[test]
fn test_delete_budget() {
    let mut store = Store::with_demo_data();
    let removed = store.delete_budget("budget-1").unwrap();
    assert_eq!(removed.category_id, "1");
    assert!(store.budget_for("1", april()).is_none());
    assert_eq!(
        store.delete_budget("budget-1"),
        Err(StoreError::BudgetNotFound("budget-1".into()))
    );
}

// ── Categories ────────────────────────────────────────────────

#[test]
fn test_category_lookup() {
    let store = Store::new();
    assert_eq!(store.category_by_name(" housing ").unwrap().id, "5");
    assert_eq!(store.category_by_id("10").unwrap().name, "Other");
    assert!(store.category_by_name("Pets").is_none());
}

// ── Engine over the store ─────────────────────────────────────

#[test]
fn test_demo_summary_against_month_budgets() {
    let store = Store::with_demo_data();
    let budgets = store.budgets_for(april());
    let summaries = crate::engine::summarize_categories(
        store.transactions(),
        &budgets,
        store.categories(),
        april(),
    );
    let food = summaries.iter().find(|s| s.category == "Food").unwrap();
    assert_eq!(food.spent, dec!(230));
    assert_eq!(food.budget, dec!(400));
    assert_eq!(food.percentage_used, dec!(57.5));

    let alerts = crate::engine::partition_alerts(&summaries);
    let over: Vec<&str> = alerts.over_budget.iter().map(|s| s.category.as_str()).collect();
    let under: Vec<&str> = alerts.under_utilized.iter().map(|s| s.category.as_str()).collect();
    assert_eq!(over, vec!["Housing"]);
    assert_eq!(under, vec!["Transport", "Entertainment"]);
}

#[test]
fn test_tiny_budget_does_not_break_summaries() {
    let mut store = Store::new();
    store
        .upsert_budget("1", april(), Decimal::new(1, 28))
        .unwrap();
    store
        .add_transaction(draft("Snack", dec!(-5)).with_category("Food"))
        .unwrap();

    let budgets = store.budgets_for(april());
    let summaries = crate::engine::summarize_categories(
        store.transactions(),
        &budgets,
        store.categories(),
        april(),
    );
    let food = summaries.iter().find(|s| s.category == "Food").unwrap();
    assert_eq!(food.spent, dec!(5));
    assert_eq!(food.percentage_used, Decimal::MAX);
    assert!(food.is_over_budget());
}

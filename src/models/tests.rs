#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── Transaction ───────────────────────────────────────────────

fn make_txn(amount: Decimal) -> Transaction {
    Transaction {
        id: "t1".into(),
        amount,
        date: date(2024, 1, 15),
        description: "Test".into(),
        category: None,
    }
}

#[test]
fn test_income() {
    let txn = make_txn(dec!(100.00));
    assert!(txn.is_income());
    assert!(!txn.is_expense());
}

#[test]
fn test_expense() {
    let txn = make_txn(dec!(-50.00));
    assert!(!txn.is_income());
    assert!(txn.is_expense());
}

#[test]
fn test_zero_is_neither() {
    let txn = make_txn(Decimal::ZERO);
    assert!(!txn.is_income());
    assert!(!txn.is_expense());
}

#[test]
fn test_abs_amount() {
    assert_eq!(make_txn(dec!(-42.99)).abs_amount(), dec!(42.99));
    assert_eq!(make_txn(dec!(42.99)).abs_amount(), dec!(42.99));
    assert_eq!(make_txn(Decimal::ZERO).abs_amount(), Decimal::ZERO);
}

#[test]
fn test_from_draft_keeps_fields() {
    let draft = TransactionDraft::new(date(2023, 4, 10), "Groceries", dec!(-150)).with_category("Food");
    let txn = Transaction::from_draft("abc".into(), draft.clone());
    assert_eq!(txn.id, "abc");
    assert_eq!(txn.category_name(), Some("Food"));
    assert_eq!(TransactionDraft::from(&txn), draft);
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_default_categories() {
    let cats = default_categories();
    assert_eq!(cats.len(), 10);
    assert_eq!(cats[0].name, "Food");
    assert_eq!(cats[0].color, "#ff6b45");
    assert_eq!(cats[9].name, "Other");
    assert_eq!(cats[9].icon, "ellipsis-h");
}

#[test]
fn test_category_find_by_name_is_case_insensitive() {
    let cats = default_categories();
    assert_eq!(Category::find_by_name(&cats, "food").unwrap().id, "1");
    assert!(Category::find_exact(&cats, "food").is_none());
    assert_eq!(Category::find_exact(&cats, "Food").unwrap().id, "1");
}

#[test]
fn test_category_find_by_id() {
    let cats = default_categories();
    assert_eq!(Category::find_by_id(&cats, "5").unwrap().name, "Housing");
    assert!(Category::find_by_id(&cats, "99").is_none());
}

#[test]
fn test_category_display() {
    let cat = Category::new("1", "Groceries", "cart", "#000000");
    assert_eq!(format!("{cat}"), "Groceries");
}

// ── Budget ────────────────────────────────────────────────────

#[test]
fn test_budget_find_first_match_wins() {
    let april: Month = "2023-04".parse().unwrap();
    let may: Month = "2023-05".parse().unwrap();
    let budgets = vec![
        Budget::new("b1".into(), "1".into(), april, dec!(200)),
        Budget::new("b2".into(), "1".into(), may, dec!(300)),
    ];
    assert_eq!(Budget::find_for_category(&budgets, "1").unwrap().id, "b1");
    assert!(Budget::find_for_category(&budgets, "2").is_none());
}

// ── Month ─────────────────────────────────────────────────────

#[test]
fn test_month_parse_and_display() {
    let m: Month = "2023-04".parse().unwrap();
    assert_eq!(m.year(), 2023);
    assert_eq!(m.month(), 4);
    assert_eq!(m.to_string(), "2023-04");
}

#[test]
fn test_month_parse_rejects_garbage() {
    assert!("2023-13".parse::<Month>().is_err());
    assert!("april".parse::<Month>().is_err());
    assert!("".parse::<Month>().is_err());
}

#[test]
fn test_month_contains() {
    let m = Month::new(2023, 4).unwrap();
    assert!(m.contains(date(2023, 4, 1)));
    assert!(m.contains(date(2023, 4, 30)));
    assert!(!m.contains(date(2023, 5, 1)));
    assert!(!m.contains(date(2022, 4, 10)));
}

#[test]
fn test_month_navigation_crosses_years() {
    let dec_2023 = Month::new(2023, 12).unwrap();
    assert_eq!(dec_2023.next().unwrap(), Month::new(2024, 1).unwrap());
    let jan_2024 = Month::new(2024, 1).unwrap();
    assert_eq!(jan_2024.prev().unwrap(), dec_2023);
}

#[test]
fn test_month_ordering() {
    assert!(Month::new(2023, 12).unwrap() < Month::new(2024, 1).unwrap());
    assert!(Month::new(2024, 2).unwrap() > Month::new(2024, 1).unwrap());
}

#[test]
fn test_month_new_rejects_invalid() {
    assert!(Month::new(2024, 0).is_none());
    assert!(Month::new(2024, 13).is_none());
}

#[test]
fn test_month_short_name() {
    assert_eq!(Month::new(2023, 4).unwrap().short_name(), "Apr");
}

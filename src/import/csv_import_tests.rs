#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::Write;

fn make_csv_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|s| s.to_string()).collect()
}

// ── parse_decimal ─────────────────────────────────────────────

#[test]
fn test_parse_decimal_basic() {
    assert_eq!(parse_decimal("100.50").unwrap(), dec!(100.50));
    assert_eq!(parse_decimal("-42.99").unwrap(), dec!(-42.99));
}

#[test]
fn test_parse_decimal_with_currency() {
    assert_eq!(parse_decimal("$1,234.56").unwrap(), dec!(1234.56));
    assert_eq!(parse_decimal("-$99.99").unwrap(), dec!(-99.99));
}

#[test]
fn test_parse_decimal_parentheses_negative() {
    assert_eq!(parse_decimal("(500.00)").unwrap(), dec!(-500.00));
}

#[test]
fn test_parse_decimal_empty() {
    assert_eq!(parse_decimal("").unwrap(), Decimal::ZERO);
    assert_eq!(parse_decimal("  ").unwrap(), Decimal::ZERO);
}

#[test]
fn test_parse_decimal_quoted() {
    assert_eq!(parse_decimal("\"100.00\"").unwrap(), dec!(100.00));
}

#[test]
fn test_parse_decimal_invalid() {
    assert!(parse_decimal("not_a_number").is_err());
}

// ── parse_date ────────────────────────────────────────────────

#[test]
fn test_parse_date_iso_format() {
    assert_eq!(parse_date("2024-01-15").unwrap(), ymd(2024, 1, 15));
}

#[test]
fn test_parse_date_fallback_to_us() {
    assert_eq!(parse_date("01/15/2024").unwrap(), ymd(2024, 1, 15));
}

#[test]
fn test_parse_date_two_digit_year() {
    assert_eq!(parse_date("01/15/24").unwrap(), ymd(2024, 1, 15));
}

#[test]
fn test_parse_date_day_first_and_dashed() {
    assert_eq!(parse_date("15/01/2024").unwrap(), ymd(2024, 1, 15));
    assert_eq!(parse_date("01-15-2024").unwrap(), ymd(2024, 1, 15));
}

#[test]
fn test_parse_date_invalid() {
    assert!(parse_date("not-a-date").is_err());
    assert!(parse_date("").is_err());
}

// ── parse_amount ──────────────────────────────────────────────

#[test]
fn test_parse_amount_default_column() {
    let profile = CsvProfile::default();
    let r = row(&["2024-01-15", "Coffee", "-4.50"]);
    assert_eq!(parse_amount(&r, &profile).unwrap(), dec!(-4.50));
}

#[test]
fn test_parse_amount_parenthesised_negative() {
    let profile = CsvProfile::default();
    let r = row(&["2024-01-15", "Coffee", "($4.50)"]);
    assert_eq!(parse_amount(&r, &profile).unwrap(), dec!(-4.50));
}

// ── CsvProfile::from_headers ──────────────────────────────────

#[test]
fn test_profile_from_named_headers_in_any_order() {
    let headers = row(&["Category", "Amount", "Date", "Description"]);
    let profile = CsvProfile::from_headers(&headers);
    assert_eq!(profile.category_column, Some(0));
    assert_eq!(profile.amount_column, 1);
    assert_eq!(profile.date_column, 2);
    assert_eq!(profile.description_column, 3);
}

#[test]
fn test_profile_without_category_column() {
    let headers = row(&["Date", "Description", "Amount"]);
    let profile = CsvProfile::from_headers(&headers);
    assert_eq!(profile.category_column, None);
}

#[test]
fn test_profile_generic_headers_use_defaults() {
    let headers = row(&["Column 1", "Column 2", "Column 3", "Column 4"]);
    let profile = CsvProfile::from_headers(&headers);
    assert_eq!(profile.date_column, 0);
    assert_eq!(profile.category_column, Some(3));
}

// ── CsvImporter::preview ──────────────────────────────────────

#[test]
fn test_preview_with_headers() {
    let csv = "Date,Description,Amount\n2024-01-15,Coffee,-4.50\n2024-01-16,Lunch,-12.00\n";
    let file = make_csv_file(csv);
    let (headers, rows) = CsvImporter::preview(file.path()).unwrap();
    assert_eq!(headers, vec!["Date", "Description", "Amount"]);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][1], "Coffee");
}

#[test]
fn test_preview_without_headers() {
    let csv = "2024-01-15,Coffee,-4.50,Food\n";
    let file = make_csv_file(csv);
    let (headers, rows) = CsvImporter::preview(file.path()).unwrap();
    assert_eq!(headers[0], "Column 1");
    assert_eq!(rows.len(), 1);
}

#[test]
fn test_preview_empty_file() {
    let file = make_csv_file("");
    assert!(CsvImporter::preview(file.path()).is_err());
}

#[test]
fn test_preview_quoted_fields() {
    let csv = "Date,Description,Amount\n2024-01-15,\"Coffee, Shop\",-4.50\n";
    let file = make_csv_file(csv);
    let (_, rows) = CsvImporter::preview(file.path()).unwrap();
    assert_eq!(rows[0][1], "Coffee, Shop");
}

// ── CsvImporter::parse ────────────────────────────────────────

#[test]
fn test_parse_basic_rows() {
    let profile = CsvProfile::default();
    let rows = vec![
        row(&["2024-01-15", "Coffee", "-4.50", "Food"]),
        row(&["2024-01-16", "Paycheck", "1000", ""]),
    ];
    let txns = CsvImporter::parse(&rows, &profile).unwrap();
    assert_eq!(txns.len(), 2);
    assert_eq!(txns[0].date, ymd(2024, 1, 15));
    assert_eq!(txns[0].description, "Coffee");
    assert_eq!(txns[0].amount, dec!(-4.50));
    assert_eq!(txns[0].category.as_deref(), Some("Food"));
    assert_eq!(txns[1].category, None);
    assert_ne!(txns[0].id, txns[1].id);
}

#[test]
fn test_parse_short_rows_have_no_category() {
    let profile = CsvProfile::default();
    let rows = vec![row(&["2024-01-15", "Coffee", "-4.50"])];
    let txns = CsvImporter::parse(&rows, &profile).unwrap();
    assert_eq!(txns[0].category, None);
}

#[test]
fn test_parse_skips_empty_dates() {
    let profile = CsvProfile::default();
    let rows = vec![
        row(&["2024-01-15", "Coffee", "-4.50"]),
        row(&["", "", ""]),
        row(&["2024-01-16", "Lunch", "-12.00"]),
    ];
    let txns = CsvImporter::parse(&rows, &profile).unwrap();
    assert_eq!(txns.len(), 2);
}

#[test]
fn test_parse_reports_bad_row() {
    let profile = CsvProfile::default();
    let rows = vec![
        row(&["2024-01-15", "Coffee", "-4.50"]),
        row(&["someday", "Lunch", "-12.00"]),
    ];
    let err = CsvImporter::parse(&rows, &profile).unwrap_err();
    assert!(format!("{err}").contains("Row 2"));
}

#[test]
fn test_parse_empty_rows() {
    let rows: Vec<Vec<String>> = vec![];
    assert!(CsvImporter::parse(&rows, &CsvProfile::default())
        .unwrap()
        .is_empty());
}

// ── load / export ─────────────────────────────────────────────

#[test]
fn test_load_maps_headers() {
    let csv = "Description,Date,Amount,Category\nRent,2023-04-05,-1200,Housing\n";
    let file = make_csv_file(csv);
    let txns = CsvImporter::load(file.path()).unwrap();
    assert_eq!(txns.len(), 1);
    assert_eq!(txns[0].description, "Rent");
    assert_eq!(txns[0].date, ymd(2023, 4, 5));
    assert_eq!(txns[0].category.as_deref(), Some("Housing"));
}

#[test]
fn test_export_then_load_preserves_fields() {
    let original = vec![
        Transaction {
            id: "1".into(),
            amount: dec!(-150.25),
            date: ymd(2023, 4, 10),
            description: "Groceries, weekly".into(),
            category: Some("Food".into()),
        },
        Transaction {
            id: "2".into(),
            amount: dec!(3000),
            date: ymd(2023, 4, 1),
            description: "Salary".into(),
            category: None,
        },
    ];
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.csv");

    let count = crate::import::export_to_csv(&path, &original, None).unwrap();
    assert_eq!(count, 2);

    let loaded = CsvImporter::load(&path).unwrap();
    assert_eq!(loaded.len(), 2);
    for (a, b) in original.iter().zip(&loaded) {
        assert_eq!(a.date, b.date);
        assert_eq!(a.description, b.description);
        assert_eq!(a.amount, b.amount);
        assert_eq!(a.category, b.category);
    }
}

#[test]
fn test_export_filters_by_month() {
    let txns = vec![
        Transaction {
            id: "1".into(),
            amount: dec!(-1),
            date: ymd(2023, 4, 10),
            description: "April".into(),
            category: None,
        },
        Transaction {
            id: "2".into(),
            amount: dec!(-1),
            date: ymd(2023, 5, 10),
            description: "May".into(),
            category: None,
        },
    ];
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("april.csv");
    let april = "2023-04".parse().unwrap();
    assert_eq!(crate::import::export_to_csv(&path, &txns, Some(april)).unwrap(), 1);
}

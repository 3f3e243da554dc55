use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::models::Transaction;

#[derive(Debug, Clone)]
pub(crate) struct CsvProfile {
    pub(crate) date_column: usize,
    pub(crate) description_column: usize,
    pub(crate) amount_column: usize,
    pub(crate) category_column: Option<usize>,
}

impl Default for CsvProfile {
    fn default() -> Self {
        Self {
            date_column: 0,
            description_column: 1,
            amount_column: 2,
            category_column: Some(3),
        }
    }
}

impl CsvProfile {
    /// Map columns by header name, falling back to the default layout for any
    /// column that can't be found.
    pub(crate) fn from_headers(headers: &[String]) -> Self {
        let find = |names: &[&str]| {
            headers.iter().position(|h| {
                let lower = h.trim().to_lowercase();
                names.iter().any(|n| lower == *n)
            })
        };
        let defaults = Self::default();
        let category_column = find(&["category", "categories"])
            .or_else(|| defaults.category_column.filter(|&c| c < headers.len()));
        Self {
            date_column: find(&["date", "posted date", "transaction date"])
                .unwrap_or(defaults.date_column),
            description_column: find(&["description", "memo", "payee", "name"])
                .unwrap_or(defaults.description_column),
            amount_column: find(&["amount", "value"]).unwrap_or(defaults.amount_column),
            category_column,
        }
    }
}

pub(crate) struct CsvImporter;

impl CsvImporter {
    /// Read the CSV and return headers + all rows as strings.
    pub(crate) fn preview(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>)> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_path(path)
            .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

        let mut all_rows: Vec<Vec<String>> = Vec::new();
        for result in rdr.records() {
            let record = result.context("Failed to read CSV record")?;
            all_rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        if all_rows.is_empty() {
            anyhow::bail!("CSV file is empty");
        }

        // Headers don't parse as dates or numbers
        let first_row = &all_rows[0];
        let looks_like_header = first_row.iter().all(|field| {
            let trimmed = field.trim();
            Decimal::from_str(trimmed.replace(['$', ','], "").trim()).is_err()
                && NaiveDate::parse_from_str(trimmed, "%m/%d/%Y").is_err()
                && NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_err()
        });

        if looks_like_header {
            let headers = all_rows.remove(0);
            Ok((headers, all_rows))
        } else {
            let headers: Vec<String> = (0..first_row.len())
                .map(|i| format!("Column {}", i + 1))
                .collect();
            Ok((headers, all_rows))
        }
    }

    /// Parse rows into Transactions using the given profile. Every row gets a fresh id.
    pub(crate) fn parse(rows: &[Vec<String>], profile: &CsvProfile) -> Result<Vec<Transaction>> {
        let mut transactions = Vec::new();

        for (i, row) in rows.iter().enumerate() {
            let date_str = row
                .get(profile.date_column)
                .map(|s| s.trim().to_string())
                .unwrap_or_default();

            if date_str.is_empty() {
                continue;
            }

            let date = parse_date(&date_str)
                .with_context(|| format!("Row {}: failed to parse date '{}'", i + 1, date_str))?;

            let description = row
                .get(profile.description_column)
                .map(|s| s.trim().to_string())
                .unwrap_or_default();

            let amount = parse_amount(row, profile)
                .with_context(|| format!("Row {}: failed to parse amount", i + 1))?;

            let category = profile
                .category_column
                .and_then(|c| row.get(c))
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string);

            transactions.push(Transaction {
                id: uuid::Uuid::new_v4().to_string(),
                amount,
                date,
                description,
                category,
            });
        }

        Ok(transactions)
    }

    /// Preview + map columns from the header + parse, in one step.
    pub(crate) fn load(path: &Path) -> Result<Vec<Transaction>> {
        let (headers, rows) = Self::preview(path)?;
        let profile = CsvProfile::from_headers(&headers);
        let transactions = Self::parse(&rows, &profile)?;
        tracing::info!(
            path = %path.display(),
            count = transactions.len(),
            "loaded transactions from CSV"
        );
        Ok(transactions)
    }
}

/// Two-digit years are tried before four-digit ones; `%Y` would read `24` as year 24.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y", "%m-%d-%Y", "%d/%m/%Y"];

fn parse_date(s: &str) -> Result<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .with_context(|| format!("Could not parse date: {s}"))
}

fn parse_amount(row: &[String], profile: &CsvProfile) -> Result<Decimal> {
    let raw = row
        .get(profile.amount_column)
        .map(|s| s.trim())
        .unwrap_or_default();
    parse_decimal(raw)
}

fn parse_decimal(s: &str) -> Result<Decimal> {
    let cleaned = s
        .replace(['$', ','], "")
        .replace('(', "-")
        .replace(')', "")
        .trim()
        .to_string();
    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_str(&cleaned.replace('"', "")))
        .context(format!("Failed to parse '{}' as decimal", s))
}

#[cfg(test)]
#[path = "csv_import_tests.rs"]
mod tests;

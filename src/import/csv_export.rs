use anyhow::{Context, Result};
use std::path::Path;

use crate::models::{Month, Transaction};

/// Write transactions as `Date,Description,Amount,Category`, optionally limited to one month.
/// Returns the number of rows written.
pub(crate) fn export_to_csv(
    path: &Path,
    transactions: &[Transaction],
    month: Option<Month>,
) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    wtr.write_record(["Date", "Description", "Amount", "Category"])?;

    let mut count = 0;
    for txn in transactions
        .iter()
        .filter(|t| month.map_or(true, |m| m.contains(t.date)))
    {
        wtr.write_record([
            txn.date.format("%Y-%m-%d").to_string(),
            txn.description.clone(),
            txn.amount.to_string(),
            txn.category.clone().unwrap_or_default(),
        ])?;
        count += 1;
    }
    wtr.flush().context("Failed to flush CSV file")?;

    tracing::info!(path = %path.display(), count, "exported transactions");
    Ok(count)
}

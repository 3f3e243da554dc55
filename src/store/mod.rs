mod demo;
mod error;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::*;

pub(crate) use error::{StoreError, StoreResult};

/// In-memory home for everything the dashboard shows.
///
/// The store owns all mutation; the engine only ever sees borrowed slices.
#[derive(Debug, Clone)]
pub(crate) struct Store {
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
    categories: Vec<Category>,
}

impl Store {
    pub(crate) fn new() -> Self {
        Self {
            transactions: Vec::new(),
            budgets: Vec::new(),
            categories: default_categories(),
        }
    }

    pub(crate) fn with_demo_data() -> Self {
        let store = Self {
            transactions: demo::transactions(),
            budgets: demo::budgets(),
            categories: default_categories(),
        };
        tracing::debug!(
            transactions = store.transactions.len(),
            budgets = store.budgets.len(),
            "seeded demo data"
        );
        store
    }

    fn new_id() -> String {
        Uuid::new_v4().to_string()
    }

    // ── Transactions ──────────────────────────────────────────

    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    fn transaction_mut(&mut self, id: &str) -> StoreResult<&mut Transaction> {
        self.transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::TransactionNotFound(id.to_string()))
    }

    pub(crate) fn add_transaction(&mut self, draft: TransactionDraft) -> StoreResult<String> {
        validate_description(&draft.description)?;
        let id = Self::new_id();
        tracing::info!(%id, amount = %draft.amount, date = %draft.date, "transaction added");
        self.transactions.push(Transaction::from_draft(id.clone(), draft));
        Ok(id)
    }

    /// Replace a transaction's contents, keeping its id and position.
    pub(crate) fn update_transaction(&mut self, id: &str, draft: TransactionDraft) -> StoreResult<()> {
        validate_description(&draft.description)?;
        let txn = self.transaction_mut(id)?;
        *txn = Transaction::from_draft(id.to_string(), draft);
        tracing::info!(%id, "transaction updated");
        Ok(())
    }

    pub(crate) fn delete_transaction(&mut self, id: &str) -> StoreResult<Transaction> {
        let index = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::TransactionNotFound(id.to_string()))?;
        tracing::info!(%id, "transaction deleted");
        Ok(self.transactions.remove(index))
    }

    pub(crate) fn rename_transaction(&mut self, id: &str, description: &str) -> StoreResult<()> {
        validate_description(description)?;
        self.transaction_mut(id)?.description = description.trim().to_string();
        tracing::debug!(%id, "transaction renamed");
        Ok(())
    }

    /// Categories are free text on a transaction, so any label is accepted.
    pub(crate) fn set_transaction_category(
        &mut self,
        id: &str,
        category: Option<String>,
    ) -> StoreResult<()> {
        self.transaction_mut(id)?.category = category;
        tracing::debug!(%id, "transaction recategorized");
        Ok(())
    }

    pub(crate) fn replace_transactions(&mut self, transactions: Vec<Transaction>) {
        tracing::info!(count = transactions.len(), "transactions replaced");
        self.transactions = transactions;
    }

    /// Case-insensitive substring match on the description; an empty query matches everything.
    pub(crate) fn search(&self, query: &str) -> Vec<&Transaction> {
        let needle = query.trim().to_lowercase();
        self.transactions
            .iter()
            .filter(|t| needle.is_empty() || t.description.to_lowercase().contains(&needle))
            .collect()
    }

    // ── Budgets ───────────────────────────────────────────────

    pub(crate) fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub(crate) fn budgets_for(&self, month: Month) -> Vec<Budget> {
        self.budgets
            .iter()
            .filter(|b| b.month == month)
            .cloned()
            .collect()
    }

    pub(crate) fn budget_for(&self, category_id: &str, month: Month) -> Option<&Budget> {
        self.budgets
            .iter()
            .find(|b| b.category_id == category_id && b.month == month)
    }

    /// Set the budget for a category and month, updating the existing entry if there is one.
    pub(crate) fn upsert_budget(
        &mut self,
        category_id: &str,
        month: Month,
        amount: Decimal,
    ) -> StoreResult<String> {
        if amount < Decimal::ZERO {
            return Err(StoreError::NegativeBudget(amount));
        }
        if self.category_by_id(category_id).is_none() {
            return Err(StoreError::UnknownCategory(category_id.to_string()));
        }

        if let Some(existing) = self
            .budgets
            .iter_mut()
            .find(|b| b.category_id == category_id && b.month == month)
        {
            existing.amount = amount;
            tracing::info!(category_id, %month, %amount, "budget updated");
            return Ok(existing.id.clone());
        }

        let id = Self::new_id();
        self.budgets.push(Budget::new(
            id.clone(),
            category_id.to_string(),
            month,
            amount,
        ));
        tracing::info!(category_id, %month, %amount, "budget created");
        Ok(id)
    }

    pub(crate) fn delete_budget(&mut self, id: &str) -> StoreResult<Budget> {
        let index = self
            .budgets
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| StoreError::BudgetNotFound(id.to_string()))?;
        tracing::info!(%id, "budget deleted");
        Ok(self.budgets.remove(index))
    }

    // ── Categories ────────────────────────────────────────────

    pub(crate) fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub(crate) fn category_by_name(&self, name: &str) -> Option<&Category> {
        Category::find_by_name(&self.categories, name.trim())
    }

    pub(crate) fn category_by_id(&self, id: &str) -> Option<&Category> {
        Category::find_by_id(&self.categories, id)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_description(description: &str) -> StoreResult<()> {
    if description.trim().is_empty() {
        Err(StoreError::EmptyDescription)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests;

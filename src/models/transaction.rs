use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: String,
    /// Negative amounts are expenses, positive amounts are income.
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: String,
    /// Free-text label matched against `Category::name`.
    pub category: Option<String>,
}

impl Transaction {
    pub fn from_draft(id: String, draft: TransactionDraft) -> Self {
        Self {
            id,
            amount: draft.amount,
            date: draft.date,
            description: draft.description,
            category: draft.category,
        }
    }

    pub fn is_income(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_expense(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub fn abs_amount(&self) -> Decimal {
        self.amount.abs()
    }

    pub fn category_name(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// Everything a transaction carries except its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: String,
    pub category: Option<String>,
}

impl TransactionDraft {
    pub fn new(date: NaiveDate, description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            amount,
            date,
            description: description.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

impl From<&Transaction> for TransactionDraft {
    fn from(txn: &Transaction) -> Self {
        Self {
            amount: txn.amount,
            date: txn.date,
            description: txn.description.clone(),
            category: txn.category.clone(),
        }
    }
}

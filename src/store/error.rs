use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Budget amount must not be negative (got {0})")]
    NegativeBudget(Decimal),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),
    #[error("Budget not found: {0}")]
    BudgetNotFound(String),
    #[error("Transaction description must not be empty")]
    EmptyDescription,
}

pub type StoreResult<T> = Result<T, StoreError>;

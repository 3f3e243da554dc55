mod budget;
mod category;
mod month;
mod transaction;

pub use budget::Budget;
pub use category::{default_categories, Category};
pub use month::Month;
pub use transaction::{Transaction, TransactionDraft};

#[cfg(test)]
mod tests;

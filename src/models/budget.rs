use rust_decimal::Decimal;

use super::Month;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Budget {
    pub id: String,
    pub category_id: String,
    pub amount: Decimal,
    pub month: Month,
}

impl Budget {
    pub fn new(id: String, category_id: String, month: Month, amount: Decimal) -> Self {
        Self {
            id,
            category_id,
            amount,
            month,
        }
    }

    /// Find the first budget for a category, whatever its month.
    pub fn find_for_category<'a>(budgets: &'a [Budget], category_id: &str) -> Option<&'a Budget> {
        budgets.iter().find(|b| b.category_id == category_id)
    }
}

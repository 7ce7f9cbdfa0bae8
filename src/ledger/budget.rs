use rust_decimal::Decimal;
use serde::Serialize;

use super::category::{CategoryAggregator, CategoryTotal};
use super::ranking::top_categories;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BudgetStatus {
    Over,
    Under,
}

/// Spending compared against a budget.
///
/// `delta` is the overspend when `Over` and the remaining headroom when
/// `Under`; it is never negative. `Over` holds only when spending strictly
/// exceeds the budget, and only then are the heaviest categories listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetReport {
    pub budget: Decimal,
    pub total_spending: Decimal,
    pub status: BudgetStatus,
    pub delta: Decimal,
    pub overspend_categories: Vec<CategoryTotal>,
}

impl BudgetReport {
    pub(crate) fn analyze(
        categories: &CategoryAggregator,
        budget: Decimal,
        suggestions: usize,
    ) -> Self {
        let total_spending = categories.total_spending();
        if total_spending > budget {
            Self {
                budget,
                total_spending,
                status: BudgetStatus::Over,
                delta: total_spending - budget,
                overspend_categories: top_categories(categories, suggestions),
            }
        } else {
            Self {
                budget,
                total_spending,
                status: BudgetStatus::Under,
                delta: budget - total_spending,
                overspend_categories: Vec::new(),
            }
        }
    }

    pub fn is_over(&self) -> bool {
        self.status == BudgetStatus::Over
    }
}

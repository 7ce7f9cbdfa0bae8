use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

/// Cumulative expense total for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub name: String,
    pub total: Decimal,
}

/// Expense totals and debit counts keyed by category name. Income never
/// contributes.
#[derive(Debug, Clone, Default)]
pub struct CategoryAggregator {
    totals: HashMap<String, Decimal>,
    counts: HashMap<String, usize>,
    spending: Decimal,
}

impl CategoryAggregator {
    pub(crate) fn record(&mut self, category: &str, amount: Decimal) {
        *self.totals.entry(category.to_string()).or_default() += amount;
        *self.counts.entry(category.to_string()).or_default() += 1;
        self.spending += amount;
    }

    /// Reverses one `record`. A category leaves both maps once its total is
    /// no longer positive.
    pub(crate) fn retract(&mut self, category: &str, amount: Decimal) {
        let Some(total) = self.totals.get_mut(category) else {
            return;
        };
        *total -= amount;
        self.spending -= amount;
        if *total <= Decimal::ZERO {
            self.totals.remove(category);
            self.counts.remove(category);
        } else if let Some(count) = self.counts.get_mut(category) {
            *count = count.saturating_sub(1);
        }
    }

    /// Whether recording `amount` keeps every running total representable.
    pub(crate) fn can_record(&self, category: &str, amount: Decimal) -> bool {
        let category_total = self.total(category).unwrap_or(Decimal::ZERO);
        category_total.checked_add(amount).is_some() && self.spending.checked_add(amount).is_some()
    }

    pub fn total(&self, category: &str) -> Option<Decimal> {
        self.totals.get(category).copied()
    }

    pub fn count(&self, category: &str) -> usize {
        self.counts.get(category).copied().unwrap_or(0)
    }

    pub fn total_spending(&self) -> Decimal {
        self.spending
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> + '_ {
        self.totals
            .iter()
            .map(|(name, total)| (name.as_str(), *total))
    }
}

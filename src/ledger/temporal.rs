use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;

use super::transaction::{Transaction, TransactionId};

const MONTH_KEY_LEN: usize = 7;

/// Year-month key for a `YYYY-MM-DD` date: its first seven characters, or the
/// whole string when shorter.
pub fn month_key(date: &str) -> &str {
    match date.char_indices().nth(MONTH_KEY_LEN) {
        Some((end, _)) => &date[..end],
        None => date,
    }
}

/// Chronological views over the store: a `(date, id)` ordered set and a
/// year-month grouping of ids in insertion order.
///
/// Dates compare lexicographically, which is chronological only for
/// zero-padded four-digit-year dates.
#[derive(Debug, Clone, Default)]
pub struct TemporalIndex {
    by_date: BTreeSet<(String, TransactionId)>,
    by_month: BTreeMap<String, Vec<TransactionId>>,
}

impl TemporalIndex {
    pub(crate) fn insert(&mut self, transaction: &Transaction) {
        self.by_date
            .insert((transaction.date.clone(), transaction.id));
        self.by_month
            .entry(month_key(&transaction.date).to_string())
            .or_default()
            .push(transaction.id);
    }

    pub(crate) fn remove(&mut self, transaction: &Transaction) {
        self.by_date
            .remove(&(transaction.date.clone(), transaction.id));
        let key = month_key(&transaction.date);
        if let Some(ids) = self.by_month.get_mut(key) {
            if let Some(position) = ids.iter().rposition(|id| *id == transaction.id) {
                ids.remove(position);
            }
            if ids.is_empty() {
                self.by_month.remove(key);
            }
        }
    }

    /// Ids dated within `from..=to`, ordered by (date, id).
    pub fn between<'a>(
        &'a self,
        from: &str,
        to: &str,
    ) -> impl Iterator<Item = TransactionId> + 'a {
        let lower = (from.to_string(), TransactionId::MIN);
        let upper = (to.to_string(), TransactionId::MAX);
        let range = (lower <= upper).then(|| self.by_date.range(lower..=upper));
        range.into_iter().flatten().map(|(_, id)| *id)
    }

    pub fn month(&self, year_month: &str) -> &[TransactionId] {
        self.by_month
            .get(year_month)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn months(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_month.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    pub fn contains(&self, id: TransactionId) -> bool {
        self.by_date.iter().any(|(_, indexed)| *indexed == id)
    }
}

/// Average monthly expense over the `months` most recent months that have
/// any expense. "Most recent" is the largest year-month key. Zero when there
/// are no expenses or `months` is zero.
pub fn monthly_average<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    months: usize,
) -> Decimal {
    let mut totals: BTreeMap<&str, Decimal> = BTreeMap::new();
    for transaction in transactions.into_iter().filter(|t| t.is_expense()) {
        let total = totals.entry(month_key(&transaction.date)).or_default();
        *total = total.saturating_add(transaction.amount);
    }

    let considered = months.min(totals.len());
    if considered == 0 {
        return Decimal::ZERO;
    }
    let sum = totals
        .values()
        .rev()
        .take(considered)
        .fold(Decimal::ZERO, |acc, total| acc.saturating_add(*total));
    sum / Decimal::from(considered)
}

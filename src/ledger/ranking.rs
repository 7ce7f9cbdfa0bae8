//! On-demand top-k selection. Nothing here is maintained incrementally: each
//! query walks its input once through a heap bounded at `k`, so a call costs
//! O(n log k).
//!
//! Ordering is explicit rather than inherited from tuple comparison:
//! - expenses: amount descending, then description ascending, then id ascending
//! - categories: total descending, then name ascending

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::category::{CategoryAggregator, CategoryTotal};
use super::transaction::{Transaction, TransactionId};

/// A debit selected by [`top_expenses`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedExpense {
    pub id: TransactionId,
    pub amount: Decimal,
    pub description: String,
}

pub fn top_expenses<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    k: usize,
) -> Vec<RankedExpense> {
    let candidates = transactions
        .into_iter()
        .filter(|transaction| transaction.is_expense())
        .map(|transaction| {
            let key = (
                transaction.amount,
                Reverse(transaction.description.as_str()),
                Reverse(transaction.id),
            );
            (key, transaction)
        });

    select_top(candidates, k)
        .into_iter()
        .map(|transaction| RankedExpense {
            id: transaction.id,
            amount: transaction.amount,
            description: transaction.description.clone(),
        })
        .collect()
}

pub fn top_categories(categories: &CategoryAggregator, k: usize) -> Vec<CategoryTotal> {
    let candidates = categories
        .iter()
        .map(|(name, total)| ((total, Reverse(name)), (name, total)));

    select_top(candidates, k)
        .into_iter()
        .map(|(name, total)| CategoryTotal {
            name: name.to_string(),
            total,
        })
        .collect()
}

struct Ranked<K, T> {
    key: K,
    item: T,
}

impl<K: Ord, T> PartialEq for Ranked<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Ord, T> Eq for Ranked<K, T> {}

impl<K: Ord, T> PartialOrd for Ranked<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, T> Ord for Ranked<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Keeps the `k` items with the greatest keys, returned greatest first.
fn select_top<K: Ord, T>(items: impl IntoIterator<Item = (K, T)>, k: usize) -> Vec<T> {
    if k == 0 {
        return Vec::new();
    }
    let mut heap = BinaryHeap::with_capacity(k + 1);
    for (key, item) in items {
        heap.push(Reverse(Ranked { key, item }));
        if heap.len() > k {
            heap.pop();
        }
    }

    let mut ranked: Vec<Ranked<K, T>> = heap.into_iter().map(|Reverse(entry)| entry).collect();
    ranked.sort_by(|a, b| b.key.cmp(&a.key));
    ranked.into_iter().map(|entry| entry.item).collect()
}

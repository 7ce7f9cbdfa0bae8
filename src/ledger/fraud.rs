//! Pattern and outlier scan over the full store.
//!
//! Two independent passes:
//! - duplicates: transactions sharing (amount, category, date), any kind
//! - outliers: debits strictly above `multiplier × median` of all debits
//!
//! The median is the element at index `n / 2` of the ascending debit amounts,
//! i.e. the upper median when `n` is even.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::transaction::{Transaction, TransactionId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FraudFinding {
    Duplicate {
        amount: Decimal,
        category: String,
        date: String,
        count: usize,
    },
    Large {
        id: TransactionId,
        amount: Decimal,
        category: String,
        date: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FraudReport {
    pub findings: Vec<FraudFinding>,
}

impl FraudReport {
    pub fn is_safe(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn duplicates(&self) -> impl Iterator<Item = &FraudFinding> + '_ {
        self.findings
            .iter()
            .filter(|finding| matches!(finding, FraudFinding::Duplicate { .. }))
    }

    pub fn outliers(&self) -> impl Iterator<Item = &FraudFinding> + '_ {
        self.findings
            .iter()
            .filter(|finding| matches!(finding, FraudFinding::Large { .. }))
    }
}

pub fn scan(transactions: &[Transaction], multiplier: Decimal) -> FraudReport {
    let mut findings = duplicate_groups(transactions);
    findings.extend(outliers(transactions, multiplier));
    FraudReport { findings }
}

/// Groups are reported in order of their first member.
fn duplicate_groups(transactions: &[Transaction]) -> Vec<FraudFinding> {
    let mut slots: HashMap<(Decimal, &str, &str), usize> = HashMap::new();
    let mut groups: Vec<(&Transaction, usize)> = Vec::new();

    for transaction in transactions {
        let key = (
            transaction.amount,
            transaction.category.as_str(),
            transaction.date.as_str(),
        );
        match slots.get(&key) {
            Some(&slot) => groups[slot].1 += 1,
            None => {
                slots.insert(key, groups.len());
                groups.push((transaction, 1));
            }
        }
    }

    groups
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(first, count)| FraudFinding::Duplicate {
            amount: first.amount,
            category: first.category.clone(),
            date: first.date.clone(),
            count,
        })
        .collect()
}

fn outliers(transactions: &[Transaction], multiplier: Decimal) -> Vec<FraudFinding> {
    let mut amounts: Vec<Decimal> = transactions
        .iter()
        .filter(|transaction| transaction.is_expense())
        .map(|transaction| transaction.amount)
        .collect();
    if amounts.is_empty() {
        return Vec::new();
    }
    amounts.sort();
    // A threshold past the representable range cannot be exceeded.
    let Some(threshold) = amounts[amounts.len() / 2].checked_mul(multiplier) else {
        return Vec::new();
    };

    transactions
        .iter()
        .filter(|transaction| transaction.is_expense() && transaction.amount > threshold)
        .map(|transaction| FraudFinding::Large {
            id: transaction.id,
            amount: transaction.amount,
            category: transaction.category.clone(),
            date: transaction.date.clone(),
        })
        .collect()
}

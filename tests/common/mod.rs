#![allow(dead_code)]

use std::collections::HashMap;

use ledger_engine::ledger::{Ledger, TransactionKind};
use rust_decimal::Decimal;
use tempfile::TempDir;

/// Deterministic pseudo-random stream so synthetic ledgers are reproducible.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

pub const CATEGORIES: [&str; 5] = ["Food", "Fuel", "Rent", "Books", "Travel"];

/// Appends `count` synthetic transactions; roughly one in four is income.
pub fn seed(ledger: &mut Ledger, count: usize, rng: &mut Lcg) {
    for _ in 0..count {
        let cents = (rng.next_u64() % 50_000) as i64;
        let amount = Decimal::new(cents, 2);
        let category = CATEGORIES[(rng.next_u64() % CATEGORIES.len() as u64) as usize];
        let month = 1 + rng.next_u64() % 12;
        let day = 1 + rng.next_u64() % 28;
        let date = format!("2024-{month:02}-{day:02}");
        let kind = if rng.next_u64() % 4 == 0 {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        };
        ledger
            .append(amount, category, "synthetic", date, kind)
            .expect("synthetic amounts are non-negative");
    }
}

/// Asserts every derived index agrees with a recomputation from the store.
pub fn assert_consistent(ledger: &Ledger, recent_limit: usize) {
    let rows = ledger.list_all();

    let signed: Decimal = rows.iter().map(|t| t.signed_amount()).sum();
    assert_eq!(ledger.current_balance(), signed, "running balance");

    let mut expected: HashMap<&str, Decimal> = HashMap::new();
    for row in rows.iter().filter(|t| t.is_expense()) {
        *expected.entry(row.category.as_str()).or_default() += row.amount;
    }
    for (name, total) in ledger.categories().iter() {
        assert_eq!(expected.get(name).copied(), Some(total), "category {name}");
    }
    for (name, total) in &expected {
        if *total > Decimal::ZERO {
            assert_eq!(ledger.category_total(name), Some(*total), "category {name}");
        }
    }

    assert_eq!(ledger.temporal().len(), rows.len(), "date index size");
    for row in rows {
        assert!(ledger.temporal().contains(row.id), "date index has {}", row.id);
    }
    let by_month: usize = ledger
        .temporal()
        .months()
        .map(|month| ledger.month_transactions(month).len())
        .sum();
    assert_eq!(by_month, rows.len(), "month index size");

    let window: Vec<_> = ledger.recent().map(|t| t.id).collect();
    let tail_start = rows.len().saturating_sub(recent_limit);
    let tail: Vec<_> = rows[tail_start..].iter().map(|t| t.id).collect();
    assert_eq!(window, tail, "recency window");

    assert!(rows.windows(2).all(|pair| pair[0].id < pair[1].id), "ids increase");
}

/// A throwaway data directory for binary-level runs.
pub fn temp_home() -> TempDir {
    TempDir::new().expect("create temp home")
}

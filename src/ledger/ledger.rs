use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use super::{
    balance::BalanceAccumulator,
    budget::BudgetReport,
    category::{CategoryAggregator, CategoryTotal},
    fraud::{self, FraudReport},
    ranking::{self, RankedExpense},
    temporal::{self, TemporalIndex},
    transaction::{Transaction, TransactionId, TransactionKind},
    window::BoundedWindow,
};
use crate::config::EngineConfig;
use crate::errors::{LedgerError, Result};

const FIRST_ID: TransactionId = 1;

/// Outcome of a successful append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Appended {
    pub id: TransactionId,
    pub balance: Decimal,
}

/// The transaction store and every index derived from it.
///
/// Mutations touch the store first and then propagate, in order, to the
/// balance, category aggregates, temporal index, recency window and undo
/// history. After every call:
/// - the balance is the signed sum of the stored amounts
/// - category totals are the sums of stored debits per category
/// - the temporal index holds exactly the stored ids
/// - the recency window is the last `min(recent_limit, n)` transactions
/// - ids strictly increase and are never reused, even across undo
#[derive(Debug, Clone)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
    balance: BalanceAccumulator,
    categories: CategoryAggregator,
    temporal: TemporalIndex,
    recent: BoundedWindow<Transaction>,
    undo: BoundedWindow<TransactionId>,
    outlier_multiplier: Decimal,
    budget_suggestions: usize,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            transactions: Vec::new(),
            next_id: FIRST_ID,
            balance: BalanceAccumulator::default(),
            categories: CategoryAggregator::default(),
            temporal: TemporalIndex::default(),
            recent: BoundedWindow::new(config.recent_limit),
            undo: BoundedWindow::new(config.undo_limit),
            outlier_multiplier: config.outlier_multiplier,
            budget_suggestions: config.budget_suggestions,
        }
    }

    /// Records a new transaction and returns its id with the new balance.
    ///
    /// Rejects negative amounts, and amounts that would push the balance or
    /// the expense totals out of range, with [`LedgerError::InvalidAmount`]
    /// before any state changes.
    pub fn append(
        &mut self,
        amount: Decimal,
        category: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
        kind: TransactionKind,
    ) -> Result<Appended> {
        if amount.is_sign_negative() && !amount.is_zero() {
            warn!(%amount, "rejected negative amount");
            return Err(LedgerError::InvalidAmount(amount));
        }
        let amount = amount.abs();
        let transaction =
            Transaction::new(self.next_id, amount, category, description, date, kind);
        let representable = self.balance.can_apply(transaction.signed_amount())
            && (transaction.is_income()
                || self.categories.can_record(&transaction.category, amount));
        if !representable {
            warn!(%amount, "rejected amount outside the representable range");
            return Err(LedgerError::InvalidAmount(amount));
        }
        let id = transaction.id;
        self.next_id += 1;

        self.transactions.push(transaction.clone());
        let balance = self.balance.apply(transaction.signed_amount());
        if transaction.is_expense() {
            self.categories
                .record(&transaction.category, transaction.amount);
        }
        self.temporal.insert(&transaction);
        self.recent.push(transaction);
        self.undo.push(id);

        debug!(id, %amount, %balance, "appended transaction");
        Ok(Appended { id, balance })
    }

    /// Reverses the most recent undoable append and returns the restored
    /// balance. Every derived index is reconciled, including the recency
    /// window, which is backfilled from the store.
    pub fn undo_last(&mut self) -> Result<Decimal> {
        let id = self.undo.pop_newest().ok_or(LedgerError::EmptyHistory)?;
        let position = self
            .transactions
            .binary_search_by_key(&id, |transaction| transaction.id)
            .map_err(|_| {
                warn!(id, "undo history referenced a missing transaction");
                LedgerError::EmptyHistory
            })?;
        let removed = self.transactions.remove(position);

        let balance = self.balance.revert();
        if removed.is_expense() {
            self.categories.retract(&removed.category, removed.amount);
        }
        self.temporal.remove(&removed);
        if self.recent.newest().map(|newest| newest.id) == Some(id) {
            self.recent.pop_newest();
        }
        if self.transactions.len() > self.recent.len() {
            let older = self.transactions.len() - self.recent.len() - 1;
            self.recent.backfill(self.transactions[older].clone());
        }

        debug!(id, %balance, "undid transaction");
        Ok(balance)
    }

    pub fn list_all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions
            .binary_search_by_key(&id, |transaction| transaction.id)
            .ok()
            .map(|position| &self.transactions[position])
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn current_balance(&self) -> Decimal {
        self.balance.current()
    }

    /// Balance right after the `appends`-th surviving append; `0` is the
    /// opening balance.
    pub fn balance_after(&self, appends: usize) -> Result<Decimal> {
        self.balance.after(appends)
    }

    pub fn category_total(&self, category: &str) -> Option<Decimal> {
        self.categories.total(category)
    }

    pub fn category_count(&self, category: &str) -> usize {
        self.categories.count(category)
    }

    pub fn categories(&self) -> &CategoryAggregator {
        &self.categories
    }

    pub fn total_expenses(&self) -> Decimal {
        self.categories.total_spending()
    }

    pub fn temporal(&self) -> &TemporalIndex {
        &self.temporal
    }

    pub fn recent(&self) -> impl DoubleEndedIterator<Item = &Transaction> + '_ {
        self.recent.iter()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn top_expenses(&self, k: usize) -> Result<Vec<RankedExpense>> {
        ensure_positive(k)?;
        Ok(ranking::top_expenses(&self.transactions, k))
    }

    pub fn top_categories(&self, k: usize) -> Result<Vec<CategoryTotal>> {
        ensure_positive(k)?;
        Ok(ranking::top_categories(&self.categories, k))
    }

    pub fn monthly_average(&self, months: usize) -> Result<Decimal> {
        ensure_positive(months)?;
        Ok(temporal::monthly_average(&self.transactions, months))
    }

    pub fn budget_analysis(&self, budget: Decimal) -> Result<BudgetReport> {
        if budget.is_sign_negative() && !budget.is_zero() {
            return Err(LedgerError::InvalidAmount(budget));
        }
        Ok(BudgetReport::analyze(
            &self.categories,
            budget,
            self.budget_suggestions,
        ))
    }

    pub fn detect_fraud(&self) -> FraudReport {
        fraud::scan(&self.transactions, self.outlier_multiplier)
    }

    /// Distinct category names starting with `prefix` (case-sensitive), in
    /// lexicographic order. Income categories are included.
    pub fn category_suggestions(&self, prefix: &str) -> Vec<String> {
        self.transactions
            .iter()
            .map(|transaction| transaction.category.as_str())
            .filter(|category| category.starts_with(prefix))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn transactions_between(&self, from: &str, to: &str) -> Vec<&Transaction> {
        self.temporal
            .between(from, to)
            .filter_map(|id| self.transaction(id))
            .collect()
    }

    pub fn month_transactions(&self, year_month: &str) -> Vec<&Transaction> {
        self.temporal
            .month(year_month)
            .iter()
            .filter_map(|id| self.transaction(*id))
            .collect()
    }
}

fn ensure_positive(k: usize) -> Result<()> {
    if k == 0 {
        return Err(LedgerError::InvalidIndex(0));
    }
    Ok(())
}

use rust_decimal::Decimal;

use crate::errors::{LedgerError, Result};

/// Running balance plus the balance after every successive append.
///
/// `history[i]` is the balance after the i-th append, with `history[0] == 0`,
/// so both the current balance and any prefix balance are O(1) lookups.
#[derive(Debug, Clone)]
pub struct BalanceAccumulator {
    running: Decimal,
    history: Vec<Decimal>,
}

impl Default for BalanceAccumulator {
    fn default() -> Self {
        Self {
            running: Decimal::ZERO,
            history: vec![Decimal::ZERO],
        }
    }
}

impl BalanceAccumulator {
    pub fn current(&self) -> Decimal {
        self.running
    }

    pub fn after(&self, appends: usize) -> Result<Decimal> {
        self.history
            .get(appends)
            .copied()
            .ok_or(LedgerError::InvalidIndex(appends as i64))
    }

    /// Whether `delta` can be applied without leaving the representable range.
    pub(crate) fn can_apply(&self, delta: Decimal) -> bool {
        self.running.checked_add(delta).is_some()
    }

    pub(crate) fn apply(&mut self, delta: Decimal) -> Decimal {
        self.running += delta;
        self.history.push(self.running);
        self.running
    }

    /// Drops the newest prefix entry and restores the balance it superseded.
    pub(crate) fn revert(&mut self) -> Decimal {
        if self.history.len() > 1 {
            self.history.pop();
        }
        self.running = self.history.last().copied().unwrap_or(Decimal::ZERO);
        self.running
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.len() <= 1
    }
}

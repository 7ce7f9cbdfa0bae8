use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Store-assigned identity. Strictly increasing and never reused.
pub type TransactionId = u64;

/// Whether a transaction credits or debits the ledger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Maps the protocol's `type` token: `income` credits, anything else debits.
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("income") {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => f.write_str("Income"),
            TransactionKind::Expense => f.write_str("Expense"),
        }
    }
}

/// An immutable ledger entry. Created only by `Ledger::append`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    /// `YYYY-MM-DD`; only ever sliced, never parsed.
    pub date: String,
    pub kind: TransactionKind,
}

impl Transaction {
    pub(crate) fn new(
        id: TransactionId,
        amount: Decimal,
        category: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
        kind: TransactionKind,
    ) -> Self {
        Self {
            id,
            amount,
            category: category.into(),
            description: description.into(),
            date: date.into(),
            kind,
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self.kind, TransactionKind::Income)
    }

    pub fn is_expense(&self) -> bool {
        !self.is_income()
    }

    /// Balance contribution: income positive, expense negative.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

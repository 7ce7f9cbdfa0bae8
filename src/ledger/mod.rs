//! The ledger engine: an append-mostly transaction store with derived indexes
//! kept consistent on every append and undo.

pub mod balance;
pub mod budget;
pub mod category;
pub mod fraud;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod ranking;
pub mod temporal;
pub mod transaction;
pub mod window;

pub use balance::BalanceAccumulator;
pub use budget::{BudgetReport, BudgetStatus};
pub use category::{CategoryAggregator, CategoryTotal};
pub use fraud::{FraudFinding, FraudReport};
pub use ledger::{Appended, Ledger};
pub use ranking::RankedExpense;
pub use temporal::{month_key, TemporalIndex};
pub use transaction::{Transaction, TransactionId, TransactionKind};
pub use window::BoundedWindow;

use rust_decimal::Decimal;
use thiserror::Error;

/// Error type that captures ledger engine failures.
///
/// Every fallible engine operation reports one of these before touching any
/// state, so a failed call leaves the ledger exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("No transactions to undo")]
    EmptyHistory,
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),
    #[error("Invalid index: {0}")]
    InvalidIndex(i64),
}

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Failures that end a CLI session, as opposed to per-command errors which
/// are reported inline.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

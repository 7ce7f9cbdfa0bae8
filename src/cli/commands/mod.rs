use std::str::FromStr;

use rust_decimal::Decimal;

use crate::cli::context::CommandError;
use crate::cli::registry::CommandRegistry;
use crate::errors::LedgerError;

pub mod report;
pub mod system;
pub mod transaction;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in transaction::definitions()
        .into_iter()
        .chain(report::definitions())
        .chain(system::definitions())
    {
        registry.register(entry);
    }
}

/// Fails with the usage line when fewer than `count` arguments were given.
/// Surplus arguments are ignored.
pub(crate) fn require_args(args: &[&str], count: usize, usage: &str) -> Result<(), CommandError> {
    if args.len() < count {
        return Err(CommandError::InvalidArguments(format!("Usage: {usage}")));
    }
    Ok(())
}

/// Accepts plain decimals and scientific notation. Sign checks are left to
/// the engine.
pub(crate) fn parse_amount(raw: &str) -> Result<Decimal, CommandError> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| CommandError::InvalidArguments(format!("Invalid amount: {raw}")))
}

/// Parses a count that must be at least one.
pub(crate) fn parse_count(raw: &str) -> Result<usize, CommandError> {
    match parse_index(raw)? {
        0 => Err(LedgerError::InvalidIndex(0).into()),
        count => Ok(count),
    }
}

/// Parses a non-negative index; negative values are an invalid index.
pub(crate) fn parse_index(raw: &str) -> Result<usize, CommandError> {
    let value: i64 = raw
        .parse()
        .map_err(|_| CommandError::InvalidArguments(format!("Invalid number: {raw}")))?;
    usize::try_from(value).map_err(|_| LedgerError::InvalidIndex(value).into())
}

use crate::cli::commands::{parse_amount, require_args};
use crate::cli::context::{CommandError, ShellContext};
use crate::cli::format;
use crate::cli::registry::CommandEntry;
use crate::ledger::TransactionKind;

const ADD_USAGE: &str = "ADD <amount> <category> <description> <date> <income|expense>";
const RANGE_USAGE: &str = "RANGE <from YYYY-MM-DD> <to YYYY-MM-DD>";
const MONTH_USAGE: &str = "MONTH <YYYY-MM>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("ADD", "Record a transaction", ADD_USAGE, cmd_add),
        CommandEntry::new("UNDO", "Reverse the most recent transaction", "UNDO", cmd_undo),
        CommandEntry::new(
            "TRANSACTIONS",
            "List every transaction in insertion order",
            "TRANSACTIONS",
            cmd_transactions,
        ),
        CommandEntry::new(
            "RECENT",
            "List the most recently added transactions",
            "RECENT",
            cmd_recent,
        ),
        CommandEntry::new(
            "RANGE",
            "List transactions dated within an inclusive range",
            RANGE_USAGE,
            cmd_range,
        ),
        CommandEntry::new(
            "MONTH",
            "List transactions recorded for a year-month",
            MONTH_USAGE,
            cmd_month,
        ),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> Result<String, CommandError> {
    require_args(args, 5, ADD_USAGE)?;
    let amount = parse_amount(args[0])?;
    let kind = TransactionKind::from_token(args[4]);
    let appended = context
        .ledger
        .append(amount, args[1], args[2], args[3], kind)?;
    Ok(format::success(appended.balance))
}

fn cmd_undo(context: &mut ShellContext, _args: &[&str]) -> Result<String, CommandError> {
    let balance = context.ledger.undo_last()?;
    Ok(format::success(balance))
}

fn cmd_transactions(context: &mut ShellContext, _args: &[&str]) -> Result<String, CommandError> {
    Ok(format::transactions(context.ledger.list_all()))
}

fn cmd_recent(context: &mut ShellContext, _args: &[&str]) -> Result<String, CommandError> {
    Ok(format::transactions(context.ledger.recent()))
}

fn cmd_range(context: &mut ShellContext, args: &[&str]) -> Result<String, CommandError> {
    require_args(args, 2, RANGE_USAGE)?;
    let rows = context.ledger.transactions_between(args[0], args[1]);
    Ok(format::transactions(rows))
}

fn cmd_month(context: &mut ShellContext, args: &[&str]) -> Result<String, CommandError> {
    require_args(args, 1, MONTH_USAGE)?;
    Ok(format::transactions(context.ledger.month_transactions(args[0])))
}

use crate::cli::commands::{parse_amount, parse_count, parse_index, require_args};
use crate::cli::context::{CommandError, ShellContext};
use crate::cli::format;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("BALANCE", "Show the current balance", "BALANCE", cmd_balance),
        CommandEntry::new(
            "HISTORY",
            "Show the balance after the k-th transaction",
            "HISTORY <k>",
            cmd_history,
        ),
        CommandEntry::new(
            "TOP_EXPENSES",
            "List the k largest expenses",
            "TOP_EXPENSES <k>",
            cmd_top_expenses,
        ),
        CommandEntry::new(
            "TOP_CATEGORIES",
            "List the k categories with the most spending",
            "TOP_CATEGORIES <k>",
            cmd_top_categories,
        ),
        CommandEntry::new(
            "MONTHLY_AVG",
            "Average monthly spending over the most recent months",
            "MONTHLY_AVG <months>",
            cmd_monthly_average,
        ),
        CommandEntry::new(
            "BUDGET",
            "Compare total spending against a budget",
            "BUDGET <amount>",
            cmd_budget,
        ),
        CommandEntry::new(
            "FRAUD",
            "Scan for duplicate or unusually large transactions",
            "FRAUD",
            cmd_fraud,
        ),
        CommandEntry::new(
            "SUGGEST",
            "List known categories starting with a prefix",
            "SUGGEST <prefix>",
            cmd_suggest,
        ),
        CommandEntry::new(
            "COUNT",
            "Show how many expenses a category holds",
            "COUNT <category>",
            cmd_count,
        ),
    ]
}

fn cmd_balance(context: &mut ShellContext, _args: &[&str]) -> Result<String, CommandError> {
    Ok(format::amount(context.ledger.current_balance()))
}

fn cmd_history(context: &mut ShellContext, args: &[&str]) -> Result<String, CommandError> {
    require_args(args, 1, "HISTORY <k>")?;
    let appends = parse_index(args[0])?;
    Ok(format::amount(context.ledger.balance_after(appends)?))
}

fn cmd_top_expenses(context: &mut ShellContext, args: &[&str]) -> Result<String, CommandError> {
    require_args(args, 1, "TOP_EXPENSES <k>")?;
    let top = context.ledger.top_expenses(parse_count(args[0])?)?;
    Ok(format::expenses(&top))
}

fn cmd_top_categories(context: &mut ShellContext, args: &[&str]) -> Result<String, CommandError> {
    require_args(args, 1, "TOP_CATEGORIES <k>")?;
    let top = context.ledger.top_categories(parse_count(args[0])?)?;
    Ok(format::categories(&top))
}

fn cmd_monthly_average(context: &mut ShellContext, args: &[&str]) -> Result<String, CommandError> {
    require_args(args, 1, "MONTHLY_AVG <months>")?;
    let average = context.ledger.monthly_average(parse_count(args[0])?)?;
    Ok(format::amount(average))
}

fn cmd_budget(context: &mut ShellContext, args: &[&str]) -> Result<String, CommandError> {
    require_args(args, 1, "BUDGET <amount>")?;
    let report = context.ledger.budget_analysis(parse_amount(args[0])?)?;
    Ok(format::budget(&report))
}

fn cmd_fraud(context: &mut ShellContext, _args: &[&str]) -> Result<String, CommandError> {
    Ok(format::fraud(&context.ledger.detect_fraud()))
}

/// A missing prefix matches every category.
fn cmd_suggest(context: &mut ShellContext, args: &[&str]) -> Result<String, CommandError> {
    let prefix = args.first().copied().unwrap_or_default();
    Ok(format::suggestions(&context.ledger.category_suggestions(prefix)))
}

fn cmd_count(context: &mut ShellContext, args: &[&str]) -> Result<String, CommandError> {
    require_args(args, 1, "COUNT <category>")?;
    let category = args[0];
    Ok(format!("{category}|{}", context.ledger.category_count(category)))
}

//! Rendering of engine results into protocol response lines: fields joined
//! by `|`, list items terminated by `;`, amounts with six decimals.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::ledger::{BudgetReport, CategoryTotal, FraudFinding, FraudReport, RankedExpense, Transaction};

const AMOUNT_DECIMALS: u32 = 6;

pub const SAFE_RESPONSE: &str = "SAFE|No suspicious activity detected";

pub fn amount(value: Decimal) -> String {
    let value = value.round_dp_with_strategy(AMOUNT_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    let value = if value.is_zero() { Decimal::ZERO } else { value };
    // Padded by hand: precision formatting overflows rust_decimal's buffer
    // for values with 26 or more integer digits.
    let rendered = value.to_string();
    let (whole, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    format!("{whole}.{fraction:0<width$}", width = AMOUNT_DECIMALS as usize)
}

pub fn success(balance: Decimal) -> String {
    format!("SUCCESS|{}", amount(balance))
}

pub fn transactions<'a>(rows: impl IntoIterator<Item = &'a Transaction>) -> String {
    rows.into_iter()
        .map(|t| {
            format!(
                "{}|{}|{}|{}|{}|{};",
                t.id,
                amount(t.amount),
                t.category,
                t.description,
                t.date,
                t.kind
            )
        })
        .collect()
}

pub fn expenses(rows: &[RankedExpense]) -> String {
    rows.iter()
        .map(|expense| format!("{}|{};", amount(expense.amount), expense.description))
        .collect()
}

pub fn categories(rows: &[CategoryTotal]) -> String {
    rows.iter()
        .map(|category| format!("{}|{};", category.name, amount(category.total)))
        .collect()
}

pub fn budget(report: &BudgetReport) -> String {
    let head = format!(
        "{}|{}|",
        amount(report.budget),
        amount(report.total_spending)
    );
    if report.is_over() {
        let heaviest: String = report
            .overspend_categories
            .iter()
            .map(|category| format!("{}:{};", category.name, amount(category.total)))
            .collect();
        format!("{head}OVER|{}|{heaviest}", amount(report.delta))
    } else {
        format!("{head}UNDER|{}", amount(report.delta))
    }
}

pub fn fraud(report: &FraudReport) -> String {
    if report.is_safe() {
        return SAFE_RESPONSE.to_string();
    }
    report
        .findings
        .iter()
        .map(|finding| match finding {
            FraudFinding::Duplicate {
                amount: value,
                category,
                date,
                count,
            } => format!("DUPLICATE|{}|{category}|{date}|{count};", amount(*value)),
            FraudFinding::Large {
                amount: value,
                category,
                date,
                ..
            } => format!("LARGE|{}|{category}|{date};", amount(*value)),
        })
        .collect()
}

pub fn suggestions(names: &[String]) -> String {
    names.iter().map(|name| format!("{name};")).collect()
}

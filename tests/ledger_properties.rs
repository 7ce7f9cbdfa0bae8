mod common;

use common::{assert_consistent, seed, Lcg};
use ledger_engine::config::EngineConfig;
use ledger_engine::errors::LedgerError;
use ledger_engine::ledger::{FraudFinding, Ledger, TransactionKind};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn balance_matches_signed_sum_after_every_append() {
    let mut rng = Lcg::new(7);
    let mut ledger = Ledger::new();
    for _ in 0..200 {
        seed(&mut ledger, 1, &mut rng);
        assert_consistent(&ledger, 10);
    }
    assert_eq!(ledger.balance_after(ledger.len()).unwrap(), ledger.current_balance());
}

#[test]
fn append_then_undo_restores_prior_state_exactly() {
    let mut rng = Lcg::new(42);
    let mut ledger = Ledger::new();
    seed(&mut ledger, 30, &mut rng);

    let balance = ledger.current_balance();
    let food = ledger.category_total("Food");
    let count = ledger.len();

    ledger
        .append(dec!(0.07), "Food", "snack", "2024-06-01", TransactionKind::Expense)
        .unwrap();
    ledger.undo_last().unwrap();

    assert_eq!(ledger.current_balance(), balance);
    assert_eq!(ledger.category_total("Food"), food);
    assert_eq!(ledger.len(), count);
    assert_consistent(&ledger, 10);
}

#[test]
fn undo_everything_returns_to_empty_state() {
    let config = EngineConfig {
        undo_limit: 64,
        ..EngineConfig::default()
    };
    let mut rng = Lcg::new(3);
    let mut ledger = Ledger::with_config(&config);
    seed(&mut ledger, 64, &mut rng);

    for _ in 0..64 {
        ledger.undo_last().unwrap();
        assert_consistent(&ledger, config.recent_limit);
    }

    assert_eq!(ledger.current_balance(), Decimal::ZERO);
    assert!(ledger.categories().is_empty());
    assert!(ledger.is_empty());
    assert!(ledger.temporal().is_empty());
    assert_eq!(ledger.recent().count(), 0);
    assert_eq!(ledger.undo_last(), Err(LedgerError::EmptyHistory));
}

#[test]
fn default_undo_depth_stops_after_five() {
    let mut rng = Lcg::new(11);
    let mut ledger = Ledger::new();
    seed(&mut ledger, 20, &mut rng);
    for _ in 0..5 {
        ledger.undo_last().unwrap();
        assert_consistent(&ledger, 10);
    }
    assert_eq!(ledger.undo_last(), Err(LedgerError::EmptyHistory));
    assert_eq!(ledger.len(), 15);
}

#[test]
fn recency_window_holds_last_ten() {
    let mut rng = Lcg::new(5);
    let mut ledger = Ledger::new();
    for n in 0..25 {
        seed(&mut ledger, 1, &mut rng);
        assert_eq!(ledger.recent().count(), (n + 1).min(10));
    }
    assert_consistent(&ledger, 10);
}

#[test]
fn top_expenses_are_sorted_debits_bounded_by_k() {
    let mut rng = Lcg::new(99);
    let mut ledger = Ledger::new();
    seed(&mut ledger, 100, &mut rng);

    let top = ledger.top_expenses(7).unwrap();
    assert_eq!(top.len(), 7);
    assert!(top.windows(2).all(|pair| pair[0].amount >= pair[1].amount));
    for ranked in &top {
        let stored = ledger.transaction(ranked.id).expect("ranked id is stored");
        assert!(stored.is_expense());
        assert_eq!(stored.amount, ranked.amount);
    }

    let largest_debit = ledger
        .list_all()
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .max()
        .unwrap();
    assert_eq!(top[0].amount, largest_debit);
}

#[test]
fn income_food_undo_scenario() {
    let mut ledger = Ledger::new();
    let income = ledger
        .append(dec!(1000), "Salary", "pay", "2024-01-01", TransactionKind::Income)
        .unwrap();
    assert_eq!(income.balance, dec!(1000));

    let food = ledger
        .append(dec!(200), "Food", "groceries", "2024-01-05", TransactionKind::Expense)
        .unwrap();
    assert_eq!(food.balance, dec!(800));
    assert_eq!(ledger.category_total("Food"), Some(dec!(200)));

    assert_eq!(ledger.undo_last().unwrap(), dec!(1000));
    assert_eq!(ledger.category_total("Food"), None);
    assert!(ledger.detect_fraud().is_safe());
}

#[test]
fn three_identical_fuel_expenses_are_one_duplicate() {
    let mut ledger = Ledger::new();
    for _ in 0..3 {
        ledger
            .append(dec!(10), "Fuel", "pump", "2024-03-01", TransactionKind::Expense)
            .unwrap();
    }
    let report = ledger.detect_fraud();
    let duplicates: Vec<_> = report.duplicates().collect();
    assert_eq!(duplicates.len(), 1);
    assert!(matches!(duplicates[0], FraudFinding::Duplicate { count: 3, .. }));
    assert_eq!(report.outliers().count(), 0);
}

#[test]
fn balance_overflow_is_rejected_before_any_index_changes() {
    let mut ledger = Ledger::new();
    ledger
        .append(Decimal::MAX, "Pay", "windfall", "2024-01-01", TransactionKind::Income)
        .unwrap();

    let err = ledger
        .append(dec!(1), "Pay", "bonus", "2024-01-02", TransactionKind::Income)
        .unwrap_err();
    assert_eq!(err, LedgerError::InvalidAmount(dec!(1)));
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.undo_depth(), 1);
    assert_eq!(ledger.temporal().len(), 1);
    assert_eq!(ledger.current_balance(), Decimal::MAX);
    assert_consistent(&ledger, 10);
}

#[test]
fn expense_total_overflow_is_rejected_even_when_balance_fits() {
    let mut ledger = Ledger::new();
    ledger
        .append(Decimal::MAX, "Pay", "windfall", "2024-01-01", TransactionKind::Income)
        .unwrap();
    ledger
        .append(Decimal::MAX, "Rent", "castle", "2024-01-02", TransactionKind::Expense)
        .unwrap();
    assert_eq!(ledger.current_balance(), Decimal::ZERO);

    let err = ledger
        .append(dec!(1), "Food", "apple", "2024-01-03", TransactionKind::Expense)
        .unwrap_err();
    assert_eq!(err, LedgerError::InvalidAmount(dec!(1)));
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.category_total("Food"), None);
    assert_eq!(ledger.total_expenses(), Decimal::MAX);
    assert_consistent(&ledger, 10);

    assert!(ledger.detect_fraud().outliers().next().is_none());
    assert_eq!(ledger.monthly_average(12).unwrap(), Decimal::MAX);
}

#[test]
fn category_is_dropped_when_its_total_reaches_zero() {
    let mut ledger = Ledger::new();
    ledger
        .append(dec!(0), "Gift", "card", "2024-01-01", TransactionKind::Expense)
        .unwrap();
    ledger
        .append(dec!(5), "Gift", "flowers", "2024-01-02", TransactionKind::Expense)
        .unwrap();
    ledger.undo_last().unwrap();

    assert_eq!(ledger.category_total("Gift"), None);
    assert_eq!(ledger.category_count("Gift"), 0);
    assert!(ledger.top_categories(5).unwrap().is_empty());
    assert_consistent(&ledger, 10);
}

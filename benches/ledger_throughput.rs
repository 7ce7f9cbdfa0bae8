use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use ledger_engine::ledger::{Ledger, TransactionKind};
use rust_decimal::Decimal;

const CATEGORIES: [&str; 6] = ["Food", "Fuel", "Rent", "Books", "Travel", "Health"];

fn build_sample_ledger(txn_count: usize) -> Ledger {
    let mut ledger = Ledger::new();
    for idx in 0..txn_count {
        let amount = Decimal::new(500 + (idx % 9_000) as i64, 2);
        let date = format!("2025-{:02}-{:02}", 1 + idx % 12, 1 + idx % 28);
        let kind = if idx % 5 == 0 {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        };
        ledger
            .append(amount, CATEGORIES[idx % CATEGORIES.len()], "bench", date, kind)
            .expect("bench amounts are non-negative");
    }
    ledger
}

fn bench_mutations(c: &mut Criterion) {
    c.bench_function("append_10k", |b| {
        b.iter(|| black_box(build_sample_ledger(10_000)))
    });

    c.bench_function("append_undo_cycle", |b| {
        b.iter_batched(
            || build_sample_ledger(1_000),
            |mut ledger| {
                ledger
                    .append(Decimal::ONE, "Food", "bench", "2025-06-01", TransactionKind::Expense)
                    .unwrap();
                ledger.undo_last().unwrap();
                ledger
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_queries(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));

    c.bench_function("balance_lookup_10k", |b| {
        b.iter(|| black_box(ledger.current_balance()))
    });
    c.bench_function("top_expenses_k10_10k", |b| {
        b.iter(|| black_box(ledger.top_expenses(10).unwrap()))
    });
    c.bench_function("top_categories_k3_10k", |b| {
        b.iter(|| black_box(ledger.top_categories(3).unwrap()))
    });
    c.bench_function("fraud_scan_10k", |b| b.iter(|| black_box(ledger.detect_fraud())));
}

criterion_group!(benches, bench_mutations, bench_queries);
criterion_main!(benches);

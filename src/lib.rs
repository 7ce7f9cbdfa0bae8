#![doc(test(attr(deny(warnings))))]

//! Ledger Engine keeps an append-mostly ledger of transactions together with
//! derived indexes (running balance, category aggregates, temporal indexes,
//! a recency window and a bounded undo history) consistent after every
//! append and undo, and serves ranked and analytical queries over them.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Ledger engine tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}

#![doc(test(attr(deny(warnings))))]

//! A minimal double-entry bookkeeping data model: accounts grouped into
//! a chart of accounts, balanced transactions made of journal entries,
//! and a chronologically ordered journal, all renderable as plain text.

pub mod bookkeeper;
pub mod errors;
pub mod ledger;

pub use bookkeeper::Bookkeeper;
pub use errors::BookkeepingError;
pub use ledger::{Account, ChartOfAccounts, Journal, JournalEntry, Transaction, TransactionTime};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("bookkeeping_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("bookkeeping_core tracing initialized.");
    });
}

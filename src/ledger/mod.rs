//! Bookkeeping domain models: accounts, transactions, and the journal.

pub mod account;
pub mod chart;
pub mod journal;
pub mod transaction;

pub use account::Account;
pub use chart::ChartOfAccounts;
pub use journal::Journal;
pub use transaction::{JournalEntry, Transaction, TransactionTime};

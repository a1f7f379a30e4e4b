use thiserror::Error;

/// Error type that captures bookkeeping validation failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookkeepingError {
    #[error("timestamp must be naive or UTC, got offset '{0}'")]
    DisallowedTimezone(String),
    #[error("a transaction needs at least one journal entry")]
    EmptyEntries,
    #[error("negative amount on account {account_number}: debit {debit}, credit {credit}")]
    NegativeAmount {
        account_number: u32,
        debit: i64,
        credit: i64,
    },
    #[error("unbalanced journal entries: debits {debits} != credits {credits}")]
    UnbalancedEntries { debits: i128, credits: i128 },
    #[error("journal entries are already attached")]
    EntriesAlreadyAttached,
    #[error("transaction '{0}' has not been analyzed")]
    UnanalyzedTransaction(String),
}

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::transaction::Transaction;
use crate::errors::BookkeepingError;

/// Chronologically ordered collection of analyzed transactions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Journal {
    transactions: Vec<Transaction>,
    start_date: Option<DateTime<Utc>>,
    last_date: Option<DateTime<Utc>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an analyzed transaction, keeping the sequence sorted by
    /// timestamp and the date range up to date.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<(), BookkeepingError> {
        if !transaction.is_analyzed() {
            return Err(BookkeepingError::UnanalyzedTransaction(
                transaction.title.clone(),
            ));
        }

        let stamp = transaction.utc_datetime();
        self.start_date = Some(self.start_date.map_or(stamp, |date| date.min(stamp)));
        self.last_date = Some(self.last_date.map_or(stamp, |date| date.max(stamp)));
        self.transactions.push(transaction);
        self.transactions.sort_by_key(Transaction::utc_datetime);
        tracing::debug!(count = self.transactions.len(), "transaction recorded");
        Ok(())
    }

    /// Transactions in ascending timestamp order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Earliest transaction timestamp, unset while the journal is empty.
    pub fn start_date(&self) -> Option<DateTime<Utc>> {
        self.start_date
    }

    /// Latest transaction timestamp, unset while the journal is empty.
    pub fn last_date(&self) -> Option<DateTime<Utc>> {
        self.last_date
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Journal {}", "=".repeat(25), "=".repeat(25))?;
        for transaction in &self.transactions {
            writeln!(f, "{transaction}")?;
        }
        Ok(())
    }
}

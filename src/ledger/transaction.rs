use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::Account;
use crate::errors::BookkeepingError;

const DETAIL_WIDTH: usize = 50;
const AMOUNT_WIDTH: usize = 12;

/// One line of a transaction: an optional detail label, the account it
/// touches, and the debit/credit amounts in minor currency units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JournalEntry {
    pub detail: Option<String>,
    pub account: Account,
    pub debit: i64,
    pub credit: i64,
}

impl JournalEntry {
    pub fn new(detail: Option<String>, account: Account, debit: i64, credit: i64) -> Self {
        Self {
            detail,
            account,
            debit,
            credit,
        }
    }

    /// Entry debiting `amount` against `account`.
    pub fn debit(account: Account, amount: i64) -> Self {
        Self::new(None, account, amount, 0)
    }

    /// Entry crediting `amount` against `account`.
    pub fn credit(account: Account, amount: i64) -> Self {
        Self::new(None, account, 0, amount)
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Timestamp input accepted by [`Transaction::new`].
///
/// Naive timestamps are reinterpreted as UTC without conversion; fixed
/// offsets are accepted only when the offset is zero.
#[derive(Debug, Clone, Copy)]
pub enum TransactionTime {
    Naive(NaiveDateTime),
    Utc(DateTime<Utc>),
    Fixed(DateTime<FixedOffset>),
}

impl From<NaiveDateTime> for TransactionTime {
    fn from(value: NaiveDateTime) -> Self {
        Self::Naive(value)
    }
}

impl From<DateTime<Utc>> for TransactionTime {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Utc(value)
    }
}

impl From<DateTime<FixedOffset>> for TransactionTime {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Fixed(value)
    }
}

impl TransactionTime {
    fn into_utc(self) -> Result<DateTime<Utc>, BookkeepingError> {
        match self {
            TransactionTime::Naive(naive) => Ok(naive.and_utc()),
            TransactionTime::Utc(utc) => Ok(utc),
            TransactionTime::Fixed(fixed) if fixed.offset().local_minus_utc() == 0 => {
                Ok(fixed.with_timezone(&Utc))
            }
            TransactionTime::Fixed(fixed) => Err(BookkeepingError::DisallowedTimezone(
                fixed.offset().to_string(),
            )),
        }
    }
}

/// An economic event at a point in time.
///
/// A transaction starts unanalyzed and becomes analyzed once a balanced
/// batch of journal entries has been attached; only analyzed
/// transactions are accepted by a [`Journal`](super::journal::Journal).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub title: String,
    utc_datetime: DateTime<Utc>,
    #[serde(default)]
    journal_entries: Vec<JournalEntry>,
}

impl Transaction {
    /// Creates an unanalyzed transaction after normalizing the timestamp
    /// to UTC.
    pub fn new(
        title: impl Into<String>,
        when: impl Into<TransactionTime>,
    ) -> Result<Self, BookkeepingError> {
        Ok(Self {
            title: title.into(),
            utc_datetime: when.into().into_utc()?,
            journal_entries: Vec::new(),
        })
    }

    pub fn utc_datetime(&self) -> DateTime<Utc> {
        self.utc_datetime
    }

    /// True once journal entries have been validated and attached.
    pub fn is_analyzed(&self) -> bool {
        !self.journal_entries.is_empty()
    }

    pub fn journal_entries(&self) -> &[JournalEntry] {
        &self.journal_entries
    }

    /// Checks a batch of entries without attaching them: the batch must
    /// be non-empty, amounts non-negative, and total debits equal total
    /// credits.
    pub fn validate_entries(entries: &[JournalEntry]) -> Result<(), BookkeepingError> {
        if entries.is_empty() {
            return Err(BookkeepingError::EmptyEntries);
        }

        let mut debits: i128 = 0;
        let mut credits: i128 = 0;
        for entry in entries {
            if entry.debit < 0 || entry.credit < 0 {
                return Err(BookkeepingError::NegativeAmount {
                    account_number: entry.account.account_number,
                    debit: entry.debit,
                    credit: entry.credit,
                });
            }
            debits += entry.debit as i128;
            credits += entry.credit as i128;
        }

        if debits != credits {
            return Err(BookkeepingError::UnbalancedEntries { debits, credits });
        }
        Ok(())
    }

    /// Validates and attaches a batch of entries.
    ///
    /// Entries attach exactly once and all-or-nothing: a failed batch
    /// leaves the transaction unanalyzed, and a second call on an
    /// analyzed transaction is rejected rather than overwriting.
    pub fn add_journal_entries(
        &mut self,
        entries: Vec<JournalEntry>,
    ) -> Result<(), BookkeepingError> {
        if self.is_analyzed() {
            return Err(BookkeepingError::EntriesAlreadyAttached);
        }
        Self::validate_entries(&entries)?;
        self.journal_entries = entries;
        tracing::debug!(
            title = %self.title,
            entries = self.journal_entries.len(),
            "journal entries attached"
        );
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "======== Transaction ===========")?;
        writeln!(f, "{}", self.title)?;
        for entry in &self.journal_entries {
            match &entry.detail {
                Some(detail) => writeln!(
                    f,
                    "{:<detail_width$}{:<amount_width$}{:<amount_width$}",
                    format!("{}| {}", entry.account.account_number, detail.trim()),
                    entry.debit,
                    entry.credit,
                    detail_width = DETAIL_WIDTH,
                    amount_width = AMOUNT_WIDTH,
                )?,
                None => writeln!(
                    f,
                    "{}{:<amount_width$}{:<amount_width$}",
                    entry.account,
                    entry.debit,
                    entry.credit,
                    amount_width = AMOUNT_WIDTH,
                )?,
            }
        }
        Ok(())
    }
}

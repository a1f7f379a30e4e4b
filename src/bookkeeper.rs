use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::BookkeepingError;
use crate::ledger::{Account, ChartOfAccounts, Journal, Transaction};

/// Facade tying a chart of accounts to the journal recorded against it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bookkeeper {
    chart_of_accounts: ChartOfAccounts,
    journal: Journal,
}

impl Bookkeeper {
    pub fn new(chart_of_accounts: ChartOfAccounts) -> Self {
        Self {
            chart_of_accounts,
            journal: Journal::new(),
        }
    }

    pub fn chart_of_accounts(&self) -> &ChartOfAccounts {
        &self.chart_of_accounts
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn add_account(&mut self, account: Account) {
        self.chart_of_accounts.add_account(account);
    }

    /// Records an analyzed transaction in the journal.
    pub fn record(&mut self, transaction: Transaction) -> Result<(), BookkeepingError> {
        self.journal.add_transaction(transaction)
    }
}

impl fmt::Display for Bookkeeper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.chart_of_accounts, self.journal)
    }
}

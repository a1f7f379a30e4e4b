use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::account::{Account, NUMBER_WIDTH, TITLE_WIDTH};

/// A deduplicated chart of accounts, kept sorted by account number.
///
/// Internally a `BTreeSet` keyed by the [`Account`] ordering, so only
/// add, iterate, and render are exposed rather than the full set
/// interface.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartOfAccounts {
    accounts: BTreeSet<Account>,
}

impl ChartOfAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a chart from any account sequence, collapsing duplicates.
    pub fn from_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let mut chart = Self::new();
        for account in accounts {
            chart.add_account(account);
        }
        chart
    }

    /// Inserts an account; adding an equal account again is a no-op.
    pub fn add_account(&mut self, account: Account) {
        if !self.accounts.insert(account) {
            tracing::debug!("duplicate account ignored");
        }
    }

    /// Accounts in ascending (account_number, title) order.
    pub fn sorted_accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    pub fn contains(&self, account: &Account) -> bool {
        self.accounts.contains(account)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl FromIterator<Account> for ChartOfAccounts {
    fn from_iter<I: IntoIterator<Item = Account>>(iter: I) -> Self {
        Self::from_accounts(iter)
    }
}

impl fmt::Display for ChartOfAccounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = format!("|{}|{}", "-".repeat(NUMBER_WIDTH), "-".repeat(TITLE_WIDTH));
        writeln!(f, "{} Chart Of Accounts {}", "=".repeat(25), "=".repeat(25))?;
        writeln!(
            f,
            "|{:>number_width$}|{:<title_width$}",
            "ACCOUNT NUMBER",
            "TITLE",
            number_width = NUMBER_WIDTH,
            title_width = TITLE_WIDTH,
        )?;
        for account in self.sorted_accounts() {
            writeln!(f, "{rule}")?;
            writeln!(f, "|{account}")?;
        }
        writeln!(f, "{rule}")
    }
}

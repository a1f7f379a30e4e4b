use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

pub(crate) const NUMBER_WIDTH: usize = 20;
pub(crate) const TITLE_WIDTH: usize = 80;

/// A ledger account identified by its title and account number.
///
/// Accounts are plain immutable values: construct one, then share it by
/// cloning into charts and journal entries. Equality and hashing cover
/// both fields, so two accounts with the same number but different
/// titles are distinct set elements.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Account {
    pub title: String,
    pub account_number: u32,
}

impl Account {
    /// Creates an account; the title and number are taken as-is.
    pub fn new(title: impl Into<String>, account_number: u32) -> Self {
        Self {
            title: title.into(),
            account_number,
        }
    }
}

/// Accounts order by account number; equal numbers fall back to the title.
impl Ord for Account {
    fn cmp(&self, other: &Self) -> Ordering {
        self.account_number
            .cmp(&other.account_number)
            .then_with(|| self.title.cmp(&other.title))
    }
}

impl PartialOrd for Account {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>number_width$}| {:<title_width$}",
            self.account_number,
            self.title,
            number_width = NUMBER_WIDTH,
            title_width = TITLE_WIDTH,
        )
    }
}

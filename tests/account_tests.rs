use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use bookkeeping_core::Account;

fn hash_of(account: &Account) -> u64 {
    let mut hasher = DefaultHasher::new();
    account.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn accounts_are_equal_only_when_title_and_number_match() {
    let cash = Account::new("Cash", 101);

    assert_eq!(cash, Account::new("Cash", 101));
    assert_ne!(cash, Account::new("Cash", 102));
    assert_ne!(cash, Account::new("Petty Cash", 101));
}

#[test]
fn equal_accounts_hash_alike() {
    let a = Account::new("Cash", 101);
    let b = Account::new("Cash", 101);

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn ordering_follows_account_number() {
    let cash = Account::new("Cash", 101);
    let capital_stock = Account::new("Capital Stock", 301);

    assert!(cash < capital_stock);
    assert!(capital_stock > cash);
    assert_eq!(cash.cmp(&cash), Ordering::Equal);
}

#[test]
fn equal_numbers_break_ties_by_title() {
    let building = Account::new("Building", 152);
    let barn = Account::new("Barn", 152);

    assert!(barn < building);
    assert_ne!(barn, building);
}

#[test]
fn display_is_a_fixed_width_two_column_line() {
    let cash = Account::new("Cash", 101);
    let line = cash.to_string();

    assert_eq!(line, format!("{:>20}| {:<80}", 101, "Cash"));
    assert_eq!(line.len(), 20 + 2 + 80);
    assert_eq!(line.trim(), "101| Cash");
}

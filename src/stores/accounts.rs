use std::fmt;

use rust_decimal::Decimal;

use crate::dto::AccountKind;
use crate::Error;

/// Account numbers are handed out sequentially starting from here.
const FIRST_ACCOUNT_NUMBER: u32 = 1000;

/// A single bank account. Owned exclusively by the [`AccountsStore`];
/// callers borrow it for lookups and mutate it in place.
#[derive(Debug)]
pub struct Account {
    number: u32,
    holder: String,
    kind: AccountKind,
    balance: Decimal,
}

impl Account {
    fn new(number: u32, holder: String, initial_balance: Decimal, kind: AccountKind) -> Self {
        Self {
            number,
            holder,
            kind,
            balance: initial_balance,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Adds `amount` to the balance. Rejects non-positive amounts without
    /// changing state. There is no upper bound on the amount.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), Error> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount);
        }
        self.balance += amount;
        Ok(())
    }

    /// Removes `amount` from the balance. Rejects non-positive amounts and
    /// amounts exceeding the current balance without changing state.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), Error> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount);
        }
        if amount > self.balance {
            return Err(Error::InsufficientBalance);
        }
        self.balance -= amount;
        Ok(())
    }
}

impl fmt::Display for Account {
    /// Renders the account info block shown by the interactive session.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Account Details:", self.kind.as_str())?;
        writeln!(f, "Account Holder: {}", self.holder)?;
        writeln!(f, "Account Number: {}", self.number)?;
        write!(f, "Balance: ${}", self.balance)
    }
}

/// Ordered collection of accounts plus the account number allocator.
///
/// Accounts are kept in insertion order and are never removed. Lookup is a
/// linear scan, which is fine at interactive scale.
pub struct AccountsStore {
    accounts: Vec<Account>,
    next_number: u32,
}

impl AccountsStore {
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
            next_number: FIRST_ACCOUNT_NUMBER,
        }
    }

    /// Creates a new account with the next sequential number and appends it.
    ///
    /// The counter advances only here, so a creation attempt rejected during
    /// input parsing never consumes a number.
    pub fn open(&mut self, holder: String, initial_balance: Decimal, kind: AccountKind) -> &Account {
        let number = self.next_number;
        self.next_number += 1;
        self.accounts
            .push(Account::new(number, holder, initial_balance, kind));
        &self.accounts[self.accounts.len() - 1]
    }

    /// Finds an account by number, or returns an error if it doesn't exist.
    pub fn get(&self, number: u32) -> Result<&Account, Error> {
        self.accounts
            .iter()
            .find(|account| account.number == number)
            .ok_or(Error::AccountNotFound(number))
    }

    /// Mutable variant of [`AccountsStore::get`].
    pub fn get_mut(&mut self, number: u32) -> Result<&mut Account, Error> {
        self.accounts
            .iter_mut()
            .find(|account| account.number == number)
            .ok_or(Error::AccountNotFound(number))
    }

    /// Iterates accounts in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for AccountsStore {
    fn default() -> Self {
        Self::new()
    }
}

use rust_decimal::Decimal;
use tracing::debug;

use crate::dto::AccountKind;
use crate::stores::{Account, AccountsStore};
use crate::Error;

/// The in-memory bank: resolves account numbers against the store and
/// applies deposits, withdrawals and transfers.
///
/// All state lives for the duration of the process and is discarded on
/// exit. A single interactive session is the only mutator.
pub struct Bank {
    accounts: AccountsStore,
}

impl Bank {
    pub fn new() -> Self {
        Self {
            accounts: AccountsStore::new(),
        }
    }

    /// Opens a new account and returns a borrow of it for display.
    pub fn open_account(
        &mut self,
        holder: String,
        initial_balance: Decimal,
        kind: AccountKind,
    ) -> &Account {
        let account = self.accounts.open(holder, initial_balance, kind);
        debug!(
            number = account.number(),
            kind = account.kind().as_str(),
            "account opened"
        );
        account
    }

    pub fn deposit(&mut self, number: u32, amount: Decimal) -> Result<(), Error> {
        self.accounts.get_mut(number)?.deposit(amount)?;
        debug!(number, %amount, "deposit accepted");
        Ok(())
    }

    pub fn withdraw(&mut self, number: u32, amount: Decimal) -> Result<(), Error> {
        self.accounts.get_mut(number)?.withdraw(amount)?;
        debug!(number, %amount, "withdrawal accepted");
        Ok(())
    }

    /// Moves `amount` from one account to another.
    ///
    /// Both accounts are resolved before anything is mutated, so a missing
    /// account on either side leaves both untouched. The withdrawal runs
    /// first; the deposit leg cannot reject, since a successful withdrawal
    /// proves the amount is positive. If a deposit failure mode is ever
    /// introduced, the withdrawn amount must be re-deposited into the source.
    pub fn transfer(&mut self, from: u32, to: u32, amount: Decimal) -> Result<(), Error> {
        self.accounts.get(from)?;
        self.accounts.get(to)?;

        self.accounts.get_mut(from)?.withdraw(amount)?;
        self.accounts.get_mut(to)?.deposit(amount)?;
        debug!(from, to, %amount, "transfer completed");
        Ok(())
    }

    /// Iterates accounts in creation order for display.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bank_with_alice_and_bob() -> Bank {
        let mut bank = Bank::new();
        bank.open_account("Alice".to_string(), dec!(100), AccountKind::Savings);
        bank.open_account("Bob".to_string(), dec!(50), AccountKind::Checking);
        bank
    }

    fn balance(bank: &Bank, number: u32) -> Decimal {
        bank.accounts
            .get(number)
            .map(Account::balance)
            .unwrap()
    }

    #[test]
    fn test_alice_and_bob_walkthrough() {
        let mut bank = Bank::new();

        let alice = bank.open_account("Alice".to_string(), dec!(100), AccountKind::Savings);
        assert_eq!(alice.number(), 1000);
        assert_eq!(alice.balance(), dec!(100));

        let bob = bank.open_account("Bob".to_string(), dec!(50), AccountKind::Checking);
        assert_eq!(bob.number(), 1001);
        assert_eq!(bob.balance(), dec!(50));

        bank.transfer(1000, 1001, dec!(30)).unwrap();
        assert_eq!(balance(&bank, 1000), dec!(70));
        assert_eq!(balance(&bank, 1001), dec!(80));

        assert_eq!(
            bank.withdraw(1000, dec!(1000)),
            Err(Error::InsufficientBalance)
        );
        assert_eq!(balance(&bank, 1000), dec!(70));

        assert_eq!(bank.deposit(1001, dec!(-5)), Err(Error::InvalidAmount));
        assert_eq!(balance(&bank, 1001), dec!(80));

        assert_eq!(
            bank.accounts.get(9999).unwrap_err(),
            Error::AccountNotFound(9999)
        );
    }

    #[test]
    fn test_deposit_to_unknown_account() {
        let mut bank = bank_with_alice_and_bob();
        assert_eq!(
            bank.deposit(9999, dec!(10)),
            Err(Error::AccountNotFound(9999))
        );
    }

    #[test]
    fn test_withdraw_from_unknown_account() {
        let mut bank = bank_with_alice_and_bob();
        assert_eq!(
            bank.withdraw(9999, dec!(10)),
            Err(Error::AccountNotFound(9999))
        );
    }

    #[test]
    fn test_transfer_conserves_total_balance() {
        let mut bank = bank_with_alice_and_bob();
        let total_before: Decimal = bank.accounts().map(Account::balance).sum();

        bank.transfer(1000, 1001, dec!(42.42)).unwrap();

        let total_after: Decimal = bank.accounts().map(Account::balance).sum();
        assert_eq!(total_before, total_after);
        assert_eq!(balance(&bank, 1000), dec!(57.58));
        assert_eq!(balance(&bank, 1001), dec!(92.42));
    }

    #[test]
    fn test_transfer_with_insufficient_balance_mutates_nothing() {
        let mut bank = bank_with_alice_and_bob();

        assert_eq!(
            bank.transfer(1000, 1001, dec!(100.01)),
            Err(Error::InsufficientBalance)
        );
        assert_eq!(balance(&bank, 1000), dec!(100));
        assert_eq!(balance(&bank, 1001), dec!(50));
    }

    #[test]
    fn test_transfer_with_missing_source_mutates_nothing() {
        let mut bank = bank_with_alice_and_bob();

        assert_eq!(
            bank.transfer(9999, 1001, dec!(10)),
            Err(Error::AccountNotFound(9999))
        );
        assert_eq!(balance(&bank, 1001), dec!(50));
    }

    #[test]
    fn test_transfer_with_missing_destination_mutates_nothing() {
        let mut bank = bank_with_alice_and_bob();

        assert_eq!(
            bank.transfer(1000, 9999, dec!(10)),
            Err(Error::AccountNotFound(9999))
        );
        assert_eq!(balance(&bank, 1000), dec!(100));
    }

    #[test]
    fn test_transfer_rejects_non_positive_amount() {
        let mut bank = bank_with_alice_and_bob();

        assert_eq!(
            bank.transfer(1000, 1001, dec!(0)),
            Err(Error::InvalidAmount)
        );
        assert_eq!(balance(&bank, 1000), dec!(100));
        assert_eq!(balance(&bank, 1001), dec!(50));
    }

    #[test]
    fn test_transfer_to_same_account_is_a_net_noop() {
        let mut bank = bank_with_alice_and_bob();

        bank.transfer(1000, 1000, dec!(10)).unwrap();
        assert_eq!(balance(&bank, 1000), dec!(100));
    }

    #[test]
    fn test_negative_initial_balance_is_allowed() {
        // Creation performs no positivity check on the opening balance.
        let mut bank = Bank::new();
        let account = bank.open_account("Dana".to_string(), dec!(-20), AccountKind::Checking);
        assert_eq!(account.balance(), dec!(-20));
    }
}

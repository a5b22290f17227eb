//! The runner drives an interactive teller session: it presents the menu,
//! reads choices, invokes the bank operations and prints outcomes until the
//! user selects Exit or the input ends.
//!
//! This module provides both a synchronous and an asynchronous runner
//! implementation, generic over the reader and writer.

mod async_runner;
mod sync_runner;

pub use async_runner::run as run_async;
pub use sync_runner::run;

/// Main menu, shown before every choice. The original banner ends with an
/// inline prompt, so the trailing line is left unterminated.
pub(crate) const MENU: &str = "
Bank Account Management System
1. Create Account
2. Deposit Money
3. Withdraw Money
4. Transfer Money
5. Display All Accounts
6. Exit
Enter your choice: ";

/// Account type selector shown during account creation.
pub(crate) const KIND_PROMPT: &str = "Choose account type:
1. Savings Account
2. Checking Account
Enter choice (1 or 2): ";

/// Separator between account blocks in the full listing.
pub(crate) const ACCOUNT_SEPARATOR: &str = "-----------------------";

//! Domain-specific errors for the account management system.
//!
//! Contains error variants for common failure cases like:
//! - Account-related errors (not found)
//! - Amount validation errors (non-positive, insufficient balance)
//! - Interactive input errors (menu choice, account type, unparsable numbers)
//!
//! These errors represent business logic failures rather than
//! technical errors like I/O issues. All of them are recoverable:
//! the interactive session prints the message and returns to the menu.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Amount must be positive!")]
    InvalidAmount,
    #[error("Insufficient balance!")]
    InsufficientBalance,
    #[error("Account {0} not found!")]
    AccountNotFound(u32),
    #[error("Invalid account type! Account creation failed.")]
    InvalidAccountType,
    #[error("Invalid choice! Please try again.")]
    InvalidMenuChoice,
    #[error("Invalid number!")]
    InvalidNumber,
}

//! Storage layer for the account management system. Provides storage for
//! account balances and holder details ([`AccountsStore`]).
//!
//! Current implementation is optimized for synchronous, direct memory
//! access by a single interactive session.

mod accounts;

pub use accounts::{Account, AccountsStore};

mod dto;
mod engine;
mod error;
mod prompt_utils;
mod runner;
mod stores;

pub use dto::{AccountKind, MenuChoice};
pub use engine::Bank;
pub use error::Error;
pub use runner::{run, run_async};
pub use stores::Account;

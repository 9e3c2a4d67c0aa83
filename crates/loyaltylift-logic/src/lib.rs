//! LoyaltyLift command logic.
//!
//! Commands are small, stateless values that read the model's filtered views,
//! validate, compute replacement records and write them back. The
//! [`LogicManager`] runs one command at a time and persists the address book
//! after every success.

pub mod commands;
pub mod error;
pub mod manager;
pub mod result;

#[cfg(test)]
mod testutil;

pub use commands::Command;
pub use error::{CommandError, LogicError};
pub use manager::LogicManager;
pub use result::{CommandResult, ListViewAction};

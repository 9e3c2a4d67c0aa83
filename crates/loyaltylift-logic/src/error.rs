//! Error types for command execution.

use loyaltylift_domain::error::TIER_ORDERING_RULE;
use loyaltylift_domain::DomainError;
use std::fmt;
use thiserror::Error;

/// Kind of list an index was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// The displayed customer list
    Customer,
    /// The displayed order list
    Order,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListKind::Customer => f.write_str("customer"),
            ListKind::Order => f.write_str("order"),
        }
    }
}

/// Errors a command can fail with.
///
/// A failed command leaves the model exactly as it found it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The index does not point into the currently displayed list
    #[error("The {0} index provided is invalid")]
    IndexOutOfRange(ListKind),

    /// A threshold edit would break NONE < BRONZE < SILVER < GOLD
    #[error("{}", TIER_ORDERING_RULE)]
    InvalidTierThreshold,

    /// The result would collide with a different existing customer
    #[error("This customer already exists in the address book")]
    DuplicateCustomer,

    /// A payload value failed its constraints
    #[error("{0}")]
    InvalidValue(DomainError),
}

impl From<DomainError> for CommandError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::DuplicateCustomer => CommandError::DuplicateCustomer,
            DomainError::InvalidTierThreshold => CommandError::InvalidTierThreshold,
            other => CommandError::InvalidValue(other),
        }
    }
}

/// Errors surfaced by the [`crate::LogicManager`].
#[derive(Debug, Error)]
pub enum LogicError {
    /// The command itself failed
    #[error(transparent)]
    Command(#[from] CommandError),

    /// The command succeeded but the address book could not be saved
    #[error("Could not save data to file: {0}")]
    Storage(String),
}

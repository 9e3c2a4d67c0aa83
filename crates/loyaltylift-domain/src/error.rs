//! Error types for domain operations

use thiserror::Error;

/// Message shown whenever a tier threshold edit would break the tier ordering.
pub const TIER_ORDERING_RULE: &str = "Point threshold in each tier must adhere to the following:\n\
     No tier < Bronze < Silver < Gold";

/// Errors raised by value-object construction and model mutation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A field value failed its validity predicate
    #[error("{constraints}")]
    InvalidValue {
        /// Name of the offending field (e.g. `Email`)
        field: &'static str,
        /// Human-readable constraints the value must satisfy
        constraints: &'static str,
    },

    /// An index was not a positive integer
    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,

    /// The customer would collide with another existing customer
    #[error("This customer already exists in the address book")]
    DuplicateCustomer,

    /// The customer to replace or remove is not in the address book
    #[error("Customer not found in the address book")]
    CustomerNotFound,

    /// A threshold edit would break NONE < BRONZE < SILVER < GOLD
    #[error("{}", TIER_ORDERING_RULE)]
    InvalidTierThreshold,

    /// An unknown tier name was supplied
    #[error("Tier must be NONE, BRONZE, SILVER or GOLD, got: {0}")]
    InvalidTierName(String),
}

impl DomainError {
    /// Shorthand for an [`DomainError::InvalidValue`]
    pub fn invalid(field: &'static str, constraints: &'static str) -> Self {
        Self::InvalidValue { field, constraints }
    }
}

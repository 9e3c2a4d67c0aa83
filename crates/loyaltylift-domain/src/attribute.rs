//! Attribute value objects shared by customers and orders
//!
//! Each attribute validates itself on construction, so any value that exists
//! is known to satisfy its constraints.

use crate::DomainError;
use std::fmt;

/// A customer's or order's name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    /// Constraints shown when a name is rejected
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    /// Create a validated name
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(DomainError::invalid("Name", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(value))
    }

    /// Returns true if `value` is a valid name
    pub fn is_valid(value: &str) -> bool {
        let mut chars = value.chars();
        match chars.next() {
            Some(first) if first.is_alphanumeric() => {
                chars.all(|c| c.is_alphanumeric() || c == ' ')
            }
            _ => false,
        }
    }

    /// The name as entered
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A postal address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    /// Constraints shown when an address is rejected
    pub const MESSAGE_CONSTRAINTS: &'static str = "Addresses can take any values, and it should not be blank";

    /// Create a validated address
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(DomainError::invalid("Address", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(value))
    }

    /// Returns true if `value` is a valid address
    pub fn is_valid(value: &str) -> bool {
        value.chars().next().is_some_and(|c| !c.is_whitespace())
    }

    /// The address as entered
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form note; may be empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Note(String);

impl Note {
    /// Create a note
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The note text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the note has no text
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A label attached to a customer
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    /// Constraints shown when a tag is rejected
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    /// Create a validated tag
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(DomainError::invalid("Tag", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(value))
    }

    /// Returns true if `value` is a valid tag name
    pub fn is_valid(value: &str) -> bool {
        !value.is_empty() && value.chars().all(char::is_alphanumeric)
    }

    /// The tag name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

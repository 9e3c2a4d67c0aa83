//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::AddressBook;
use std::path::Path;

/// Trait for loading and saving the address book
///
/// Implemented by the infrastructure layer (loyaltylift-store)
pub trait AddressBookStorage {
    /// Error type for storage operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Location the address book is read from and written to
    fn address_book_path(&self) -> &Path;

    /// Read the address book; `Ok(None)` if nothing has been saved yet
    fn read_address_book(&self) -> Result<Option<AddressBook>, Self::Error>;

    /// Write the address book, replacing whatever was stored before
    fn save_address_book(&self, address_book: &AddressBook) -> Result<(), Self::Error>;
}

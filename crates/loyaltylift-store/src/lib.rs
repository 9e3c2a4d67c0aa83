//! LoyaltyLift Storage Layer
//!
//! Implements the `AddressBookStorage` trait on top of a single JSON file.
//!
//! # Architecture
//!
//! - Customers and orders are converted to flat records ([`adapted`])
//! - The whole address book is written as one pretty-printed JSON document
//! - Reading validates every field and reports the first problem found
//!
//! # Examples
//!
//! ```no_run
//! use loyaltylift_domain::traits::AddressBookStorage;
//! use loyaltylift_store::JsonAddressBookStorage;
//!
//! let storage = JsonAddressBookStorage::new("data/addressbook.json");
//! let book = storage.read_address_book().unwrap().unwrap_or_default();
//! storage.save_address_book(&book).unwrap();
//! ```

#![warn(missing_docs)]

pub mod adapted;
pub mod sample;

pub use adapted::{JsonAdaptedCustomer, JsonAdaptedOrder, JsonSerializableAddressBook};

use loyaltylift_domain::traits::AddressBookStorage;
use loyaltylift_domain::{AddressBook, DomainError};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// A mandatory field is absent from a record
    #[error("{entity}'s {field} field is missing!")]
    MissingField {
        /// Kind of record (`Customer`, `Order`, ...)
        entity: &'static str,
        /// Name of the absent field
        field: &'static str,
    },

    /// A field is present but breaks its own constraints
    #[error("{0}")]
    InvalidValue(#[from] DomainError),

    /// A record is structurally inconsistent
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// Two customers in the file are the same customer
    #[error("Customers list contains duplicate customer(s).")]
    DuplicateCustomer,

    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Address book storage backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonAddressBookStorage {
    path: PathBuf,
}

impl JsonAddressBookStorage {
    /// Create a storage for the file at `path`
    ///
    /// Nothing is read or created until the first read or save.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl AddressBookStorage for JsonAddressBookStorage {
    type Error = StoreError;

    fn address_book_path(&self) -> &Path {
        &self.path
    }

    fn read_address_book(&self) -> Result<Option<AddressBook>, Self::Error> {
        if !self.path.exists() {
            tracing::info!("Data file {} not found", self.path.display());
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        let serialized: JsonSerializableAddressBook = serde_json::from_str(&contents)?;
        let book = serialized.to_model()?;

        tracing::info!(
            "Loaded {} customer(s) and {} order(s) from {}",
            book.customers().len(),
            book.orders().len(),
            self.path.display()
        );
        Ok(Some(book))
    }

    fn save_address_book(&self, address_book: &AddressBook) -> Result<(), Self::Error> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let serialized = JsonSerializableAddressBook::from(address_book);
        let contents = serde_json::to_string_pretty(&serialized)?;
        fs::write(&self.path, contents)?;

        tracing::debug!("Saved address book to {}", self.path.display());
        Ok(())
    }
}

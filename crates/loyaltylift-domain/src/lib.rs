//! LoyaltyLift Domain Layer
//!
//! This crate contains the core business logic and domain model for LoyaltyLift.
//! It defines the value objects, entities, and the in-memory model that every
//! other layer depends upon. It performs no I/O.
//!
//! ## Key Concepts
//!
//! - **Points**: A spendable balance paired with a lifetime cumulative total
//! - **Tier**: One of four loyalty levels (none → bronze → silver → gold)
//! - **Tier Table**: The administratively editable thresholds for each tier
//! - **Customer**: An immutable record; edits produce a replacement
//! - **Model**: The address book plus the filtered views commands address
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - Pure business logic only
//! - Persistence lives in `loyaltylift-store` behind [`traits::AddressBookStorage`]
//! - Commands live in `loyaltylift-logic`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod address_book;
pub mod attribute;
pub mod customer;
pub mod error;
pub mod index;
pub mod model;
pub mod order;
pub mod points;
pub mod tier;
pub mod traits;

// Re-exports for convenience
pub use address_book::AddressBook;
pub use attribute::{Address, Name, Note, Tag};
pub use customer::{Customer, CustomerFilter, CustomerSort, CustomerType, Email, Phone};
pub use error::DomainError;
pub use index::Index;
pub use model::Model;
pub use order::{Order, OrderFilter, OrderSort, Quantity, Status, StatusUpdate, StatusValue};
pub use points::Points;
pub use tier::{Tier, TierTable};

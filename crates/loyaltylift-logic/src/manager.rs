//! Runs commands against the model and persists the outcome.

use crate::commands::Command;
use crate::error::LogicError;
use crate::result::CommandResult;
use loyaltylift_domain::traits::AddressBookStorage;
use loyaltylift_domain::Model;

/// Owns the model and the storage it is saved to.
///
/// `execute` takes `&mut self`, so at most one command is ever mutating the
/// model. A command that fails leaves the model untouched and nothing is
/// written.
#[derive(Debug)]
pub struct LogicManager<S: AddressBookStorage> {
    model: Model,
    storage: S,
}

impl<S: AddressBookStorage> LogicManager<S> {
    /// Create a manager around an already-loaded model.
    pub fn new(model: Model, storage: S) -> Self {
        Self { model, storage }
    }

    /// Run `command`, then save the address book.
    ///
    /// A save failure is reported after the command has already been applied
    /// to the in-memory model.
    pub fn execute(&mut self, command: &dyn Command) -> Result<CommandResult, LogicError> {
        tracing::debug!(?command, "Executing command");
        let result = command.execute(&mut self.model).map_err(|err| {
            tracing::debug!(error = %err, "Command rejected");
            err
        })?;

        self.storage
            .save_address_book(self.model.address_book())
            .map_err(|err| {
                tracing::error!(
                    path = %self.storage.address_book_path().display(),
                    error = %err,
                    "Failed to save address book"
                );
                LogicError::Storage(err.to_string())
            })?;
        Ok(result)
    }

    /// Read-only access to the model for rendering.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// The backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

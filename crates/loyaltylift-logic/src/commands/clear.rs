//! Empty the address book.

use super::Command;
use crate::error::CommandError;
use crate::result::{CommandResult, ListViewAction};
use loyaltylift_domain::Model;

/// Removes every customer and order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearCommand;

impl Command for ClearCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.clear();
        Ok(CommandResult::with_action(
            "Address book has been cleared!",
            ListViewAction::ListCustomers,
        ))
    }
}

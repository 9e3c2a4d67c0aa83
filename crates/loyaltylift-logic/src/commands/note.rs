//! Replace a customer's note.

use super::{displayed_customer, replace_and_show, Command};
use crate::error::CommandError;
use crate::result::{CommandResult, ListViewAction};
use loyaltylift_domain::{Index, Model, Note};

/// Sets the note of the customer shown at `index`. An empty note clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCustomerNoteCommand {
    index: Index,
    note: Note,
}

impl SetCustomerNoteCommand {
    pub fn new(index: Index, note: Note) -> Self {
        Self { index, note }
    }
}

impl Command for SetCustomerNoteCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let (position, target) = displayed_customer(model, self.index)?;
        let edited = target.with_note(self.note.clone());
        let feedback = format!("Set note for Customer: {}", edited);
        replace_and_show(model, position, edited)?;
        Ok(CommandResult::with_action(feedback, ListViewAction::ListAndShowCustomer))
    }
}

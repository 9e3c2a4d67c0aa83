//! Bookmark and unbookmark customers.

use super::{displayed_customer, replace_and_show, Command};
use crate::error::CommandError;
use crate::result::{CommandResult, ListViewAction};
use loyaltylift_domain::{Index, Model};

/// Bookmarks the customer shown at `index`. Marking twice is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkCustomerCommand {
    index: Index,
}

impl MarkCustomerCommand {
    pub fn new(index: Index) -> Self {
        Self { index }
    }
}

impl Command for MarkCustomerCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        set_marked(model, self.index, true, "Bookmarked Customer")
    }
}

/// Removes the bookmark from the customer shown at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnmarkCustomerCommand {
    index: Index,
}

impl UnmarkCustomerCommand {
    pub fn new(index: Index) -> Self {
        Self { index }
    }
}

impl Command for UnmarkCustomerCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        set_marked(model, self.index, false, "Unbookmarked Customer")
    }
}

fn set_marked(
    model: &mut Model,
    index: Index,
    marked: bool,
    verb: &str,
) -> Result<CommandResult, CommandError> {
    let (position, target) = displayed_customer(model, index)?;
    let edited = target.with_marked(marked);
    let feedback = format!("{}: {}", verb, edited);
    replace_and_show(model, position, edited)?;
    Ok(CommandResult::with_action(feedback, ListViewAction::ListAndShowCustomer))
}

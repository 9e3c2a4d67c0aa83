//! Focus a customer for display.

use super::{displayed_customer, Command};
use crate::error::CommandError;
use crate::result::{CommandResult, ListViewAction};
use loyaltylift_domain::{Index, Model};

/// Shows the full record of the customer at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewCustomerCommand {
    index: Index,
}

impl ViewCustomerCommand {
    pub fn new(index: Index) -> Self {
        Self { index }
    }
}

impl Command for ViewCustomerCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let (position, customer) = displayed_customer(model, self.index)?;
        model.set_customer_to_display(Some(position));
        Ok(CommandResult::with_action(
            format!("Viewing Customer: {}", customer),
            ListViewAction::ListAndShowCustomer,
        ))
    }
}

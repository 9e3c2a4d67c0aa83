//! Delete a customer by displayed index.

use super::{displayed_customer, Command};
use crate::error::CommandError;
use crate::result::{CommandResult, ListViewAction};
use loyaltylift_domain::{CustomerFilter, Index, Model};

/// Removes the customer shown at `index`, together with their orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCustomerCommand {
    index: Index,
}

impl DeleteCustomerCommand {
    pub fn new(index: Index) -> Self {
        Self { index }
    }
}

impl Command for DeleteCustomerCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let (position, _) = displayed_customer(model, self.index)?;
        let removed = model.remove_customer(position)?;
        model.update_filtered_customer_list(CustomerFilter::All);
        Ok(CommandResult::with_action(
            format!("Deleted Customer: {}", removed),
            ListViewAction::ListCustomers,
        ))
    }
}

//! Add a new customer.

use super::Command;
use crate::error::CommandError;
use crate::result::{CommandResult, ListViewAction};
use loyaltylift_domain::{Customer, CustomerFilter, Model};

/// Adds a customer to the address book.
///
/// The stored tier is always derived from the customer's points against the
/// current tier table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCustomerCommand {
    customer: Customer,
}

impl AddCustomerCommand {
    pub fn new(customer: Customer) -> Self {
        Self { customer }
    }
}

impl Command for AddCustomerCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let tier = model.tiers().tier_for(&self.customer.points());
        let customer = self.customer.with_tier(tier);
        if model.has_customer(&customer) {
            return Err(CommandError::DuplicateCustomer);
        }

        let feedback = format!("New customer added: {}", customer);
        model.add_customer(customer)?;
        let position = model.address_book().customers().len() - 1;
        model.update_filtered_customer_list(CustomerFilter::All);
        model.set_customer_to_display(Some(position));

        tracing::debug!(position, "Customer added");
        Ok(CommandResult::with_action(feedback, ListViewAction::ListAndShowCustomer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::*;
    use loyaltylift_domain::{AddressBook, Tier, TierTable};

    #[test]
    fn test_add_to_empty_book() {
        let mut model = Model::new(AddressBook::new(), TierTable::default()).unwrap();
        let amy = CustomerBuilder::new().build();

        let result = AddCustomerCommand::new(amy.clone()).execute(&mut model).unwrap();

        assert_eq!(result.feedback, format!("New customer added: {}", amy));
        assert_eq!(result.action, ListViewAction::ListAndShowCustomer);
        assert_eq!(model.address_book().customers(), [amy.clone()]);
        assert_eq!(model.customer_to_display(), Some(&amy));
    }

    #[test]
    fn test_add_derives_tier_from_current_table() {
        let mut model = typical_model();
        // the builder's recorded tier is overwritten by the model's table
        let amy = CustomerBuilder::new().points(0, 1500).build().with_tier(Tier::Gold);

        AddCustomerCommand::new(amy).execute(&mut model).unwrap();

        let added = model.customer_to_display().unwrap();
        assert_eq!(added.tier(), Tier::Bronze);
    }

    #[test]
    fn test_add_duplicate_fails() {
        let mut model = typical_model();
        let duplicate = CustomerBuilder::from_customer(&alice()).address("elsewhere").build();

        assert_command_failure(
            &AddCustomerCommand::new(duplicate),
            &mut model,
            CommandError::DuplicateCustomer,
        );
    }
}

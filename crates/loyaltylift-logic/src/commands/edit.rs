//! Edit the identity and contact details of a customer.

use super::{displayed_customer, replace_and_show, Command};
use crate::error::CommandError;
use crate::result::{CommandResult, ListViewAction};
use loyaltylift_domain::{Address, Customer, CustomerType, Email, Index, Model, Name, Phone, Tag};
use std::collections::BTreeSet;

/// Per-field overrides for an edit. Omitted fields keep their value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditCustomerDescriptor {
    pub customer_type: Option<CustomerType>,
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditCustomerDescriptor {
    /// Returns true if at least one field is overridden
    pub fn is_any_field_edited(&self) -> bool {
        self.customer_type.is_some()
            || self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    /// Apply the overrides to `customer`
    ///
    /// Points, tier, bookmark and note are never touched by an edit.
    pub fn apply_to(&self, customer: &Customer) -> Customer {
        customer.with_details(
            self.customer_type.unwrap_or(customer.customer_type()),
            self.name.clone().unwrap_or_else(|| customer.name().clone()),
            self.phone.clone().unwrap_or_else(|| customer.phone().clone()),
            self.email.clone().unwrap_or_else(|| customer.email().clone()),
            self.address.clone().unwrap_or_else(|| customer.address().clone()),
            self.tags.clone().unwrap_or_else(|| customer.tags().clone()),
        )
    }
}

/// Edits the customer shown at `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCustomerCommand {
    index: Index,
    descriptor: EditCustomerDescriptor,
}

impl EditCustomerCommand {
    pub fn new(index: Index, descriptor: EditCustomerDescriptor) -> Self {
        Self { index, descriptor }
    }
}

impl Command for EditCustomerCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let (position, target) = displayed_customer(model, self.index)?;
        let edited = self.descriptor.apply_to(&target);

        if model.collides_with_other(position, &edited) {
            return Err(CommandError::DuplicateCustomer);
        }

        let feedback = format!("Edited Customer: {}", edited);
        replace_and_show(model, position, edited)?;
        Ok(CommandResult::with_action(feedback, ListViewAction::ListAndShowCustomer))
    }
}

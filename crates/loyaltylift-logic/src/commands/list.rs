//! List and search commands.
//!
//! Two list commands are equal exactly when their ordering and filter are.

use super::Command;
use crate::error::CommandError;
use crate::result::{CommandResult, ListViewAction};
use loyaltylift_domain::{CustomerFilter, CustomerSort, Model, OrderFilter, OrderSort};

/// Shows customers under an ordering and filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListCustomerCommand {
    sort: CustomerSort,
    filter: CustomerFilter,
}

impl ListCustomerCommand {
    pub fn new(sort: CustomerSort, filter: CustomerFilter) -> Self {
        Self { sort, filter }
    }
}

impl Command for ListCustomerCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.sort_filtered_customer_list(self.sort);
        model.update_filtered_customer_list(self.filter.clone());
        Ok(CommandResult::with_action(
            "Listed all customers",
            ListViewAction::ListCustomers,
        ))
    }
}

/// Shows orders under an ordering and filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListOrderCommand {
    sort: OrderSort,
    filter: OrderFilter,
}

impl ListOrderCommand {
    pub fn new(sort: OrderSort, filter: OrderFilter) -> Self {
        Self { sort, filter }
    }
}

impl Command for ListOrderCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_order_list(self.sort, self.filter);
        Ok(CommandResult::with_action("Listed all orders", ListViewAction::ListOrders))
    }
}

/// Narrows the customer view to names containing any keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCustomerCommand {
    keywords: Vec<String>,
}

impl FindCustomerCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }
}

impl Command for FindCustomerCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_customer_list(CustomerFilter::NameKeywords(self.keywords.clone()));
        Ok(CommandResult::with_action(
            format!("{} customers listed!", model.filtered_customer_count()),
            ListViewAction::ListCustomers,
        ))
    }
}

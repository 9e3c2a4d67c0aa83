//! Command implementations.
//!
//! Each parsed [`Command`] is turned into a logic command, run through the
//! [`LogicManager`] and rendered according to the returned view hint.

pub mod customer;
pub mod list;
pub mod points;

use crate::cli::Command;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use loyaltylift_domain::traits::AddressBookStorage;
use loyaltylift_domain::{Model, Note};
use loyaltylift_logic::commands::{
    ClearCommand, DeleteCustomerCommand, MarkCustomerCommand, SetCustomerNoteCommand,
    UnmarkCustomerCommand, ViewCustomerCommand,
};
use loyaltylift_logic::{Command as LogicCommand, CommandResult, ListViewAction, LogicManager};

/// Execute one command and return the text to print.
pub fn execute<S: AddressBookStorage>(
    command: Command,
    manager: &mut LogicManager<S>,
    formatter: &Formatter,
) -> Result<String> {
    let logic: Box<dyn LogicCommand> = match command {
        Command::AddCustomer(args) => Box::new(customer::build_add(args)?),
        Command::EditCustomer(args) => Box::new(customer::build_edit(args)?),
        Command::DeleteCustomer(args) => Box::new(DeleteCustomerCommand::new(args.index)),
        Command::MarkCustomer(args) => Box::new(MarkCustomerCommand::new(args.index)),
        Command::UnmarkCustomer(args) => Box::new(UnmarkCustomerCommand::new(args.index)),
        Command::SetPoints(args) => Box::new(points::build_set_points(args)?),
        Command::AddPoints(args) => Box::new(points::build_add_points(args)),
        Command::SetTier(args) => Box::new(points::build_set_tier(args)?),
        Command::SetNote(args) => Box::new(SetCustomerNoteCommand::new(
            args.index,
            Note::new(args.note.unwrap_or_default()),
        )),
        Command::ListCustomers(args) => Box::new(list::build_list_customers(args)),
        Command::ListOrders(args) => Box::new(list::build_list_orders(args)),
        Command::FindCustomers(args) => Box::new(list::build_find(args)),
        Command::ViewCustomer(args) => Box::new(ViewCustomerCommand::new(args.index)),
        Command::Clear => Box::new(ClearCommand),
        Command::Tiers => return Ok(formatter.format_tiers(manager.model().tiers())),
        Command::Repl => {
            return Err(CliError::InvalidInput("Already in interactive mode".to_string()));
        }
    };

    let result = manager.execute(logic.as_ref())?;
    render(&result, manager.model(), formatter)
}

/// Render a command result and the view it asks for.
fn render(result: &CommandResult, model: &Model, formatter: &Formatter) -> Result<String> {
    let mut sections = vec![formatter.success(&result.feedback)];
    match result.action {
        ListViewAction::Unchanged => {}
        ListViewAction::ListCustomers => {
            sections.push(formatter.format_customers(&model.filtered_customers())?);
        }
        ListViewAction::ListOrders => {
            sections.push(formatter.format_orders(&model.filtered_orders())?);
        }
        ListViewAction::ListAndShowCustomer => {
            sections.push(formatter.format_customers(&model.filtered_customers())?);
            if let Some(customer) = model.customer_to_display() {
                sections.push(formatter.format_customer_detail(customer)?);
            }
        }
    }
    Ok(sections.join("\n"))
}

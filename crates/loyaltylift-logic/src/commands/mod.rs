//! Command implementations.
//!
//! Index-addressed commands share one contract: the index is resolved
//! against the currently displayed customer list, a replacement record is
//! derived with every untouched field copied over, the replacement is
//! written back to the same slot, and the customer filter is reset.

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod list;
pub mod mark;
pub mod note;
pub mod points;
pub mod set_tier;
pub mod view;

pub use self::add::AddCustomerCommand;
pub use self::clear::ClearCommand;
pub use self::delete::DeleteCustomerCommand;
pub use self::edit::{EditCustomerCommand, EditCustomerDescriptor};
pub use self::list::{FindCustomerCommand, ListCustomerCommand, ListOrderCommand};
pub use self::mark::{MarkCustomerCommand, UnmarkCustomerCommand};
pub use self::note::SetCustomerNoteCommand;
pub use self::points::{AddPointsCommand, SetPointsCommand};
pub use self::set_tier::SetTierCommand;
pub use self::view::ViewCustomerCommand;

use crate::error::{CommandError, ListKind};
use crate::result::CommandResult;
use loyaltylift_domain::{Customer, CustomerFilter, Index, Model};

/// A single user operation against the model.
pub trait Command: std::fmt::Debug {
    /// Run the command. On error the model is left untouched.
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError>;
}

/// Resolve `index` against the displayed customer list.
///
/// Returns the backing position and a copy of the record.
fn displayed_customer(model: &Model, index: Index) -> Result<(usize, Customer), CommandError> {
    model
        .filtered_customer(index)
        .map(|(position, customer)| (position, customer.clone()))
        .ok_or(CommandError::IndexOutOfRange(ListKind::Customer))
}

/// Write `edited` to `position`, show every customer and focus the edited one.
fn replace_and_show(model: &mut Model, position: usize, edited: Customer) -> Result<(), CommandError> {
    model.set_customer(position, edited)?;
    model.update_filtered_customer_list(CustomerFilter::All);
    model.set_customer_to_display(Some(position));
    Ok(())
}

//! Command results handed to the presentation layer.

/// What the presentation layer should show after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListViewAction {
    /// Leave the display as it is
    #[default]
    Unchanged,
    /// Show the customer list
    ListCustomers,
    /// Show the order list
    ListOrders,
    /// Show the customer list and focus the customer to display
    ListAndShowCustomer,
}

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Human-readable feedback
    pub feedback: String,
    /// View navigation hint
    pub action: ListViewAction,
}

impl CommandResult {
    /// A result that leaves the display unchanged.
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            action: ListViewAction::Unchanged,
        }
    }

    /// A result with a view navigation hint.
    pub fn with_action(feedback: impl Into<String>, action: ListViewAction) -> Self {
        Self {
            feedback: feedback.into(),
            action,
        }
    }
}

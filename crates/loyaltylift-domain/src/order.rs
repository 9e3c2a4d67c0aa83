//! Order module - purchases placed by customers
//!
//! Orders carry no points semantics. They exist so that order lists can be
//! filtered and sorted, and so that replacing or removing a customer keeps
//! the orders that reference them consistent.

use crate::{Address, Customer, DomainError, Name, Note};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;

/// Number of items in an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quantity(u32);

impl Quantity {
    /// Constraints shown when a quantity is rejected
    pub const MESSAGE_CONSTRAINTS: &'static str = "Quantity should be a positive integer";

    /// Create a validated quantity
    pub fn new(value: i64) -> Result<Self, DomainError> {
        u32::try_from(value)
            .ok()
            .filter(|value| *value >= 1)
            .map(Self)
            .ok_or_else(|| DomainError::invalid("Quantity", Self::MESSAGE_CONSTRAINTS))
    }

    /// Number of items
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stage an order has reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusValue {
    /// Placed, not yet paid
    Pending,
    /// Paid, not yet shipped
    Paid,
    /// On its way
    Shipped,
    /// Delivered
    Completed,
    /// Abandoned
    Cancelled,
}

impl StatusValue {
    /// Constraints shown when a status cannot be read
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Status should be one of PENDING, PAID, SHIPPED, COMPLETED or CANCELLED";

    /// Name as stored in data files
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusValue::Pending => "PENDING",
            StatusValue::Paid => "PAID",
            StatusValue::Shipped => "SHIPPED",
            StatusValue::Completed => "COMPLETED",
            StatusValue::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for StatusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StatusValue {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PENDING" => Ok(StatusValue::Pending),
            "PAID" => Ok(StatusValue::Paid),
            "SHIPPED" => Ok(StatusValue::Shipped),
            "COMPLETED" => Ok(StatusValue::Completed),
            "CANCELLED" => Ok(StatusValue::Cancelled),
            _ => Err(DomainError::invalid("Status", Self::MESSAGE_CONSTRAINTS)),
        }
    }
}

/// One entry of an order's status history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusUpdate {
    /// Stage reached
    pub value: StatusValue,
    /// Day it was reached
    pub date: NaiveDate,
}

/// Status history of an order, oldest first; never empty
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Status {
    updates: Vec<StatusUpdate>,
}

impl Status {
    /// Constraints shown when a status history is rejected
    pub const MESSAGE_EMPTY: &'static str = "An order must have at least one status update";

    /// A fresh history starting at pending on `date`
    pub fn pending(date: NaiveDate) -> Self {
        Self {
            updates: vec![StatusUpdate {
                value: StatusValue::Pending,
                date,
            }],
        }
    }

    /// Build a history from stored updates
    pub fn from_updates(updates: Vec<StatusUpdate>) -> Result<Self, DomainError> {
        if updates.is_empty() {
            return Err(DomainError::invalid("Status", Self::MESSAGE_EMPTY));
        }
        Ok(Self { updates })
    }

    /// Every update, oldest first
    pub fn updates(&self) -> &[StatusUpdate] {
        &self.updates
    }

    /// The most recent update
    pub fn latest(&self) -> StatusUpdate {
        // from_updates and pending both guarantee at least one entry
        self.updates[self.updates.len() - 1]
    }
}

/// An order placed by a customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    customer: Customer,
    name: Name,
    quantity: Quantity,
    address: Address,
    status: Status,
    note: Note,
    created_date: NaiveDate,
}

impl Order {
    /// Create a pending order placed on `created_date`
    pub fn new(
        customer: Customer,
        name: Name,
        quantity: Quantity,
        address: Address,
        created_date: NaiveDate,
    ) -> Self {
        Self {
            customer,
            name,
            quantity,
            address,
            status: Status::pending(created_date),
            note: Note::default(),
            created_date,
        }
    }

    /// Create an order from every field
    ///
    /// This is primarily for storage layer deserialization.
    pub fn from_parts(
        customer: Customer,
        name: Name,
        quantity: Quantity,
        address: Address,
        status: Status,
        note: Note,
        created_date: NaiveDate,
    ) -> Self {
        Self {
            customer,
            name,
            quantity,
            address,
            status,
            note,
            created_date,
        }
    }

    /// Customer who placed the order
    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Product name
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Number of items
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Delivery address
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Status history
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Free-form note
    pub fn note(&self) -> &Note {
        &self.note
    }

    /// Day the order was placed
    pub fn created_date(&self) -> NaiveDate {
        self.created_date
    }

    /// A copy attributed to `customer`
    pub fn with_customer(&self, customer: Customer) -> Self {
        Self {
            customer,
            ..self.clone()
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Customer: {}; Quantity: {}; Address: {}; Status: {}; Created: {}",
            self.name,
            self.customer.name(),
            self.quantity,
            self.address,
            self.status.latest().value,
            self.created_date
        )
    }
}

/// Which orders a filtered view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderFilter {
    /// Every order
    #[default]
    All,

    /// Orders whose latest status is the given value
    Status(StatusValue),
}

impl OrderFilter {
    /// Returns true if `order` passes this filter
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            OrderFilter::All => true,
            OrderFilter::Status(value) => order.status().latest().value == *value,
        }
    }
}

/// How a filtered order view is ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderSort {
    /// Oldest order first
    #[default]
    CreatedDate,

    /// Alphabetically by product name
    Name,

    /// By latest status, earliest stage first
    Status,
}

impl OrderSort {
    /// Compare two orders under this ordering
    pub fn compare(&self, a: &Order, b: &Order) -> Ordering {
        match self {
            OrderSort::CreatedDate => a.created_date().cmp(&b.created_date()),
            OrderSort::Name => a.name().cmp(b.name()),
            OrderSort::Status => a
                .status()
                .latest()
                .value
                .cmp(&b.status().latest().value)
                .then_with(|| a.created_date().cmp(&b.created_date())),
        }
    }
}

//! Address book - the backing collections of customers and orders

use crate::{Customer, DomainError, Order};

/// Ordered collections of every customer and order
///
/// Customers are addressed by position. Replacing a customer keeps its
/// position, and orders that referenced the old record are rewritten to
/// reference the new one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressBook {
    customers: Vec<Customer>,
    orders: Vec<Order>,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an address book from stored collections
    ///
    /// Fails with [`DomainError::DuplicateCustomer`] if two customers are the same.
    pub fn from_parts(customers: Vec<Customer>, orders: Vec<Order>) -> Result<Self, DomainError> {
        let mut book = Self::new();
        for customer in customers {
            book.add_customer(customer)?;
        }
        book.orders = orders;
        Ok(book)
    }

    /// Every customer, in insertion order
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Every order, in insertion order
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Returns true if a customer that is the same as `customer` exists
    pub fn has_customer(&self, customer: &Customer) -> bool {
        self.customers.iter().any(|c| c.is_same_customer(customer))
    }

    /// Append a customer
    pub fn add_customer(&mut self, customer: Customer) -> Result<(), DomainError> {
        if self.has_customer(&customer) {
            return Err(DomainError::DuplicateCustomer);
        }
        self.customers.push(customer);
        Ok(())
    }

    /// Returns true if `customer` at `position` would collide with a different customer
    pub fn collides_with_other(&self, position: usize, customer: &Customer) -> bool {
        self.customers
            .iter()
            .enumerate()
            .any(|(i, existing)| i != position && existing.is_same_customer(customer))
    }

    /// Replace the customer at `position` with `edited`
    pub fn set_customer(&mut self, position: usize, edited: Customer) -> Result<(), DomainError> {
        if position >= self.customers.len() {
            return Err(DomainError::CustomerNotFound);
        }
        if self.collides_with_other(position, &edited) {
            return Err(DomainError::DuplicateCustomer);
        }
        let target = std::mem::replace(&mut self.customers[position], edited.clone());
        for order in self.orders.iter_mut() {
            if *order.customer() == target {
                *order = order.with_customer(edited.clone());
            }
        }
        Ok(())
    }

    /// Replace several customers at once
    ///
    /// Every replacement is checked before any is applied, so either all of
    /// them land or the address book is left untouched.
    pub fn set_customers(&mut self, replacements: Vec<(usize, Customer)>) -> Result<(), DomainError> {
        for (position, edited) in &replacements {
            if *position >= self.customers.len() {
                return Err(DomainError::CustomerNotFound);
            }
            if self.collides_with_other(*position, edited) {
                return Err(DomainError::DuplicateCustomer);
            }
        }
        for (position, edited) in replacements {
            self.set_customer(position, edited)?;
        }
        Ok(())
    }

    /// Remove the customer at `position` together with their orders
    pub fn remove_customer(&mut self, position: usize) -> Result<Customer, DomainError> {
        if position >= self.customers.len() {
            return Err(DomainError::CustomerNotFound);
        }
        let removed = self.customers.remove(position);
        self.orders.retain(|order| *order.customer() != removed);
        Ok(removed)
    }
}

//! Model - the address book, the tier table and the filtered views over them
//!
//! Filtered views hold positions into the backing collections rather than
//! copies, so a command that looks a customer up through the view can write
//! its replacement back to exactly that slot.

use crate::{
    AddressBook, Customer, CustomerFilter, CustomerSort, DomainError, Index, Order, OrderFilter,
    OrderSort, TierTable,
};

/// In-memory state every command runs against
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    address_book: AddressBook,
    tiers: TierTable,
    customer_filter: CustomerFilter,
    customer_sort: CustomerSort,
    filtered_customers: Vec<usize>,
    order_filter: OrderFilter,
    order_sort: OrderSort,
    filtered_orders: Vec<usize>,
    customer_to_display: Option<usize>,
}

impl Model {
    /// Create a model showing every customer and order
    ///
    /// Every customer is re-classified against `tiers` first, so records that
    /// were saved under different thresholds satisfy the tier invariant again.
    pub fn new(address_book: AddressBook, tiers: TierTable) -> Result<Self, DomainError> {
        let mut model = Self {
            address_book,
            tiers,
            customer_filter: CustomerFilter::All,
            customer_sort: CustomerSort::default(),
            filtered_customers: Vec::new(),
            order_filter: OrderFilter::All,
            order_sort: OrderSort::default(),
            filtered_orders: Vec::new(),
            customer_to_display: None,
        };
        let plan = model.reclassification_for(&model.tiers);
        if !plan.is_empty() {
            tracing::info!("Re-classified {} customer(s) on load", plan.len());
        }
        model.address_book.set_customers(plan)?;
        model.refresh_customers();
        model.refresh_orders();
        Ok(model)
    }

    /// The backing address book
    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    /// Replace the whole address book and reset both views
    pub fn set_address_book(&mut self, address_book: AddressBook) {
        self.address_book = address_book;
        self.customer_to_display = None;
        self.customer_filter = CustomerFilter::All;
        self.order_filter = OrderFilter::All;
        self.refresh_customers();
        self.refresh_orders();
    }

    /// Current tier thresholds
    pub fn tiers(&self) -> &TierTable {
        &self.tiers
    }

    /// Install a new tier table
    ///
    /// Callers are responsible for re-classifying customers against it; see
    /// [`Model::reclassification_for`].
    pub fn set_tiers(&mut self, tiers: TierTable) {
        self.tiers = tiers;
    }

    /// Customers whose tier under `tiers` differs from their recorded tier
    ///
    /// Returns `(position, replacement)` pairs computed in a single pass and
    /// without touching the model.
    pub fn reclassification_for(&self, tiers: &TierTable) -> Vec<(usize, Customer)> {
        self.address_book
            .customers()
            .iter()
            .enumerate()
            .filter_map(|(position, customer)| {
                let tier = tiers.tier_for(&customer.points());
                (tier != customer.tier()).then(|| (position, customer.with_tier(tier)))
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Customers
    // ------------------------------------------------------------------

    /// Customers in the filtered view, in display order
    pub fn filtered_customers(&self) -> Vec<&Customer> {
        let customers = self.address_book.customers();
        self.filtered_customers.iter().map(|&i| &customers[i]).collect()
    }

    /// Number of customers in the filtered view
    pub fn filtered_customer_count(&self) -> usize {
        self.filtered_customers.len()
    }

    /// Backing position and record of the customer shown at `index`
    pub fn filtered_customer(&self, index: Index) -> Option<(usize, &Customer)> {
        let position = *self.filtered_customers.get(index.zero_based())?;
        Some((position, &self.address_book.customers()[position]))
    }

    /// Returns true if a customer that is the same as `customer` exists
    pub fn has_customer(&self, customer: &Customer) -> bool {
        self.address_book.has_customer(customer)
    }

    /// Returns true if `customer` would collide with anyone other than the one at `position`
    pub fn collides_with_other(&self, position: usize, customer: &Customer) -> bool {
        self.address_book.collides_with_other(position, customer)
    }

    /// Add a customer and refresh the view
    pub fn add_customer(&mut self, customer: Customer) -> Result<(), DomainError> {
        self.address_book.add_customer(customer)?;
        self.refresh_customers();
        Ok(())
    }

    /// Replace the customer at backing `position` and refresh the views
    pub fn set_customer(&mut self, position: usize, edited: Customer) -> Result<(), DomainError> {
        self.address_book.set_customer(position, edited)?;
        self.refresh_customers();
        self.refresh_orders();
        Ok(())
    }

    /// Replace several customers atomically and refresh the views
    pub fn set_customers(&mut self, replacements: Vec<(usize, Customer)>) -> Result<(), DomainError> {
        self.address_book.set_customers(replacements)?;
        self.refresh_customers();
        self.refresh_orders();
        Ok(())
    }

    /// Remove the customer at backing `position` and refresh the views
    pub fn remove_customer(&mut self, position: usize) -> Result<Customer, DomainError> {
        let removed = self.address_book.remove_customer(position)?;
        self.customer_to_display = match self.customer_to_display {
            Some(shown) if shown == position => None,
            Some(shown) if shown > position => Some(shown - 1),
            other => other,
        };
        self.refresh_customers();
        self.refresh_orders();
        Ok(removed)
    }

    /// Active customer filter
    pub fn customer_filter(&self) -> &CustomerFilter {
        &self.customer_filter
    }

    /// Active customer ordering
    pub fn customer_sort(&self) -> CustomerSort {
        self.customer_sort
    }

    /// Narrow the customer view with `filter`, keeping the current ordering
    pub fn update_filtered_customer_list(&mut self, filter: CustomerFilter) {
        self.customer_filter = filter;
        self.refresh_customers();
    }

    /// Reorder the customer view with `sort`, keeping the current filter
    pub fn sort_filtered_customer_list(&mut self, sort: CustomerSort) {
        self.customer_sort = sort;
        self.refresh_customers();
    }

    /// Focus the customer at backing `position`
    pub fn set_customer_to_display(&mut self, position: Option<usize>) {
        self.customer_to_display = position.filter(|p| *p < self.address_book.customers().len());
    }

    /// The focused customer, if any
    pub fn customer_to_display(&self) -> Option<&Customer> {
        self.customer_to_display
            .and_then(|position| self.address_book.customers().get(position))
    }

    fn refresh_customers(&mut self) {
        let customers = self.address_book.customers();
        let mut positions: Vec<usize> = (0..customers.len())
            .filter(|&i| self.customer_filter.matches(&customers[i]))
            .collect();
        positions.sort_by(|&a, &b| self.customer_sort.compare(&customers[a], &customers[b]));
        self.filtered_customers = positions;
    }

    // ------------------------------------------------------------------
    // Orders
    // ------------------------------------------------------------------

    /// Orders in the filtered view, in display order
    pub fn filtered_orders(&self) -> Vec<&Order> {
        let orders = self.address_book.orders();
        self.filtered_orders.iter().map(|&i| &orders[i]).collect()
    }

    /// Number of orders in the filtered view
    pub fn filtered_order_count(&self) -> usize {
        self.filtered_orders.len()
    }

    /// Active order filter
    pub fn order_filter(&self) -> OrderFilter {
        self.order_filter
    }

    /// Active order ordering
    pub fn order_sort(&self) -> OrderSort {
        self.order_sort
    }

    /// Apply an order ordering and filter together
    pub fn update_filtered_order_list(&mut self, sort: OrderSort, filter: OrderFilter) {
        self.order_sort = sort;
        self.order_filter = filter;
        self.refresh_orders();
    }

    fn refresh_orders(&mut self) {
        let orders = self.address_book.orders();
        let mut positions: Vec<usize> = (0..orders.len())
            .filter(|&i| self.order_filter.matches(&orders[i]))
            .collect();
        positions.sort_by(|&a, &b| self.order_sort.compare(&orders[a], &orders[b]));
        self.filtered_orders = positions;
    }

    /// Remove every customer and order
    pub fn clear(&mut self) {
        self.set_address_book(AddressBook::new());
    }
}

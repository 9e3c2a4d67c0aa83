//! Flat, serde-friendly records for customers and orders
//!
//! Every field is optional at the serde level so that a missing key can be
//! reported by name instead of as a generic parse failure.

use crate::StoreError;
use chrono::NaiveDate;
use loyaltylift_domain::{
    Address, AddressBook, Customer, CustomerType, DomainError, Email, Name, Note, Order, Phone,
    Points, Quantity, Status, StatusUpdate, StatusValue, Tag, Tier,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn required<'a, T>(value: &'a Option<T>, entity: &'static str, field: &'static str) -> Result<&'a T, StoreError> {
    value.as_ref().ok_or(StoreError::MissingField { entity, field })
}

fn parse_date(value: &str) -> Result<NaiveDate, StoreError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| StoreError::MalformedRecord(format!("Invalid date '{}': {}", value, e)))
}

/// Stored form of a [`Customer`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedCustomer {
    customer_type: Option<String>,
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
    tagged: Option<Vec<String>>,
    points: Option<i64>,
    cumulative_points: Option<i64>,
    tier: Option<String>,
    marked: Option<bool>,
    note: Option<String>,
}

impl From<&Customer> for JsonAdaptedCustomer {
    fn from(source: &Customer) -> Self {
        Self {
            customer_type: Some(source.customer_type().as_str().to_string()),
            name: Some(source.name().as_str().to_string()),
            phone: Some(source.phone().as_str().to_string()),
            email: Some(source.email().as_str().to_string()),
            address: Some(source.address().as_str().to_string()),
            tagged: Some(source.tags().iter().map(|t| t.as_str().to_string()).collect()),
            points: Some(source.points().balance()),
            cumulative_points: Some(source.points().cumulative()),
            tier: Some(source.tier().as_str().to_string()),
            marked: Some(source.is_marked()),
            note: Some(source.note().as_str().to_string()),
        }
    }
}

impl JsonAdaptedCustomer {
    const ENTITY: &'static str = "Customer";

    /// Convert this record into a model [`Customer`]
    ///
    /// Fails with [`StoreError::MissingField`] for an absent field and with
    /// [`StoreError::InvalidValue`] for a field that breaks its own constraints.
    pub fn to_model(&self) -> Result<Customer, StoreError> {
        let customer_type = required(&self.customer_type, Self::ENTITY, "CustomerType")?;
        let customer_type = CustomerType::from_stored(customer_type)?;

        let tags = required(&self.tagged, Self::ENTITY, "Tags")?
            .iter()
            .map(|tag| Tag::new(tag.as_str()))
            .collect::<Result<BTreeSet<_>, _>>()?;

        let name = Name::new(required(&self.name, Self::ENTITY, "Name")?.as_str())?;
        let phone = Phone::new(required(&self.phone, Self::ENTITY, "Phone")?.as_str())?;
        let email = Email::new(required(&self.email, Self::ENTITY, "Email")?.as_str())?;
        let address = Address::new(required(&self.address, Self::ENTITY, "Address")?.as_str())?;

        let balance = *required(&self.points, Self::ENTITY, "Points")?;
        let cumulative = *required(&self.cumulative_points, Self::ENTITY, "CumulativePoints")?;
        let points = Points::new(balance, cumulative)?;

        let tier = required(&self.tier, Self::ENTITY, "Tier")?;
        let tier = Tier::from_stored(tier)?;

        let marked = *required(&self.marked, Self::ENTITY, "Marked")?;
        let note = Note::new(required(&self.note, Self::ENTITY, "Note")?.as_str());

        Ok(Customer::from_parts(
            customer_type,
            name,
            phone,
            email,
            address,
            tags,
            points,
            tier,
            marked,
            note,
        ))
    }
}

/// Stored form of one [`StatusUpdate`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonAdaptedStatusUpdate {
    status: Option<String>,
    date: Option<String>,
}

impl From<&StatusUpdate> for JsonAdaptedStatusUpdate {
    fn from(source: &StatusUpdate) -> Self {
        Self {
            status: Some(source.value.as_str().to_string()),
            date: Some(source.date.format(DATE_FORMAT).to_string()),
        }
    }
}

impl JsonAdaptedStatusUpdate {
    const ENTITY: &'static str = "Status";

    fn to_model(&self) -> Result<StatusUpdate, StoreError> {
        let value: StatusValue = required(&self.status, Self::ENTITY, "Value")?.parse()?;
        let date = parse_date(required(&self.date, Self::ENTITY, "Date")?)?;
        Ok(StatusUpdate { value, date })
    }
}

/// Stored form of an [`Order`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedOrder {
    customer: Option<JsonAdaptedCustomer>,
    name: Option<String>,
    quantity: Option<i64>,
    address: Option<String>,
    statuses: Option<Vec<JsonAdaptedStatusUpdate>>,
    note: Option<String>,
    created_date: Option<String>,
}

impl From<&Order> for JsonAdaptedOrder {
    fn from(source: &Order) -> Self {
        Self {
            customer: Some(JsonAdaptedCustomer::from(source.customer())),
            name: Some(source.name().as_str().to_string()),
            quantity: Some(i64::from(source.quantity().value())),
            address: Some(source.address().as_str().to_string()),
            statuses: Some(source.status().updates().iter().map(Into::into).collect()),
            note: Some(source.note().as_str().to_string()),
            created_date: Some(source.created_date().format(DATE_FORMAT).to_string()),
        }
    }
}

impl JsonAdaptedOrder {
    const ENTITY: &'static str = "Order";

    /// Convert this record into a model [`Order`]
    pub fn to_model(&self) -> Result<Order, StoreError> {
        let customer = required(&self.customer, Self::ENTITY, "Customer")?.to_model()?;
        let name = Name::new(required(&self.name, Self::ENTITY, "Name")?.as_str())?;
        let quantity = Quantity::new(*required(&self.quantity, Self::ENTITY, "Quantity")?)?;
        let address = Address::new(required(&self.address, Self::ENTITY, "Address")?.as_str())?;
        let updates = required(&self.statuses, Self::ENTITY, "Status")?
            .iter()
            .map(JsonAdaptedStatusUpdate::to_model)
            .collect::<Result<Vec<_>, _>>()?;
        let status = Status::from_updates(updates)?;
        let note = Note::new(required(&self.note, Self::ENTITY, "Note")?.as_str());
        let created_date = parse_date(required(&self.created_date, Self::ENTITY, "CreatedDate")?)?;

        Ok(Order::from_parts(customer, name, quantity, address, status, note, created_date))
    }
}

/// Stored form of the whole [`AddressBook`]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JsonSerializableAddressBook {
    #[serde(default)]
    customers: Vec<JsonAdaptedCustomer>,
    #[serde(default)]
    orders: Vec<JsonAdaptedOrder>,
}

impl From<&AddressBook> for JsonSerializableAddressBook {
    fn from(source: &AddressBook) -> Self {
        Self {
            customers: source.customers().iter().map(Into::into).collect(),
            orders: source.orders().iter().map(Into::into).collect(),
        }
    }
}

impl JsonSerializableAddressBook {
    /// Convert into a model [`AddressBook`]
    ///
    /// Each order is re-attached to the matching customer record so that
    /// later customer replacements propagate to it.
    pub fn to_model(&self) -> Result<AddressBook, StoreError> {
        let customers = self
            .customers
            .iter()
            .map(JsonAdaptedCustomer::to_model)
            .collect::<Result<Vec<_>, _>>()?;

        let mut orders = Vec::with_capacity(self.orders.len());
        for adapted in &self.orders {
            let order = adapted.to_model()?;
            let owner = customers
                .iter()
                .find(|c| c.is_same_customer(order.customer()))
                .ok_or_else(|| {
                    StoreError::MalformedRecord(format!(
                        "Order '{}' references a customer that is not in the customer list",
                        order.name()
                    ))
                })?;
            orders.push(order.with_customer(owner.clone()));
        }

        AddressBook::from_parts(customers, orders).map_err(|e| match e {
            DomainError::DuplicateCustomer => StoreError::DuplicateCustomer,
            other => StoreError::InvalidValue(other),
        })
    }
}

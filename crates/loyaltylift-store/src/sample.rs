//! Sample data used when no data file exists yet

use chrono::NaiveDate;
use loyaltylift_domain::{
    Address, AddressBook, Customer, CustomerType, DomainError, Email, Name, Note, Order, Phone,
    Points, Quantity, Tag, TierTable,
};
use std::collections::BTreeSet;

struct SampleCustomer {
    customer_type: CustomerType,
    name: &'static str,
    phone: &'static str,
    email: &'static str,
    address: &'static str,
    tags: &'static [&'static str],
    points: (i64, i64),
    note: &'static str,
}

const SAMPLE_CUSTOMERS: &[SampleCustomer] = &[
    SampleCustomer {
        customer_type: CustomerType::Individual,
        name: "Alex Yeoh",
        phone: "87438807",
        email: "alexyeoh@example.com",
        address: "Blk 30 Geylang Street 29, #06-40",
        tags: &["friends"],
        points: (120, 1350),
        note: "",
    },
    SampleCustomer {
        customer_type: CustomerType::Individual,
        name: "Bernice Yu",
        phone: "99272758",
        email: "berniceyu@example.com",
        address: "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
        tags: &["colleagues", "friends"],
        points: (40, 40),
        note: "Allergic to nuts",
    },
    SampleCustomer {
        customer_type: CustomerType::Enterprise,
        name: "Charlotte Oliveiro",
        phone: "93210283",
        email: "charlotte@example.com",
        address: "Blk 11 Ang Mo Kio Street 74, #11-04",
        tags: &["neighbours"],
        points: (2500, 7200),
        note: "",
    },
    SampleCustomer {
        customer_type: CustomerType::Enterprise,
        name: "David Li",
        phone: "91031282",
        email: "lidavid@example.com",
        address: "Blk 436 Serangoon Gardens Street 26, #16-43",
        tags: &["family"],
        points: (800, 11800),
        note: "Bulk orders every quarter",
    },
];

fn sample_customer(sample: &SampleCustomer, tiers: &TierTable) -> Result<Customer, DomainError> {
    let tags = sample
        .tags
        .iter()
        .map(|tag| Tag::new(*tag))
        .collect::<Result<BTreeSet<_>, _>>()?;
    let points = Points::new(sample.points.0, sample.points.1)?;
    let customer = Customer::new(
        sample.customer_type,
        Name::new(sample.name)?,
        Phone::new(sample.phone)?,
        Email::new(sample.email)?,
        Address::new(sample.address)?,
        tags,
    );
    Ok(customer
        .with_points(points, tiers.tier_for(&points))
        .with_note(Note::new(sample.note)))
}

/// An address book with a handful of customers and orders
pub fn sample_address_book() -> Result<AddressBook, DomainError> {
    let tiers = TierTable::default();
    let customers = SAMPLE_CUSTOMERS
        .iter()
        .map(|sample| sample_customer(sample, &tiers))
        .collect::<Result<Vec<_>, _>>()?;

    let date = |day: u32| {
        NaiveDate::from_ymd_opt(2023, 3, day)
            .ok_or_else(|| DomainError::invalid("CreatedDate", "Invalid sample date"))
    };

    let mut orders = Vec::new();
    if let Some(alex) = customers.first() {
        orders.push(Order::new(
            alex.clone(),
            Name::new("Banana Cake")?,
            Quantity::new(2)?,
            alex.address().clone(),
            date(2)?,
        ));
    }
    if let Some(charlotte) = customers.get(2) {
        orders.push(Order::new(
            charlotte.clone(),
            Name::new("Chocolate Cookies")?,
            Quantity::new(40)?,
            charlotte.address().clone(),
            date(5)?,
        ));
    }

    AddressBook::from_parts(customers, orders)
}

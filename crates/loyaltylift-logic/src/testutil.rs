//! Shared fixtures for command tests.

use crate::commands::Command;
use crate::error::CommandError;
use crate::result::CommandResult;
use chrono::NaiveDate;
use loyaltylift_domain::{
    Address, AddressBook, Customer, CustomerFilter, CustomerType, Email, Index, Model, Name, Note,
    Order, Phone, Points, Quantity, Status, StatusUpdate, StatusValue, Tag, Tier, TierTable,
};
use std::collections::BTreeSet;

pub const VALID_NAME_BOB: &str = "Bob Choo";
pub const VALID_PHONE_BOB: &str = "22222222";
pub const VALID_EMAIL_BOB: &str = "bob@example.com";

pub fn first() -> Index {
    Index::from_one_based(1).unwrap()
}

pub fn second() -> Index {
    Index::from_one_based(2).unwrap()
}

/// Builds customers for tests, starting from a fixed default record.
#[derive(Debug, Clone)]
pub struct CustomerBuilder {
    customer_type: CustomerType,
    name: String,
    phone: String,
    email: String,
    address: String,
    tags: Vec<String>,
    points: (i64, i64),
    tier: Option<Tier>,
    marked: bool,
    note: String,
}

impl Default for CustomerBuilder {
    fn default() -> Self {
        Self {
            customer_type: CustomerType::Individual,
            name: "Amy Bee".to_string(),
            phone: "85355255".to_string(),
            email: "amy@gmail.com".to_string(),
            address: "123, Jurong West Ave 6, #08-111".to_string(),
            tags: Vec::new(),
            points: (0, 0),
            tier: None,
            marked: false,
            note: String::new(),
        }
    }
}

impl CustomerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            customer_type: customer.customer_type(),
            name: customer.name().as_str().to_string(),
            phone: customer.phone().as_str().to_string(),
            email: customer.email().as_str().to_string(),
            address: customer.address().as_str().to_string(),
            tags: customer.tags().iter().map(|t| t.as_str().to_string()).collect(),
            points: (customer.points().balance(), customer.points().cumulative()),
            tier: Some(customer.tier()),
            marked: customer.is_marked(),
            note: customer.note().as_str().to_string(),
        }
    }

    pub fn customer_type(mut self, customer_type: CustomerType) -> Self {
        self.customer_type = customer_type;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Points with the tier derived from the default thresholds.
    pub fn points(mut self, balance: i64, cumulative: i64) -> Self {
        self.points = (balance, cumulative);
        self.tier = None;
        self
    }

    pub fn marked(mut self, marked: bool) -> Self {
        self.marked = marked;
        self
    }

    pub fn build(self) -> Customer {
        let points = Points::new(self.points.0, self.points.1).unwrap();
        let tier = self
            .tier
            .unwrap_or_else(|| TierTable::default().tier_for(&points));
        let tags: BTreeSet<Tag> = self.tags.iter().map(|t| Tag::new(t.as_str()).unwrap()).collect();
        Customer::from_parts(
            self.customer_type,
            Name::new(self.name).unwrap(),
            Phone::new(self.phone).unwrap(),
            Email::new(self.email).unwrap(),
            Address::new(self.address).unwrap(),
            tags,
            points,
            tier,
            self.marked,
            Note::new(self.note),
        )
    }
}

pub fn alice() -> Customer {
    CustomerBuilder::new()
        .name("Alice Pauline")
        .phone("94351253")
        .email("alice@example.com")
        .address("123, Jurong West Ave 6, #08-111")
        .tags(&["friends"])
        .build()
}

pub fn benson() -> Customer {
    CustomerBuilder::new()
        .name("Benson Meier")
        .phone("98765432")
        .email("johnd@example.com")
        .address("311, Clementi Ave 2, #02-25")
        .tags(&["owesMoney", "friends"])
        .points(50, 1200)
        .build()
}

pub fn carl() -> Customer {
    CustomerBuilder::new()
        .customer_type(CustomerType::Enterprise)
        .name("Carl Kurz")
        .phone("95352563")
        .email("heinz@example.com")
        .address("wall street")
        .points(300, 5200)
        .build()
}

pub fn daniel() -> Customer {
    CustomerBuilder::new()
        .name("Daniel Meier")
        .phone("87652533")
        .email("cornelia@example.com")
        .address("10th street")
        .tags(&["friends"])
        .points(1000, 12000)
        .marked(true)
        .build()
}

pub fn elle() -> Customer {
    CustomerBuilder::new()
        .name("Elle Meyer")
        .phone("9482224")
        .email("werner@example.com")
        .address("michegan ave")
        .points(10, 10)
        .build()
}

pub fn fiona() -> Customer {
    CustomerBuilder::new()
        .name("Fiona Kunz")
        .phone("9482427")
        .email("lydia@example.com")
        .address("little tokyo")
        .points(4999, 4999)
        .build()
}

pub fn george() -> Customer {
    CustomerBuilder::new()
        .name("George Best")
        .phone("9482442")
        .email("anna@example.com")
        .address("4th street")
        .points(0, 999)
        .build()
}

pub fn typical_customers() -> Vec<Customer> {
    vec![alice(), benson(), carl(), daniel(), elle(), fiona(), george()]
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, day).unwrap()
}

pub fn typical_orders() -> Vec<Order> {
    let benson = benson();
    let carl = carl();
    let paid = Status::from_updates(vec![
        StatusUpdate {
            value: StatusValue::Pending,
            date: date(2),
        },
        StatusUpdate {
            value: StatusValue::Paid,
            date: date(3),
        },
    ])
    .unwrap();
    vec![
        Order::new(
            benson.clone(),
            Name::new("Banana Cake").unwrap(),
            Quantity::new(2).unwrap(),
            benson.address().clone(),
            date(5),
        ),
        Order::from_parts(
            carl.clone(),
            Name::new("Apple Pie").unwrap(),
            Quantity::new(10).unwrap(),
            carl.address().clone(),
            paid,
            Note::default(),
            date(2),
        ),
    ]
}

pub fn typical_address_book() -> AddressBook {
    AddressBook::from_parts(typical_customers(), typical_orders()).unwrap()
}

pub fn typical_model() -> Model {
    Model::new(typical_address_book(), TierTable::default()).unwrap()
}

/// Narrow the customer view to only the customer shown at `index`.
pub fn show_customer_at_index(model: &mut Model, index: Index) {
    let (_, customer) = model.filtered_customer(index).unwrap();
    let first_word = customer.name().as_str().split_whitespace().next().unwrap().to_string();
    model.update_filtered_customer_list(CustomerFilter::NameKeywords(vec![first_word]));
    assert_eq!(model.filtered_customer_count(), 1);
}

/// Execute `command`, expect success, and compare the model afterwards.
pub fn assert_command_success(
    command: &dyn Command,
    model: &mut Model,
    expected_feedback: &str,
    expected_model: &Model,
) -> CommandResult {
    let result = command.execute(model).unwrap();
    assert_eq!(result.feedback, expected_feedback);
    assert_eq!(model.address_book(), expected_model.address_book());
    assert_eq!(model.tiers(), expected_model.tiers());
    assert_eq!(model.filtered_customers(), expected_model.filtered_customers());
    result
}

/// Execute `command`, expect `expected`, and check nothing changed.
pub fn assert_command_failure(command: &dyn Command, model: &mut Model, expected: CommandError) {
    let before = model.clone();
    let err = command.execute(model).unwrap_err();
    assert_eq!(err, expected);
    assert_eq!(*model, before);
}

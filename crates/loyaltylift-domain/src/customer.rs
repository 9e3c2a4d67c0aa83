//! Customer module - the loyalty program member record

use crate::{Address, DomainError, Name, Note, Points, Tag, Tier};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// Whether a customer is a person or a business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CustomerType {
    /// A private person
    #[default]
    Individual,

    /// A business account
    Enterprise,
}

impl CustomerType {
    /// Constraints shown when a customer type cannot be read
    pub const MESSAGE_FAIL_CONVERSION: &'static str =
        "Customer type should be either 'ind' (individual) or 'ent' (enterprise)";

    /// Name as stored in data files
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerType::Individual => "INDIVIDUAL",
            CustomerType::Enterprise => "ENTERPRISE",
        }
    }

    /// Parse the stored form (`INDIVIDUAL` or `ENTERPRISE`) exactly
    pub fn from_stored(s: &str) -> Result<Self, DomainError> {
        match s {
            "INDIVIDUAL" => Ok(CustomerType::Individual),
            "ENTERPRISE" => Ok(CustomerType::Enterprise),
            _ => Err(DomainError::invalid("CustomerType", Self::MESSAGE_FAIL_CONVERSION)),
        }
    }
}

impl fmt::Display for CustomerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerType::Individual => f.write_str("Individual"),
            CustomerType::Enterprise => f.write_str("Enterprise"),
        }
    }
}

impl std::str::FromStr for CustomerType {
    type Err = DomainError;

    /// Parse user input such as `ind`, `Individual`, `ent` or `enterprise`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ind" | "individual" => Ok(CustomerType::Individual),
            "ent" | "enterprise" => Ok(CustomerType::Enterprise),
            _ => Err(DomainError::invalid("CustomerType", Self::MESSAGE_FAIL_CONVERSION)),
        }
    }
}

/// A phone number
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Constraints shown when a phone number is rejected
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    /// Create a validated phone number
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(DomainError::invalid("Phone", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(value))
    }

    /// Returns true if `value` is a valid phone number
    pub fn is_valid(value: &str) -> bool {
        value.len() >= 3 && value.chars().all(|c| c.is_ascii_digit())
    }

    /// The digits as entered
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An email address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Constraints shown when an email is rejected
    pub const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain \
        and adhere to the following constraints:\n\
        1. The local-part should only contain alphanumeric characters and these special characters, \
        excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
        2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
        separated by periods.\n\
        The domain name must:\n    \
        - end with a domain label at least 2 characters long\n    \
        - have each domain label start and end with alphanumeric characters\n    \
        - have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";

    const LOCAL_SPECIAL: [char; 4] = ['+', '_', '.', '-'];

    /// Create a validated email address
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(DomainError::invalid("Email", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(value))
    }

    /// Returns true if `value` is a valid email address
    pub fn is_valid(value: &str) -> bool {
        let Some((local, domain)) = value.split_once('@') else {
            return false;
        };
        Self::is_valid_local_part(local) && Self::is_valid_domain(domain)
    }

    fn is_valid_local_part(local: &str) -> bool {
        let (Some(first), Some(last)) = (local.chars().next(), local.chars().last()) else {
            return false;
        };
        let no_adjacent_specials = local
            .as_bytes()
            .windows(2)
            .all(|pair| !(Self::is_local_special(pair[0]) && Self::is_local_special(pair[1])));
        first.is_ascii_alphanumeric()
            && last.is_ascii_alphanumeric()
            && no_adjacent_specials
            && local
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || Self::LOCAL_SPECIAL.contains(&c))
    }

    fn is_local_special(byte: u8) -> bool {
        Self::LOCAL_SPECIAL.contains(&char::from(byte))
    }

    fn is_valid_domain(domain: &str) -> bool {
        let labels: Vec<&str> = domain.split('.').collect();
        let last_long_enough = labels.last().is_some_and(|label| label.len() >= 2);
        last_long_enough
            && labels.iter().all(|label| {
                !label.is_empty()
                    && !label.starts_with('-')
                    && !label.ends_with('-')
                    && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            })
    }

    /// The address as entered
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A loyalty program customer
///
/// Customers are immutable once built; every edit produces a new `Customer`
/// that replaces the old one inside the address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    customer_type: CustomerType,
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
    points: Points,
    tier: Tier,
    marked: bool,
    note: Note,
}

impl Customer {
    /// Create a new customer with no points, no tier, unmarked and without a note
    pub fn new(
        customer_type: CustomerType,
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            customer_type,
            name,
            phone,
            email,
            address,
            tags,
            points: Points::default(),
            tier: Tier::None,
            marked: false,
            note: Note::default(),
        }
    }

    /// Create a customer from every field
    ///
    /// This is primarily for storage layer deserialization.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        customer_type: CustomerType,
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
        points: Points,
        tier: Tier,
        marked: bool,
        note: Note,
    ) -> Self {
        Self {
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
        }
    }

    /// Individual or enterprise
    pub fn customer_type(&self) -> CustomerType {
        self.customer_type
    }

    /// Customer name
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phone number
    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    /// Email address
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Postal address
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Tags, in sorted order
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Points balance and cumulative total
    pub fn points(&self) -> Points {
        self.points
    }

    /// Tier the customer was last classified into
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Whether the customer is bookmarked
    pub fn is_marked(&self) -> bool {
        self.marked
    }

    /// Free-form note
    pub fn note(&self) -> &Note {
        &self.note
    }

    /// A copy with new identity and contact details; everything else is kept
    pub fn with_details(
        &self,
        customer_type: CustomerType,
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            customer_type,
            name,
            phone,
            email,
            address,
            tags,
            ..self.clone()
        }
    }

    /// A copy with replaced points and the tier derived for them
    pub fn with_points(&self, points: Points, tier: Tier) -> Self {
        Self {
            points,
            tier,
            ..self.clone()
        }
    }

    /// A copy classified into `tier`
    pub fn with_tier(&self, tier: Tier) -> Self {
        Self {
            tier,
            ..self.clone()
        }
    }

    /// A copy with the bookmark flag set to `marked`
    pub fn with_marked(&self, marked: bool) -> Self {
        Self {
            marked,
            ..self.clone()
        }
    }

    /// A copy with a replaced note
    pub fn with_note(&self, note: Note) -> Self {
        Self {
            note,
            ..self.clone()
        }
    }

    /// Returns true if both records describe the same customer
    ///
    /// Two customers are the same when name, phone and email all match, even
    /// if other fields differ.
    pub fn is_same_customer(&self, other: &Customer) -> bool {
        self.name == other.name && self.phone == other.phone && self.email == other.email
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Type: {}; Phone: {}; Email: {}; Address: {}; Points: {}; Tier: {}",
            self.name, self.customer_type, self.phone, self.email, self.address, self.points, self.tier
        )?;
        if !self.tags.is_empty() {
            f.write_str("; Tags: ")?;
            for tag in &self.tags {
                write!(f, "{}", tag)?;
            }
        }
        Ok(())
    }
}

/// Which customers a filtered view shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CustomerFilter {
    /// Every customer
    #[default]
    All,

    /// Bookmarked customers only
    Marked,

    /// Customers whose name contains any of the keywords as a whole word
    NameKeywords(Vec<String>),
}

impl CustomerFilter {
    /// Returns true if `customer` passes this filter
    pub fn matches(&self, customer: &Customer) -> bool {
        match self {
            CustomerFilter::All => true,
            CustomerFilter::Marked => customer.is_marked(),
            CustomerFilter::NameKeywords(keywords) => customer
                .name()
                .as_str()
                .split_whitespace()
                .any(|word| keywords.iter().any(|keyword| keyword.eq_ignore_ascii_case(word))),
        }
    }
}

/// How a filtered customer view is ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomerSort {
    /// Alphabetically by name
    #[default]
    Name,

    /// Highest points balance first, ties by name
    Points,
}

impl CustomerSort {
    /// Compare two customers under this ordering
    pub fn compare(&self, a: &Customer, b: &Customer) -> Ordering {
        match self {
            CustomerSort::Name => a.name().cmp(b.name()),
            CustomerSort::Points => b
                .points()
                .balance()
                .cmp(&a.points().balance())
                .then_with(|| a.name().cmp(b.name())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Customer {
        Customer::new(
            CustomerType::Individual,
            Name::new("Alice Pauline").unwrap(),
            Phone::new("94351253").unwrap(),
            Email::new("alice@example.com").unwrap(),
            Address::new("123, Jurong West Ave 6, #08-111").unwrap(),
            BTreeSet::from([Tag::new("friends").unwrap()]),
        )
    }

    #[test]
    fn test_email_validation() {
        assert!(Email::is_valid("alice@example.com"));
        assert!(Email::is_valid("a+b.c_d-e@sub-domain.example.co"));
        assert!(!Email::is_valid("alice"));
        assert!(!Email::is_valid("@example.com"));
        assert!(!Email::is_valid(".alice@example.com"));
        assert!(!Email::is_valid("alice@example.c"));
        assert!(!Email::is_valid("alice@-example.com"));
        assert!(!Email::is_valid("alice@example..com"));
        assert!(!Email::is_valid("a..b@example.com"));
        assert!(!Email::is_valid("a+-b@example.com"));
    }

    #[test]
    fn test_phone_validation() {
        assert!(Phone::is_valid("911"));
        assert!(!Phone::is_valid("91"));
        assert!(!Phone::is_valid("9011p041"));
    }

    #[test]
    fn test_customer_type_parsing() {
        assert_eq!("ind".parse::<CustomerType>().unwrap(), CustomerType::Individual);
        assert_eq!("Enterprise".parse::<CustomerType>().unwrap(), CustomerType::Enterprise);
        assert!("company".parse::<CustomerType>().is_err());
        assert_eq!(CustomerType::from_stored("ENTERPRISE").unwrap(), CustomerType::Enterprise);
        assert!(CustomerType::from_stored("enterprise").is_err());
    }

    #[test]
    fn test_new_customer_defaults() {
        let customer = alice();
        assert_eq!(customer.points(), Points::default());
        assert_eq!(customer.tier(), Tier::None);
        assert!(!customer.is_marked());
        assert!(customer.note().is_empty());
    }

    #[test]
    fn test_with_points_keeps_other_fields() {
        let customer = alice().with_marked(true);
        let points = Points::new(10, 2000).unwrap();
        let updated = customer.with_points(points, Tier::Bronze);

        assert_eq!(updated.points(), points);
        assert_eq!(updated.tier(), Tier::Bronze);
        assert_eq!(updated.with_points(customer.points(), customer.tier()), customer);
    }

    #[test]
    fn test_same_customer_ignores_non_identity_fields() {
        let customer = alice();
        let edited = customer.with_note(Note::new("vip")).with_marked(true);
        assert!(customer.is_same_customer(&edited));
        assert_ne!(customer, edited);

        let other_phone = customer.with_details(
            customer.customer_type(),
            customer.name().clone(),
            Phone::new("12345678").unwrap(),
            customer.email().clone(),
            customer.address().clone(),
            customer.tags().clone(),
        );
        assert!(!customer.is_same_customer(&other_phone));
    }

    #[test]
    fn test_name_keyword_filter() {
        let customer = alice();
        assert!(CustomerFilter::NameKeywords(vec!["pauline".into()]).matches(&customer));
        assert!(!CustomerFilter::NameKeywords(vec!["paul".into()]).matches(&customer));
        assert!(!CustomerFilter::Marked.matches(&customer));
        assert!(CustomerFilter::All.matches(&customer));
    }

    #[test]
    fn test_display_lists_tags() {
        let text = alice().to_string();
        assert!(text.starts_with("Alice Pauline; Type: Individual"));
        assert!(text.ends_with("Tags: [friends]"));
    }
}

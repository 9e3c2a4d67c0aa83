//! Customer record commands: add and edit.

use crate::cli::{AddCustomerArgs, EditCustomerArgs};
use crate::error::Result;
use loyaltylift_domain::{Address, Customer, CustomerType, Email, Name, Phone, Tag};
use loyaltylift_logic::commands::{AddCustomerCommand, EditCustomerCommand, EditCustomerDescriptor};
use std::collections::BTreeSet;

/// Build an add command from validated arguments.
pub fn build_add(args: AddCustomerArgs) -> Result<AddCustomerCommand> {
    let customer = Customer::new(
        args.customer_type.parse::<CustomerType>()?,
        Name::new(args.name)?,
        Phone::new(args.phone)?,
        Email::new(args.email)?,
        Address::new(args.address)?,
        parse_tags(args.tags)?,
    );
    Ok(AddCustomerCommand::new(customer))
}

/// Build an edit command; only the given fields are overridden.
pub fn build_edit(args: EditCustomerArgs) -> Result<EditCustomerCommand> {
    let tags = if args.clear_tags {
        Some(BTreeSet::new())
    } else if args.tags.is_empty() {
        None
    } else {
        Some(parse_tags(args.tags)?)
    };

    let descriptor = EditCustomerDescriptor {
        customer_type: args
            .customer_type
            .map(|t| t.parse::<CustomerType>())
            .transpose()?,
        name: args.name.map(Name::new).transpose()?,
        phone: args.phone.map(Phone::new).transpose()?,
        email: args.email.map(Email::new).transpose()?,
        address: args.address.map(Address::new).transpose()?,
        tags,
    };
    if !descriptor.is_any_field_edited() {
        tracing::debug!("Edit without any field; customer is re-emitted unchanged");
    }
    Ok(EditCustomerCommand::new(args.index, descriptor))
}

fn parse_tags(tags: Vec<String>) -> Result<BTreeSet<Tag>> {
    let tags = tags
        .into_iter()
        .map(Tag::new)
        .collect::<std::result::Result<BTreeSet<_>, _>>()?;
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use loyaltylift_domain::{DomainError, Index};

    fn add_args() -> AddCustomerArgs {
        AddCustomerArgs {
            customer_type: "ent".into(),
            name: "Acme Bakery".into(),
            phone: "61234567".into(),
            email: "orders@acme.com".into(),
            address: "1 Bakery Lane".into(),
            tags: vec!["wholesale".into()],
        }
    }

    fn edit_args() -> EditCustomerArgs {
        EditCustomerArgs {
            index: Index::from_one_based(1).unwrap(),
            customer_type: None,
            name: None,
            phone: None,
            email: None,
            address: None,
            tags: Vec::new(),
            clear_tags: false,
        }
    }

    #[test]
    fn test_build_add() {
        let command = build_add(add_args()).unwrap();
        let expected = Customer::new(
            CustomerType::Enterprise,
            Name::new("Acme Bakery").unwrap(),
            Phone::new("61234567").unwrap(),
            Email::new("orders@acme.com").unwrap(),
            Address::new("1 Bakery Lane").unwrap(),
            BTreeSet::from([Tag::new("wholesale").unwrap()]),
        );
        assert_eq!(command, AddCustomerCommand::new(expected));
    }

    #[test]
    fn test_build_add_rejects_bad_email() {
        let args = AddCustomerArgs {
            email: "not-an-email".into(),
            ..add_args()
        };
        let err = build_add(args).unwrap_err();
        assert!(matches!(
            err,
            CliError::Domain(DomainError::InvalidValue { field: "Email", .. })
        ));
    }

    #[test]
    fn test_build_edit_only_given_fields() {
        let args = EditCustomerArgs {
            phone: Some("91234567".into()),
            ..edit_args()
        };
        let expected = EditCustomerDescriptor {
            phone: Some(Phone::new("91234567").unwrap()),
            ..Default::default()
        };
        assert_eq!(
            build_edit(args).unwrap(),
            EditCustomerCommand::new(Index::from_one_based(1).unwrap(), expected)
        );
    }

    #[test]
    fn test_build_edit_clear_tags() {
        let args = EditCustomerArgs {
            clear_tags: true,
            ..edit_args()
        };
        let expected = EditCustomerDescriptor {
            tags: Some(BTreeSet::new()),
            ..Default::default()
        };
        assert_eq!(
            build_edit(args).unwrap(),
            EditCustomerCommand::new(Index::from_one_based(1).unwrap(), expected)
        );
    }

    #[test]
    fn test_build_edit_without_fields() {
        let command = build_edit(edit_args()).unwrap();
        assert_eq!(
            command,
            EditCustomerCommand::new(Index::from_one_based(1).unwrap(), EditCustomerDescriptor::default())
        );
    }
}

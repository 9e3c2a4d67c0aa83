//! Listing and search commands.

use crate::cli::{CustomerSortArg, FindArgs, ListCustomersArgs, ListOrdersArgs, OrderSortArg};
use loyaltylift_domain::{CustomerFilter, CustomerSort, OrderFilter, OrderSort};
use loyaltylift_logic::commands::{FindCustomerCommand, ListCustomerCommand, ListOrderCommand};

/// Build a customer list command.
pub fn build_list_customers(args: ListCustomersArgs) -> ListCustomerCommand {
    let sort = match args.sort {
        CustomerSortArg::Name => CustomerSort::Name,
        CustomerSortArg::Points => CustomerSort::Points,
    };
    let filter = if args.marked {
        CustomerFilter::Marked
    } else {
        CustomerFilter::All
    };
    ListCustomerCommand::new(sort, filter)
}

/// Build an order list command.
pub fn build_list_orders(args: ListOrdersArgs) -> ListOrderCommand {
    let sort = match args.sort {
        OrderSortArg::Created => OrderSort::CreatedDate,
        OrderSortArg::Name => OrderSort::Name,
        OrderSortArg::Status => OrderSort::Status,
    };
    let filter = args.status.map_or(OrderFilter::All, OrderFilter::Status);
    ListOrderCommand::new(sort, filter)
}

/// Build a find command.
pub fn build_find(args: FindArgs) -> FindCustomerCommand {
    FindCustomerCommand::new(args.keywords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use loyaltylift_domain::StatusValue;

    #[test]
    fn test_list_customers_defaults() {
        let args = ListCustomersArgs {
            sort: CustomerSortArg::Name,
            marked: false,
        };
        assert_eq!(build_list_customers(args), ListCustomerCommand::default());
    }

    #[test]
    fn test_list_orders_by_status() {
        let args = ListOrdersArgs {
            sort: OrderSortArg::Status,
            status: Some(StatusValue::Shipped),
        };
        assert_eq!(
            build_list_orders(args),
            ListOrderCommand::new(OrderSort::Status, OrderFilter::Status(StatusValue::Shipped))
        );
    }
}

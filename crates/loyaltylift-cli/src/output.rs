//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use loyaltylift_domain::{Customer, Order, Tier, TierTable};
use loyaltylift_store::{JsonAdaptedCustomer, JsonAdaptedOrder};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the displayed customer list.
    pub fn format_customers(&self, customers: &[&Customer]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let records: Vec<JsonAdaptedCustomer> =
                    customers.iter().map(|c| JsonAdaptedCustomer::from(*c)).collect();
                Ok(serde_json::to_string_pretty(&records)?)
            }
            OutputFormat::Table => Ok(self.format_customers_table(customers)),
            OutputFormat::Quiet => Ok(numbered(customers.iter().map(|c| c.name().as_str()))),
        }
    }

    fn format_customers_table(&self, customers: &[&Customer]) -> String {
        if customers.is_empty() {
            return self.colorize("No customers found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Name", "Type", "Phone", "Email", "Points", "Cumulative", "Tier", "Tags"]);

        for (i, customer) in customers.iter().enumerate() {
            let mut name = customer.name().to_string();
            if customer.is_marked() {
                name.push_str(" *");
            }
            let tags: Vec<&str> = customer.tags().iter().map(|t| t.as_str()).collect();
            builder.push_record([
                (i + 1).to_string(),
                name,
                customer.customer_type().to_string(),
                customer.phone().to_string(),
                customer.email().to_string(),
                customer.points().balance().to_string(),
                customer.points().cumulative().to_string(),
                self.tier_label(customer.tier()),
                tags.join(", "),
            ]);
        }

        finish_table(builder)
    }

    /// Format the full record of a single customer.
    pub fn format_customer_detail(&self, customer: &Customer) -> Result<String> {
        if matches!(self.format, OutputFormat::Json) {
            return Ok(serde_json::to_string_pretty(&JsonAdaptedCustomer::from(customer))?);
        }
        if matches!(self.format, OutputFormat::Quiet) {
            return Ok(customer.name().to_string());
        }

        let tags: Vec<String> = customer.tags().iter().map(|t| t.to_string()).collect();
        let mut lines = vec![
            self.colorize(customer.name().as_str(), "cyan"),
            format!("  Type:       {}", customer.customer_type()),
            format!("  Phone:      {}", customer.phone()),
            format!("  Email:      {}", customer.email()),
            format!("  Address:    {}", customer.address()),
            format!("  Points:     {}", customer.points().balance()),
            format!("  Cumulative: {}", customer.points().cumulative()),
            format!("  Tier:       {}", self.tier_label(customer.tier())),
            format!("  Bookmarked: {}", if customer.is_marked() { "yes" } else { "no" }),
        ];
        if !tags.is_empty() {
            lines.push(format!("  Tags:       {}", tags.join("")));
        }
        if !customer.note().is_empty() {
            lines.push(format!("  Note:       {}", customer.note()));
        }
        Ok(lines.join("\n"))
    }

    /// Format the displayed order list.
    pub fn format_orders(&self, orders: &[&Order]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let records: Vec<JsonAdaptedOrder> =
                    orders.iter().map(|o| JsonAdaptedOrder::from(*o)).collect();
                Ok(serde_json::to_string_pretty(&records)?)
            }
            OutputFormat::Table => Ok(self.format_orders_table(orders)),
            OutputFormat::Quiet => Ok(numbered(orders.iter().map(|o| o.name().as_str()))),
        }
    }

    fn format_orders_table(&self, orders: &[&Order]) -> String {
        if orders.is_empty() {
            return self.colorize("No orders found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Product", "Customer", "Qty", "Status", "Created"]);

        for (i, order) in orders.iter().enumerate() {
            builder.push_record([
                (i + 1).to_string(),
                order.name().to_string(),
                order.customer().name().to_string(),
                order.quantity().value().to_string(),
                order.status().latest().value.to_string(),
                order.created_date().format("%Y-%m-%d").to_string(),
            ]);
        }

        finish_table(builder)
    }

    /// Format the tier threshold table.
    pub fn format_tiers(&self, tiers: &TierTable) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Tier", "Minimum cumulative points"]);
        for tier in Tier::ALL {
            builder.push_record([self.tier_label(tier), tiers.threshold(tier).cumulative().to_string()]);
        }
        finish_table(builder)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn tier_label(&self, tier: Tier) -> String {
        let color = match tier {
            Tier::Gold => "yellow",
            Tier::Silver => "white",
            Tier::Bronze => "magenta",
            Tier::None => "",
        };
        self.colorize(tier.as_str(), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            "white" => text.white().bold().to_string(),
            _ => text.to_string(),
        }
    }
}

fn finish_table(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn numbered<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names
        .enumerate()
        .map(|(i, name)| format!("{}. {}", i + 1, name))
        .collect::<Vec<_>>()
        .join("\n")
}

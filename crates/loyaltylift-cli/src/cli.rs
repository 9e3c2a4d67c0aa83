//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use loyaltylift_domain::{Index, StatusValue, Tier};
use std::path::PathBuf;

/// LoyaltyLift - customer points and tier bookkeeping.
#[derive(Debug, Parser)]
#[command(name = "loyaltylift")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "LOYALTYLIFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address book data file, overriding the configured one
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// A single REPL line. Shares the command set with [`Cli`].
#[derive(Debug, Parser)]
#[command(name = "loyaltylift", no_binary_name = true, disable_version_flag = true)]
pub struct ReplLine {
    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (names only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a customer
    #[command(name = "addc")]
    AddCustomer(AddCustomerArgs),

    /// Edit the customer at INDEX
    #[command(name = "editc")]
    EditCustomer(EditCustomerArgs),

    /// Delete the customer at INDEX
    #[command(name = "deletec")]
    DeleteCustomer(IndexArgs),

    /// Bookmark the customer at INDEX
    #[command(name = "markc")]
    MarkCustomer(IndexArgs),

    /// Remove the bookmark from the customer at INDEX
    #[command(name = "unmarkc")]
    UnmarkCustomer(IndexArgs),

    /// Replace the points of the customer at INDEX
    #[command(name = "setpoints")]
    SetPoints(SetPointsArgs),

    /// Add (or with a negative value, redeem) points for the customer at INDEX
    #[command(name = "addpoints")]
    AddPoints(AddPointsArgs),

    /// Set the minimum cumulative points of a tier
    #[command(name = "settier")]
    SetTier(SetTierArgs),

    /// Show the current tier thresholds
    Tiers,

    /// Set the note of the customer at INDEX
    #[command(name = "setnotec")]
    SetNote(SetNoteArgs),

    /// List customers
    #[command(name = "listc")]
    ListCustomers(ListCustomersArgs),

    /// List orders
    #[command(name = "listo")]
    ListOrders(ListOrdersArgs),

    /// Find customers whose name contains any of the keywords
    #[command(name = "findc")]
    FindCustomers(FindArgs),

    /// Show the full record of the customer at INDEX
    #[command(name = "viewc")]
    ViewCustomer(IndexArgs),

    /// Remove every customer and order
    Clear,

    /// Enter interactive REPL mode
    Repl,
}

/// A position in the displayed customer list.
#[derive(Debug, Args)]
pub struct IndexArgs {
    /// 1-based position in the displayed list
    pub index: Index,
}

/// Arguments for the addc command.
#[derive(Debug, Args)]
pub struct AddCustomerArgs {
    /// Customer type (ind, individual, ent, enterprise)
    #[arg(long = "type", default_value = "individual")]
    pub customer_type: String,

    /// Name
    #[arg(short, long)]
    pub name: String,

    /// Phone number
    #[arg(short, long)]
    pub phone: String,

    /// Email address
    #[arg(short, long)]
    pub email: String,

    /// Address
    #[arg(short, long)]
    pub address: String,

    /// Tag (repeatable)
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,
}

/// Arguments for the editc command.
#[derive(Debug, Args)]
pub struct EditCustomerArgs {
    /// 1-based position in the displayed list
    pub index: Index,

    /// Customer type (ind, individual, ent, enterprise)
    #[arg(long = "type")]
    pub customer_type: Option<String>,

    /// Name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Phone number
    #[arg(short, long)]
    pub phone: Option<String>,

    /// Email address
    #[arg(short, long)]
    pub email: Option<String>,

    /// Address
    #[arg(short, long)]
    pub address: Option<String>,

    /// Replace all tags (repeatable)
    #[arg(short, long = "tag", conflicts_with = "clear_tags")]
    pub tags: Vec<String>,

    /// Remove every tag
    #[arg(long)]
    pub clear_tags: bool,
}

/// Arguments for the setpoints command.
#[derive(Debug, Args)]
pub struct SetPointsArgs {
    /// 1-based position in the displayed list
    pub index: Index,

    /// Spendable balance
    #[arg(short, long, allow_negative_numbers = true)]
    pub points: i64,

    /// Lifetime total; defaults to the balance
    #[arg(long, allow_negative_numbers = true)]
    pub cumulative: Option<i64>,
}

/// Arguments for the addpoints command.
#[derive(Debug, Args)]
pub struct AddPointsArgs {
    /// 1-based position in the displayed list
    pub index: Index,

    /// Points to add; negative to redeem
    #[arg(allow_negative_numbers = true)]
    pub points: i64,
}

/// Arguments for the settier command.
#[derive(Debug, Args)]
pub struct SetTierArgs {
    /// Tier to change
    #[arg(value_enum)]
    pub tier: TierArg,

    /// Minimum cumulative points for the tier
    #[arg(allow_negative_numbers = true)]
    pub points: i64,
}

/// Arguments for the setnotec command.
#[derive(Debug, Args)]
pub struct SetNoteArgs {
    /// 1-based position in the displayed list
    pub index: Index,

    /// Note text; omit to clear the note
    pub note: Option<String>,
}

/// Arguments for the listc command.
#[derive(Debug, Args)]
pub struct ListCustomersArgs {
    /// Ordering
    #[arg(short, long, value_enum, default_value = "name")]
    pub sort: CustomerSortArg,

    /// Only bookmarked customers
    #[arg(short, long)]
    pub marked: bool,
}

/// Arguments for the listo command.
#[derive(Debug, Args)]
pub struct ListOrdersArgs {
    /// Ordering
    #[arg(short, long, value_enum, default_value = "created")]
    pub sort: OrderSortArg,

    /// Only orders whose latest status is STATUS
    #[arg(long)]
    pub status: Option<StatusValue>,
}

/// Arguments for the findc command.
#[derive(Debug, Args)]
pub struct FindArgs {
    /// Keywords matched against whole words of the name
    #[arg(required = true)]
    pub keywords: Vec<String>,
}

/// Tier argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TierArg {
    /// Bronze tier
    Bronze,
    /// Silver tier
    Silver,
    /// Gold tier
    Gold,
}

/// Customer ordering argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CustomerSortArg {
    /// Alphabetically by name
    Name,
    /// Highest balance first
    Points,
}

/// Order ordering argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OrderSortArg {
    /// Oldest first
    Created,
    /// By product name
    Name,
    /// By latest status
    Status,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<TierArg> for Tier {
    fn from(tier: TierArg) -> Self {
        match tier {
            TierArg::Bronze => Tier::Bronze,
            TierArg::Silver => Tier::Silver,
            TierArg::Gold => Tier::Gold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Command {
        let cli = Cli::try_parse_from(std::iter::once("loyaltylift").chain(args.iter().copied()))
            .unwrap();
        cli.command.unwrap()
    }

    #[test]
    fn test_no_command_enters_repl() {
        let cli = Cli::parse_from(["loyaltylift", "--no-color"]);
        assert!(cli.command.is_none());
        assert!(cli.no_color);
    }

    #[test]
    fn test_index_is_one_based() {
        match parse(&["markc", "3"]) {
            Command::MarkCustomer(args) => assert_eq!(args.index.one_based(), 3),
            other => panic!("Expected markc, got {:?}", other),
        }
        assert!(Cli::try_parse_from(["loyaltylift", "markc", "0"]).is_err());
        assert!(Cli::try_parse_from(["loyaltylift", "markc", "-1"]).is_err());
    }

    #[test]
    fn test_setpoints() {
        match parse(&["setpoints", "1", "--points", "50", "--cumulative", "1200"]) {
            Command::SetPoints(args) => {
                assert_eq!(args.points, 50);
                assert_eq!(args.cumulative, Some(1200));
            }
            other => panic!("Expected setpoints, got {:?}", other),
        }
    }

    #[test]
    fn test_addpoints_accepts_negative() {
        match parse(&["addpoints", "2", "-30"]) {
            Command::AddPoints(args) => assert_eq!(args.points, -30),
            other => panic!("Expected addpoints, got {:?}", other),
        }
    }

    #[test]
    fn test_settier() {
        match parse(&["settier", "silver", "1100"]) {
            Command::SetTier(args) => {
                assert_eq!(Tier::from(args.tier), Tier::Silver);
                assert_eq!(args.points, 1100);
            }
            other => panic!("Expected settier, got {:?}", other),
        }
        assert!(Cli::try_parse_from(["loyaltylift", "settier", "platinum", "1"]).is_err());
        assert!(Cli::try_parse_from(["loyaltylift", "settier", "none", "500"]).is_err());
    }

    #[test]
    fn test_edit_tags_conflict_with_clear() {
        assert!(Cli::try_parse_from(["loyaltylift", "editc", "1", "-t", "vip", "--clear-tags"]).is_err());
    }

    #[test]
    fn test_list_orders_status() {
        match parse(&["listo", "--sort", "status", "--status", "paid"]) {
            Command::ListOrders(args) => {
                assert_eq!(args.sort, OrderSortArg::Status);
                assert_eq!(args.status, Some(StatusValue::Paid));
            }
            other => panic!("Expected listo, got {:?}", other),
        }
    }

    #[test]
    fn test_repl_line_has_no_binary_name() {
        let line = ReplLine::try_parse_from(["findc", "alex", "david"]).unwrap();
        match line.command {
            Command::FindCustomers(args) => assert_eq!(args.keywords, ["alex", "david"]),
            other => panic!("Expected findc, got {:?}", other),
        }
    }
}

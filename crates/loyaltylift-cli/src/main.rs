//! LoyaltyLift CLI - customer points and tier bookkeeping.

use anyhow::Context;
use clap::Parser;
use loyaltylift_cli::commands;
use loyaltylift_cli::repl;
use loyaltylift_cli::{Cli, Command, Config, Formatter};
use loyaltylift_domain::traits::AddressBookStorage;
use loyaltylift_domain::{AddressBook, Model};
use loyaltylift_logic::LogicManager;
use loyaltylift_store::sample::sample_address_book;
use loyaltylift_store::JsonAddressBookStorage;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_tracing(&config.settings.log_level);

    let data_file = cli.data.clone().unwrap_or_else(|| config.data_file.clone());
    let storage = JsonAddressBookStorage::new(&data_file);
    let tiers = config.tier_table()?;
    let model = Model::new(initial_address_book(&storage)?, tiers)?;
    let mut manager = LogicManager::new(model, storage);

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&mut manager, &formatter, &config.settings)?;
        }
        Some(cmd) => {
            let output = commands::execute(cmd, &mut manager, &formatter)?;
            println!("{}", output);
        }
    }

    Ok(())
}

/// Log to stderr. `LOYALTYLIFT_LOG` wins over the configured level.
fn init_tracing(configured_level: &str) {
    let filter = EnvFilter::try_from_env("LOYALTYLIFT_LOG")
        .or_else(|_| EnvFilter::try_new(configured_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

/// Stored data, sample data on first run, or an empty book if the file is unreadable.
fn initial_address_book(storage: &JsonAddressBookStorage) -> anyhow::Result<AddressBook> {
    match storage.read_address_book() {
        Ok(Some(book)) => Ok(book),
        Ok(None) => {
            tracing::info!(
                path = %storage.address_book_path().display(),
                "Data file not found, starting with sample data"
            );
            Ok(sample_address_book()?)
        }
        Err(e) => {
            tracing::warn!(
                path = %storage.address_book_path().display(),
                error = %e,
                "Data file could not be loaded, starting with an empty address book"
            );
            Ok(AddressBook::new())
        }
    }
}

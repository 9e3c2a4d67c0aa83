//! LoyaltyLift CLI library.
//!
//! This library provides the command-line front end for LoyaltyLift:
//! argument parsing, configuration, command dispatch, table output and the
//! interactive REPL.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;

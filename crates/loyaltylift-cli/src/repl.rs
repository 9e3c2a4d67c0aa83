//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::cli::ReplLine;
use crate::commands;
use crate::config::{Config, Settings};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use clap::{CommandFactory, Parser};
use loyaltylift_domain::traits::AddressBookStorage;
use loyaltylift_logic::LogicManager;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
pub fn run_repl<S: AddressBookStorage>(
    manager: &mut LogicManager<S>,
    formatter: &Formatter,
    settings: &Settings,
) -> Result<()> {
    println!("{}", formatter.info("LoyaltyLift REPL - Type 'help' for commands, 'exit' to quit"));
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(settings.history_size)?
        .auto_add_history(false)
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("loyaltylift> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help();
                    }
                    Ok(ReplCommand::Command(cmd)) => match commands::execute(*cmd, manager, formatter) {
                        Ok(output) => println!("{}", output),
                        Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                    },
                    Err(ParseOutcome::Clap(e)) => {
                        // clap renders its own usage and help text
                        eprintln!("{}", e.render());
                    }
                    Err(ParseOutcome::Input(e)) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    if let Err(e) = editor.save_history(&history_path) {
        tracing::warn!(path = %history_path.display(), error = %e, "Could not save REPL history");
    }

    Ok(())
}

/// REPL command type.
enum ReplCommand {
    Exit,
    Help,
    Command(Box<crate::cli::Command>),
}

/// Why a REPL line could not be turned into a command.
enum ParseOutcome {
    Clap(clap::Error),
    Input(CliError),
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> std::result::Result<ReplCommand, ParseOutcome> {
    let words = tokenize(line).map_err(ParseOutcome::Input)?;

    match words.first().map(String::as_str) {
        None => Err(ParseOutcome::Input(CliError::InvalidInput("Empty command".to_string()))),
        Some("exit" | "quit" | "q") => Ok(ReplCommand::Exit),
        Some("help" | "?") => Ok(ReplCommand::Help),
        Some(_) => ReplLine::try_parse_from(words)
            .map(|parsed| ReplCommand::Command(Box::new(parsed.command)))
            .map_err(ParseOutcome::Clap),
    }
}

/// Split a line into words. Double quotes group words and are removed.
fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quoted = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quoted {
        return Err(CliError::InvalidInput("Unterminated quote".to_string()));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::app_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help() {
    let mut command = ReplLine::command();
    println!("{}", command.render_help());
    println!("  help, ?         Show this help");
    println!("  exit, quit, q   Exit REPL");
    println!();
}

use cfp::{Money, Result, TransactionFilter, DEFAULT_PROJECTION_DAYS};

use std::{env, fs, path::PathBuf};

use anyhow::Context;

use thiserror::Error;

const USAGE: &str = "usage: cash-flow-projector project <transactions.csv> <current_balance> [days]
       cash-flow-projector summary <transactions.csv> <current_balance>
       cash-flow-projector list <transactions.csv> [all|paid|unpaid|upcoming]";

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}\n{usage}", usage = USAGE)]
    Parse(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid current balance: {0:?}")]
    InvalidBalance(String),

    #[error("Invalid number of days: {0:?}, expected an integer")]
    InvalidDays(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Project {
        input_path: PathBuf,
        current_balance: Money,
        days: i64,
    },
    Summary {
        input_path: PathBuf,
        current_balance: Money,
    },
    List {
        input_path: PathBuf,
        filter: TransactionFilter,
    },
}

/// Parses the process arguments into a command
pub fn parse_input_args() -> Result<Command> {
    return parse_args(env::args().skip(1));
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command> {
    let mut args = args.into_iter();

    let command = args
        .next()
        .ok_or_else(|| InputArgsError::Parse("Missing command.".to_string()))?;

    let input_path = parse_path(args.next())?;

    let parsed = match command.as_str() {
        "project" => {
            let current_balance = parse_balance(args.next())?;
            let days = match args.next() {
                None => DEFAULT_PROJECTION_DAYS,
                Some(days) => days
                    .trim()
                    .parse()
                    .map_err(|_| InputArgsError::InvalidDays(days))?,
            };

            Command::Project {
                input_path,
                current_balance,
                days,
            }
        }
        "summary" => Command::Summary {
            input_path,
            current_balance: parse_balance(args.next())?,
        },
        "list" => Command::List {
            input_path,
            filter: match args.next() {
                None => TransactionFilter::default(),
                Some(filter) => filter.parse()?,
            },
        },
        other => Err(InputArgsError::Parse(format!("Unknown command {other:?}.")))?,
    };

    if let Some(extra) = args.next() {
        Err(InputArgsError::Parse(format!("Unexpected argument {extra:?}.")))?
    }

    return Ok(parsed);
}

fn parse_path(filename: Option<String>) -> Result<PathBuf> {
    let filename = filename
        .ok_or_else(|| InputArgsError::Parse("Second argument must be the input file.".to_string()))?;

    let path = fs::canonicalize(&filename).with_context(|| InputArgsError::FileNotFound(filename))?;

    return Ok(path);
}

fn parse_balance(balance: Option<String>) -> Result<Money> {
    let balance = balance
        .ok_or_else(|| InputArgsError::Parse("Missing current balance.".to_string()))?;

    let money = Money::parse(&balance).with_context(|| InputArgsError::InvalidBalance(balance))?;

    return Ok(money);
}

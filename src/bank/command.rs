//! Parsing of whitespace-delimited command records into typed commands.
use csv::StringRecord;
use thiserror::Error;

use crate::bank::{
    AccountKind,
    types::{DECIMAL_PRECISION, Money},
};

/// A single operation against the bank, one per input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Create {
        owner: String,
        kind: AccountKind,
        initial_deposit: Money,
    },
    Deposit {
        owner: String,
        amount: Money,
    },
    Withdraw {
        owner: String,
        amount: Money,
    },
    Transfer {
        from: String,
        to: String,
        amount: Money,
    },
    Activate {
        owner: String,
    },
    Deactivate {
        owner: String,
    },
    View {
        owner: String,
    },
}

impl Command {
    /// Parses one record into a command. Any unrecognized leading token is
    /// treated as a request to view the account named by the second token.
    pub fn parse(record: &StringRecord) -> Result<Self, CommandError> {
        let name = record
            .get(0)
            .filter(|token| !token.is_empty())
            .ok_or(CommandError::Empty)?;
        match name {
            "Create" => {
                // The token between the command name and the kind labels the
                // entity being created and carries no data.
                let kind = parse_kind(field(record, 2, "Create")?)?;
                let owner = field(record, 3, "Create")?.to_string();
                let initial_deposit = parse_money(field(record, 4, "Create")?)?;
                Ok(Command::Create {
                    owner,
                    kind,
                    initial_deposit,
                })
            }
            "Transfer" => Ok(Command::Transfer {
                from: field(record, 1, "Transfer")?.to_string(),
                to: field(record, 2, "Transfer")?.to_string(),
                amount: parse_money(field(record, 3, "Transfer")?)?,
            }),
            "Deposit" => Ok(Command::Deposit {
                owner: field(record, 1, "Deposit")?.to_string(),
                amount: parse_money(field(record, 2, "Deposit")?)?,
            }),
            "Withdraw" => Ok(Command::Withdraw {
                owner: field(record, 1, "Withdraw")?.to_string(),
                amount: parse_money(field(record, 2, "Withdraw")?)?,
            }),
            "Activate" => Ok(Command::Activate {
                owner: field(record, 1, "Activate")?.to_string(),
            }),
            "Deactivate" => Ok(Command::Deactivate {
                owner: field(record, 1, "Deactivate")?.to_string(),
            }),
            _ => Ok(Command::View {
                owner: field(record, 1, "View")?.to_string(),
            }),
        }
    }
}

fn field<'a>(
    record: &'a StringRecord,
    index: usize,
    command: &'static str,
) -> Result<&'a str, CommandError> {
    record
        .get(index)
        .ok_or(CommandError::MissingArgument(command))
}

/// Converts a decimal token to fixed-point, rounding at the thousandth.
fn parse_money(token: &str) -> Result<Money, CommandError> {
    token
        .parse::<f64>()
        .map(|value| (value * DECIMAL_PRECISION as f64).round() as Money)
        .map_err(|_| CommandError::InvalidAmount(token.to_string()))
}

fn parse_kind(token: &str) -> Result<AccountKind, CommandError> {
    match token {
        "Savings" => Ok(AccountKind::Savings),
        "Checking" => Ok(AccountKind::Checking),
        "Business" => Ok(AccountKind::Business),
        _ => Err(CommandError::UnknownKind(token.to_string())),
    }
}

/// Errors produced while parsing a command record. These are input-layer
/// diagnostics and never appear on standard output.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Empty command line")]
    Empty,
    #[error("Missing argument for {0}")]
    MissingArgument(&'static str),
    #[error("Invalid amount {0}")]
    InvalidAmount(String),
    #[error("Unknown account type {0}")]
    UnknownKind(String),
}

use crate::ids::TransactionId;
use crate::Money;
use crate::Result;
use crate::Transaction;

use chrono::{NaiveDate, NaiveDateTime};

use serde::Deserialize;

use thiserror::Error;

/// Time-of-day appended to a due date before parsing, so a date-only string is read as midnight
/// of that calendar day.
const DUE_DATE_TIME_MARKER: &str = "T00:00:00";
const DUE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Represents a transaction as a transaction source hands it over, before any validation
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub description: String,
    pub amount: String,
    pub due_date: String,
    pub is_paid: String,
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid amount {amount:?} on transaction {id} ({description:?})")]
    Amount {
        id: TransactionId,
        description: String,
        amount: String,
    },

    #[error("Invalid due date {due_date:?} on transaction {id} ({description:?}), expected YYYY-MM-DD")]
    DueDate {
        id: TransactionId,
        description: String,
        due_date: String,
    },

    #[error("Invalid paid flag {is_paid:?} on transaction {id} ({description:?}), expected true or false")]
    IsPaid {
        id: TransactionId,
        description: String,
        is_paid: String,
    },
}

impl TransactionRecord {
    pub fn parse_transaction(&self) -> Result<Transaction> {
        let id = TransactionId(self.id.clone());

        let amount = Money::parse(&self.amount).map_err(|e| {
            log::debug!("Rejecting amount of {id}: {e}");
            ValidationError::Amount {
                id: id.clone(),
                description: self.description.clone(),
                amount: self.amount.clone(),
            }
        })?;

        let due_date = parse_due_date(&self.due_date).ok_or_else(|| ValidationError::DueDate {
            id: id.clone(),
            description: self.description.clone(),
            due_date: self.due_date.clone(),
        })?;

        let is_paid = parse_flag(&self.is_paid).ok_or_else(|| ValidationError::IsPaid {
            id: id.clone(),
            description: self.description.clone(),
            is_paid: self.is_paid.clone(),
        })?;

        return Ok(Transaction {
            id,
            description: self.description.clone(),
            amount,
            due_date,
            is_paid,
        });
    }
}

/// Validates every record, stopping at the first invalid one
pub fn parse_transactions(records: &[TransactionRecord]) -> Result<Vec<Transaction>> {
    return records
        .iter()
        .map(TransactionRecord::parse_transaction)
        .collect::<Result<Vec<Transaction>>>();
}

fn parse_due_date(string: &str) -> Option<NaiveDate> {
    let with_time = format!("{}{}", string.trim(), DUE_DATE_TIME_MARKER);

    return NaiveDateTime::parse_from_str(&with_time, DUE_DATE_FORMAT)
        .ok()
        .map(|datetime| datetime.date());
}

fn parse_flag(string: &str) -> Option<bool> {
    let string = string.trim();

    if string.eq_ignore_ascii_case("true") {
        return Some(true);
    }

    if string.eq_ignore_ascii_case("false") {
        return Some(false);
    }

    None
}

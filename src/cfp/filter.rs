use crate::Transaction;

use std::{fmt, str::FromStr};

use chrono::NaiveDate;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Unknown transaction filter {0:?}, expected one of: all, paid, unpaid, upcoming")]
    Unknown(String),
}

/// Selects which transactions get listed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransactionFilter {
    #[default]
    All,
    Paid,
    Unpaid,
    /// Unpaid and due today or later
    Upcoming,
}

impl TransactionFilter {
    pub fn matches(&self, tx: &Transaction, today: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Paid => tx.is_paid,
            Self::Unpaid => !tx.is_paid,
            Self::Upcoming => tx.is_pending_on(today),
        }
    }

    /// Keeps the input order
    pub fn apply<'a>(&self, transactions: &'a [Transaction], today: NaiveDate) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|tx| self.matches(tx, today))
            .collect()
    }
}

impl FromStr for TransactionFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "paid" => Ok(Self::Paid),
            "unpaid" => Ok(Self::Unpaid),
            "upcoming" => Ok(Self::Upcoming),
            _ => Err(FilterError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for TransactionFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Paid => "paid",
            Self::Unpaid => "unpaid",
            Self::Upcoming => "upcoming",
        };

        write!(f, "{name}")
    }
}

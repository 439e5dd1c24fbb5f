use crate::projection::ProjectionPoint;
use crate::{Money, Totals, Transaction};

use serde::{Deserialize, Serialize};

/// One projected day, as written out for charts and tables
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProjectionReport {
    pub day: String,
    pub balance: String,
}

impl From<&ProjectionPoint> for ProjectionReport {
    fn from(point: &ProjectionPoint) -> Self {
        Self {
            day: point.day.to_string(),
            balance: point.balance.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SummaryReport {
    pub current_balance: String,
    pub total_paid: String,
    pub total_pending: String,
}

impl SummaryReport {
    pub fn new(current_balance: &Money, totals: &Totals) -> Self {
        Self {
            current_balance: current_balance.to_string(),
            total_paid: totals.paid.to_string(),
            total_pending: totals.pending.to_string(),
        }
    }
}

/// Export row for a transaction; the column set matches what the reader accepts
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransactionReport {
    pub id: String,
    pub description: String,
    pub amount: String,
    pub due_date: String,
    pub is_paid: bool,
}

impl From<&Transaction> for TransactionReport {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: tx.id.0.clone(),
            description: tx.description.clone(),
            // full precision, exporting must not lose cents
            amount: tx.amount.0.to_string(),
            due_date: tx.due_date.to_string(),
            is_paid: tx.is_paid,
        }
    }
}

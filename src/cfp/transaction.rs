use crate::ids::TransactionId;
use crate::Money;

use chrono::NaiveDate;

/// A single scheduled movement of money on the account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,
    pub description: String,
    pub amount: Money,
    pub due_date: NaiveDate,
    pub is_paid: bool,
}

impl Transaction {
    /// Unpaid and not yet overdue. Paid amounts are already part of the current balance, and
    /// overdue unpaid ones are left out of any forecast.
    pub fn is_pending_on(&self, today: NaiveDate) -> bool {
        return !self.is_paid && self.due_date >= today;
    }
}

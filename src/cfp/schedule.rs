use crate::Result;
use crate::{Money, Transaction};

use std::collections::BTreeMap;

use chrono::NaiveDate;

/// Net change expected on each calendar date, built once from the pending transactions so a
/// forecast never rescans the whole list per day
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Schedule {
    net_changes: BTreeMap<NaiveDate, Money>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes the transactions still pending on `today`; paid and overdue ones are skipped
    pub fn pending(transactions: &[Transaction], today: NaiveDate) -> Result<Self> {
        let mut schedule = Self::new();

        for tx in transactions {
            if !tx.is_pending_on(today) {
                log::debug!("Skipping transaction {} due {}: not pending", tx.id, tx.due_date);
                continue;
            }

            schedule.append(tx.due_date, &tx.amount)?;
        }

        Ok(schedule)
    }

    pub fn append(&mut self, due_date: NaiveDate, amount: &Money) -> Result {
        self.net_changes
            .entry(due_date)
            .or_insert(Money::ZERO)
            .add(amount)
    }

    /// Sum of everything due on exactly this date
    pub fn net_change_on(&self, date: &NaiveDate) -> Money {
        self.net_changes.get(date).copied().unwrap_or(Money::ZERO)
    }

    pub fn len(&self) -> usize {
        self.net_changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

use crate::input::{self, TransactionRecord};
use crate::Result;
use crate::{Money, Schedule, Transaction};

use chrono::{Days, Local, NaiveDate};

use thiserror::Error;

pub const DEFAULT_PROJECTION_DAYS: i64 = 30;

#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("Date out of range: {0} plus {1} days")]
    DateOutOfRange(NaiveDate, u64),
}

/// Forecast balance at the end of one day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionPoint {
    pub day: NaiveDate,
    pub balance: Money,
}

/// Day-by-day balance forecast anchored on a fixed evaluation date.
///
/// The engine is a pure function of its evaluation date and arguments: it never mutates the
/// transactions it is given, and calling it twice with the same inputs yields the same points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionEngine {
    today: NaiveDate,
}

impl ProjectionEngine {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Anchors on the local calendar date, dropping the time of day
    pub fn for_local_today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Projects `current_balance` forward over `days` days, starting today.
    ///
    /// `current_balance` must already include every paid transaction. Only unpaid transactions due
    /// today or later move the balance, each on exactly its due date. Overdue unpaid transactions
    /// are dropped from the forecast altogether. A `days` of zero or less yields no points.
    pub fn project(
        &self,
        current_balance: Money,
        transactions: &[Transaction],
        days: i64,
    ) -> Result<Vec<ProjectionPoint>> {
        if days <= 0 {
            log::debug!("Projection horizon of {days} days, nothing to project");
            return Ok(vec![]);
        }

        let schedule = Schedule::pending(transactions, self.today)?;

        log::debug!(
            "Projecting {current_balance} over {days} days from {} with {} scheduled dates",
            self.today,
            schedule.len()
        );

        let last_offset = days as u64 - 1;
        if self.today.checked_add_days(Days::new(last_offset)).is_none() {
            Err(ProjectionError::DateOutOfRange(self.today, last_offset))?
        }

        let mut running_balance = current_balance;
        let mut points = Vec::with_capacity(days as usize);

        for offset in 0..days as u64 {
            let day = self
                .today
                .checked_add_days(Days::new(offset))
                .ok_or(ProjectionError::DateOutOfRange(self.today, offset))?;

            running_balance.add(&schedule.net_change_on(&day))?;

            points.push(ProjectionPoint {
                day,
                balance: running_balance,
            });
        }

        Ok(points)
    }

    /// Validates every record before projecting; one bad record fails the whole projection
    pub fn project_records(
        &self,
        current_balance: Money,
        records: &[TransactionRecord],
        days: i64,
    ) -> Result<Vec<ProjectionPoint>> {
        let transactions = input::parse_transactions(records)?;

        self.project(current_balance, &transactions, days)
    }
}

use crate::Result;
use crate::{Money, Transaction};

/// Settled versus still-open amounts across every transaction, whatever its date
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub paid: Money,
    pub pending: Money,
}

impl Totals {
    pub fn from_transactions(transactions: &[Transaction]) -> Result<Self> {
        let mut totals = Self::default();

        for tx in transactions {
            if tx.is_paid {
                totals.paid.add(&tx.amount)?;
            } else {
                totals.pending.add(&tx.amount)?;
            }
        }

        return Ok(totals);
    }
}

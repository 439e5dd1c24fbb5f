use crate::Result;

use std::{fmt, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1:?} and {2:?}")]
    Overflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Exact decimal currency amount. Negative values are outflows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Digits kept when a balance is shown to a person
    pub const DISPLAY_SCALE: u32 = 2;

    pub fn parse(string: &str) -> Result<Self> {
        let trimmed = string.trim();

        if trimmed.is_empty() {
            Err(MoneyError::Parse("Empty amount", string.to_string()))?
        }

        let value = Decimal::from_str(trimmed)
            .map_err(|_| MoneyError::Parse("Not a decimal number", string.to_string()))?;

        return Ok(Money(value));
    }

    pub fn add(&mut self, other: &Self) -> Result {
        let sum = self
            .0
            .checked_add(other.0)
            .ok_or_else(|| MoneyError::Overflow("add", *self, *other))?;

        self.0 = sum;

        return Ok(());
    }

    /// Value as displayed, rounded half away from zero
    pub fn rounded(&self) -> Decimal {
        let rounded = self
            .0
            .round_dp_with_strategy(Self::DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);

        // -0.001 rounds to a signed zero
        if rounded.is_zero() {
            return Decimal::ZERO;
        }

        return rounded;
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        return Money(value);
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{:.2}", self.rounded());
    }
}

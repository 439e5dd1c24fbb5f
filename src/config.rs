use cfp::Result;

use std::env;

use chrono::{Local, NaiveDate};
use log::LevelFilter;
use simple_logger::SimpleLogger;

use thiserror::Error;

/// Overrides the calendar date projections start from, as YYYY-MM-DD
pub const TODAY_ENV_VAR: &str = "CASH_FLOW_TODAY";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {var} value {0:?}, expected YYYY-MM-DD", var = TODAY_ENV_VAR)]
    InvalidToday(String),
}

pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}

/// Today's local date, unless overridden through the environment
pub fn evaluation_date() -> Result<NaiveDate> {
    let today = match env::var(TODAY_ENV_VAR) {
        Ok(value) => parse_today(&value)?,
        Err(_) => Local::now().date_naive(),
    };

    log::debug!("Evaluating as of {today}");

    return Ok(today);
}

fn parse_today(value: &str) -> Result<NaiveDate> {
    let today = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ConfigError::InvalidToday(value.to_string()))?;

    return Ok(today);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_today_value() {
        assert_eq!(
            parse_today("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );

        assert!(parse_today("2023-02-29").is_err());
        assert!(parse_today("today").is_err());
    }
}

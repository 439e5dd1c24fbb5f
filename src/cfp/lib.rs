pub mod filter;
pub mod ids;
pub mod input;
pub mod projection;
pub mod reports;
mod money;
mod result;
mod schedule;
mod totals;
mod transaction;

pub use filter::TransactionFilter;
pub use money::{Money, MoneyError};
pub use projection::{ProjectionEngine, ProjectionPoint, DEFAULT_PROJECTION_DAYS};
pub use reports::{ProjectionReport, SummaryReport, TransactionReport};
pub use result::Result;
pub use schedule::Schedule;
pub use totals::Totals;
pub use transaction::Transaction;

mod args;
mod config;
mod reader;
mod writer;

use args::Command;

use cfp::input;
use cfp::{
    Money, ProjectionEngine, ProjectionReport, Result, SummaryReport, Totals, TransactionFilter,
    TransactionReport,
};

use std::path::Path;

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Parsing arguments...");

    let command = args::parse_input_args()?;
    log::debug!("Running command: {command:?}");

    let engine = ProjectionEngine::new(config::evaluation_date()?);

    let output = match command {
        Command::Project {
            input_path,
            current_balance,
            days,
        } => project(&engine, &input_path, current_balance, days)?,
        Command::Summary {
            input_path,
            current_balance,
        } => summarize(&input_path, current_balance)?,
        Command::List { input_path, filter } => list(&engine, &input_path, filter)?,
    };

    log::debug!("Writing to stdout: {output:?}");
    print!("{}", output);

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Forecast the balance day by day and render it as CSV
fn project(engine: &ProjectionEngine, input_path: &Path, current_balance: Money, days: i64) -> Result<String> {
    let records = reader::read_records(input_path)?;
    log::debug!("Read {} records from {input_path:?}", records.len());

    let points = engine.project_records(current_balance, &records, days).map_err(|e| {
        log::warn!("Projection aborted: {e}");
        e
    })?;

    log::debug!("Projected {} days", points.len());

    writer::write_rows(points.iter().map(ProjectionReport::from))
}

/// Current balance alongside the paid and pending totals
fn summarize(input_path: &Path, current_balance: Money) -> Result<String> {
    let records = reader::read_records(input_path)?;
    let transactions = input::parse_transactions(&records)?;

    let totals = Totals::from_transactions(&transactions)?;
    log::debug!("Totals for {} transactions: {totals:?}", transactions.len());

    writer::write_rows([SummaryReport::new(&current_balance, &totals)])
}

/// Export the transactions matching the filter, in file order
fn list(engine: &ProjectionEngine, input_path: &Path, filter: TransactionFilter) -> Result<String> {
    let records = reader::read_records(input_path)?;
    let transactions = input::parse_transactions(&records)?;

    let selected = filter.apply(&transactions, engine.today());
    log::debug!("Filter {filter} kept {} of {} transactions", selected.len(), transactions.len());

    writer::write_rows(selected.into_iter().map(TransactionReport::from))
}

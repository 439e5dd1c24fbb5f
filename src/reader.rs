use cfp::input::TransactionRecord;
use cfp::Result;

use std::{fs::File, path::Path};

use anyhow::Context;
use csv::{Reader, ReaderBuilder, Trim};

pub fn build_csv_reader(filepath: &Path) -> Result<Reader<File>> {
    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(filepath)?;

    return Ok(reader);
}

/// Reads every record, failing on the first row that doesn't fit the expected columns
pub fn read_records(filepath: &Path) -> Result<Vec<TransactionRecord>> {
    let mut rdr = build_csv_reader(filepath)?;

    log::debug!("Deserializing reader...");
    let mut records = vec![];

    for record in rdr.deserialize::<TransactionRecord>() {
        let record = record.with_context(|| format!("Malformed transaction row in {filepath:?}"))?;
        log::debug!("Read record: {record:?}");
        records.push(record);
    }

    return Ok(records);
}

use cfp::Result;

use csv::Writer;

use serde::Serialize;

pub fn build_csv_writer() -> Writer<Vec<u8>> {
    return Writer::from_writer(vec![]);
}

/// Serializes every row into one CSV document
pub fn write_rows<T: Serialize>(rows: impl IntoIterator<Item = T>) -> Result<String> {
    let mut wtr = build_csv_writer();

    for row in rows {
        wtr.serialize(row)?;
    }

    return write_to_string(wtr);
}

pub fn write_to_string(writer: Writer<Vec<u8>>) -> Result<String> {
    let utf8 = writer.into_inner()?;
    let string = String::from_utf8(utf8)?;
    return Ok(string);
}

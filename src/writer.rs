use etl::Result;

use csv::Writer;

use serde::Serialize;

pub fn build_csv_writer() -> Writer<Vec<u8>> {
    return Writer::from_writer(vec![]);
}

pub fn write_to_string(writer: Writer<Vec<u8>>) -> Result<String> {
    let utf8 = writer.into_inner()?;
    let string = String::from_utf8(utf8)?;
    return Ok(string);
}

/// Renders one output table as a CSV string, headers from the row type's
/// field order
pub fn render_table<S: Serialize>(rows: &[S]) -> Result<String> {
    let mut wtr = build_csv_writer();

    for row in rows {
        wtr.serialize(row)?;
    }

    return write_to_string(wtr);
}

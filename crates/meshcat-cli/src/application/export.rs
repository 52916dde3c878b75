//! Tabular export writers.

use std::io::Write;

use meshcat_core::types::{ExportRow, EXPORT_HEADERS};

/// Header row, then one row per record. Absent values are empty cells.
pub fn write_csv<W: Write>(rows: &[ExportRow], out: W) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(EXPORT_HEADERS)?;
    for row in rows {
        writer.write_record(row.fields())?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(rows: &[ExportRow], out: W, pretty: bool) -> Result<(), serde_json::Error> {
    if pretty {
        serde_json::to_writer_pretty(out, rows)
    } else {
        serde_json::to_writer(out, rows)
    }
}

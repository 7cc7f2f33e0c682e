//! CSV export of filtered prescriptions.

use std::io::Write;

use csv::WriterBuilder;
use gid_model::{PrescriptionRecord, RECORD_COLUMNS};

use crate::error::Result;

/// Writes a header row followed by one row per record, columns in dataset
/// order.
pub fn write_prescriptions_csv<W: Write>(writer: W, records: &[&PrescriptionRecord]) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer.write_record(RECORD_COLUMNS)?;
    for record in records {
        writer.write_record(record.to_columns())?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

//! CSV export for the device ledger.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::devices::Device;

/// Column header for the ledger CSV export.
pub const HEADER: &str = "name,power_watts,hours_per_day,daily_energy_wh,daily_charge_ah";

/// Exports the ledger to a CSV file at the given path.
///
/// Writes a header row followed by one data row per device in ledger order.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(devices: &[Device], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(devices, buf)
}

/// Writes the ledger as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(devices: &[Device], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for d in devices {
        wtr.write_record(&[
            d.name.clone(),
            format!("{:.2}", d.power_watts),
            format!("{:.2}", d.hours_per_day),
            format!("{:.2}", d.daily_energy_wh()),
            format!("{:.2}", d.daily_charge_ah()),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

use csv::WriterBuilder;
use std::{fs::File, io, path::Path};

use crate::domain::Transaction;
use crate::error::BankError;

/// Overwrites the history file with one `account,signed_amount` row per
/// record.
pub fn write_ledger(path: &Path, rows: &[Transaction]) -> Result<(), BankError> {
    let file = File::create(path)?;
    write_ledger_to(file, rows)
}

pub fn write_ledger_to<W>(writer: W, rows: &[Transaction]) -> Result<(), BankError>
where
    W: io::Write,
{
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

use csv::Reader;
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::{fs::File, io, path::Path};

use crate::domain::{Directory, Ledger, Transaction};
use crate::error::BankError;

#[derive(Debug, Deserialize)]
struct AccountRow {
    number: String,
    pin: String,
}

#[derive(Debug, Deserialize)]
struct LedgerRow {
    account: String,
    amount: Decimal,
}

/// Both flat files are headerless comma-separated rows with incidental
/// whitespace, so one reader configuration covers them.
fn get_reader(path: &Path) -> Result<Reader<File>, BankError> {
    Ok(ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_path(path)?)
}

pub fn load_accounts(path: &Path) -> Result<Directory, BankError> {
    read_accounts(&mut get_reader(path)?)
}

fn read_accounts<R>(rdr: &mut Reader<R>) -> Result<Directory, BankError>
where
    R: io::Read,
{
    let mut rows = vec![];
    for result in rdr.deserialize() {
        let row: AccountRow = result?;
        rows.push((row.number, row.pin));
    }
    Ok(Directory::new(rows))
}

pub fn load_ledger(path: &Path) -> Result<Ledger, BankError> {
    read_ledger(&mut get_reader(path)?)
}

pub fn read_ledger<R>(rdr: &mut Reader<R>) -> Result<Ledger, BankError>
where
    R: io::Read,
{
    let mut rows = vec![];
    for result in rdr.deserialize() {
        let row: LedgerRow = result?;
        rows.push(Transaction {
            account: row.account,
            amount: row.amount,
        });
    }
    Ok(Ledger::new(rows))
}

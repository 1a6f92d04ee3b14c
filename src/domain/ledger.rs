use std::io;
use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::transaction::Transaction;
use crate::error::BankError;
use crate::writer;

/// In-memory transaction history for every account, seeded from the history
/// file at startup and written back wholesale on clean shutdown.
#[derive(Debug, Default, PartialEq)]
pub struct Ledger {
    rows: Vec<Transaction>,
}

impl Ledger {
    pub fn new(rows: Vec<Transaction>) -> Self {
        Self { rows }
    }

    pub fn record_deposit(&mut self, account: &str, raw_amount: &str) -> Result<(), BankError> {
        let amount = parse_amount(raw_amount)?;
        self.rows.push(Transaction::create_deposit(account, amount));
        Ok(())
    }

    /// No overdraft check: balances may go negative.
    pub fn record_withdraw(&mut self, account: &str, raw_amount: &str) -> Result<(), BankError> {
        let amount = parse_amount(raw_amount)?;
        self.rows.push(Transaction::create_withdraw(account, amount));
        Ok(())
    }

    /// Signed amounts for one account, in insertion order.
    pub fn transactions_for(&self, account: &str) -> Vec<Decimal> {
        self.rows
            .iter()
            .filter(|t| t.account == account)
            .map(|t| t.amount)
            .collect()
    }

    pub fn balance_for(&self, account: &str) -> Decimal {
        self.transactions_for(account).into_iter().sum()
    }

    pub fn report_for(&self, account: &str) -> Vec<String> {
        self.rows
            .iter()
            .filter(|t| t.account == account)
            .map(|t| t.report_line())
            .collect()
    }

    pub fn rows(&self) -> &[Transaction] {
        &self.rows
    }

    /// Overwrites the history file with every record, seed and session alike,
    /// in append order. Called exactly once, on Quit.
    pub fn persist(&self, path: &Path) -> Result<(), BankError> {
        writer::write_ledger(path, &self.rows)
    }

    pub fn persist_to<W: io::Write>(&self, writer: W) -> Result<(), BankError> {
        writer::write_ledger_to(writer, &self.rows)
    }
}

/// Menu amounts must parse as a non-negative decimal; the sign is decided by
/// the action, never by the user.
fn parse_amount(raw: &str) -> Result<Decimal, BankError> {
    let trimmed = raw.trim();
    let amount =
        Decimal::from_str(trimmed).map_err(|_| BankError::InvalidAmount(trimmed.to_owned()))?;
    if amount.is_sign_negative() {
        return Err(BankError::InvalidAmount(trimmed.to_owned()));
    }
    Ok(amount)
}

pub mod console;
mod domain;
pub mod error;
pub mod reader;
pub mod session;
pub mod writer;

pub use domain::AccountState;
pub use domain::Directory;
pub use domain::Ledger;
pub use domain::Transaction;

use std::path::PathBuf;

use console::Console;
use error::BankError;
use session::Atm;

/// Application runner
///
/// Loads the account directory and the transaction ledger from their flat
/// files, then drives one authenticate → menu → action session over the
/// given console. Returns once the user quits, after the ledger has been
/// written back to `history_path`, or with the error that aborted the
/// session (in which case nothing is written).
pub fn run<C>(
    accounts_path: PathBuf,
    history_path: PathBuf,
    console: &mut C,
) -> Result<(), BankError>
where
    C: Console,
{
    let accounts = reader::load_accounts(&accounts_path)?;
    let ledger = reader::load_ledger(&history_path)?;
    Atm::new(accounts, ledger, history_path).run(console)
}

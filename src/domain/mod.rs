pub mod account;
pub mod ledger;
pub mod transaction;

pub use account::AccountState;
pub use account::Directory;
pub use ledger::Ledger;
pub use transaction::Transaction;

use thiserror::Error;

/// Everything that can abort a session. The `Display` text of the first
/// three variants is the exact message printed to the user before the
/// process exits.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("Unknown Account.")]
    UnknownAccount,
    #[error("You failed to authenticate.")]
    AuthenticationLocked,
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Input error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Record error: {0}")]
    Csv(#[from] csv::Error),
}

use crate::console::Console;
use crate::error::BankError;

const MAX_PIN_ATTEMPTS: usize = 3;

/// Read-only account number → PIN listing, loaded once at startup and never
/// written back.
#[derive(Debug)]
pub struct Directory {
    rows: Vec<(String, String)>,
}

impl Directory {
    pub fn new(rows: Vec<(String, String)>) -> Self {
        Self { rows }
    }

    pub fn exists(&self, number: &str) -> bool {
        self.rows.iter().any(|(n, _)| n == number)
    }

    pub fn pin_for(&self, number: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|(n, _)| n == number)
            .map(|(_, pin)| pin.as_str())
    }

    pub fn lookup(&self, number: &str) -> AccountState {
        match self.pin_for(number) {
            Some(pin) => AccountState::Unauthenticated {
                number: number.to_owned(),
                pin: pin.to_owned(),
            },
            None => AccountState::Unknown,
        }
    }
}

/// Where one account stands in the PIN flow. Locked and Unknown are
/// terminal: acting on either aborts the session.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountState {
    Unauthenticated { number: String, pin: String },
    Authenticated { number: String },
    Locked,
    Unknown,
}

impl AccountState {
    /// Entry gate: an unknown account aborts before any menu is shown.
    pub fn validate(self) -> Result<Self, BankError> {
        match self {
            AccountState::Unknown => Err(BankError::UnknownAccount),
            state => Ok(state),
        }
    }

    /// Resolve the PIN challenge. An exact match within three attempts
    /// authenticates; three misses lock the account. Already-authenticated
    /// accounts pass through without touching the console.
    pub fn authenticate<C: Console>(self, console: &mut C) -> Result<Self, BankError> {
        match self {
            AccountState::Unauthenticated { number, pin } => {
                for _ in 0..MAX_PIN_ATTEMPTS {
                    console.say("Please enter PIN. Entry will be hidden.");
                    let entered = console.prompt_hidden("Pin: ")?;
                    if entered == pin {
                        return Ok(AccountState::Authenticated { number });
                    }
                }
                Ok(AccountState::Locked)
            }
            state => Ok(state),
        }
    }
}

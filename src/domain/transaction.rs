use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Transaction is one signed ledger entry. Deposits are stored positive,
// withdrawals negative; the sign is the only thing distinguishing the two
// on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub account: String,
    pub amount: Decimal,
}

impl Transaction {
    pub fn create_deposit(account: &str, amount: Decimal) -> Self {
        Self {
            account: account.to_owned(),
            amount,
        }
    }

    pub fn create_withdraw(account: &str, amount: Decimal) -> Self {
        Self {
            account: account.to_owned(),
            amount: -amount,
        }
    }

    /// Report rendering: withdrawals show their magnitude, deposits (zero
    /// included) show the stored amount.
    pub fn report_line(&self) -> String {
        if self.amount < Decimal::ZERO {
            format!("{} Withdraw", -self.amount)
        } else {
            format!("{} Deposit", self.amount)
        }
    }
}

use std::path::{Path, PathBuf};

use crate::console::Console;
use crate::domain::{AccountState, Directory, Ledger};
use crate::error::BankError;

/// Loop signal returned by every action. The session keeps cycling until an
/// action asks to stop; there is no other normal exit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One user-selectable operation. A closed set: whatever the menu cannot
/// place lands on NoOp and does nothing observable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Balance,
    Deposit,
    Withdraw,
    Report,
    Quit,
    NoOp,
}

impl Action {
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim().to_lowercase().as_str() {
            "b" => Action::Balance,
            "d" => Action::Deposit,
            "w" => Action::Withdraw,
            "r" => Action::Report,
            "q" => Action::Quit,
            _ => Action::NoOp,
        }
    }

    /// Applies the action to an authenticated account. Quit persists the
    /// ledger before saying goodbye, so nothing recorded in this session is
    /// lost.
    pub fn apply<C: Console>(
        self,
        account: &str,
        ledger: &mut Ledger,
        history_path: &Path,
        console: &mut C,
    ) -> Result<Flow, BankError> {
        match self {
            Action::Balance => {
                console.say("Balance");
                console.say(&ledger.balance_for(account).to_string());
            }
            Action::Deposit => {
                console.say("Deposit");
                let amount = console.prompt("Amount: ")?;
                ledger.record_deposit(account, &amount)?;
            }
            Action::Withdraw => {
                console.say("Withdraw");
                let amount = console.prompt("Amount: ")?;
                ledger.record_withdraw(account, &amount)?;
            }
            Action::Report => {
                console.say("Report");
                for line in ledger.report_for(account) {
                    console.say(&line);
                }
            }
            Action::Quit => {
                ledger.persist(history_path)?;
                console.say("Thank you for using Heidelberg Student Bank services");
                return Ok(Flow::Quit);
            }
            Action::NoOp => {}
        }
        Ok(Flow::Continue)
    }
}

/// The menu loop for a single account. Holds the ledger for the whole run
/// and hands actions a borrowed handle to it.
pub struct Session {
    account: AccountState,
    ledger: Ledger,
    history_path: PathBuf,
}

impl Session {
    pub fn new(account: AccountState, ledger: Ledger, history_path: PathBuf) -> Self {
        Self {
            account,
            ledger,
            history_path,
        }
    }

    fn menu<C: Console>(console: &mut C) {
        console.say("Menu");
        console.say("(B)alance (D)eposit (W)ithdraw (R)eport (Q)uit");
    }

    /// One menu cycle: the selection is read first, then the PIN challenge
    /// is resolved, matching the original console protocol. For an already
    /// authenticated account the challenge is a no-op.
    pub fn cycle<C: Console>(&mut self, console: &mut C) -> Result<Flow, BankError> {
        Self::menu(console);
        let action = Action::from_choice(&console.prompt("Select: ")?);

        self.account = self.account.clone().authenticate(console)?;

        match &self.account {
            AccountState::Authenticated { number } => {
                action.apply(number, &mut self.ledger, &self.history_path, console)
            }
            AccountState::Locked => Err(BankError::AuthenticationLocked),
            _ => Err(BankError::UnknownAccount),
        }
    }

    pub fn run<C: Console>(mut self, console: &mut C) -> Result<(), BankError> {
        loop {
            if let Flow::Quit = self.cycle(console)? {
                return Ok(());
            }
        }
    }

    #[cfg(test)]
    fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

/// Application root: banner, account lookup, then the session loop.
pub struct Atm {
    accounts: Directory,
    ledger: Ledger,
    history_path: PathBuf,
}

impl Atm {
    pub fn new(accounts: Directory, ledger: Ledger, history_path: PathBuf) -> Self {
        Self {
            accounts,
            ledger,
            history_path,
        }
    }

    fn header<C: Console>(console: &mut C) {
        console.say("***********************");
        console.say("Heidelberg Student Bank");
        console.say("***********************");
    }

    pub fn run<C: Console>(self, console: &mut C) -> Result<(), BankError> {
        Self::header(console);
        let number = console.prompt("Account Number: ")?;
        let account = self.accounts.lookup(&number).validate()?;
        Session::new(account, self.ledger, self.history_path).run(console)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::domain::Transaction;
    use crate::reader::read_ledger;
    use csv::{ReaderBuilder, Trim};
    use rust_decimal_macros::dec;
    use std::path::Path;

    fn authenticated(number: &str) -> AccountState {
        AccountState::Authenticated {
            number: String::from(number),
        }
    }

    fn seeded_ledger() -> Ledger {
        Ledger::new(vec![
            Transaction::create_deposit("120", dec!(10.00)),
            Transaction::create_deposit("200", dec!(500)),
            Transaction::create_withdraw("120", dec!(3.50)),
        ])
    }

    fn temp_history(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("student-bank-{}-{}.txt", name, std::process::id()))
    }

    #[test]
    fn test_from_choice_is_case_insensitive() {
        assert_eq!(Action::from_choice("b"), Action::Balance);
        assert_eq!(Action::from_choice("D"), Action::Deposit);
        assert_eq!(Action::from_choice(" w "), Action::Withdraw);
        assert_eq!(Action::from_choice("R"), Action::Report);
        assert_eq!(Action::from_choice("Q"), Action::Quit);
    }

    #[test]
    fn test_from_choice_anything_else_is_noop() {
        assert_eq!(Action::from_choice("x"), Action::NoOp);
        assert_eq!(Action::from_choice(""), Action::NoOp);
        assert_eq!(Action::from_choice("bd"), Action::NoOp);
    }

    #[test]
    fn test_balance_action_prints_exact_sum() {
        let mut ledger = seeded_ledger();
        let mut console = ScriptedConsole::new(&[]);
        let flow = Action::Balance
            .apply("120", &mut ledger, Path::new("unused"), &mut console)
            .unwrap();
        assert_eq!(flow, Flow::Continue);
        assert_eq!(console.output, vec!["Balance", "6.50"]);
    }

    #[test]
    fn test_deposit_action_records_prompted_amount() {
        let mut ledger = Ledger::default();
        let mut console = ScriptedConsole::new(&["10.00"]);
        Action::Deposit
            .apply("120", &mut ledger, Path::new("unused"), &mut console)
            .unwrap();
        assert_eq!(ledger.balance_for("120"), dec!(10.00));
    }

    #[test]
    fn test_withdraw_action_records_negated_amount() {
        let mut ledger = Ledger::default();
        let mut console = ScriptedConsole::new(&["3.50"]);
        Action::Withdraw
            .apply("120", &mut ledger, Path::new("unused"), &mut console)
            .unwrap();
        assert_eq!(ledger.balance_for("120"), dec!(-3.50));
    }

    #[test]
    fn test_report_action_prints_lines_in_order() {
        let mut ledger = seeded_ledger();
        let mut console = ScriptedConsole::new(&[]);
        Action::Report
            .apply("120", &mut ledger, Path::new("unused"), &mut console)
            .unwrap();
        assert_eq!(
            console.output,
            vec!["Report", "10.00 Deposit", "3.50 Withdraw"]
        );
    }

    #[test]
    fn test_noop_cycle_changes_nothing() {
        let history = temp_history("noop");
        let mut session = Session::new(authenticated("120"), seeded_ledger(), history.clone());
        let mut console = ScriptedConsole::new(&["x"]);

        let flow = session.cycle(&mut console).unwrap();

        assert_eq!(flow, Flow::Continue);
        assert_eq!(session.ledger().rows(), seeded_ledger().rows());
        assert!(!history.exists());
    }

    #[test]
    fn test_quit_persists_everything_before_farewell() {
        let history = temp_history("quit");
        let mut session = Session::new(authenticated("120"), seeded_ledger(), history.clone());
        let mut console = ScriptedConsole::new(&["d", "1.25", "q"]);

        assert_eq!(session.cycle(&mut console).unwrap(), Flow::Continue);
        assert_eq!(session.cycle(&mut console).unwrap(), Flow::Quit);
        assert_eq!(
            console.output.last().map(String::as_str),
            Some("Thank you for using Heidelberg Student Bank services")
        );

        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .from_path(&history)
            .unwrap();
        let reloaded = read_ledger(&mut rdr).unwrap();
        assert_eq!(reloaded.rows().len(), 4);
        assert_eq!(reloaded.balance_for("120"), dec!(7.75));
        std::fs::remove_file(&history).unwrap();
    }

    #[test]
    fn test_cycle_authenticates_before_acting() {
        let history = temp_history("auth");
        let account = AccountState::Unauthenticated {
            number: String::from("120"),
            pin: String::from("1234"),
        };
        let mut session = Session::new(account, seeded_ledger(), history);
        let mut console = ScriptedConsole::new(&["b", "1234"]);

        session.cycle(&mut console).unwrap();

        assert_eq!(console.output.last().map(String::as_str), Some("6.50"));
    }

    #[test]
    fn test_locked_account_aborts_the_cycle() {
        let history = temp_history("locked");
        let account = AccountState::Unauthenticated {
            number: String::from("120"),
            pin: String::from("1234"),
        };
        let mut session = Session::new(account, seeded_ledger(), history.clone());
        let mut console = ScriptedConsole::new(&["b", "0", "1", "2"]);

        match session.cycle(&mut console) {
            Err(BankError::AuthenticationLocked) => {}
            other => panic!("expected AuthenticationLocked, got {:?}", other),
        }
        // Aborted sessions never write the history file back.
        assert!(!history.exists());
    }

    #[test]
    fn test_unknown_account_fails_before_any_menu() {
        let atm = Atm::new(
            Directory::new(vec![(String::from("120"), String::from("1234"))]),
            Ledger::default(),
            temp_history("unknown"),
        );
        let mut console = ScriptedConsole::new(&["999"]);

        match atm.run(&mut console) {
            Err(BankError::UnknownAccount) => {}
            other => panic!("expected UnknownAccount, got {:?}", other),
        }
        assert!(!console.output.iter().any(|line| line == "Menu"));
    }
}

use std::io::{self, BufRead, Write};

use crate::error::BankError;

/// Blocking console seam. The auth state machine and the session loop talk
/// to the terminal through this trait so they can be driven by a scripted
/// console in tests.
pub trait Console {
    /// Print `label` without a trailing newline and read one line back.
    fn prompt(&mut self, label: &str) -> Result<String, BankError>;
    /// Like `prompt`, but the entry is not echoed back to the terminal.
    fn prompt_hidden(&mut self, label: &str) -> Result<String, BankError>;
    fn say(&mut self, line: &str);
}

/// stdin/stdout implementation used by the binary.
pub struct StdConsole;

impl Console for StdConsole {
    fn prompt(&mut self, label: &str) -> Result<String, BankError> {
        print!("{}", label);
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end().to_owned())
    }

    fn prompt_hidden(&mut self, label: &str) -> Result<String, BankError> {
        Ok(rpassword::prompt_password(label)?)
    }

    fn say(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Canned console for unit tests: answers prompts from a queue and collects
/// everything said to it.
#[cfg(test)]
pub struct ScriptedConsole {
    inputs: std::collections::VecDeque<String>,
    pub output: Vec<String>,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            output: vec![],
        }
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn prompt(&mut self, label: &str) -> Result<String, BankError> {
        self.output.push(label.to_owned());
        self.inputs.pop_front().ok_or_else(|| {
            BankError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "script ran out of inputs",
            ))
        })
    }

    fn prompt_hidden(&mut self, label: &str) -> Result<String, BankError> {
        self.prompt(label)
    }

    fn say(&mut self, line: &str) {
        self.output.push(line.to_owned());
    }
}

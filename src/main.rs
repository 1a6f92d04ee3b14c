use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use student_bank::console::StdConsole;

/// Terminal banking over flat account and ledger files.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Account number / PIN listing, one `number,pin` row per line
    #[arg(long, default_value = "accounts.txt")]
    accounts: PathBuf,

    /// Transaction ledger, rewritten in full on quit
    #[arg(long, default_value = "history.txt")]
    history: PathBuf,
}

fn main() {
    let args = Args::parse();

    if let Err(err) = student_bank::run(args.accounts, args.history, &mut StdConsole) {
        println!("{}", err);
        exit(1)
    }
}

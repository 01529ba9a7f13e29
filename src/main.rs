//! Account Ledger CLI
//!
//! Runs the interactive account menu on stdin/stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use account_ledger::{menu, BalanceStore, Engine, Result};
use std::io;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut engine = Engine::new(BalanceStore::default(), stdin.lock(), stdout.lock());
    menu::run(&mut engine)
}

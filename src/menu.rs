//! Interactive numbered menu driving the engine.

use crate::engine::Engine;
use crate::error::Result;
use crate::operation::Operation;
use log::{debug, info};
use std::io::{BufRead, Write};

const SEPARATOR: &str = "--------------------------------";

const MENU_LINES: [&str; 7] = [
    SEPARATOR,
    "Account Management System",
    "1. View Balance",
    "2. Credit Account",
    "3. Debit Account",
    "4. Exit",
    SEPARATOR,
];

/// Prompt shown before reading a menu choice.
pub const CHOICE_PROMPT: &str = "Enter your choice (1-4): ";

/// A selection from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Run an engine operation.
    Run(Operation),

    /// Leave the menu loop.
    Exit,
}

impl MenuChoice {
    /// Maps the trimmed input `1`-`4` to a choice.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(MenuChoice::Run(Operation::Total)),
            "2" => Some(MenuChoice::Run(Operation::Credit)),
            "3" => Some(MenuChoice::Run(Operation::Debit)),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Runs the menu until the user picks Exit or input ends.
pub fn run<R: BufRead, W: Write>(engine: &mut Engine<R, W>) -> Result<()> {
    loop {
        for line in MENU_LINES {
            engine.say(line)?;
        }

        let raw = match engine.prompt(CHOICE_PROMPT)? {
            Some(raw) => raw,
            None => {
                debug!("End of input at menu prompt");
                engine.say("")?;
                break;
            }
        };

        match MenuChoice::parse(&raw) {
            Some(MenuChoice::Run(operation)) => engine.dispatch(operation)?,
            Some(MenuChoice::Exit) => break,
            None => {
                debug!("Unrecognized menu choice {:?}", raw.trim());
                engine.say("Invalid choice, please select 1-4.")?;
            }
        }
    }

    info!("Session ended with balance {}", engine.balance());
    engine.say("Exiting the program. Goodbye!")
}

//! Core ledger operation engine.
//!
//! The engine owns the balance store and the console it talks through. Every
//! operation reports its outcome as a line of text on the output; rejected
//! input is reported and recovered locally, leaving the balance untouched.

use crate::amount::Amount;
use crate::decimal::Decimal2;
use crate::error::{EngineError, Result};
use crate::operation::Operation;
use crate::store::BalanceStore;
use log::{debug, warn};
use std::borrow::Cow;
use std::io::{BufRead, Write};

/// Prompt shown before reading a credit amount.
pub const CREDIT_PROMPT: &str = "Enter credit amount: ";

/// Prompt shown before reading a debit amount.
pub const DEBIT_PROMPT: &str = "Enter debit amount: ";

/// The ledger operation engine.
///
/// Reads amounts line by line from `input` and writes prompts and results to
/// `output`. Calls are strictly sequential through `&mut self`, so each
/// read-compute-write of the balance completes before the next begins.
pub struct Engine<R, W> {
    /// The single tracked balance.
    store: BalanceStore,

    /// Source of user-supplied amounts.
    input: R,

    /// Destination for prompts and result messages.
    output: W,
}

impl<R: BufRead, W: Write> Engine<R, W> {
    /// Creates an engine over the given store and console.
    pub fn new(store: BalanceStore, input: R, output: W) -> Self {
        Engine {
            store,
            input,
            output,
        }
    }

    /// Returns the current balance.
    pub fn balance(&self) -> Decimal2 {
        self.store.read()
    }

    /// Returns the output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the engine, returning its store and console.
    pub fn into_parts(self) -> (BalanceStore, R, W) {
        (self.store, self.input, self.output)
    }

    /// Executes an operation by name.
    ///
    /// The name is matched case-insensitively after trimming whitespace.
    /// Unknown names print `Invalid operation.` and change nothing.
    pub fn execute(&mut self, name: &str) -> Result<()> {
        match name.parse::<Operation>() {
            Ok(operation) => self.dispatch(operation),
            Err(e) => {
                warn!("Rejected operation {:?}: {}", name.trim(), e);
                self.report(e)
            }
        }
    }

    /// Runs a single operation.
    pub fn dispatch(&mut self, operation: Operation) -> Result<()> {
        debug!("Dispatching {}", operation);
        match operation {
            Operation::Total => self.total(),
            Operation::Credit => self.credit(),
            Operation::Debit => self.debit(),
        }
    }

    /// Prints the current balance.
    pub fn total(&mut self) -> Result<()> {
        let balance = self.store.read();
        self.say(&format!("Current balance: {}", balance))
    }

    /// Prompts for an amount and adds it to the balance.
    pub fn credit(&mut self) -> Result<()> {
        let amount = match self.parse_amount(CREDIT_PROMPT)? {
            Some(amount) => amount,
            None => return Ok(()),
        };

        match self.apply_credit(amount) {
            Ok(new_balance) => {
                self.say(&format!("Amount credited. New balance: {}", new_balance))
            }
            Err(e) => {
                warn!("Credit of {} rejected: {}", amount, e);
                self.report(e)
            }
        }
    }

    /// Prompts for an amount and subtracts it from the balance if funds allow.
    pub fn debit(&mut self) -> Result<()> {
        let amount = match self.parse_amount(DEBIT_PROMPT)? {
            Some(amount) => amount,
            None => return Ok(()),
        };

        match self.apply_debit(amount) {
            Ok(new_balance) => {
                self.say(&format!("Amount debited. New balance: {}", new_balance))
            }
            Err(e) => {
                warn!("Debit of {} rejected: {}", amount, e);
                self.report(e)
            }
        }
    }

    /// Adds `amount` to the balance and returns the new balance.
    ///
    /// Fails with [`EngineError::InvalidAmount`] if the sum leaves the
    /// representable decimal range; the balance is then unchanged.
    pub fn apply_credit(&mut self, amount: Amount) -> Result<Decimal2> {
        let balance = self.store.read();
        let new_balance = balance
            .checked_add(amount.value())
            .ok_or(EngineError::InvalidAmount)?;

        self.store.write(new_balance);
        debug!("Credited {}: {} -> {}", amount, balance, new_balance);
        Ok(new_balance)
    }

    /// Subtracts `amount` from the balance and returns the new balance.
    ///
    /// A debit equal to the balance is allowed and leaves exactly zero. A
    /// larger debit fails with [`EngineError::InsufficientFunds`].
    pub fn apply_debit(&mut self, amount: Amount) -> Result<Decimal2> {
        let balance = self.store.read();
        if balance < amount.value() {
            return Err(EngineError::InsufficientFunds);
        }

        let new_balance = balance
            .checked_sub(amount.value())
            .ok_or(EngineError::InvalidAmount)?;

        self.store.write(new_balance);
        debug!("Debited {}: {} -> {}", amount, balance, new_balance);
        Ok(new_balance)
    }

    /// Shows `prompt`, reads one line and validates it as an amount.
    ///
    /// Returns `Ok(None)` after printing the rejection message when the input
    /// is not a positive number. End of input counts as an empty line.
    pub fn parse_amount(&mut self, prompt: &str) -> Result<Option<Amount>> {
        let raw = self.prompt(prompt)?.unwrap_or_default();

        match Amount::parse(&raw) {
            Ok(amount) => Ok(Some(amount)),
            Err(e) => {
                warn!("Rejected amount {:?}: {}", raw.trim(), e);
                self.report(e)?;
                Ok(None)
            }
        }
    }

    /// Writes `prompt` without a newline and reads one line of input.
    ///
    /// Returns `Ok(None)` at end of input. Bytes that are not valid UTF-8
    /// are replaced rather than failing the read, so the line is rejected by
    /// whichever parser receives it.
    pub(crate) fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            debug!("Input line was not valid UTF-8");
        }
        Ok(Some(line.into_owned()))
    }

    /// Writes one line of output.
    pub(crate) fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        Ok(())
    }

    /// Prints a recoverable error as its user-facing message.
    ///
    /// I/O errors are passed through to the caller instead.
    fn report(&mut self, error: EngineError) -> Result<()> {
        if !error.is_recoverable() {
            return Err(error);
        }
        self.say(&error.to_string())
    }
}

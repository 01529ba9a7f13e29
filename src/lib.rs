//! # Account Ledger
//!
//! An interactive ledger that tracks a single monetary balance in memory and
//! supports viewing, crediting and debiting it.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: 2 decimal places via `rust_decimal`, rounded
//!   half-even in exactly one place ([`Decimal2::new`])
//! - **Owned state**: the balance lives in a [`BalanceStore`] held by the
//!   [`Engine`], not in a global
//! - **Closed dispatch**: operation names map onto the [`Operation`] enum
//! - **Local recovery**: rejected input is reported as a message and leaves
//!   the balance untouched
//!
//! ## Example
//!
//! ```
//! use account_ledger::{BalanceStore, Engine};
//! use std::io::Cursor;
//!
//! let input = Cursor::new("50.00\n");
//! let mut engine = Engine::new(BalanceStore::default(), input, Vec::<u8>::new());
//! engine.execute("credit").unwrap();
//! assert_eq!(engine.balance().to_string(), "1050.00");
//! ```

pub mod amount;
pub mod decimal;
pub mod engine;
pub mod error;
pub mod menu;
pub mod operation;
pub mod store;

pub use amount::Amount;
pub use decimal::Decimal2;
pub use engine::Engine;
pub use error::{EngineError, Result};
pub use menu::MenuChoice;
pub use operation::Operation;
pub use store::BalanceStore;

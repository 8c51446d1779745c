//! Teller - Terminal-based banking ledger application
//!
//! This library provides the core functionality for the Teller banking
//! application: an in-memory ledger of checking and savings accounts with
//! deposits, withdrawals, transfers, monthly interest accrual, and
//! bank-wide statistics, driven by an interactive menu shell.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, ids, transactions, accounts)
//! - `ledger`: The aggregate owning all accounts and cross-account operations
//! - `display`: Terminal output formatting
//! - `export`: CSV statement export
//! - `shell`: The interactive menu loop
//!
//! Ledger state lives only in memory; nothing but user settings is ever
//! written to disk.
//!
//! # Example
//!
//! ```rust
//! use teller::ledger::Ledger;
//! use teller::models::Money;
//!
//! let mut ledger = Ledger::new("Example Bank");
//! let id = ledger
//!     .create_account("checking", "Alice", Money::from_cents(50000), 0.0)?
//!     .id();
//! ledger.account_mut(id).unwrap().deposit(Money::from_cents(2500), "Paycheck")?;
//! # Ok::<(), teller::TellerError>(())
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod shell;

pub use error::{TellerError, TellerResult};
pub use ledger::{BankStatistics, Ledger, TransferOutcome};

//! Core data models for Teller
//!
//! This module contains the data structures that represent the banking
//! domain: money, identifiers, transactions, and accounts.

pub mod account;
pub mod ids;
pub mod money;
pub mod transaction;

pub use account::{
    Account, AccountKind, AccountProfile, MonthStamp, SavingsState, MAX_INTEREST_RATE,
    MONTHLY_WITHDRAWAL_LIMIT,
};
pub use ids::{AccountId, TransactionId};
pub use money::Money;
pub use transaction::{Transaction, TransactionKind};

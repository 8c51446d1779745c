//! Transaction model
//!
//! Represents immutable ledger events: deposits, withdrawals, the two legs
//! of a transfer, and interest accrual.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Kind of ledger event a transaction records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionKind {
    /// Funds added to an account
    Deposit,
    /// Funds removed from an account
    Withdrawal,
    /// Incoming leg of a transfer
    TransferIn,
    /// Outgoing leg of a transfer
    TransferOut,
    /// Monthly interest accrual on a savings account
    Interest,
}

impl TransactionKind {
    /// True for kinds that increase the balance
    pub fn is_credit(&self) -> bool {
        matches!(self, Self::Deposit | Self::TransferIn | Self::Interest)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => write!(f, "Deposit"),
            Self::Withdrawal => write!(f, "Withdrawal"),
            Self::TransferIn => write!(f, "Transfer in"),
            Self::TransferOut => write!(f, "Transfer out"),
            Self::Interest => write!(f, "Interest"),
        }
    }
}

/// An immutable record of one ledger event
///
/// Transactions are owned by the account whose log they were appended to and
/// are never mutated after creation. Amounts are stored unsigned; the kind
/// determines the sign of the balance contribution. Amount validity rules
/// are enforced by the account operations, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// What kind of event this records
    pub kind: TransactionKind,

    /// Amount involved (non-negative)
    pub amount: Money,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// When the event occurred
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction stamped with the current time
    pub fn new(kind: TransactionKind, amount: Money, description: impl Into<String>) -> Self {
        Self::with_timestamp(kind, amount, description, Utc::now())
    }

    /// Create a new transaction with an explicit timestamp
    pub fn with_timestamp(
        kind: TransactionKind,
        amount: Money,
        description: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            description: description.into(),
            timestamp,
        }
    }

    /// The signed contribution of this transaction to an account balance
    pub fn signed_amount(&self) -> Money {
        if self.kind.is_credit() {
            self.amount
        } else {
            -self.amount
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {}: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.kind,
            self.amount
        )?;
        if !self.description.is_empty() {
            write!(f, " | {}", self.description)?;
        }
        Ok(())
    }
}

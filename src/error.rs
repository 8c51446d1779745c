//! Custom error types for Teller
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for Teller operations
#[derive(Error, Debug)]
pub enum TellerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Statement export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Amount is zero or negative where a positive amount is required,
    /// or a negative initial balance was supplied
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Withdrawal or transfer amount exceeds the current balance
    #[error("Insufficient funds: current balance is {balance}")]
    InsufficientFunds { balance: Money },

    /// Savings withdrawal count for the current month has reached the limit
    #[error("Monthly withdrawal limit ({limit}) reached")]
    WithdrawalLimitExceeded { limit: u32 },

    /// Account creation requested with an unrecognized kind
    #[error("Invalid account kind '{kind}'. Choose 'checking' or 'savings'")]
    InvalidAccountKind { kind: String },

    /// Savings interest rate outside the allowed range
    #[error("Invalid interest rate {rate}: must be between 0 and {max}")]
    InvalidInterestRate { rate: f64, max: f64 },

    /// Referenced account identifier has no corresponding account
    #[error("Account not found: {identifier}")]
    AccountNotFound { identifier: String },

    /// Transfer source and destination are the same account
    #[error("Cannot transfer to the same account")]
    SameAccount,
}

impl TellerError {
    /// Create a "not found" error for an account identifier
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::AccountNotFound {
            identifier: identifier.into(),
        }
    }

    /// Create an invalid-amount error
    pub fn invalid_amount(message: impl Into<String>) -> Self {
        Self::InvalidAmount(message.into())
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AccountNotFound { .. })
    }

    /// Check if this is a business-rule error (as opposed to an
    /// environment failure like I/O or configuration)
    pub fn is_business_rule(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_)
                | Self::InsufficientFunds { .. }
                | Self::WithdrawalLimitExceeded { .. }
                | Self::InvalidAccountKind { .. }
                | Self::InvalidInterestRate { .. }
                | Self::AccountNotFound { .. }
                | Self::SameAccount
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TellerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TellerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for Teller operations
pub type TellerResult<T> = Result<T, TellerError>;

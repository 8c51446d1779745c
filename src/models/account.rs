//! Account model
//!
//! An account owns a balance and an append-only transaction log. Checking
//! and savings accounts share one operation set; savings accounts carry the
//! kind-specific state (interest rate, monthly withdrawal counter) in a
//! tagged profile variant and dispatch on it, rather than through an
//! inheritance hierarchy.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;
use super::transaction::{Transaction, TransactionKind};
use crate::error::{TellerError, TellerResult};

/// Number of withdrawals a savings account allows per calendar month
pub const MONTHLY_WITHDRAWAL_LIMIT: u32 = 3;

/// Highest annual interest rate a savings account may carry
pub const MAX_INTEREST_RATE: f64 = 0.10;

/// Kind of account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Checking account: no interest, unlimited withdrawals
    Checking,
    /// Savings account: monthly interest, limited withdrawals
    Savings,
}

impl AccountKind {
    /// Parse an account kind from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "checking" => Some(Self::Checking),
            "savings" => Some(Self::Savings),
            _ => None,
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => write!(f, "Checking"),
            Self::Savings => write!(f, "Savings"),
        }
    }
}

/// A calendar month (year + month), used to detect month rollover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthStamp {
    year: i32,
    month: u32,
}

impl MonthStamp {
    /// The current calendar month
    pub fn current() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// The calendar month of a given instant
    pub fn from_datetime(when: DateTime<Utc>) -> Self {
        Self {
            year: when.year(),
            month: when.month(),
        }
    }

    /// The month immediately before this one
    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

/// Savings-specific account state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsState {
    /// Annual interest rate as a fraction (e.g. 0.05 for 5%)
    interest_rate: f64,
    /// Withdrawals performed in the current calendar month
    withdrawals_this_month: u32,
    /// Month the counter applies to; reset lazily on rollover
    month: MonthStamp,
}

impl SavingsState {
    fn new(interest_rate: f64) -> Self {
        Self {
            interest_rate,
            withdrawals_this_month: 0,
            month: MonthStamp::current(),
        }
    }

    /// Reset the counter if the calendar month has changed since the last
    /// observation. Called on the withdrawal path before the limit check;
    /// there is no background timer.
    fn roll_month(&mut self, now: MonthStamp) {
        if self.month != now {
            self.withdrawals_this_month = 0;
            self.month = now;
        }
    }

    /// Withdrawals left this month, accounting for a rollover that has not
    /// been observed by a withdrawal yet. Pure; the stored counter is only
    /// reset on the withdrawal path.
    fn withdrawals_remaining(&self) -> u32 {
        if self.month != MonthStamp::current() {
            MONTHLY_WITHDRAWAL_LIMIT
        } else {
            MONTHLY_WITHDRAWAL_LIMIT - self.withdrawals_this_month
        }
    }
}

/// Kind-specific account data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum AccountProfile {
    Checking,
    Savings(SavingsState),
}

/// A bank account: balance plus append-only transaction log
///
/// The balance always equals the sum of the signed transaction amounts (the
/// initial balance is itself recorded as a deposit), and never goes
/// negative. All mutation goes through deposit / withdraw / interest
/// operations; a failed operation leaves the account untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    holder: String,
    balance: Money,
    transactions: Vec<Transaction>,
    created_at: DateTime<Utc>,
    profile: AccountProfile,
}

impl Account {
    /// Create a checking account
    pub fn checking(holder: impl Into<String>, initial_balance: Money) -> TellerResult<Self> {
        Self::new(holder, initial_balance, AccountProfile::Checking)
    }

    /// Create a savings account with the given annual interest rate
    pub fn savings(
        holder: impl Into<String>,
        initial_balance: Money,
        interest_rate: f64,
    ) -> TellerResult<Self> {
        if !(0.0..=MAX_INTEREST_RATE).contains(&interest_rate) {
            return Err(TellerError::InvalidInterestRate {
                rate: interest_rate,
                max: MAX_INTEREST_RATE,
            });
        }
        Self::new(
            holder,
            initial_balance,
            AccountProfile::Savings(SavingsState::new(interest_rate)),
        )
    }

    fn new(
        holder: impl Into<String>,
        initial_balance: Money,
        profile: AccountProfile,
    ) -> TellerResult<Self> {
        if initial_balance.is_negative() {
            return Err(TellerError::invalid_amount(
                "initial balance cannot be negative",
            ));
        }

        let mut account = Self {
            id: AccountId::new(),
            holder: holder.into(),
            balance: initial_balance,
            transactions: Vec::new(),
            created_at: Utc::now(),
            profile,
        };

        if initial_balance.is_positive() {
            account.record_only(TransactionKind::Deposit, initial_balance, "Initial deposit");
        }

        Ok(account)
    }

    /// Deposit funds into the account
    pub fn deposit(&mut self, amount: Money, description: &str) -> TellerResult<()> {
        self.credit(TransactionKind::Deposit, amount, description)
    }

    /// Withdraw funds from the account
    ///
    /// Savings accounts enforce the monthly withdrawal limit before any
    /// other check; the counter is incremented only when the withdrawal
    /// succeeds.
    pub fn withdraw(&mut self, amount: Money, description: &str) -> TellerResult<()> {
        self.debit(TransactionKind::Withdrawal, amount, description)
    }

    /// Apply one month of interest
    ///
    /// Returns `None` for accounts that do not accrue interest. For savings
    /// accounts, adds `balance * rate / 12` when positive, records an
    /// interest transaction, and returns the amount applied (possibly
    /// zero). Calling this more than once per accrual cycle double-applies;
    /// the ledger is responsible for the cadence.
    pub fn apply_monthly_interest(&mut self) -> Option<Money> {
        let rate = match &self.profile {
            AccountProfile::Savings(state) => state.interest_rate,
            AccountProfile::Checking => return None,
        };

        let interest = self.balance.monthly_interest(rate);
        if interest.is_positive() {
            self.balance += interest;
            self.record_only(TransactionKind::Interest, interest, "Monthly interest");
        }
        Some(interest)
    }

    /// Increase the balance and record a credit-kind transaction
    pub(crate) fn credit(
        &mut self,
        kind: TransactionKind,
        amount: Money,
        description: &str,
    ) -> TellerResult<()> {
        if !amount.is_positive() {
            return Err(TellerError::invalid_amount("deposit amount must be positive"));
        }

        self.balance += amount;
        self.record_only(kind, amount, description);
        Ok(())
    }

    /// Decrease the balance and record a debit-kind transaction
    pub(crate) fn debit(
        &mut self,
        kind: TransactionKind,
        amount: Money,
        description: &str,
    ) -> TellerResult<()> {
        if !amount.is_positive() {
            return Err(TellerError::invalid_amount(
                "withdrawal amount must be positive",
            ));
        }

        // Monthly limit first: a limit failure must leave balance and
        // counter untouched
        if let AccountProfile::Savings(state) = &mut self.profile {
            state.roll_month(MonthStamp::current());
            if state.withdrawals_this_month >= MONTHLY_WITHDRAWAL_LIMIT {
                return Err(TellerError::WithdrawalLimitExceeded {
                    limit: MONTHLY_WITHDRAWAL_LIMIT,
                });
            }
        }

        if amount > self.balance {
            return Err(TellerError::InsufficientFunds {
                balance: self.balance,
            });
        }

        self.balance -= amount;
        self.record_only(kind, amount, description);

        if let AccountProfile::Savings(state) = &mut self.profile {
            state.withdrawals_this_month += 1;
        }

        Ok(())
    }

    /// Append a transaction without touching the balance
    pub(crate) fn record_only(
        &mut self,
        kind: TransactionKind,
        amount: Money,
        description: &str,
    ) {
        self.transactions
            .push(Transaction::new(kind, amount, description));
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn kind(&self) -> AccountKind {
        match self.profile {
            AccountProfile::Checking => AccountKind::Checking,
            AccountProfile::Savings(_) => AccountKind::Savings,
        }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The transaction log, oldest first
    ///
    /// Returned as an immutable view; the live log cannot be mutated
    /// through it.
    pub fn history(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Whether this account accrues interest
    pub fn accrues_interest(&self) -> bool {
        matches!(self.profile, AccountProfile::Savings(_))
    }

    /// Annual interest rate, if this account accrues interest
    pub fn interest_rate(&self) -> Option<f64> {
        match &self.profile {
            AccountProfile::Savings(state) => Some(state.interest_rate),
            AccountProfile::Checking => None,
        }
    }

    /// Monthly withdrawal limit, if this account has one
    pub fn withdrawal_limit(&self) -> Option<u32> {
        match self.profile {
            AccountProfile::Savings(_) => Some(MONTHLY_WITHDRAWAL_LIMIT),
            AccountProfile::Checking => None,
        }
    }

    /// Withdrawals remaining this month, if this account has a limit
    ///
    /// Accounts for the lazy month rollover, so the answer is current even
    /// if no withdrawal has happened since the month changed.
    pub fn withdrawals_remaining(&self) -> Option<u32> {
        match &self.profile {
            AccountProfile::Savings(state) => Some(state.withdrawals_remaining()),
            AccountProfile::Checking => None,
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account {} | {} | Balance: {}",
            self.id, self.holder, self.balance
        )
    }
}

//! The ledger aggregate
//!
//! Owns the set of all accounts and provides the cross-account operations:
//! account creation and lookup, transfers, the monthly interest sweep, and
//! bank-wide statistics. One ledger instance exists per running process and
//! is threaded explicitly through the callers; there is no global state.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::error::{TellerError, TellerResult};
use crate::models::{Account, AccountId, AccountKind, Money, TransactionKind};

/// Result of a transfer, reported as a value rather than an error
///
/// Business-rule failures inside the transfer protocol are converted into a
/// uniform failed outcome with a human-readable reason; the caller decides
/// how to surface it. Either both legs of a transfer are recorded or
/// neither is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    /// Both legs recorded
    Completed,
    /// Nothing mutated
    Failed { reason: String },
}

impl TransferOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed)
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Completed => None,
            Self::Failed { reason } => Some(reason),
        }
    }
}

/// Bank-wide aggregate figures, partitioned by account kind
///
/// Computed fresh on every call; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankStatistics {
    pub total_accounts: usize,
    pub checking_accounts: usize,
    pub savings_accounts: usize,
    pub total_balance: Money,
    pub checking_balance: Money,
    pub savings_balance: Money,
}

/// The aggregate owning all accounts, keyed by account id
///
/// Accounts are registered at creation and never removed. Iteration order
/// is insertion order, kept in a side list so listings are deterministic.
#[derive(Debug)]
pub struct Ledger {
    name: String,
    accounts: HashMap<AccountId, Account>,
    order: Vec<AccountId>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accounts: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// The bank name this ledger was created with
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create and register a new account
    ///
    /// `kind` is matched against "checking" / "savings" (case-insensitive);
    /// `interest_rate` only applies to savings accounts. Construction
    /// errors (negative initial balance, rate out of range) propagate
    /// unchanged.
    pub fn create_account(
        &mut self,
        kind: &str,
        holder: &str,
        initial_balance: Money,
        interest_rate: f64,
    ) -> TellerResult<&Account> {
        let account = match AccountKind::parse(kind) {
            Some(AccountKind::Checking) => Account::checking(holder, initial_balance)?,
            Some(AccountKind::Savings) => Account::savings(holder, initial_balance, interest_rate)?,
            None => {
                return Err(TellerError::InvalidAccountKind {
                    kind: kind.to_string(),
                })
            }
        };

        let id = account.id();
        self.accounts.insert(id, account);
        self.order.push(id);

        self.accounts
            .get(&id)
            .ok_or_else(|| TellerError::account_not_found(id.to_string()))
    }

    /// Look up an account by id
    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    /// Look up an account by id for mutation
    pub fn account_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.get_mut(&id)
    }

    /// Resolve user-typed text to an account
    ///
    /// Accepts a full UUID (with or without the `acc-` prefix), the short
    /// display form (`acc-1a2b3c4d` or just `1a2b3c4d`), or the holder
    /// name (case-insensitive).
    pub fn find_account(&self, query: &str) -> Option<&Account> {
        self.find_account_id(query).and_then(|id| self.account(id))
    }

    /// Resolve user-typed text to an account id (see [`Self::find_account`])
    pub fn find_account_id(&self, query: &str) -> Option<AccountId> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        if let Ok(id) = query.parse::<AccountId>() {
            if self.accounts.contains_key(&id) {
                return Some(id);
            }
        }

        let short = query.strip_prefix("acc-").unwrap_or(query);
        self.iter()
            .find(|account| {
                account.id().short() == short || account.holder().eq_ignore_ascii_case(query)
            })
            .map(|account| account.id())
    }

    /// All accounts, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.order.iter().filter_map(|id| self.accounts.get(id))
    }

    /// All accounts as a vector, in insertion order
    pub fn accounts(&self) -> Vec<&Account> {
        self.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Transfer funds between two accounts
    ///
    /// The protocol: resolve both accounts, reject same-account and
    /// non-positive amounts, pre-check funds for an early specific reason,
    /// then withdraw from the source (which re-validates funds and, for
    /// savings, the monthly limit) and deposit to the destination. A
    /// failure at any point leaves both accounts untouched; the withdrawal
    /// is the single source of truth for whether funds move.
    pub fn transfer(&mut self, from: AccountId, to: AccountId, amount: Money) -> TransferOutcome {
        match self.try_transfer(from, to, amount) {
            Ok(()) => TransferOutcome::Completed,
            Err(err) => TransferOutcome::Failed {
                reason: err.to_string(),
            },
        }
    }

    fn try_transfer(&mut self, from: AccountId, to: AccountId, amount: Money) -> TellerResult<()> {
        let source_balance = self
            .account(from)
            .ok_or_else(|| TellerError::account_not_found(from.to_string()))?
            .balance();

        if self.account(to).is_none() {
            return Err(TellerError::account_not_found(to.to_string()));
        }

        if from == to {
            return Err(TellerError::SameAccount);
        }

        if !amount.is_positive() {
            return Err(TellerError::invalid_amount("transfer amount must be positive"));
        }

        // Fast-fail early exit; the withdrawal below re-validates
        if amount > source_balance {
            return Err(TellerError::InsufficientFunds {
                balance: source_balance,
            });
        }

        let source = self
            .account_mut(from)
            .ok_or_else(|| TellerError::account_not_found(from.to_string()))?;
        source.debit(
            TransactionKind::TransferOut,
            amount,
            &format!("Transfer to account {}", to),
        )?;

        // The deposit cannot fail under the protocol's preconditions
        // (amount is positive and the destination exists)
        let destination = self
            .account_mut(to)
            .ok_or_else(|| TellerError::account_not_found(to.to_string()))?;
        destination.credit(
            TransactionKind::TransferIn,
            amount,
            &format!("Transfer from account {}", from),
        )?;

        Ok(())
    }

    /// Apply one month of interest to every savings account
    ///
    /// Checking accounts are skipped. Returns the total interest applied.
    /// The caller owns the accrual cadence; running this twice in one
    /// cycle double-applies.
    pub fn apply_interest_to_all_savings(&mut self) -> Money {
        let ids: Vec<AccountId> = self.order.clone();
        let mut total = Money::zero();
        for id in ids {
            if let Some(account) = self.accounts.get_mut(&id) {
                if let Some(applied) = account.apply_monthly_interest() {
                    total += applied;
                }
            }
        }
        total
    }

    /// Bank-wide counts and balances, partitioned by account kind
    pub fn statistics(&self) -> BankStatistics {
        let mut stats = BankStatistics {
            total_accounts: 0,
            checking_accounts: 0,
            savings_accounts: 0,
            total_balance: Money::zero(),
            checking_balance: Money::zero(),
            savings_balance: Money::zero(),
        };

        for account in self.iter() {
            stats.total_accounts += 1;
            stats.total_balance += account.balance();
            match account.kind() {
                AccountKind::Checking => {
                    stats.checking_accounts += 1;
                    stats.checking_balance += account.balance();
                }
                AccountKind::Savings => {
                    stats.savings_accounts += 1;
                    stats.savings_balance += account.balance();
                }
            }
        }

        stats
    }
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} accounts)", self.name, self.accounts.len())
    }
}

//! End-to-end ledger scenarios exercised through the public API.

use teller::error::TellerError;
use teller::ledger::Ledger;
use teller::models::{AccountId, Money, TransactionKind, MONTHLY_WITHDRAWAL_LIMIT};

fn cents(c: i64) -> Money {
    Money::from_cents(c)
}

#[test]
fn transfer_between_checking_and_savings_updates_statistics() {
    let mut ledger = Ledger::new("Integration Bank");

    let alice = ledger
        .create_account("checking", "Alice", cents(50000), 0.0)
        .unwrap()
        .id();
    let bob = ledger
        .create_account("savings", "Bob", cents(100000), 0.05)
        .unwrap()
        .id();

    let outcome = ledger.transfer(alice, bob, cents(20000));
    assert!(outcome.is_success());

    assert_eq!(ledger.account(alice).unwrap().balance(), cents(30000));
    assert_eq!(ledger.account(bob).unwrap().balance(), cents(120000));

    let stats = ledger.statistics();
    assert_eq!(stats.total_balance, cents(150000));
    assert_eq!(stats.checking_balance, cents(30000));
    assert_eq!(stats.savings_balance, cents(120000));
}

#[test]
fn overdraft_fails_and_leaves_balance_unchanged() {
    let mut ledger = Ledger::new("Integration Bank");
    let id = ledger
        .create_account("checking", "Alice", cents(3000), 0.0)
        .unwrap()
        .id();

    let account = ledger.account_mut(id).unwrap();
    let result = account.withdraw(cents(5000), "");
    assert!(matches!(result, Err(TellerError::InsufficientFunds { .. })));
    assert_eq!(account.balance(), cents(3000));
}

#[test]
fn unknown_account_kind_is_rejected() {
    let mut ledger = Ledger::new("Integration Bank");
    let result = ledger.create_account("crypto", "X", Money::zero(), 0.0);
    assert!(matches!(
        result,
        Err(TellerError::InvalidAccountKind { .. })
    ));
}

#[test]
fn interest_sweep_only_touches_savings() {
    let mut ledger = Ledger::new("Integration Bank");
    let checking = ledger
        .create_account("checking", "Alice", cents(10000), 0.0)
        .unwrap()
        .id();
    let savings = ledger
        .create_account("savings", "Bob", cents(120000), 0.12)
        .unwrap()
        .id();

    let total = ledger.apply_interest_to_all_savings();
    assert_eq!(total, cents(1200)); // 1200.00 * 0.12 / 12

    assert_eq!(ledger.account(checking).unwrap().balance(), cents(10000));
    assert_eq!(ledger.account(savings).unwrap().balance(), cents(121200));

    let last = ledger.account(savings).unwrap().history().last().unwrap();
    assert_eq!(last.kind, TransactionKind::Interest);
}

#[test]
fn failed_transfer_appends_no_transactions() {
    let mut ledger = Ledger::new("Integration Bank");
    let alice = ledger
        .create_account("checking", "Alice", cents(1000), 0.0)
        .unwrap()
        .id();
    let bob = ledger
        .create_account("checking", "Bob", cents(1000), 0.0)
        .unwrap()
        .id();

    let combined_before = ledger.account(alice).unwrap().balance()
        + ledger.account(bob).unwrap().balance();

    let outcome = ledger.transfer(alice, bob, cents(2000));
    assert!(!outcome.is_success());

    let combined_after = ledger.account(alice).unwrap().balance()
        + ledger.account(bob).unwrap().balance();
    assert_eq!(combined_before, combined_after);
    assert_eq!(ledger.account(alice).unwrap().transaction_count(), 1);
    assert_eq!(ledger.account(bob).unwrap().transaction_count(), 1);
}

#[test]
fn successful_transfer_appends_exactly_one_leg_per_side() {
    let mut ledger = Ledger::new("Integration Bank");
    let alice = ledger
        .create_account("checking", "Alice", cents(5000), 0.0)
        .unwrap()
        .id();
    let bob = ledger
        .create_account("checking", "Bob", cents(1000), 0.0)
        .unwrap()
        .id();

    assert!(ledger.transfer(alice, bob, cents(2000)).is_success());

    let alice_legs: Vec<_> = ledger
        .account(alice)
        .unwrap()
        .history()
        .iter()
        .filter(|t| t.kind == TransactionKind::TransferOut)
        .collect();
    let bob_legs: Vec<_> = ledger
        .account(bob)
        .unwrap()
        .history()
        .iter()
        .filter(|t| t.kind == TransactionKind::TransferIn)
        .collect();

    assert_eq!(alice_legs.len(), 1);
    assert_eq!(bob_legs.len(), 1);
    assert_eq!(alice_legs[0].amount, cents(2000));
    assert_eq!(bob_legs[0].amount, cents(2000));
}

#[test]
fn balance_always_equals_signed_transaction_sum() {
    let mut ledger = Ledger::new("Integration Bank");
    let alice = ledger
        .create_account("checking", "Alice", cents(50000), 0.0)
        .unwrap()
        .id();
    let bob = ledger
        .create_account("savings", "Bob", cents(100000), 0.05)
        .unwrap()
        .id();

    ledger
        .account_mut(alice)
        .unwrap()
        .deposit(cents(7500), "Paycheck")
        .unwrap();
    ledger
        .account_mut(alice)
        .unwrap()
        .withdraw(cents(2500), "Groceries")
        .unwrap();
    assert!(ledger.transfer(alice, bob, cents(10000)).is_success());
    ledger.apply_interest_to_all_savings();

    for id in [alice, bob] {
        let account = ledger.account(id).unwrap();
        let signed: Money = account.history().iter().map(|t| t.signed_amount()).sum();
        assert_eq!(account.balance(), signed);
    }
}

#[test]
fn savings_transfer_limit_blocks_fourth_transfer() {
    let mut ledger = Ledger::new("Integration Bank");
    let bob = ledger
        .create_account("savings", "Bob", cents(100000), 0.05)
        .unwrap()
        .id();
    let alice = ledger
        .create_account("checking", "Alice", Money::zero(), 0.0)
        .unwrap()
        .id();

    for _ in 0..MONTHLY_WITHDRAWAL_LIMIT {
        assert!(ledger.transfer(bob, alice, cents(100)).is_success());
    }

    let outcome = ledger.transfer(bob, alice, cents(100));
    assert!(!outcome.is_success());
    assert!(outcome
        .failure_reason()
        .unwrap()
        .contains("Monthly withdrawal limit"));
}

#[test]
fn transfer_to_unknown_account_reports_not_found() {
    let mut ledger = Ledger::new("Integration Bank");
    let alice = ledger
        .create_account("checking", "Alice", cents(5000), 0.0)
        .unwrap()
        .id();

    let outcome = ledger.transfer(alice, AccountId::new(), cents(1000));
    assert!(!outcome.is_success());
    assert!(outcome
        .failure_reason()
        .unwrap()
        .contains("Account not found"));
}

//! Selected-account submenu
//!
//! Operations against one account: deposits, withdrawals, history, the
//! detailed summary, and statement export.

use std::fs::File;

use crate::config::Settings;
use crate::display::{format_account_details, format_transaction_history};
use crate::error::{TellerError, TellerResult};
use crate::export;
use crate::ledger::Ledger;
use crate::models::AccountId;

use super::{clear_screen, input};

/// Run the submenu for one account until the user returns to the main menu
pub fn run(ledger: &mut Ledger, id: AccountId, settings: &Settings) -> TellerResult<()> {
    loop {
        clear_screen()?;

        let account = ledger
            .account(id)
            .ok_or_else(|| TellerError::account_not_found(id.to_string()))?;

        println!("\n=== Account: {} ({}) ===", account.id(), account.holder());
        println!("Type: {}", account.kind());
        println!(
            "Current Balance: {}",
            account.balance().format_with_symbol(&settings.currency_symbol)
        );
        if let Some(rate) = account.interest_rate() {
            println!("Interest Rate: {:.2}%", rate * 100.0);
        }
        if let Some(remaining) = account.withdrawals_remaining() {
            println!("Withdrawals Remaining This Month: {}", remaining);
        }

        println!("\n1. Deposit");
        println!("2. Withdraw");
        println!("3. View Transaction History");
        println!("4. View Detailed Account Summary");
        println!("5. Export Statement to CSV");
        println!("6. Return to Main Menu");

        let Some(choice) = input::prompt_choice("Enter your choice (1-6): ", 6)? else {
            return Ok(());
        };

        match choice {
            1 => deposit(ledger, id, settings)?,
            2 => withdraw(ledger, id, settings)?,
            3 => history(ledger, id, settings)?,
            4 => summary(ledger, id, settings)?,
            5 => export_statement(ledger, id)?,
            _ => return Ok(()),
        }
    }
}

fn deposit(ledger: &mut Ledger, id: AccountId, settings: &Settings) -> TellerResult<()> {
    let prompt = format!("Enter deposit amount: {}", settings.currency_symbol);
    let Some(amount) = input::prompt_positive_amount(&prompt)? else {
        return Ok(());
    };
    let Some(description) = input::read_line("Enter deposit description (optional): ")? else {
        return Ok(());
    };

    let account = ledger
        .account_mut(id)
        .ok_or_else(|| TellerError::account_not_found(id.to_string()))?;

    match account.deposit(amount, &description) {
        Ok(()) => println!(
            "Deposited {} successfully",
            amount.format_with_symbol(&settings.currency_symbol)
        ),
        Err(e) => println!("Error: {}", e),
    }
    input::pause()
}

fn withdraw(ledger: &mut Ledger, id: AccountId, settings: &Settings) -> TellerResult<()> {
    let prompt = format!("Enter withdrawal amount: {}", settings.currency_symbol);
    let Some(amount) = input::prompt_positive_amount(&prompt)? else {
        return Ok(());
    };
    let Some(description) = input::read_line("Enter withdrawal description (optional): ")? else {
        return Ok(());
    };

    let account = ledger
        .account_mut(id)
        .ok_or_else(|| TellerError::account_not_found(id.to_string()))?;

    match account.withdraw(amount, &description) {
        Ok(()) => println!(
            "Withdrew {} successfully",
            amount.format_with_symbol(&settings.currency_symbol)
        ),
        Err(e) => println!("Error: {}", e),
    }
    input::pause()
}

fn history(ledger: &Ledger, id: AccountId, settings: &Settings) -> TellerResult<()> {
    let account = ledger
        .account(id)
        .ok_or_else(|| TellerError::account_not_found(id.to_string()))?;

    println!("\n===== Transaction History =====");
    print!(
        "{}",
        format_transaction_history(account.history(), &settings.currency_symbol)
    );
    input::pause()
}

fn summary(ledger: &Ledger, id: AccountId, settings: &Settings) -> TellerResult<()> {
    let account = ledger
        .account(id)
        .ok_or_else(|| TellerError::account_not_found(id.to_string()))?;

    clear_screen()?;
    println!("\n=== Detailed Account Summary ===");
    print!(
        "{}",
        format_account_details(account, &settings.currency_symbol)
    );
    input::pause()
}

fn export_statement(ledger: &Ledger, id: AccountId) -> TellerResult<()> {
    let account = ledger
        .account(id)
        .ok_or_else(|| TellerError::account_not_found(id.to_string()))?;

    let file_name = export::statement_file_name(account);
    match File::create(&file_name) {
        Ok(file) => match export::write_statement(account, file) {
            Ok(()) => println!("Statement written to {}", file_name),
            Err(e) => println!("Error: {}", e),
        },
        Err(e) => println!("Error: could not create {}: {}", file_name, e),
    }
    input::pause()
}

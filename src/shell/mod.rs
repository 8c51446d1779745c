//! Interactive menu shell
//!
//! Drives the ledger through a menu loop on stdin/stdout. All business
//! rules live in the ledger core; the shell prompts, prints results and
//! error reasons, and re-prompts on invalid input. A business-rule failure
//! never terminates the process.

pub mod account;
pub mod input;

use std::io;

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

use crate::config::Settings;
use crate::display::{format_account_list, format_statistics};
use crate::error::TellerResult;
use crate::ledger::Ledger;
use crate::models::{AccountKind, MAX_INTEREST_RATE};

/// Clear the terminal and move the cursor home
pub(crate) fn clear_screen() -> TellerResult<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}

/// Run the main menu loop until the user exits or stdin closes
pub fn run(ledger: &mut Ledger, settings: &Settings) -> TellerResult<()> {
    clear_screen()?;
    println!("\n{}", "=".repeat(40));
    println!("{:^40}", ledger.name());
    println!("{}\n", "=".repeat(40));

    loop {
        println!("\n=== Main Menu ===");
        println!("1. Create a new account");
        println!("2. Select an existing account");
        println!("3. Display all accounts");
        println!("4. Transfer between accounts");
        println!("5. Apply interest to all savings accounts");
        println!("6. Display bank statistics");
        println!("7. Exit");

        let Some(choice) = input::prompt_choice("Enter your choice (1-7): ", 7)? else {
            break;
        };

        match choice {
            1 => create_account(ledger, settings)?,
            2 => select_account(ledger, settings)?,
            3 => list_accounts(ledger, settings)?,
            4 => transfer(ledger, settings)?,
            5 => apply_interest(ledger, settings)?,
            6 => statistics(ledger, settings)?,
            _ => {
                println!("\nThank you for using {}. Goodbye!", ledger.name());
                break;
            }
        }
    }

    Ok(())
}

fn create_account(ledger: &mut Ledger, settings: &Settings) -> TellerResult<()> {
    clear_screen()?;
    println!("\n=== Create a New Account ===");
    println!("1. Checking Account");
    println!("2. Savings Account");

    let Some(kind_choice) = input::prompt_choice("Select account type (1-2): ", 2)? else {
        return Ok(());
    };
    let kind = if kind_choice == 1 {
        AccountKind::Checking
    } else {
        AccountKind::Savings
    };

    let Some(holder) = input::read_line("Enter account holder's name: ")? else {
        return Ok(());
    };

    let balance_prompt = format!("Enter initial balance: {}", settings.currency_symbol);
    let Some(initial_balance) = input::prompt_non_negative_amount(&balance_prompt)? else {
        return Ok(());
    };

    let mut interest_rate = settings.default_interest_rate;
    if kind == AccountKind::Savings {
        let rate_prompt = format!(
            "Enter annual interest rate (e.g. 0.01 for 1%) [default {}]: ",
            settings.default_interest_rate
        );
        let Some(rate) = input::prompt_rate(
            &rate_prompt,
            MAX_INTEREST_RATE,
            settings.default_interest_rate,
        )?
        else {
            return Ok(());
        };
        interest_rate = rate;
    }

    let kind_str = kind.to_string().to_lowercase();
    match ledger.create_account(&kind_str, &holder, initial_balance, interest_rate) {
        Ok(account) => {
            println!("\nAccount created successfully!");
            println!("Account Number: {}", account.id());
            println!("Account Type: {}", account.kind());
            println!(
                "Initial Balance: {}",
                account.balance().format_with_symbol(&settings.currency_symbol)
            );
            if let Some(rate) = account.interest_rate() {
                println!("Interest Rate: {:.2}%", rate * 100.0);
            }
            if let Some(limit) = account.withdrawal_limit() {
                println!("Monthly Withdrawal Limit: {}", limit);
            }
        }
        Err(e) => println!("Error creating account: {}", e),
    }

    input::pause()
}

fn select_account(ledger: &mut Ledger, settings: &Settings) -> TellerResult<()> {
    if ledger.is_empty() {
        println!("No accounts exist. Please create an account first.");
        return Ok(());
    }

    clear_screen()?;
    print!(
        "{}",
        format_account_list(&ledger.accounts(), &settings.currency_symbol)
    );

    let Some(query) =
        input::read_line("Enter account number or holder name (blank to return): ")?
    else {
        return Ok(());
    };
    if query.is_empty() {
        return Ok(());
    }

    match ledger.find_account_id(&query) {
        Some(id) => account::run(ledger, id, settings)?,
        None => {
            println!("Account not found.");
            input::pause()?;
        }
    }

    Ok(())
}

fn list_accounts(ledger: &Ledger, settings: &Settings) -> TellerResult<()> {
    clear_screen()?;
    println!("\n===== {} Accounts =====", ledger.name());
    print!(
        "{}",
        format_account_list(&ledger.accounts(), &settings.currency_symbol)
    );
    input::pause()
}

fn transfer(ledger: &mut Ledger, settings: &Settings) -> TellerResult<()> {
    clear_screen()?;
    if ledger.len() < 2 {
        println!("You need at least two accounts to perform a transfer.");
        return input::pause();
    }

    print!(
        "{}",
        format_account_list(&ledger.accounts(), &settings.currency_symbol)
    );

    let Some(from_query) = input::read_line("Enter source account: ")? else {
        return Ok(());
    };
    let Some(from) = ledger.find_account_id(&from_query) else {
        println!("Source account not found.");
        return input::pause();
    };

    let Some(to_query) = input::read_line("Enter destination account: ")? else {
        return Ok(());
    };
    let Some(to) = ledger.find_account_id(&to_query) else {
        println!("Destination account not found.");
        return input::pause();
    };

    let amount_prompt = format!("Enter transfer amount: {}", settings.currency_symbol);
    let Some(amount) = input::prompt_positive_amount(&amount_prompt)? else {
        return Ok(());
    };

    let outcome = ledger.transfer(from, to, amount);
    match outcome.failure_reason() {
        None => println!(
            "Successfully transferred {} from account {} to {}",
            amount.format_with_symbol(&settings.currency_symbol),
            from,
            to
        ),
        Some(reason) => println!("Transfer failed: {}", reason),
    }

    input::pause()
}

fn apply_interest(ledger: &mut Ledger, settings: &Settings) -> TellerResult<()> {
    clear_screen()?;
    let total = ledger.apply_interest_to_all_savings();
    println!(
        "Interest applied to all savings accounts. Total interest: {}",
        total.format_with_symbol(&settings.currency_symbol)
    );
    input::pause()
}

fn statistics(ledger: &Ledger, settings: &Settings) -> TellerResult<()> {
    clear_screen()?;
    print!(
        "{}",
        format_statistics(
            &ledger.statistics(),
            ledger.name(),
            &settings.currency_symbol
        )
    );
    input::pause()
}

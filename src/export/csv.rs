//! CSV statement export
//!
//! Writes an account's transaction history as a CSV statement: one row per
//! transaction with its id, timestamp, kind, description, and signed amount.

use std::io::Write;

use crate::error::{TellerError, TellerResult};
use crate::models::{Account, Money};

/// Write a CSV statement for the account's full transaction history
pub fn write_statement<W: Write>(account: &Account, writer: W) -> TellerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Id", "Date", "Kind", "Description", "Amount"])
        .map_err(|e| TellerError::Export(e.to_string()))?;

    for txn in account.history() {
        csv_writer
            .write_record([
                txn.id.to_string(),
                txn.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                txn.kind.to_string(),
                txn.description.clone(),
                decimal(txn.signed_amount()),
            ])
            .map_err(|e| TellerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TellerError::Export(e.to_string()))?;

    Ok(())
}

/// Default file name for an account's statement
pub fn statement_file_name(account: &Account) -> String {
    format!("statement-{}.csv", account.id())
}

/// Plain signed decimal without a currency symbol, for machine consumption
fn decimal(amount: Money) -> String {
    if amount.is_negative() {
        format!("-{}.{:02}", amount.dollars().abs(), amount.cents_part())
    } else {
        format!("{}.{:02}", amount.dollars(), amount.cents_part())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_contains_all_transactions() {
        let mut account = Account::checking("Alice", Money::from_cents(50000)).unwrap();
        account.deposit(Money::from_cents(2500), "Paycheck").unwrap();
        account.withdraw(Money::from_cents(1000), "Coffee").unwrap();

        let mut buffer = Vec::new();
        write_statement(&account, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        // Header plus one row per transaction
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Id,Date,Kind,Description,Amount");
        assert!(lines[1].contains("Initial deposit"));
        assert!(lines[1].contains("500.00"));
        assert!(lines[2].contains("Paycheck"));
        assert!(lines[3].contains("Withdrawal"));
        assert!(lines[3].contains("-10.00"));
    }

    #[test]
    fn test_statement_empty_account() {
        let account = Account::checking("Alice", Money::zero()).unwrap();

        let mut buffer = Vec::new();
        write_statement(&account, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.lines().count(), 1); // header only
    }

    #[test]
    fn test_statement_quotes_descriptions_with_commas() {
        let mut account = Account::checking("Alice", Money::zero()).unwrap();
        account
            .deposit(Money::from_cents(100), "Rent, utilities")
            .unwrap();

        let mut buffer = Vec::new();
        write_statement(&account, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("\"Rent, utilities\""));
    }

    #[test]
    fn test_statement_file_name() {
        let account = Account::checking("Alice", Money::zero()).unwrap();
        let name = statement_file_name(&account);
        assert!(name.starts_with("statement-acc-"));
        assert!(name.ends_with(".csv"));
    }
}

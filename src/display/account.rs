//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::models::{Account, Money};

/// Format a list of accounts as a table
pub fn format_account_list(accounts: &[&Account], symbol: &str) -> String {
    if accounts.is_empty() {
        return "No accounts to display.".to_string();
    }

    // Calculate column widths
    let holder_width = accounts
        .iter()
        .map(|a| a.holder().len())
        .max()
        .unwrap_or(6)
        .max(6);

    let type_width = accounts
        .iter()
        .map(|a| a.kind().to_string().len())
        .max()
        .unwrap_or(4)
        .max(4);

    // Build header
    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<type_width$}  {:<holder_width$}  {:>12}\n",
        "Account",
        "Type",
        "Holder",
        "Balance",
        type_width = type_width,
        holder_width = holder_width,
    ));

    // Separator line
    output.push_str(&format!(
        "{:-<12}  {:-<type_width$}  {:-<holder_width$}  {:->12}\n",
        "",
        "",
        "",
        "",
        type_width = type_width,
        holder_width = holder_width,
    ));

    // Account rows
    for account in accounts {
        output.push_str(&format!(
            "{:<12}  {:<type_width$}  {:<holder_width$}  {:>12}\n",
            account.id().to_string(),
            account.kind().to_string(),
            account.holder(),
            account.balance().format_with_symbol(symbol),
            type_width = type_width,
            holder_width = holder_width,
        ));
    }

    // Total row
    let total: Money = accounts.iter().map(|a| a.balance()).sum();

    output.push_str(&format!(
        "{:-<12}  {:-<type_width$}  {:-<holder_width$}  {:->12}\n",
        "",
        "",
        "",
        "",
        type_width = type_width,
        holder_width = holder_width,
    ));

    output.push_str(&format!(
        "{:<12}  {:<type_width$}  {:<holder_width$}  {:>12}\n",
        "TOTAL",
        "",
        "",
        total.format_with_symbol(symbol),
        type_width = type_width,
        holder_width = holder_width,
    ));

    output
}

/// Format a single account's detailed summary
pub fn format_account_details(account: &Account, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account Type:    {}\n", account.kind()));
    output.push_str(&format!("Account Number:  {}\n", account.id()));
    output.push_str(&format!("Account Holder:  {}\n", account.holder()));
    output.push_str(&format!(
        "Current Balance: {}\n",
        account.balance().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Created On:      {}\n",
        account.created_at().format("%Y-%m-%d %H:%M:%S")
    ));
    output.push_str(&format!(
        "Transactions:    {}\n",
        account.transaction_count()
    ));

    if let Some(rate) = account.interest_rate() {
        output.push_str(&format!("Interest Rate:   {:.2}%\n", rate * 100.0));
    }
    if let Some(limit) = account.withdrawal_limit() {
        output.push_str(&format!("Monthly Withdrawal Limit: {}\n", limit));
    }
    if let Some(remaining) = account.withdrawals_remaining() {
        output.push_str(&format!("Withdrawals Remaining This Month: {}\n", remaining));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Account;

    fn checking(holder: &str, cents: i64) -> Account {
        Account::checking(holder, Money::from_cents(cents)).unwrap()
    }

    #[test]
    fn test_format_account_list() {
        let alice = checking("Alice", 100000);
        let bob = Account::savings("Bob", Money::from_cents(500000), 0.05).unwrap();
        let accounts = vec![&alice, &bob];

        let output = format_account_list(&accounts, "$");
        assert!(output.contains("Alice"));
        assert!(output.contains("Bob"));
        assert!(output.contains("Savings"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("$6000.00"));
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_account_list(&[], "$");
        assert!(output.contains("No accounts to display"));
    }

    #[test]
    fn test_format_account_details_checking() {
        let account = checking("Alice", 100000);
        let output = format_account_details(&account, "$");

        assert!(output.contains("Checking"));
        assert!(output.contains("Alice"));
        assert!(output.contains("$1000.00"));
        assert!(output.contains("Transactions:    1"));
        assert!(!output.contains("Interest Rate"));
    }

    #[test]
    fn test_format_account_details_savings() {
        let account = Account::savings("Bob", Money::from_cents(500000), 0.05).unwrap();
        let output = format_account_details(&account, "£");

        assert!(output.contains("Savings"));
        assert!(output.contains("£5000.00"));
        assert!(output.contains("Interest Rate:   5.00%"));
        assert!(output.contains("Monthly Withdrawal Limit: 3"));
        assert!(output.contains("Withdrawals Remaining This Month: 3"));
    }
}

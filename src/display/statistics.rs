//! Bank statistics display formatting

use crate::ledger::BankStatistics;

/// Format bank-wide statistics as a block of labelled figures
pub fn format_statistics(stats: &BankStatistics, bank_name: &str, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("===== {} Statistics =====\n", bank_name));
    output.push_str(&format!("Total accounts:    {}\n", stats.total_accounts));
    output.push_str(&format!("Checking accounts: {}\n", stats.checking_accounts));
    output.push_str(&format!("Savings accounts:  {}\n", stats.savings_accounts));
    output.push_str(&format!(
        "Total balance across all accounts:  {}\n",
        stats.total_balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total balance in checking accounts: {}\n",
        stats.checking_balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total balance in savings accounts:  {}\n",
        stats.savings_balance.format_with_symbol(symbol)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;
    use crate::models::Money;

    #[test]
    fn test_format_statistics() {
        let mut ledger = Ledger::new("Test Bank");
        ledger
            .create_account("checking", "Alice", Money::from_cents(30000), 0.0)
            .unwrap();
        ledger
            .create_account("savings", "Bob", Money::from_cents(120000), 0.05)
            .unwrap();

        let output = format_statistics(&ledger.statistics(), ledger.name(), "$");
        assert!(output.contains("Test Bank Statistics"));
        assert!(output.contains("Total accounts:    2"));
        assert!(output.contains("Checking accounts: 1"));
        assert!(output.contains("$1500.00"));
        assert!(output.contains("$300.00"));
        assert!(output.contains("$1200.00"));
    }
}

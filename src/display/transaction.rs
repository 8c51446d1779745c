//! Transaction history display formatting

use crate::models::Transaction;

/// Format a transaction history as a table, oldest first
pub fn format_transaction_history(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions to display.".to_string();
    }

    let kind_width = transactions
        .iter()
        .map(|t| t.kind.to_string().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<19}  {:<kind_width$}  {:>12}  {}\n",
        "Date & Time",
        "Kind",
        "Amount",
        "Description",
        kind_width = kind_width,
    ));
    output.push_str(&format!(
        "{:-<19}  {:-<kind_width$}  {:->12}  {:-<24}\n",
        "",
        "",
        "",
        "",
        kind_width = kind_width,
    ));

    for txn in transactions {
        output.push_str(&format!(
            "{:<19}  {:<kind_width$}  {:>12}  {}\n",
            txn.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            txn.kind.to_string(),
            txn.amount.format_with_symbol(symbol),
            txn.description,
            kind_width = kind_width,
        ));
    }

    output
}

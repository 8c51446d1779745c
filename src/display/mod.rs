//! Terminal output formatting
//!
//! The shell owns all presentation; these helpers turn ledger values into
//! printable tables and blocks. Nothing here touches ledger state.

pub mod account;
pub mod statistics;
pub mod transaction;

pub use account::{format_account_details, format_account_list};
pub use statistics::format_statistics;
pub use transaction::format_transaction_history;

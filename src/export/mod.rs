//! Statement export

pub mod csv;

pub use self::csv::{statement_file_name, write_statement};

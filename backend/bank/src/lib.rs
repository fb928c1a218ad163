//! # Bank
//!
//! In-memory presidents data, loaded once from CSV and never written.
//!
//! - [`records`]: CSV to ordered records
//! - [`catalog`]: list, lookup by presidency number, field search
//! - [`ordinal`]: `1st`, `2nd`, `3rd`, ...
use std::path::Path;

pub mod catalog;
pub mod error;
pub mod ordinal;
pub mod records;

pub use catalog::Catalog;
pub use error::{BankError, Result};
pub use ordinal::{make_ordinal, ordinal_of};
pub use records::{Record, RecordSet, load_records, parse_records};

pub const BANK_PATH: &str = "data/presidents.csv";

pub fn get_bank(path: impl AsRef<Path>) -> Result<Catalog> {
    Catalog::new(load_records(path)?)
}

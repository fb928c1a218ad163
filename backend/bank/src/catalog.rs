//! # Catalog
//!
//! Read-only lookups over the loaded records.
//!
//! - List: presidency number and name of every record, in file order
//! - Get: exact string match on the presidency number
//! - Search: case-insensitive substring match on one field
//!
//! A few dozen records, so every operation is a linear scan. No index.
use tracing::debug;

use crate::{
    error::{BankError, Result},
    records::{Record, RecordSet},
};

pub const PRESIDENCY: &str = "Presidency";
pub const PRESIDENT: &str = "President";
pub const HOME_STATE: &str = "Home-state";
pub const OCCUPATION: &str = "Occupation";
pub const COLLEGE: &str = "College";

#[derive(Debug, Clone)]
pub struct Catalog {
    set: RecordSet,
}

impl Catalog {
    pub fn new(set: RecordSet) -> Result<Self> {
        if !set.is_empty() {
            for required in [PRESIDENCY, PRESIDENT] {
                if !set.headers().iter().any(|h| h == required) {
                    return Err(BankError::malformed(format!(
                        "missing required column {required:?}"
                    )));
                }
            }
        }

        Ok(Self { set })
    }

    pub fn fields(&self) -> &[String] {
        self.set.headers()
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn list(&self) -> Vec<(&str, &str)> {
        self.set.records().iter().map(id_and_name).collect()
    }

    pub fn get(&self, id: &str) -> Result<&Record> {
        self.set
            .records()
            .iter()
            .find(|record| record.get(PRESIDENCY) == Some(id))
            .ok_or_else(|| BankError::NotFound { id: id.to_string() })
    }

    pub fn search(&self, field: &str, query: &str) -> Result<Vec<&Record>> {
        if !self.fields().iter().any(|f| f == field) {
            return Err(BankError::invalid_argument(format!(
                "unknown field {field:?}"
            )));
        }

        let needle = query.to_lowercase();
        let matches: Vec<&Record> = self
            .set
            .records()
            .iter()
            .filter(|record| {
                record
                    .get(field)
                    .is_some_and(|value| value.to_lowercase().contains(&needle))
            })
            .collect();

        debug!("Search {field}={query:?} matched {}", matches.len());

        Ok(matches)
    }
}

/// Presidency number and name of a record held by a [`Catalog`].
pub fn id_and_name(record: &Record) -> (&str, &str) {
    // Catalog::new checked both columns exist, and every row carries every column
    (
        record.get(PRESIDENCY).unwrap_or_default(),
        record.get(PRESIDENT).unwrap_or_default(),
    )
}

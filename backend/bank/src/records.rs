//! # Records
//!
//! CSV rows turned into ordered field-name to value mappings.
//!
//! - Header row names the fields, every following row is one record
//! - Values stay strings, no coercion
//! - Row order is kept, ascending presidency in the shipped data
//! - A row with a different field count than the header rejects the whole file
use std::{fs, path::Path, sync::Arc};

use csv::ReaderBuilder;
use serde::{Serialize, Serializer, ser::SerializeMap};
use tracing::{debug, info};

use crate::error::{BankError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    headers: Arc<[String]>,
    values: Vec<String>,
}

impl Record {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.headers
            .iter()
            .position(|header| header == field)
            .map(|index| self.values[index].as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (field, value) in self.fields() {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone)]
pub struct RecordSet {
    headers: Arc<[String]>,
    records: Vec<Record>,
}

impl RecordSet {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub fn parse_records(input: &str) -> Result<RecordSet> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(input.as_bytes());

    let headers: Arc<[String]> = reader
        .headers()?
        .iter()
        .map(str::to_string)
        .collect::<Vec<_>>()
        .into();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;

        records.push(Record {
            headers: headers.clone(),
            values: row.iter().map(str::to_string).collect(),
        });
    }

    debug!("Parsed {} records with fields {:?}", records.len(), headers);

    Ok(RecordSet { headers, records })
}

pub fn load_records(path: impl AsRef<Path>) -> Result<RecordSet> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| BankError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let input = std::str::from_utf8(&bytes).map_err(|e| {
        BankError::malformed(format!("{} is not valid UTF-8: {e}", path.display()))
    })?;

    let set = parse_records(input)?;
    info!(
        "Loaded {} records ({} fields) from {}",
        set.len(),
        set.headers().len(),
        path.display()
    );

    Ok(set)
}

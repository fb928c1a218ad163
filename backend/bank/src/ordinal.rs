use crate::error::{BankError, Result};

/// Ordinal form of a positive integer, e.g. `1st`, `12th`, `23rd`.
///
/// Zero and negative numbers have no ordinal and are rejected.
pub fn make_ordinal(num: i64) -> Result<String> {
    if num <= 0 {
        return Err(BankError::invalid_argument(format!(
            "ordinal requires a positive integer, got {num}"
        )));
    }

    let suffix = match (num % 100, num % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };

    Ok(format!("{num}{suffix}"))
}

/// Same as [`make_ordinal`] for a decimal string such as a presidency number.
pub fn ordinal_of(num: &str) -> Result<String> {
    let parsed = num
        .trim()
        .parse::<i64>()
        .map_err(|e| BankError::invalid_argument(format!("{num:?} is not an integer: {e}")))?;

    make_ordinal(parsed)
}

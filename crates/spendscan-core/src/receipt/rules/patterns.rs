//! Common regex patterns for receipt extraction.
//!
//! Patterns carry no word boundaries: they are substring scans, so a date
//! embedded in a longer run of digits still yields a (shorter) candidate.
//! Digits are ASCII only; `\d` would also match other Unicode digit scripts.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Amounts: optional dollar sign, digits, optional fraction ("$12.50", "42", "7.")
    pub static ref AMOUNT: Regex = Regex::new(
        r"\$?[0-9]+\.?[0-9]*"
    ).unwrap();

    // Dates, searched as separate families in this order
    pub static ref DATE_SLASH: Regex = Regex::new(
        r"[0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4}"
    ).unwrap();

    pub static ref DATE_DASH: Regex = Regex::new(
        r"[0-9]{1,2}-[0-9]{1,2}-[0-9]{2,4}"
    ).unwrap();

    pub static ref DATE_ISO: Regex = Regex::new(
        r"[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}"
    ).unwrap();
}

/// Date pattern families in search order.
pub fn date_families() -> [(&'static str, &'static Regex); 3] {
    [
        ("slash", &*DATE_SLASH),
        ("dash", &*DATE_DASH),
        ("iso", &*DATE_ISO),
    ]
}
